//! Singly linked list backing each bucket of the chaining map.

use std::fmt;

/// A node in a bucket chain
#[derive(Debug)]
struct Node<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
    /// The rest of the chain
    next: Option<Box<Node<V>>>,
}

/// A head-owned singly linked list of key-value pairs.
///
/// Keys are not deduplicated here; the map looks a key up before pushing it.
#[derive(Debug)]
pub(crate) struct Chain<V> {
    /// First node of the chain
    head: Option<Box<Node<V>>>,
    /// Number of nodes in the chain
    len: usize,
}

impl<V> Chain<V> {
    /// Creates an empty chain
    pub(crate) fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of nodes in the chain
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns the value stored under `key`
    pub(crate) fn find(&self, key: &str) -> Option<&V> {
        self.iter().find(|(stored, _)| *stored == key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`
    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Appends a node at the tail of the chain
    pub(crate) fn push_back(&mut self, key: String, value: V) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { key, value, next: None }));
        self.len = self.len.saturating_add(1);
    }

    /// Unlinks the node holding `key` and returns its value
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let Node { value, next, .. } = *link.take()?;
        *link = next;
        self.len = self.len.saturating_sub(1);
        Some(value)
    }

    /// Drops every node
    pub(crate) fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator over the pairs in chain order
    pub(crate) fn iter(&self) -> ChainIter<'_, V> {
        ChainIter { cursor: self.head.as_deref() }
    }

    /// Consumes the chain, yielding its pairs in chain order
    pub(crate) fn into_pairs(mut self) -> IntoPairs<V> {
        IntoPairs { cursor: self.head.take() }
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V: fmt::Display> fmt::Display for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            write!(f, "-> ({key}: {value}) ")?;
        }
        Ok(())
    }
}

/// Borrowing iterator over a [`Chain`]
#[derive(Debug, Clone)]
pub(crate) struct ChainIter<'a, V> {
    /// Next node to yield
    cursor: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some((node.key.as_str(), &node.value))
    }
}

/// Owning iterator over a [`Chain`], used when rehashing
#[derive(Debug)]
pub(crate) struct IntoPairs<V> {
    /// Remaining nodes
    cursor: Option<Box<Node<V>>>,
}

impl<V> Iterator for IntoPairs<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.take()?;
        let Node { key, value, next } = *node;
        self.cursor = next;
        Some((key, value))
    }
}

impl<V> Drop for IntoPairs<V> {
    fn drop(&mut self) {
        let mut cursor = self.cursor.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}
