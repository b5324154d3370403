use std::fmt;

use crate::{
    DEFAULT_CAPACITY,
    chain::{Chain, ChainIter},
    hash::{HashFunction, hash_function_1},
    prime::{is_prime, next_prime},
};

/// Load factor above which an insertion grows the table
pub const MAX_LOAD_FACTOR: f64 = 1.0;

/// Builds `capacity` empty chains
fn empty_chains<V>(capacity: usize) -> Vec<Chain<V>> {
    std::iter::repeat_with(Chain::new).take(capacity).collect()
}

/// A string-keyed hash map resolving collisions by separate chaining.
///
/// Every bucket owns a singly linked chain of entries. The bucket count is prime and
/// doubles (to the next prime) once there is more than one entry per bucket on
/// average.
#[derive(Debug)]
pub struct ChainingHashMap<V> {
    /// One chain per bucket
    buckets: Vec<Chain<V>>,
    /// Number of entries across all chains
    size: usize,
    /// Maps keys to their bucket
    hash_function: HashFunction,
}

impl<V> Default for ChainingHashMap<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<V> Extend<(String, V)> for ChainingHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(&key, value);
        }
    }
}

impl<V> ChainingHashMap<V> {
    /// Creates a map with at least `capacity` buckets, rounded up to the next prime
    #[must_use]
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self { buckets: empty_chains(next_prime(capacity)), size: 0, hash_function }
    }

    /// Creates a map hashing keys with [`hash_function_1`]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, hash_function_1)
    }

    /// Gets the bucket index for a key
    #[allow(clippy::arithmetic_side_effects)]
    fn bucket_index(&self, key: &str) -> usize {
        (self.hash_function)(key) % self.buckets.len().max(1)
    }

    /// Inserts or updates a key-value pair, returning the previous value
    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = self.buckets.get_mut(index)?;

        let previous = if let Some(current) = bucket.find_mut(key) {
            Some(std::mem::replace(current, value))
        } else {
            bucket.push_back(key.to_owned(), value);
            self.size = self.size.saturating_add(1);
            None
        };

        if self.table_load() > MAX_LOAD_FACTOR {
            self.resize_table(self.get_capacity().saturating_mul(2));
        }

        previous
    }

    /// Returns the value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets.get(self.bucket_index(key))?.find(key)
    }

    /// Returns true if the map holds an entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from its chain and returns its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let removed = self.buckets.get_mut(index)?.remove(key);

        if removed.is_some() {
            self.size = self.size.saturating_sub(1);
        }

        removed
    }

    /// Rehashes every entry into `new_capacity` buckets (rounded up to a prime).
    ///
    /// A request of zero is ignored. The entry count is carried over as is.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            log::trace!("ignoring resize of chaining table to zero buckets");
            return;
        }

        let capacity = if is_prime(new_capacity) { new_capacity } else { next_prime(new_capacity) };
        let mut buckets = empty_chains(capacity);

        for chain in std::mem::take(&mut self.buckets) {
            for (key, value) in chain.into_pairs() {
                #[allow(clippy::arithmetic_side_effects)]
                let index = (self.hash_function)(&key) % capacity;
                if let Some(bucket) = buckets.get_mut(index) {
                    bucket.push_back(key, value);
                }
            }
        }

        log::debug!("resized chaining table to {capacity} buckets ({} entries)", self.size);

        self.buckets = buckets;
    }

    /// Empties every chain, keeping the capacity
    pub fn clear(&mut self) {
        log::trace!("clearing chaining table of {} entries", self.size);
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Returns the current load factor, `size / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of buckets whose chain has no entries
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.len() == 0).count()
    }

    /// Returns the number of entries
    #[must_use]
    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the hash function the map was built with
    #[must_use]
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Returns an iterator over entries in bucket order, then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: None }
    }
}

impl<V: Clone> ChainingHashMap<V> {
    /// Copies every key-value pair, in bucket order, then chain order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }
}

impl<V: fmt::Display> fmt::Display for ChainingHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {bucket}")?;
        }
        Ok(())
    }
}

/// Iterator over the entries of a [`ChainingHashMap`]
#[derive(Debug)]
pub struct Iter<'a, V> {
    /// Buckets not visited yet
    buckets: std::slice::Iter<'a, Chain<V>>,
    /// Position inside the current bucket's chain
    chain: Option<ChainIter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                return Some(entry);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}

impl<'a, V> IntoIterator for &'a ChainingHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
