//! Utility functions and traits shared by `ProbingHashMap` and `ChainingHashMap`

use crate::{ChainingHashMap, ProbingHashMap};

/// Occupancy snapshot of a map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadStats {
    /// Number of entries
    pub size: usize,
    /// Number of slots or buckets
    pub capacity: usize,
    /// `size / capacity`
    pub load: f64,
    /// Slots or buckets holding nothing
    pub empty_buckets: usize,
}

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<V> {
    /// Returns the keys of the hash map as a Vec, in iteration order
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map as a Vec, in iteration order
    fn values(&self) -> Vec<V>;

    /// Returns true if the hash map contains the given key
    fn contains_key(&self, key: &str) -> bool;

    /// Returns the current size, capacity, load factor and empty bucket count
    fn load_stats(&self) -> LoadStats;
}

impl<V: Clone> HashMapExtensions<V> for ProbingHashMap<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }

    fn load_stats(&self) -> LoadStats {
        LoadStats {
            size: self.get_size(),
            capacity: self.get_capacity(),
            load: self.table_load(),
            empty_buckets: self.empty_buckets(),
        }
    }
}

impl<V: Clone> HashMapExtensions<V> for ChainingHashMap<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }

    fn load_stats(&self) -> LoadStats {
        LoadStats {
            size: self.get_size(),
            capacity: self.get_capacity(),
            load: self.table_load(),
            empty_buckets: self.empty_buckets(),
        }
    }
}

/// Creates a map from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
pub fn from_pairs<M, V, I>(iter: I) -> M
where
    M: Default + Extend<(String, V)>,
    I: IntoIterator<Item = (String, V)>,
{
    let mut map = M::default();
    map.extend(iter);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<(String, i32)> {
        vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
    }

    #[test]
    fn test_from_pairs() {
        let probing: ProbingHashMap<i32> = from_pairs(pairs());
        let chaining: ChainingHashMap<i32> = from_pairs(pairs());

        let maps: [&dyn HashMapExtensions<i32>; 2] = [&probing, &chaining];
        for map in maps {
            assert!(map.contains_key("a"));
            assert!(map.contains_key("c"));
            assert!(!map.contains_key("d"));
            assert_eq!(map.load_stats().size, 3);
        }
        assert_eq!(probing.get("b"), Some(&2));
        assert_eq!(chaining.get("b"), Some(&2));
    }

    #[test]
    fn test_keys_and_values() {
        let map: ChainingHashMap<i32> = from_pairs(pairs());

        let mut keys = map.keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_keys_follow_iteration_order() {
        let map: ProbingHashMap<i32> = from_pairs(pairs());
        let expected: Vec<String> = map.iter().map(|(k, _)| k.to_string()).collect();

        assert_eq!(map.keys(), expected);
    }

    #[test]
    fn test_load_stats() {
        let map: ProbingHashMap<i32> = from_pairs(pairs());
        let stats = map.load_stats();

        assert_eq!(stats.capacity, 11);
        assert_eq!(stats.empty_buckets, 8);
        assert!((stats.load - 3.0 / 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let map: ChainingHashMap<i32> =
            from_pairs(vec![("a".to_string(), 1), ("a".to_string(), 2)]);

        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(map.len(), 1);
    }
}
