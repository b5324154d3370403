//! # Prime Hash
//!
//! String-keyed hash maps built from first principles with two collision resolution
//! strategies:
//!
//! - `ProbingHashMap`: open addressing with quadratic probing and tombstone deletion
//! - `ChainingHashMap`: separate chaining with a singly linked list per bucket
//!
//! Both keep a prime number of buckets, grow by doubling to the next prime when their
//! load factor threshold is crossed, and hash keys with a plain `fn(&str) -> usize`,
//! so any deterministic function can be plugged in.
//!
//! ## Basic Usage
//!
//! ```rust
//! use primehash::{ProbingHashMap, hash_function_1};
//!
//! // Capacity is rounded up to the next prime
//! let mut map = ProbingHashMap::new(20, hash_function_1);
//! assert_eq!(map.get_capacity(), 23);
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! assert_eq!(map.get_size(), 1);
//! ```
//!
//! ## Separate Chaining
//!
//! ```rust
//! use primehash::{ChainingHashMap, hash_function_2};
//!
//! let mut map = ChainingHashMap::new(3, hash_function_2);
//! for i in 0..10 {
//!     map.put(&format!("key{i}"), i);
//! }
//!
//! // The table doubled to the next prime whenever it held more than one entry per bucket
//! assert!(map.table_load() <= 1.0);
//! assert_eq!(map.get_size(), 10);
//!
//! let pairs = map.get_keys_and_values();
//! assert_eq!(pairs.len(), 10);
//! ```

/// Singly linked list used as the bucket of the chaining map
mod chain;
/// Module implementing a hash map with separate chaining
mod chaining_hashmap;
/// Hash function contract and the stock string hash functions
mod hash;
/// Module implementing the mode finder on top of the chaining map
mod mode;
/// Prime capacity helpers
pub mod prime;
/// Module implementing a hash map with quadratic probing
mod probing_hashmap;
/// Utility functions and traits for the hash maps
mod utils;

/// Capacity used by `Default` for both maps
pub const DEFAULT_CAPACITY: usize = 11;

pub use chaining_hashmap::{ChainingHashMap, Iter as ChainingIter};
pub use hash::{HashFunction, hash_function_1, hash_function_2};
pub use mode::find_mode;
pub use probing_hashmap::{Iter as ProbingIter, ProbingHashMap};
pub use utils::{HashMapExtensions, LoadStats, from_pairs};

/// Load factor thresholds of the two maps
pub mod load_factor {
    pub use crate::chaining_hashmap::MAX_LOAD_FACTOR as CHAINING;
    pub use crate::probing_hashmap::MAX_LOAD_FACTOR as PROBING;
}
