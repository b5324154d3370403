use std::{fmt, mem};

use crate::{
    DEFAULT_CAPACITY,
    hash::{HashFunction, hash_function_1},
    prime::{is_prime, next_prime},
};

/// Load factor at which an insertion grows the table
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// State of a single slot in the table
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never written since the last resize or clear; ends every probe
    Empty,
    /// Holds a live key-value pair
    Occupied {
        /// The key in the key-value pair
        key: String,
        /// The value associated with the key
        value: V,
    },
    /// A removed entry; probes continue past it and insertions may reuse it
    Tombstone,
}

impl<V> Slot<V> {
    /// Moves the live pair out of the slot, if there is one
    fn into_entry(self) -> Option<(String, V)> {
        match self {
            Self::Occupied { key, value } => Some((key, value)),
            Self::Empty | Self::Tombstone => None,
        }
    }
}

/// Builds `capacity` empty slots without requiring `V: Clone`
fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// Quadratic probe sequence `(h + i²) mod capacity` for `i` in `0..capacity`.
///
/// The square is advanced incrementally (`(i + 1)² = i² + 2i + 1`) so the sequence
/// never overflows, whatever the capacity.
#[derive(Debug, Clone)]
struct ProbeSequence {
    /// Slot index of the next probe
    index: usize,
    /// Distance to the probe after the next one, `2i + 1`
    step: usize,
    /// Probes left before the sequence is exhausted
    remaining: usize,
    /// Table size the indices are reduced by
    capacity: usize,
}

impl ProbeSequence {
    /// Starts a sequence for a raw hash value
    #[allow(clippy::arithmetic_side_effects)]
    fn new(hash: usize, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { index: hash % capacity, step: 1, remaining: capacity, capacity }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.index;
        self.remaining -= 1;
        self.index = (self.index + self.step % self.capacity) % self.capacity;
        self.step = self.step.saturating_add(2);

        Some(current)
    }
}

/// Outcome of probing for a key ahead of an insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// A live slot already holds the key
    Match(usize),
    /// The key is absent; this is the first reusable slot on its probe path
    Vacant(usize),
    /// The key is absent and its probe path has no reusable slot
    Exhausted,
}

/// A string-keyed hash map using open addressing with quadratic probing.
///
/// The number of slots is always prime, which guarantees the probe sequence visits
/// `(capacity + 1) / 2` distinct slots. Insertions keep the load factor below
/// [`MAX_LOAD_FACTOR`] by doubling the table, so a free slot is always reachable.
///
/// Removed entries leave a tombstone behind. Lookups step over tombstones and stop
/// at the first empty slot; tombstones are only discarded when the table is rebuilt
/// by [`ProbingHashMap::resize_table`] or [`ProbingHashMap::clear`].
#[derive(Debug, Clone)]
pub struct ProbingHashMap<V> {
    /// The slots storing the key-value pairs
    slots: Vec<Slot<V>>,
    /// Number of occupied (non-tombstone) slots
    size: usize,
    /// Maps keys to the start of their probe sequence
    hash_function: HashFunction,
}

impl<V> Default for ProbingHashMap<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<V> Extend<(String, V)> for ProbingHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(&key, value);
        }
    }
}

impl<V> ProbingHashMap<V> {
    /// Creates a map with at least `capacity` slots, rounded up to the next prime
    #[must_use]
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self { slots: empty_slots(next_prime(capacity)), size: 0, hash_function }
    }

    /// Creates a map hashing keys with [`hash_function_1`]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, hash_function_1)
    }

    /// Probe sequence for `key` against the current capacity
    fn probe(&self, key: &str) -> ProbeSequence {
        ProbeSequence::new((self.hash_function)(key), self.slots.len())
    }

    /// Index of the live slot holding `key`
    fn find_index(&self, key: &str) -> Option<usize> {
        for index in self.probe(key) {
            match self.slots.get(index)? {
                Slot::Empty => return None,
                Slot::Occupied { key: stored, .. } if stored == key => return Some(index),
                Slot::Occupied { .. } | Slot::Tombstone => {}
            }
        }

        None
    }

    /// Walks the whole probe path of `key` so that an existing entry behind a
    /// tombstone is found before the tombstone is offered for reuse.
    fn probe_for_insert(&self, key: &str) -> Probe {
        let mut first_tombstone = None;

        for index in self.probe(key) {
            match self.slots.get(index) {
                None => break,
                Some(Slot::Empty) => return Probe::Vacant(first_tombstone.unwrap_or(index)),
                Some(Slot::Tombstone) => {
                    first_tombstone = first_tombstone.or(Some(index));
                }
                Some(Slot::Occupied { key: stored, .. }) if stored == key => {
                    return Probe::Match(index);
                }
                Some(Slot::Occupied { .. }) => {}
            }
        }

        first_tombstone.map_or(Probe::Exhausted, Probe::Vacant)
    }

    /// Inserts or updates a key-value pair, returning the previous value.
    ///
    /// A new entry that brings the load factor to [`MAX_LOAD_FACTOR`] doubles the
    /// table. If the probe path of `key` has no free slot, which only happens after
    /// an explicit shrink, the table is doubled first and the insertion retried.
    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        match self.probe_for_insert(key) {
            Probe::Match(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied { value: current, .. }) => Some(mem::replace(current, value)),
                _ => None,
            },
            Probe::Vacant(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Slot::Occupied { key: key.to_owned(), value };
                    self.size = self.size.saturating_add(1);

                    if self.table_load() >= MAX_LOAD_FACTOR {
                        self.resize_table(self.get_capacity().saturating_mul(2));
                    }
                }
                None
            }
            Probe::Exhausted => {
                log::debug!(
                    "probe path for {key:?} is full at capacity {}, growing",
                    self.get_capacity()
                );
                self.resize_table(self.get_capacity().saturating_mul(2));
                self.put(key, value)
            }
        }
    }

    /// Returns the value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        match self.slots.get(self.find_index(key)?)? {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    /// Returns true if the map holds a live entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot, and returns its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.find_index(key)?;
        let slot = self.slots.get_mut(index)?;

        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.size = self.size.saturating_sub(1);
                Some(value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Rebuilds the table with `new_capacity` slots (rounded up to a prime).
    ///
    /// Requests smaller than the number of live entries are ignored. Live entries
    /// are moved into the new table and tombstones are dropped. Quadratic probing
    /// cannot reach every slot, so if an accepted request is too tight to place all
    /// entries the rebuild moves on to the next prime above twice the size.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < self.size {
            log::trace!("ignoring resize to {new_capacity}, map holds {} entries", self.size);
            return;
        }

        let old_capacity = self.get_capacity();
        let mut capacity = if is_prime(new_capacity) { new_capacity } else { next_prime(new_capacity) };

        let mut pending: Vec<(String, V)> =
            mem::take(&mut self.slots).into_iter().filter_map(Slot::into_entry).collect();
        let count = pending.len();

        let slots = loop {
            match Self::rebuild(capacity, self.hash_function, pending) {
                Ok(slots) => break slots,
                Err(entries) => {
                    log::debug!("{count} entries do not fit into {capacity} slots, growing");
                    pending = entries;
                    capacity = next_prime(capacity.saturating_mul(2));
                }
            }
        };

        log::debug!("resized probing table from {old_capacity} to {capacity} slots ({count} entries)");

        self.slots = slots;
        self.size = count;
    }

    /// Places `entries` into a fresh table of `capacity` slots, handing every entry
    /// back if one of them finds no empty slot on its probe path.
    fn rebuild(
        capacity: usize,
        hash_function: HashFunction,
        entries: Vec<(String, V)>,
    ) -> Result<Vec<Slot<V>>, Vec<(String, V)>> {
        let mut slots = empty_slots(capacity);
        let mut pending = entries.into_iter();

        while let Some((key, value)) = pending.next() {
            let target = ProbeSequence::new(hash_function(&key), capacity)
                .find(|&index| matches!(slots.get(index), Some(Slot::Empty)));

            if let Some(slot) = target.and_then(|index| slots.get_mut(index)) {
                *slot = Slot::Occupied { key, value };
            } else {
                let mut entries: Vec<(String, V)> =
                    slots.into_iter().filter_map(Slot::into_entry).collect();
                entries.push((key, value));
                entries.extend(pending);
                return Err(entries);
            }
        }

        Ok(slots)
    }

    /// Removes every entry and tombstone, keeping the capacity
    pub fn clear(&mut self) {
        log::trace!("clearing probing table of {} entries", self.size);
        self.slots = empty_slots(self.slots.len());
        self.size = 0;
    }

    /// Returns the current load factor, `size / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Number of slots that have never held an entry since the last rebuild.
    ///
    /// Tombstones are not empty.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.slots.iter().filter(|slot| matches!(slot, Slot::Empty)).count()
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Returns the number of slots
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the hash function the map was built with
    #[must_use]
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Returns an iterator over live entries in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: &self.slots, index: 0 }
    }
}

impl<V: Clone> ProbingHashMap<V> {
    /// Copies every live key-value pair, in slot order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }
}

impl<V: fmt::Display> fmt::Display for ProbingHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: <empty>")?,
                Slot::Tombstone => writeln!(f, "{index}: <tombstone>")?,
                Slot::Occupied { key, value } => writeln!(f, "{index}: {key} => {value}")?,
            }
        }
        Ok(())
    }
}

/// Iterator over the live entries of a [`ProbingHashMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Slots of the map being walked
    slots: &'a [Slot<V>],
    /// Current position in the iteration
    index: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Slot::Occupied { key, value } = slot {
                return Some((key.as_str(), value));
            }
        }
        None
    }
}

impl<'a, V> IntoIterator for &'a ProbingHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
