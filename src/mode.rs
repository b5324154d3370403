//! Mode finding on top of [`ChainingHashMap`].

use crate::ChainingHashMap;

/// Returns the most frequent values of `values` (compared by their string form)
/// together with their frequency.
///
/// Ties are all reported, in the order the frequency map yields them, which is
/// bucket order rather than input order. An empty input yields no mode and a
/// frequency of zero.
///
/// ```rust
/// use primehash::find_mode;
///
/// let (mode, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(mode, vec!["apple".to_string()]);
/// assert_eq!(frequency, 2);
/// ```
pub fn find_mode<T: ToString>(values: &[T]) -> (Vec<String>, usize) {
    let mut frequencies: ChainingHashMap<usize> = ChainingHashMap::default();

    for value in values {
        let key = value.to_string();
        let count = frequencies.get(&key).copied().unwrap_or(0);
        frequencies.put(&key, count.saturating_add(1));
    }

    let mut mode = Vec::new();
    let mut highest_frequency = 0;

    for (key, frequency) in frequencies.get_keys_and_values() {
        if frequency > highest_frequency {
            highest_frequency = frequency;
            mode.clear();
            mode.push(key);
        } else if frequency == highest_frequency {
            mode.push(key);
        }
    }

    (mode, highest_frequency)
}
