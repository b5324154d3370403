//! String hash functions accepted by the maps.

/// A deterministic mapping from a string key to a bucket-independent hash.
///
/// The maps reduce the result modulo their capacity themselves, so any function
/// works as long as it returns the same value for the same key.
pub type HashFunction = fn(&str) -> usize;

/// Sums the scalar values of the key's characters.
///
/// Anagrams collide, which makes this a useful function for exercising
/// collision handling.
#[must_use]
pub fn hash_function_1(key: &str) -> usize {
    key.chars().fold(0_usize, |hash, c| hash.wrapping_add(scalar(c)))
}

/// Weights every character by its one-based position before summing.
#[must_use]
pub fn hash_function_2(key: &str) -> usize {
    key.chars()
        .zip(1_usize..)
        .fold(0_usize, |hash, (c, position)| hash.wrapping_add(position.wrapping_mul(scalar(c))))
}

/// Unicode scalar value of `c` widened to `usize`
#[allow(clippy::cast_possible_truncation)]
fn scalar(c: char) -> usize {
    u32::from(c) as usize
}
