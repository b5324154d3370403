//! Prime sizing shared by both map implementations.
//!
//! Quadratic probing only reaches every residue it needs when the table size is
//! prime, and a prime bucket count also spreads the weak additive hashes better in
//! the chaining map, so every capacity the maps use goes through this module.

/// Returns the first prime found by scanning upward from `n`.
///
/// Even inputs are bumped to `n + 1` first and the scan then moves in steps of two,
/// so the result is always odd: `next_prime(2)` is `3`, never `2`.
#[must_use]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };

    while !is_prime(candidate) {
        // Only reachable at the very top of the range, where no larger odd exists.
        if candidate == usize::MAX {
            break;
        }
        candidate = candidate.saturating_add(2);
    }

    candidate
}

/// Trial division by odd factors up to the square root of `n`.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while factor.checked_mul(factor).is_some_and(|square| square <= n) {
        if n % factor == 0 {
            return false;
        }
        factor = factor.saturating_add(2);
    }

    true
}
