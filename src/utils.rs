//! Utility functions for FastCalc.
//!
//! This module provides seeded test-data generation and a deliberately naive
//! reference distance used to cross-check the fast accumulator.

use crate::error::FastCalcError;
use crate::Result;
use rand::{Rng, SeedableRng};

/// Default number of word pairs for generated workloads.
pub const DEFAULT_DATA_SIZE: usize = 10_000;

/// Default seed for generated workloads.
pub const DEFAULT_SEED: u64 = 42;

/// Generate two vectors of `size` uniformly random words.
///
/// The same `seed` always yields the same pair of vectors.
///
/// # Examples
///
/// ```
/// use fastcalc::utils::generate_test_data;
///
/// let (a, b) = generate_test_data(100, 7);
/// assert_eq!(a.len(), 100);
/// assert_eq!(b.len(), 100);
/// assert_eq!(generate_test_data(100, 7), (a, b));
/// ```
pub fn generate_test_data(size: usize, seed: u64) -> (Vec<u64>, Vec<u64>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let left = (0..size).map(|_| rng.gen::<u64>()).collect();
    let right = (0..size).map(|_| rng.gen::<u64>()).collect();
    (left, right)
}

/// Bit-by-bit Hamming distance total, without any popcount primitive.
///
/// # Errors
///
/// Returns [`FastCalcError::InvalidArgument`] if the lengths differ.
///
/// # Examples
///
/// ```
/// use fastcalc::utils::reference_distance;
///
/// assert_eq!(reference_distance(&[5, 3], &[1, 7]).unwrap(), 2);
/// assert!(reference_distance(&[1], &[]).is_err());
/// ```
pub fn reference_distance(left: &[u64], right: &[u64]) -> Result<i64> {
    if left.len() != right.len() {
        return Err(FastCalcError::length_mismatch(left.len(), right.len()));
    }

    let mut total = 0i64;
    for (&a, &b) in left.iter().zip(right) {
        let diff = a ^ b;
        for bit in 0..64 {
            total += ((diff >> bit) & 1) as i64;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_deterministic() {
        let first = generate_test_data(64, DEFAULT_SEED);
        let second = generate_test_data(64, DEFAULT_SEED);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_seed_changes_data() {
        let (a, _) = generate_test_data(64, 1);
        let (b, _) = generate_test_data(64, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_empty() {
        let (a, b) = generate_test_data(0, DEFAULT_SEED);
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn test_reference_distance() {
        assert_eq!(reference_distance(&[], &[]).unwrap(), 0);
        assert_eq!(reference_distance(&[0], &[u64::MAX]).unwrap(), 64);
        assert_eq!(
            reference_distance(
                &[0x1234567890ABCDEF, u64::MAX, 0],
                &[0xFEDCBA0987654321, 0, u64::MAX]
            )
            .unwrap(),
            164
        );
    }
}
