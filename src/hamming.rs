//! HammingDistanceCalculator - summed Hamming distance over paired words.
//!
//! The calculator owns two equal-length sequences of `u64` words and reports
//! the total number of differing bit positions across all pairs:
//!
//! ```text
//! calculate() = Σ popcount(left[i] ^ right[i])   for i in [0, size())
//! ```
//!
//! # Design
//!
//! - Length equality is checked once in [`HammingDistanceCalculator::new`]
//! - Stored words are never mutated afterwards, so every query is infallible
//! - The total is accumulated in an `i64`, which cannot overflow for any
//!   sequence that fits in memory
//! - Loop shape is selectable through [`CalcStrategy`]; every shape yields the
//!   same total because integer addition is associative and commutative
//!
//! # Examples
//!
//! ```
//! use fastcalc::HammingDistanceCalculator;
//!
//! // 5 ^ 1 = 0b100, 3 ^ 7 = 0b100
//! let calc = HammingDistanceCalculator::new(vec![5, 3], vec![1, 7]).unwrap();
//! assert_eq!(calc.size(), 2);
//! assert_eq!(calc.calculate(), 2);
//! ```

use crate::config::{CalcStrategy, CalculatorConfig};
use crate::error::FastCalcError;
use crate::popcount::popcount;
use crate::Result;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Number of pairs handled per unrolled batch.
pub const BATCH_SIZE: usize = 4;

/// Hamming distance between two words.
///
/// # Examples
///
/// ```
/// use fastcalc::hamming_distance;
///
/// assert_eq!(hamming_distance(0, u64::MAX), 64);
/// assert_eq!(hamming_distance(42, 42), 0);
/// ```
#[inline(always)]
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    popcount(a ^ b)
}

/// Owns two equal-length word sequences and sums their pairwise Hamming
/// distances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HammingDistanceCalculator {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl HammingDistanceCalculator {
    /// Create a calculator over `left` and `right`.
    ///
    /// The sequences are moved (or copied, for slices) into the calculator,
    /// so later changes to the caller's data have no effect on results.
    ///
    /// # Errors
    ///
    /// Returns [`FastCalcError::InvalidArgument`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastcalc::{FastCalcError, HammingDistanceCalculator};
    ///
    /// let words = [0xFFu64, 0x00];
    /// let calc = HammingDistanceCalculator::new(&words[..], &[0x0Fu64, 0xFF][..]).unwrap();
    /// assert_eq!(calc.calculate(), 12);
    ///
    /// let err = HammingDistanceCalculator::new(vec![1, 2], vec![1]).unwrap_err();
    /// assert!(matches!(err, FastCalcError::InvalidArgument(_)));
    /// ```
    pub fn new<L, R>(left: L, right: R) -> Result<Self>
    where
        L: Into<Vec<u64>>,
        R: Into<Vec<u64>>,
    {
        let left = left.into();
        let right = right.into();

        if left.len() != right.len() {
            debug!(
                left = left.len(),
                right = right.len(),
                "rejecting word sequences of unequal length"
            );
            return Err(FastCalcError::length_mismatch(left.len(), right.len()));
        }

        debug!(pairs = left.len(), "created hamming distance calculator");
        Ok(Self { left, right })
    }

    /// Number of word pairs.
    #[inline]
    pub fn size(&self) -> usize {
        self.left.len()
    }

    /// True when there are no word pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Stored left-hand words.
    #[inline]
    pub fn left(&self) -> &[u64] {
        &self.left
    }

    /// Stored right-hand words.
    #[inline]
    pub fn right(&self) -> &[u64] {
        &self.right
    }

    /// Sum of Hamming distances over all pairs. Returns 0 when empty.
    pub fn calculate(&self) -> i64 {
        self.calculate_with(CalcStrategy::default())
    }

    /// Sum of Hamming distances using a specific loop shape.
    ///
    /// `Parallel` uses [`CalculatorConfig::DEFAULT_CHUNK_SIZE`] pairs per task.
    pub fn calculate_with(&self, strategy: CalcStrategy) -> i64 {
        match strategy {
            CalcStrategy::Sequential => sum_sequential(&self.left, &self.right),
            CalcStrategy::Batched => sum_batched(&self.left, &self.right),
            CalcStrategy::Parallel => {
                sum_parallel(&self.left, &self.right, CalculatorConfig::DEFAULT_CHUNK_SIZE)
            }
        }
    }

    /// Sum of Hamming distances as directed by `config`.
    ///
    /// A zero `parallel_chunk_size` is treated as one pair per task; use
    /// [`CalculatorConfig::validate`] to reject it up front.
    pub fn calculate_with_config(&self, config: &CalculatorConfig) -> i64 {
        match config.strategy {
            CalcStrategy::Parallel => {
                sum_parallel(&self.left, &self.right, config.parallel_chunk_size.max(1))
            }
            strategy => self.calculate_with(strategy),
        }
    }

    /// Per-pair distances, in index order.
    ///
    /// ```
    /// use fastcalc::HammingDistanceCalculator;
    ///
    /// let calc = HammingDistanceCalculator::new(vec![0, 7], vec![1, 0]).unwrap();
    /// assert_eq!(calc.pair_distances().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn pair_distances(&self) -> impl Iterator<Item = u32> + '_ {
        self.left
            .iter()
            .zip(self.right.iter())
            .map(|(&a, &b)| hamming_distance(a, b))
    }
}

fn sum_sequential(left: &[u64], right: &[u64]) -> i64 {
    left.iter()
        .zip_eq(right.iter())
        .fold(0i64, |acc, (&a, &b)| acc + hamming_distance(a, b) as i64)
}

fn sum_batched(left: &[u64], right: &[u64]) -> i64 {
    let left_chunks = left.chunks_exact(BATCH_SIZE);
    let right_chunks = right.chunks_exact(BATCH_SIZE);
    let left_rest = left_chunks.remainder();
    let right_rest = right_chunks.remainder();

    let mut total = 0i64;
    for (a, b) in left_chunks.zip(right_chunks) {
        total += hamming_distance(a[0], b[0]) as i64;
        total += hamming_distance(a[1], b[1]) as i64;
        total += hamming_distance(a[2], b[2]) as i64;
        total += hamming_distance(a[3], b[3]) as i64;
    }

    total + sum_sequential(left_rest, right_rest)
}

fn sum_parallel(left: &[u64], right: &[u64], chunk_size: usize) -> i64 {
    trace!(pairs = left.len(), chunk_size, "parallel hamming reduction");
    left.par_chunks(chunk_size)
        .zip(right.par_chunks(chunk_size))
        .map(|(a, b)| sum_batched(a, b))
        .sum()
}
