//! FastCalc - Hamming Distance Accumulation
//!
//! FastCalc sums the bitwise Hamming distances between two equal-length
//! sequences of 64-bit words. Each pair contributes the number of bit
//! positions in which the two words differ, i.e. `popcount(a ^ b)`.
//!
//! # Architecture
//!
//! - **HammingDistanceCalculator**: owns the two word sequences, validates
//!   their lengths once, and computes the total
//! - **popcount**: the single set-bit counting primitive, hardware-backed by
//!   default with a portable SWAR fallback
//! - **CalculatorConfig**: selects sequential, batched, or parallel
//!   accumulation and loads from JSON
//! - **utils**: seeded test data and a naive reference distance
//!
//! # Examples
//!
//! ```
//! use fastcalc::HammingDistanceCalculator;
//!
//! let calc = HammingDistanceCalculator::new(
//!     vec![0x1234567890ABCDEF, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000],
//!     vec![0xFEDCBA0987654321, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF],
//! )
//! .unwrap();
//!
//! assert_eq!(calc.size(), 3);
//! assert_eq!(calc.calculate(), 164); // 36 + 64 + 64
//! ```
//!
//! ## Choosing a Strategy
//!
//! ```
//! use fastcalc::{CalcStrategy, HammingDistanceCalculator};
//! use fastcalc::utils::generate_test_data;
//!
//! let (a, b) = generate_test_data(100_000, 42);
//! let calc = HammingDistanceCalculator::new(a, b).unwrap();
//!
//! let batched = calc.calculate_with(CalcStrategy::Batched);
//! assert_eq!(calc.calculate_with(CalcStrategy::Parallel), batched);
//! assert_eq!(calc.calculate_with(CalcStrategy::Sequential), batched);
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events at debug and trace level and never
//! installs a subscriber itself.

pub mod config;
pub mod error;
pub mod hamming;
pub mod popcount;
pub mod utils;

// Re-exports for convenient access
pub use config::{CalcStrategy, CalculatorConfig};
pub use error::{FastCalcError, Result};
pub use hamming::{hamming_distance, HammingDistanceCalculator, BATCH_SIZE};
pub use popcount::{popcount, popcount_swar};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "FastCalc";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("FastCalc"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let calc = HammingDistanceCalculator::new(vec![0], vec![u64::MAX]).unwrap();
        let _result: Result<()> = Ok(());
        assert_eq!(calc.calculate(), 64);
        assert_eq!(BATCH_SIZE, 4);
        assert_eq!(popcount(0xF), popcount_swar(0xF));
    }
}
