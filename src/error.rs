//! Error types for FastCalc.
//!
//! This module provides the unified error type for all fallible operations in
//! the crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for FastCalc operations.
///
/// Only construction and configuration loading can fail. Once a
/// [`HammingDistanceCalculator`](crate::HammingDistanceCalculator) exists,
/// every query on it is infallible.
#[derive(Error, Debug)]
pub enum FastCalcError {
    /// A caller-supplied argument violates a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be parsed or serialized
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FastCalcError {
    /// Build the error reported when two word sequences differ in length.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        FastCalcError::InvalidArgument(format!(
            "vector sizes must match: left has {} elements, right has {}",
            left, right
        ))
    }
}

/// A specialized `Result` type for FastCalc operations.
///
/// This is a type alias for `Result<T, FastCalcError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, FastCalcError>;
