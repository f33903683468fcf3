// src/errors.rs

//! Error types for the number-theory kernels.
//!
//! Every fallible routine in this crate reports one of these variants
//! instead of silently producing `NaN`-style garbage.

use thiserror::Error;

/// Main error type for arithmetic operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Modulus is too small to define a residue ring
    #[error("Invalid modulus: {0} (must be at least 2)")]
    InvalidModulus(i64),

    /// Value has no multiplicative inverse modulo m
    #[error("No inverse: {value} is not invertible modulo {modulus}")]
    NoInverse {
        /// Value that was inverted
        value: i64,
        /// Modulus of the ring
        modulus: i64,
    },

    /// A prime was required
    #[error("Not prime: {0}")]
    NotPrime(i64),

    /// Intermediate result left the i64 range
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Two interpolation points share an x coordinate
    #[error("Duplicate x coordinate: {0}")]
    DuplicateX(i64),

    /// Not enough points or shares for the requested operation
    #[error("Not enough points: need {needed}, got {got}")]
    NotEnoughPoints {
        /// Minimum number required
        needed: usize,
        /// Number supplied
        got: usize,
    },

    /// Secret sharing parameters are inconsistent
    #[error("Invalid sharing parameters: {0}")]
    InvalidSharing(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for arithmetic operations
pub type Result<T> = std::result::Result<T, MathError>;
