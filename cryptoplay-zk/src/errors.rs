// src/errors.rs

//! Error types for the proof systems.

use cryptoplay_crypto::CryptoError;
use cryptoplay_math::MathError;
use thiserror::Error;

/// Main error type for proof operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZkError {
    /// Public parameters `(g, p, h)` are unusable
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    /// Challenge lies outside `[1, p-1]`
    #[error("Invalid challenge: {challenge} is outside [1, {max}]")]
    InvalidChallenge {
        /// Rejected challenge
        challenge: i64,
        /// Largest allowed challenge
        max: i64,
    },

    /// Two transcripts cannot yield a witness
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying arithmetic failure
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Hash or oracle failure
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

/// Result type alias for proof operations
pub type Result<T> = std::result::Result<T, ZkError>;
