// src/errors.rs

//! Error types for the playground binary.

use thiserror::Error;

/// Main error type for playground operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or values are unusable
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Number-theory failure
    #[error("Math error: {0}")]
    MathError(String),

    /// Elliptic-curve failure
    #[error("Curve error: {0}")]
    CurveError(String),

    /// Cryptographic failure
    #[error("Crypto error: {0}")]
    CryptoError(String),

    /// Proof-system failure
    #[error("Proof error: {0}")]
    ZkError(String),

    /// Command-line value rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Report or config could not be encoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<cryptoplay_math::MathError> for CliError {
    fn from(err: cryptoplay_math::MathError) -> Self {
        CliError::MathError(format!("{}", err))
    }
}

impl From<cryptoplay_curves::CurveError> for CliError {
    fn from(err: cryptoplay_curves::CurveError) -> Self {
        CliError::CurveError(format!("{}", err))
    }
}

impl From<cryptoplay_crypto::CryptoError> for CliError {
    fn from(err: cryptoplay_crypto::CryptoError) -> Self {
        CliError::CryptoError(format!("{}", err))
    }
}

impl From<cryptoplay_zk::ZkError> for CliError {
    fn from(err: cryptoplay_zk::ZkError) -> Self {
        CliError::ZkError(format!("{}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::SerializationError(format!("{}", err))
    }
}

/// Result type alias for playground operations
pub type Result<T> = std::result::Result<T, CliError>;
