// src/errors.rs

//! Error types for cryptographic operations.
//!
//! Covers the toy constructions and the audited-crate wrappers alike.

use cryptoplay_math::MathError;
use std::fmt;

/// Main error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key format or size
    InvalidKey(String),

    /// Hash operation or hex parsing failed
    HashError(String),

    /// Signature generation or verification failed
    SignatureError(String),

    /// Encryption failed
    EncryptionError(String),

    /// Decryption failed
    DecryptionError(String),

    /// PKCS#7 padding is malformed
    InvalidPadding(String),

    /// Group or scheme parameters are unusable
    InvalidParameters(String),

    /// RSA message is not below the modulus
    MessageTooLarge {
        /// Message representative
        message: i64,
        /// RSA modulus
        modulus: i64,
    },

    /// Invalid input data
    InvalidInput(String),

    /// Underlying arithmetic failure
    Math(MathError),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            CryptoError::HashError(msg) => write!(f, "Hash error: {}", msg),
            CryptoError::SignatureError(msg) => write!(f, "Signature error: {}", msg),
            CryptoError::EncryptionError(msg) => write!(f, "Encryption error: {}", msg),
            CryptoError::DecryptionError(msg) => write!(f, "Decryption error: {}", msg),
            CryptoError::InvalidPadding(msg) => write!(f, "Invalid padding: {}", msg),
            CryptoError::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
            CryptoError::MessageTooLarge { message, modulus } => {
                write!(f, "Message too large: {} is not below modulus {}", message, modulus)
            }
            CryptoError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CryptoError::Math(err) => write!(f, "Math error: {}", err),
        }
    }
}

impl std::error::Error for CryptoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CryptoError::Math(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MathError> for CryptoError {
    fn from(err: MathError) -> Self {
        CryptoError::Math(err)
    }
}

/// Result type alias for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;
