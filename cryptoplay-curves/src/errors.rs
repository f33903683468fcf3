// src/errors.rs

use cryptoplay_math::MathError;
use thiserror::Error;

/// Main error type for curve operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// `4a³ + 27b² ≡ 0 (mod p)`
    #[error("Singular curve: y² = x³ + {a}x + {b} has zero discriminant modulo {p}")]
    SingularCurve {
        /// Linear coefficient
        a: i64,
        /// Constant coefficient
        b: i64,
        /// Field modulus
        p: i64,
    },

    /// Point does not satisfy the curve equation
    #[error("Point ({x}, {y}) is not on the curve")]
    PointNotOnCurve {
        /// x coordinate
        x: i64,
        /// y coordinate
        y: i64,
    },

    /// Base point has composite order, so scalars cannot be inverted mod n
    #[error("Base point order {0} is not prime")]
    CompositeOrder(u64),

    /// Signing produced r = 0 or s = 0
    #[error("Degenerate signature: {0}")]
    DegenerateSignature(String),

    /// Scalar or key outside its allowed range
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// Public key is unusable (identity or off-curve)
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Underlying arithmetic failure
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

/// Result type alias for curve operations
pub type Result<T> = std::result::Result<T, CurveError>;
