// src/lib.rs

//! # Cryptoplay Curves
//!
//! Elliptic curves small enough to enumerate by hand.
//!
//! - **Group law**: point addition and doubling with modular-inverse slopes
//! - **Scalar multiplication**: naive repeated addition next to double-and-add
//! - **ECDH**: shared points from private scalars
//! - **ECDSA**: signing and real verification over a prime-order base point
//!
//! ## Example Usage
//!
//! ```rust
//! use cryptoplay_curves::{ecdsa::Ecdsa, Curve, DomainParams, Point};
//!
//! let curve = Curve::new(2, 2, 17).unwrap();
//! let domain = DomainParams::new(curve, Point::new(5, 1)).unwrap();
//! assert_eq!(domain.order(), 19);
//!
//! let ecdsa = Ecdsa::new(domain).unwrap();
//! let public = ecdsa.public_key(7).unwrap();
//! let sig = ecdsa.sign("Hello, ECDSA!", 7, 5).unwrap();
//! assert!(ecdsa.verify("Hello, ECDSA!", &sig, &public).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod curve;
pub mod domain;
pub mod ecdh;
pub mod ecdsa;
pub mod errors;
pub mod point;

// Re-export commonly used types
pub use crate::curve::Curve;
pub use crate::domain::DomainParams;
pub use crate::errors::{CurveError, Result};
pub use crate::point::Point;

/// Textbook curve `y² = x³ + x + 1 (mod 23)` with 28 points
pub const TEXTBOOK_CURVE: (i64, i64, i64) = (1, 1, 23);

/// Signing curve `y² = x³ + 2x + 2 (mod 17)`
pub const SIGNING_CURVE: (i64, i64, i64) = (2, 2, 17);

/// Base point of prime order 19 on [`SIGNING_CURVE`]
pub const SIGNING_GENERATOR: (i64, i64) = (5, 1);
