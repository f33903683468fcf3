// src/lib.rs

//! # Cryptoplay Math
//!
//! Number-theory kernels behind the Cryptoplay teaching toolkit.
//!
//! - **Modular arithmetic**: residues, square-and-multiply, extended Euclid, inverses
//! - **Finite fields and groups**: F_p, Z_n*, Euler's totient, generators
//! - **Primality**: trial division, Fermat, Miller-Rabin
//! - **Interpolation**: exact Lagrange over Q and over F_p
//! - **Secret sharing**: Shamir over a prime field, plus a hand-checkable integer variant
//!
//! All values are `i64`; products are widened to `i128` before reduction.
//!
//! ## Example Usage
//!
//! ```rust
//! use cryptoplay_math::{arith, lagrange, shamir};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! assert_eq!(arith::mod_pow(5, 6, 23).unwrap(), 8);
//! assert_eq!(arith::mod_inverse(3, 11).unwrap(), 4);
//!
//! let at_four = lagrange::interpolate(&[(1, 2), (2, 5), (3, 10)], 4).unwrap();
//! assert_eq!(at_four.to_integer(), Some(17));
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sharing = shamir::split(42, 3, 5, 97, &mut rng).unwrap();
//! assert_eq!(shamir::reconstruct(&sharing.shares[..3], 97).unwrap(), 42);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod arith;
pub mod errors;
pub mod field;
pub mod group;
pub mod lagrange;
pub mod polynomial;
pub mod primality;
pub mod ratio;
pub mod shamir;

// Re-export commonly used types
pub use crate::arith::{ModOp, Traced};
pub use crate::errors::{MathError, Result};
pub use crate::field::{is_prime, PrimeField};
pub use crate::polynomial::Polynomial;
pub use crate::ratio::Ratio;
pub use crate::shamir::{Share, Sharing};

/// Default modulus used by the arithmetic panels
pub const DEFAULT_MODULUS: i64 = 23;

/// Default prime for Shamir sharing over F_p
pub const DEFAULT_SHAMIR_PRIME: i64 = 97;

/// Carmichael number used to show Fermat liars
pub const CARMICHAEL_561: i64 = 561;
