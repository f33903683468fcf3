// src/lib.rs

//! # Cryptoplay ZK
//!
//! Zero-knowledge building blocks for the Cryptoplay teaching toolkit.
//!
//! - **Sigma protocol**: interactive proof of knowledge of a discrete log,
//!   with a typestate prover that cannot reuse a nonce
//! - **Fiat-Shamir**: the same proof made non-interactive by hashing
//! - **Simulation and extraction**: why transcripts prove nothing to
//!   outsiders, and why nonce reuse leaks the secret
//! - **Fingerprinting**: randomized polynomial identity testing
//!
//! ## Example Usage
//!
//! ```rust
//! use cryptoplay_crypto::hash::ToyRolling32;
//! use cryptoplay_zk::{fiat_shamir, sigma, DlogStatement};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let statement = DlogStatement::from_secret(3, 23, 7).unwrap();
//!
//! // Interactive
//! let transcript = sigma::run_interactive(&statement, 7, &mut rng).unwrap();
//! assert!(transcript.accepted());
//!
//! // Non-interactive
//! let proof = fiat_shamir::prove::<ToyRolling32, _>(&statement, 7, &mut rng).unwrap();
//! assert!(fiat_shamir::verify::<ToyRolling32>(&statement, &proof).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod fiat_shamir;
pub mod fingerprint;
pub mod sigma;
pub mod statement;

// Re-export commonly used types
pub use crate::errors::{Result, ZkError};
pub use crate::fiat_shamir::{ChallengeOracle, FiatShamirProof};
pub use crate::sigma::{CommittedProver, Prover, Transcript, Verifier};
pub use crate::statement::DlogStatement;

/// Default secret exponent
pub const DEFAULT_SECRET: i64 = 7;

/// Default base
pub const DEFAULT_GENERATOR: i64 = 3;

/// Default prime modulus
pub const DEFAULT_MODULUS: i64 = 23;

/// Default field size for fingerprinting
pub const DEFAULT_FINGERPRINT_PRIME: i64 = 101;
