// src/lib.rs

//! # Cryptoplay Crypto
//!
//! Cryptographic constructions for the Cryptoplay teaching toolkit.
//!
//! Two kinds of code live side by side here, and module docs say which is
//! which:
//!
//! - **Toy constructions**: rolling hash, Caesar, repeating-key XOR, the
//!   8-byte block cipher in [`modes`], small-prime Diffie-Hellman and RSA.
//!   These reproduce textbook arithmetic exactly and are trivially breakable.
//! - **Reference constructions**: SHA-2, SHA-3, Keccak, BLAKE3, HMAC,
//!   AES-256-GCM, X25519 and Ed25519, all delegated to audited crates.
//!
//! ## Example Usage
//!
//! ```rust
//! use cryptoplay_crypto::{hash, kex, mac, rsa, signature};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // Toy and real hashes
//! assert_eq!(hash::toy_rolling_hex("hello"), "05e918d2");
//! let tag = mac::hmac::<hash::Sha256>(b"key", b"message");
//! assert!(mac::verify::<hash::Sha256>(b"key", b"message", &tag));
//!
//! // Diffie-Hellman over p = 23, g = 5
//! let params = kex::DhParams::new(23, 5).unwrap();
//! let (a, b) = (params.generate_private(&mut rng), params.generate_private(&mut rng));
//! let shared_a = params.shared_secret(a, params.public(b).unwrap()).unwrap();
//! let shared_b = params.shared_secret(b, params.public(a).unwrap()).unwrap();
//! assert_eq!(shared_a, shared_b);
//!
//! // Textbook RSA
//! let key = rsa::RsaKeyPair::generate(61, 53, 17).unwrap();
//! assert_eq!(key.decrypt(key.encrypt(65).unwrap()).unwrap(), 65);
//!
//! // Ed25519
//! let signer = signature::SigningKeyPair::generate(&mut rng);
//! let sig = signer.sign(b"Hello Cryptoplay");
//! assert!(signature::verify(&signer.public_key(), b"Hello Cryptoplay", &sig).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classical;
pub mod commitment;
pub mod errors;
pub mod hash;
pub mod kex;
pub mod mac;
pub mod modes;
pub mod rsa;
pub mod signature;
pub mod symmetric;

// Re-export commonly used types
pub use crate::commitment::{HashCommitment, Pedersen};
pub use crate::errors::{CryptoError, Result};
pub use crate::hash::{HashAlgorithm, HashFunction};
pub use crate::kex::{DhParams, X25519KeyPair};
pub use crate::rsa::RsaKeyPair;
pub use crate::signature::SigningKeyPair;
pub use crate::symmetric::SymmetricKey;

/// Standard hash output size (32 bytes / 256 bits)
pub const HASH_SIZE: usize = 32;

/// AES-256 key size
pub const AES_KEY_SIZE: usize = 32;

/// AES-GCM nonce size
pub const AES_NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size
pub const AES_TAG_SIZE: usize = 16;

/// Ed25519 compressed public key size
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 signature size
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Diffie-Hellman modulus shown by default
pub const DEFAULT_DH_PRIME: i64 = 23;

/// Diffie-Hellman generator shown by default
pub const DEFAULT_DH_GENERATOR: i64 = 5;
