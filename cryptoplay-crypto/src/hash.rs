// src/hash.rs

//! Hash functions behind a common trait.
//!
//! Provides a toy 32-bit rolling hash (non-cryptographic, kept so its
//! collisions can be demonstrated) next to SHA-256, SHA-512, SHA3-256,
//! Keccak-256 and BLAKE3 from audited crates.

use crate::errors::{CryptoError, Result};
use crate::HASH_SIZE;
use serde::{Deserialize, Serialize};
use sha2::Digest as _;
use std::fmt;
use std::str::FromStr;

/// A hash function usable by the generic MAC, commitment and proof code
pub trait HashFunction {
    /// Display name
    const NAME: &'static str;

    /// Internal block size in bytes, used by HMAC key padding
    const BLOCK_SIZE: usize;

    /// Digest length in bytes
    const OUTPUT_SIZE: usize;

    /// Hashes `data` in one shot
    fn digest(data: &[u8]) -> Vec<u8>;
}

/// Toy rolling hash `h = h*31 + c` over wrapping 32-bit integers
///
/// **Not cryptographic.** Collisions are trivial to find.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToyRolling32;

/// SHA-256 via `sha2`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

/// SHA-512 via `sha2`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512;

/// SHA3-256 via `sha3`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_256;

/// Keccak-256 (pre-standard SHA-3 padding) via `sha3`
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256;

/// BLAKE3 via `blake3`
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3;

fn rolling_fold(units: impl Iterator<Item = u16>) -> i32 {
    units.fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
}

impl HashFunction for ToyRolling32 {
    const NAME: &'static str = "Toy-Rolling-32";
    const BLOCK_SIZE: usize = 4;
    const OUTPUT_SIZE: usize = 4;

    fn digest(data: &[u8]) -> Vec<u8> {
        rolling_fold(data.iter().map(|&b| b as u16)).to_be_bytes().to_vec()
    }
}

impl HashFunction for Sha256 {
    const NAME: &'static str = "SHA-256";
    const BLOCK_SIZE: usize = 64;
    const OUTPUT_SIZE: usize = 32;

    fn digest(data: &[u8]) -> Vec<u8> {
        sha2::Sha256::digest(data).to_vec()
    }
}

impl HashFunction for Sha512 {
    const NAME: &'static str = "SHA-512";
    const BLOCK_SIZE: usize = 128;
    const OUTPUT_SIZE: usize = 64;

    fn digest(data: &[u8]) -> Vec<u8> {
        sha2::Sha512::digest(data).to_vec()
    }
}

impl HashFunction for Sha3_256 {
    const NAME: &'static str = "SHA3-256";
    const BLOCK_SIZE: usize = 136;
    const OUTPUT_SIZE: usize = 32;

    fn digest(data: &[u8]) -> Vec<u8> {
        sha3::Sha3_256::digest(data).to_vec()
    }
}

impl HashFunction for Keccak256 {
    const NAME: &'static str = "Keccak-256";
    const BLOCK_SIZE: usize = 136;
    const OUTPUT_SIZE: usize = 32;

    fn digest(data: &[u8]) -> Vec<u8> {
        keccak_hash(data).to_vec()
    }
}

impl HashFunction for Blake3 {
    const NAME: &'static str = "BLAKE3";
    const BLOCK_SIZE: usize = 64;
    const OUTPUT_SIZE: usize = 32;

    fn digest(data: &[u8]) -> Vec<u8> {
        blake3_hash(data).to_vec()
    }
}

/// Rolling hash of a string, fed UTF-16 code units
pub fn toy_rolling32(text: &str) -> i32 {
    rolling_fold(text.encode_utf16())
}

/// Rolling hash rendered as `|h|` in eight hex digits
///
/// # Example
/// ```
/// use cryptoplay_crypto::hash::toy_rolling_hex;
///
/// assert_eq!(toy_rolling_hex("hello"), "05e918d2");
/// ```
pub fn toy_rolling_hex(text: &str) -> String {
    format!("{:08x}", toy_rolling32(text).unsigned_abs())
}

/// Rolling hash reduced mod `m` at every step, then mapped into `[1, m-1]`
///
/// Used as the toy random oracle for Fiat-Shamir challenges.
pub fn toy_rolling_mod(text: &str, m: i64) -> Result<i64> {
    if m < 2 {
        return Err(CryptoError::InvalidInput(format!(
            "rolling hash modulus must be at least 2, got {}",
            m
        )));
    }
    let modulus = m as i128;
    let h = text
        .encode_utf16()
        .fold(0i128, |h, c| (h * 31 + c as i128).rem_euclid(modulus));
    Ok((h % (modulus - 1) + 1) as i64)
}

/// Computes BLAKE3 hash of input data
///
/// # Example
/// ```
/// use cryptoplay_crypto::hash::blake3_hash;
///
/// let hash = blake3_hash(b"Hello Cryptoplay");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn blake3_hash(data: &[u8]) -> [u8; HASH_SIZE] {
    *blake3::hash(data).as_bytes()
}

/// Computes Keccak-256 hash of input data
pub fn keccak_hash(data: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = sha3::Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(&result[..HASH_SIZE]);
    out
}

/// Converts a digest to lowercase hexadecimal
pub fn hash_to_hex(hash: &[u8]) -> String {
    hex::encode(hash)
}

/// Parses a 64-character hexadecimal string into a 32-byte digest
pub fn hex_to_hash(hex_str: &str) -> Result<[u8; HASH_SIZE]> {
    if hex_str.len() != HASH_SIZE * 2 {
        return Err(CryptoError::HashError(format!(
            "Invalid hex length: expected {}, got {}",
            HASH_SIZE * 2,
            hex_str.len()
        )));
    }

    let bytes = hex::decode(hex_str)
        .map_err(|e| CryptoError::HashError(format!("Hex decode failed: {}", e)))?;

    let mut hash = [0u8; HASH_SIZE];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}

/// Runtime selection among the supported hash functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashAlgorithm {
    /// [`ToyRolling32`]
    ToyRolling32,
    /// [`Sha256`]
    Sha256,
    /// [`Sha512`]
    Sha512,
    /// [`Sha3_256`]
    Sha3_256,
    /// [`Keccak256`]
    Keccak256,
    /// [`Blake3`]
    Blake3,
}

impl HashAlgorithm {
    /// Every algorithm, toy first
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::ToyRolling32,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Blake3,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::ToyRolling32 => ToyRolling32::NAME,
            HashAlgorithm::Sha256 => Sha256::NAME,
            HashAlgorithm::Sha512 => Sha512::NAME,
            HashAlgorithm::Sha3_256 => Sha3_256::NAME,
            HashAlgorithm::Keccak256 => Keccak256::NAME,
            HashAlgorithm::Blake3 => Blake3::NAME,
        }
    }

    /// Digest length in bytes
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::ToyRolling32 => ToyRolling32::OUTPUT_SIZE,
            HashAlgorithm::Sha256 => Sha256::OUTPUT_SIZE,
            HashAlgorithm::Sha512 => Sha512::OUTPUT_SIZE,
            HashAlgorithm::Sha3_256 => Sha3_256::OUTPUT_SIZE,
            HashAlgorithm::Keccak256 => Keccak256::OUTPUT_SIZE,
            HashAlgorithm::Blake3 => Blake3::OUTPUT_SIZE,
        }
    }

    /// False only for the toy hash
    pub fn is_cryptographic(&self) -> bool {
        !matches!(self, HashAlgorithm::ToyRolling32)
    }

    /// Hashes raw bytes
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::ToyRolling32 => ToyRolling32::digest(data),
            HashAlgorithm::Sha256 => Sha256::digest(data),
            HashAlgorithm::Sha512 => Sha512::digest(data),
            HashAlgorithm::Sha3_256 => Sha3_256::digest(data),
            HashAlgorithm::Keccak256 => Keccak256::digest(data),
            HashAlgorithm::Blake3 => Blake3::digest(data),
        }
    }

    /// Hashes text and renders hex
    ///
    /// The toy hash is fed UTF-16 code units and rendered as `|h|`, matching
    /// [`toy_rolling_hex`]; the others hash the UTF-8 bytes.
    pub fn hex_digest(&self, text: &str) -> String {
        match self {
            HashAlgorithm::ToyRolling32 => toy_rolling_hex(text),
            other => hash_to_hex(&other.digest(text.as_bytes())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "toy" | "toyrolling32" | "rolling" => Ok(HashAlgorithm::ToyRolling32),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "sha3256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            "keccak256" | "keccak" => Ok(HashAlgorithm::Keccak256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            _ => Err(CryptoError::InvalidInput(format!("Unknown hash algorithm: {}", s))),
        }
    }
}
