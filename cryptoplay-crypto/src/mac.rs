// src/mac.rs

//! HMAC, built by hand over any [`HashFunction`].
//!
//! `HMAC(K, m) = H((K' ⊕ opad) ‖ H((K' ⊕ ipad) ‖ m))` where `K'` is the key
//! hashed if longer than one block and zero-padded to the block size.

use crate::errors::{CryptoError, Result};
use crate::hash::HashFunction;
use hmac::{Hmac, Mac};
use serde::Serialize;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Intermediate values of one HMAC computation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HmacTrace {
    /// Key after hashing/padding to one block
    pub block_key: Vec<u8>,
    /// `H((K' ⊕ ipad) ‖ m)`
    pub inner_hash: Vec<u8>,
    /// Final tag
    pub tag: Vec<u8>,
}

fn block_key<H: HashFunction>(key: &[u8]) -> Vec<u8> {
    let mut block = if key.len() > H::BLOCK_SIZE {
        H::digest(key)
    } else {
        key.to_vec()
    };
    block.resize(H::BLOCK_SIZE, 0);
    block
}

/// HMAC with every intermediate exposed
pub fn hmac_traced<H: HashFunction>(key: &[u8], message: &[u8]) -> HmacTrace {
    let block_key = block_key::<H>(key);

    let mut inner = Vec::with_capacity(H::BLOCK_SIZE + message.len());
    inner.extend(block_key.iter().map(|b| b ^ IPAD));
    inner.extend_from_slice(message);
    let inner_hash = H::digest(&inner);

    let mut outer = Vec::with_capacity(H::BLOCK_SIZE + inner_hash.len());
    outer.extend(block_key.iter().map(|b| b ^ OPAD));
    outer.extend_from_slice(&inner_hash);
    let tag = H::digest(&outer);

    HmacTrace {
        block_key,
        inner_hash,
        tag,
    }
}

/// HMAC tag of `message` under `key`
///
/// # Example
/// ```
/// use cryptoplay_crypto::hash::{hash_to_hex, Sha256};
/// use cryptoplay_crypto::mac::hmac;
///
/// let tag = hmac::<Sha256>(b"Jefe", b"what do ya want for nothing?");
/// assert_eq!(
///     hash_to_hex(&tag),
///     "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
/// );
/// ```
pub fn hmac<H: HashFunction>(key: &[u8], message: &[u8]) -> Vec<u8> {
    hmac_traced::<H>(key, message).tag
}

/// Compares two byte strings without an early exit on the first mismatch
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Recomputes the tag and compares in constant time
pub fn verify<H: HashFunction>(key: &[u8], message: &[u8], tag: &[u8]) -> bool {
    constant_time_eq(&hmac::<H>(key, message), tag)
}

/// HMAC-SHA256 from the audited `hmac` crate
pub fn hmac_sha256_reference(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<sha2::Sha256>::new_from_slice(key)
        .map_err(|e| CryptoError::InvalidKey(format!("HMAC key rejected: {}", e)))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{hash_to_hex, Sha256, Sha512, ToyRolling32};

    const KEY: &[u8] = b"Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn test_rfc4231_case_2_sha256() {
        assert_eq!(
            hash_to_hex(&hmac::<Sha256>(KEY, DATA)),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_rfc4231_case_2_sha512() {
        assert_eq!(
            hash_to_hex(&hmac::<Sha512>(KEY, DATA)),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_matches_reference_crate() {
        let long_key = vec![0xaa; 131];
        for key in [KEY, &long_key[..], &b""[..]] {
            assert_eq!(hmac::<Sha256>(key, DATA), hmac_sha256_reference(key, DATA).unwrap());
        }
    }

    #[test]
    fn test_long_key_is_hashed() {
        let long_key = vec![7u8; 200];
        let trace = hmac_traced::<Sha256>(&long_key, DATA);
        assert_eq!(&trace.block_key[..32], &crate::hash::Sha256::digest(&long_key)[..]);
        assert!(trace.block_key[32..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_tampered_message_rejected() {
        let tag = hmac::<Sha256>(b"secret", b"Transfer $100 to Alice");
        assert!(verify::<Sha256>(b"secret", b"Transfer $100 to Alice", &tag));
        assert!(!verify::<Sha256>(b"secret", b"Transfer $900 to Alice", &tag));
        assert!(!verify::<Sha256>(b"other", b"Transfer $100 to Alice", &tag));
    }

    #[test]
    fn test_toy_hash_hmac_shape() {
        let tag = hmac::<ToyRolling32>(b"key", b"message");
        assert_eq!(tag.len(), 4);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
