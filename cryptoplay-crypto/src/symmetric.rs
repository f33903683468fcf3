// src/symmetric.rs

//! Symmetric encryption with AES-256-GCM.
//!
//! The real counterpart of [`crate::modes`]: authenticated, randomized, and
//! provided by the audited `aes-gcm` crate.

use crate::errors::{CryptoError, Result};
use crate::{AES_KEY_SIZE, AES_NONCE_SIZE, AES_TAG_SIZE};
use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 256-bit AES key, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; AES_KEY_SIZE],
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricKey([REDACTED])")
    }
}

impl SymmetricKey {
    /// Wraps existing key material
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; AES_KEY_SIZE] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!(
                "Invalid key size: expected {}, got {}",
                AES_KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Generates a random 256-bit encryption key
///
/// # Example
/// ```
/// use cryptoplay_crypto::symmetric::generate_key;
///
/// let key = generate_key(&mut rand::thread_rng());
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> SymmetricKey {
    let mut bytes = [0u8; AES_KEY_SIZE];
    rng.fill(&mut bytes[..]);
    SymmetricKey { bytes }
}

fn cipher(key: &SymmetricKey) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::InvalidKey(format!("Failed to create cipher: {}", e)))
}

fn split_nonce(ciphertext: &[u8]) -> Result<(&[u8], &[u8])> {
    if ciphertext.len() < AES_NONCE_SIZE + AES_TAG_SIZE {
        return Err(CryptoError::DecryptionError("Ciphertext too short".to_string()));
    }
    Ok(ciphertext.split_at(AES_NONCE_SIZE))
}

/// Encrypts with associated data under a fresh random nonce
///
/// # Returns
/// `nonce || ciphertext || tag`
pub fn encrypt_with_aad<R: Rng + ?Sized>(
    plaintext: &[u8],
    key: &SymmetricKey,
    associated_data: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    let cipher = cipher(key)?;
    let nonce_bytes: [u8; AES_NONCE_SIZE] = rng.gen();
    let payload = Payload {
        msg: plaintext,
        aad: associated_data,
    };

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), payload)
        .map_err(|e| CryptoError::EncryptionError(format!("Encryption failed: {}", e)))?;

    let mut result = Vec::with_capacity(AES_NONCE_SIZE + ciphertext.len());
    result.extend_from_slice(&nonce_bytes);
    result.extend_from_slice(&ciphertext);
    Ok(result)
}

/// Decrypts `nonce || ciphertext || tag`, checking the associated data
pub fn decrypt_with_aad(
    ciphertext: &[u8],
    key: &SymmetricKey,
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let (nonce, body) = split_nonce(ciphertext)?;
    let payload = Payload {
        msg: body,
        aad: associated_data,
    };
    cipher(key)?
        .decrypt(Nonce::from_slice(nonce), payload)
        .map_err(|e| CryptoError::DecryptionError(format!("Decryption failed: {}", e)))
}

/// Encrypts under a fresh random nonce
///
/// # Example
/// ```
/// use cryptoplay_crypto::symmetric::{decrypt, encrypt, generate_key};
///
/// let mut rng = rand::thread_rng();
/// let key = generate_key(&mut rng);
/// let ciphertext = encrypt(b"secret message", &key, &mut rng).unwrap();
/// assert_eq!(decrypt(&ciphertext, &key).unwrap(), b"secret message");
/// ```
pub fn encrypt<R: Rng + ?Sized>(plaintext: &[u8], key: &SymmetricKey, rng: &mut R) -> Result<Vec<u8>> {
    encrypt_with_aad(plaintext, key, &[], rng)
}

/// Inverse of [`encrypt`]
pub fn decrypt(ciphertext: &[u8], key: &SymmetricKey) -> Result<Vec<u8>> {
    decrypt_with_aad(ciphertext, key, &[])
}

/// Ciphertext length for a given plaintext length
pub fn ciphertext_len(plaintext_len: usize) -> usize {
    AES_NONCE_SIZE + plaintext_len + AES_TAG_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn test_encrypt_decrypt() {
        let mut rng = rng();
        let key = generate_key(&mut rng);
        let ciphertext = encrypt(b"Hello, Cryptoplay!", &key, &mut rng).unwrap();
        assert_eq!(ciphertext.len(), ciphertext_len(18));
        assert_eq!(decrypt(&ciphertext, &key).unwrap(), b"Hello, Cryptoplay!");
    }

    #[test]
    fn test_encrypt_different_each_time() {
        let mut rng = rng();
        let key = generate_key(&mut rng);
        let ct1 = encrypt(b"same message", &key, &mut rng).unwrap();
        let ct2 = encrypt(b"same message", &key, &mut rng).unwrap();
        assert_ne!(ct1, ct2);
        assert_eq!(decrypt(&ct1, &key).unwrap(), decrypt(&ct2, &key).unwrap());
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let mut rng = rng();
        let key1 = generate_key(&mut rng);
        let key2 = generate_key(&mut rng);
        let ciphertext = encrypt(b"secret", &key1, &mut rng).unwrap();
        assert!(matches!(decrypt(&ciphertext, &key2), Err(CryptoError::DecryptionError(_))));
    }

    #[test]
    fn test_decrypt_corrupted_ciphertext() {
        let mut rng = rng();
        let key = generate_key(&mut rng);
        let mut ciphertext = encrypt(b"secret", &key, &mut rng).unwrap();
        if let Some(byte) = ciphertext.last_mut() {
            *byte ^= 0xFF;
        }
        assert!(decrypt(&ciphertext, &key).is_err());
    }

    #[test]
    fn test_aad_must_match() {
        let mut rng = rng();
        let key = generate_key(&mut rng);
        let ciphertext = encrypt_with_aad(b"secret", &key, b"header-1", &mut rng).unwrap();
        assert_eq!(decrypt_with_aad(&ciphertext, &key, b"header-1").unwrap(), b"secret");
        assert!(decrypt_with_aad(&ciphertext, &key, b"header-2").is_err());
    }

    #[test]
    fn test_empty_plaintext() {
        let mut rng = rng();
        let key = generate_key(&mut rng);
        let ciphertext = encrypt(b"", &key, &mut rng).unwrap();
        assert!(decrypt(&ciphertext, &key).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_key_size() {
        assert!(matches!(SymmetricKey::from_slice(&[0u8; 16]), Err(CryptoError::InvalidKey(_))));
        assert!(SymmetricKey::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn test_ciphertext_too_short() {
        let key = generate_key(&mut rng());
        assert!(decrypt(&[0u8; 5], &key).is_err());
    }

    #[test]
    fn test_key_debug_redacted() {
        let key = generate_key(&mut rng());
        assert_eq!(format!("{:?}", key), "SymmetricKey([REDACTED])");
    }
}
