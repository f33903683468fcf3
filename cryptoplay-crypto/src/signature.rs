// src/signature.rs

//! Ed25519 reference signatures via `ed25519-dalek`.

use crate::errors::{CryptoError, Result};
use crate::{ED25519_PUBLIC_KEY_SIZE, ED25519_SIGNATURE_SIZE};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::Rng;

/// Ed25519 signing key with its public half
///
/// The secret seed is zeroized on drop by `ed25519-dalek`.
#[derive(Clone)]
pub struct SigningKeyPair {
    signing_key: SigningKey,
}

impl std::fmt::Debug for SigningKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyPair")
            .field("secret", &"[REDACTED]")
            .field("public", &hex::encode(self.public_key()))
            .finish()
    }
}

impl SigningKeyPair {
    /// Generates a key pair from a random 32-byte seed
    ///
    /// # Example
    /// ```
    /// use cryptoplay_crypto::signature::{verify, SigningKeyPair};
    ///
    /// let pair = SigningKeyPair::generate(&mut rand::thread_rng());
    /// let signature = pair.sign(b"message");
    /// assert!(verify(&pair.public_key(), b"message", &signature).unwrap());
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut seed = [0u8; 32];
        rng.fill(&mut seed[..]);
        Self::from_seed(&seed)
    }

    /// Deterministic key pair from a 32-byte seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Compressed public key
    pub fn public_key(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Deterministic Ed25519 signature over `message`
    pub fn sign(&self, message: &[u8]) -> [u8; ED25519_SIGNATURE_SIZE] {
        self.signing_key.sign(message).to_bytes()
    }
}

/// Verifies an Ed25519 signature
///
/// # Returns
/// `Ok(false)` for a well-formed signature that does not match, `Err` when
/// the key or signature bytes cannot be parsed.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let public_key: [u8; ED25519_PUBLIC_KEY_SIZE] = public_key.try_into().map_err(|_| {
        CryptoError::InvalidKey(format!(
            "Invalid public key size: expected {}, got {}",
            ED25519_PUBLIC_KEY_SIZE,
            public_key.len()
        ))
    })?;
    let verifying_key = VerifyingKey::from_bytes(&public_key)
        .map_err(|e| CryptoError::InvalidKey(format!("Invalid public key: {}", e)))?;
    let signature = Signature::from_slice(signature)
        .map_err(|e| CryptoError::SignatureError(format!("Malformed signature: {}", e)))?;
    Ok(verifying_key.verify(message, &signature).is_ok())
}
