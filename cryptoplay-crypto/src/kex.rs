// src/kex.rs

//! Key exchange: finite-field Diffie-Hellman and an X25519 reference.
//!
//! The finite-field version uses toy primes and square-and-multiply, so the
//! public values never overflow. X25519 is the same idea on Curve25519,
//! computed by `curve25519-dalek`.

use crate::errors::{CryptoError, Result};
use cryptoplay_math::{arith, group, is_prime};
use curve25519_dalek::montgomery::MontgomeryPoint;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public group parameters `(p, g)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhParams {
    /// Prime modulus
    pub p: i64,
    /// Base
    pub g: i64,
}

impl DhParams {
    /// Validates `p` prime (at least 5) and `1 < g < p`
    ///
    /// # Example
    /// ```
    /// use cryptoplay_crypto::kex::DhParams;
    ///
    /// let params = DhParams::new(23, 5).unwrap();
    /// let alice = params.public(6).unwrap();
    /// let bob = params.public(15).unwrap();
    /// assert_eq!(params.shared_secret(6, bob).unwrap(), params.shared_secret(15, alice).unwrap());
    /// ```
    pub fn new(p: i64, g: i64) -> Result<Self> {
        if p < 5 || !is_prime(p) {
            return Err(CryptoError::InvalidParameters(format!(
                "DH modulus {} must be a prime of at least 5",
                p
            )));
        }
        if g <= 1 || g >= p {
            return Err(CryptoError::InvalidParameters(format!(
                "DH base {} must lie in (1, {})",
                g, p
            )));
        }
        let order = group::multiplicative_order(g, p)?.unwrap_or(0);
        if order != (p - 1) as u64 {
            warn!(p, g, order, "DH base does not generate the full group");
        }
        Ok(Self { p, g })
    }

    fn check_private(&self, private: i64) -> Result<()> {
        if private < 2 || private > self.p - 2 {
            return Err(CryptoError::InvalidKey(format!(
                "DH private key {} must lie in [2, {}]",
                private,
                self.p - 2
            )));
        }
        Ok(())
    }

    /// Uniform private exponent in `[2, p-2]`
    pub fn generate_private<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(2..=self.p - 2)
    }

    /// `gˣ mod p`
    pub fn public(&self, private: i64) -> Result<i64> {
        self.check_private(private)?;
        Ok(arith::mod_pow(self.g, private as u64, self.p)?)
    }

    /// `peerˣ mod p`
    pub fn shared_secret(&self, private: i64, peer_public: i64) -> Result<i64> {
        self.check_private(private)?;
        if peer_public < 1 || peer_public >= self.p {
            return Err(CryptoError::InvalidKey(format!(
                "DH public value {} must lie in [1, {})",
                peer_public, self.p
            )));
        }
        if peer_public == 1 || peer_public == self.p - 1 {
            warn!(peer_public, "Peer public value lies in a subgroup of order at most 2");
        }
        let secret = arith::mod_pow(peer_public, private as u64, self.p)?;
        debug!(p = self.p, "Derived DH shared secret");
        Ok(secret)
    }
}

/// X25519 key pair; the secret scalar is wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct X25519KeyPair {
    secret: [u8; 32],
    public: [u8; 32],
}

impl std::fmt::Debug for X25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("X25519KeyPair")
            .field("secret", &"[REDACTED]")
            .field("public", &hex::encode(self.public))
            .finish()
    }
}

impl X25519KeyPair {
    /// Derives the public key for 32 secret bytes (clamped per RFC 7748)
    pub fn from_secret(secret: [u8; 32]) -> Self {
        let public = MontgomeryPoint::mul_base_clamped(secret).to_bytes();
        Self { secret, public }
    }

    /// Fresh random key pair
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut secret = [0u8; 32];
        rng.fill(&mut secret[..]);
        Self::from_secret(secret)
    }

    /// Public u-coordinate
    pub fn public(&self) -> [u8; 32] {
        self.public
    }

    /// X25519 with the peer's public key
    ///
    /// # Returns
    /// `CryptoError::InvalidKey` when the result is all zeros, which happens
    /// for low-order peer points.
    pub fn diffie_hellman(&self, peer_public: &[u8; 32]) -> Result<[u8; 32]> {
        let shared = MontgomeryPoint(*peer_public).mul_clamped(self.secret).to_bytes();
        if shared.iter().all(|&b| b == 0) {
            return Err(CryptoError::InvalidKey(
                "X25519 peer key has low order".to_string(),
            ));
        }
        Ok(shared)
    }
}

/// Runs a full X25519 exchange between two fresh parties
///
/// # Returns
/// The two independently derived shared secrets, which always agree.
pub fn x25519_reference<R: Rng + ?Sized>(rng: &mut R) -> Result<([u8; 32], [u8; 32])> {
    let alice = X25519KeyPair::generate(rng);
    let bob = X25519KeyPair::generate(rng);
    Ok((
        alice.diffie_hellman(&bob.public())?,
        bob.diffie_hellman(&alice.public())?,
    ))
}
