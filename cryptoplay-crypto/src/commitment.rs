// src/commitment.rs

//! Commitment schemes: hiding now, binding later.
//!
//! - [`HashCommitment`]: `C = H(secret ‖ nonce)`, binding as long as `H`
//!   is collision resistant
//! - [`Pedersen`]: `C = gᵐ·hʳ mod p`, perfectly hiding and additively
//!   homomorphic

use crate::errors::{CryptoError, Result};
use crate::hash::HashFunction;
use crate::mac::constant_time_eq;
use cryptoplay_math::{arith, is_prime};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::warn;

/// Length of nonces drawn by [`HashCommitment::random_nonce`]
pub const NONCE_SIZE: usize = 16;

/// Hash-based commitment over a chosen hash function
#[derive(Clone, Copy, Debug, Default)]
pub struct HashCommitment<H: HashFunction> {
    _hash: PhantomData<H>,
}

impl<H: HashFunction> HashCommitment<H> {
    /// Creates the scheme
    pub fn new() -> Self {
        Self { _hash: PhantomData }
    }

    /// Fresh random nonce
    pub fn random_nonce<R: Rng + ?Sized>(rng: &mut R) -> [u8; NONCE_SIZE] {
        let mut nonce = [0u8; NONCE_SIZE];
        rng.fill(&mut nonce[..]);
        nonce
    }

    /// `H(secret ‖ nonce)`
    pub fn commit(&self, secret: &[u8], nonce: &[u8]) -> Vec<u8> {
        let mut input = Vec::with_capacity(secret.len() + nonce.len());
        input.extend_from_slice(secret);
        input.extend_from_slice(nonce);
        H::digest(&input)
    }

    /// Checks that `(secret, nonce)` opens `commitment`
    pub fn open(&self, commitment: &[u8], secret: &[u8], nonce: &[u8]) -> bool {
        constant_time_eq(&self.commit(secret, nonce), commitment)
    }
}

/// Pedersen parameters `(g, h, p)`
///
/// Binding relies on nobody knowing `log_g h`. With toy parameters anyone can
/// compute it, which is exactly what the panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pedersen {
    /// First generator
    pub g: i64,
    /// Second generator
    pub h: i64,
    /// Prime modulus
    pub p: i64,
}

impl Pedersen {
    /// Validates `p` prime and `1 < g, h < p` with `g != h`
    ///
    /// # Example
    /// ```
    /// use cryptoplay_crypto::commitment::Pedersen;
    ///
    /// let scheme = Pedersen::new(3, 5, 23).unwrap();
    /// let c1 = scheme.commit(7, 13).unwrap();
    /// let c2 = scheme.commit(11, 17).unwrap();
    /// assert_eq!(scheme.combine(c1, c2).unwrap(), scheme.commit(18, 30).unwrap());
    /// ```
    pub fn new(g: i64, h: i64, p: i64) -> Result<Self> {
        if !is_prime(p) {
            return Err(CryptoError::InvalidParameters(format!("modulus {} is not prime", p)));
        }
        for (name, value) in [("g", g), ("h", h)] {
            if value <= 1 || value >= p {
                return Err(CryptoError::InvalidParameters(format!(
                    "{} = {} must lie in (1, {})",
                    name, value, p
                )));
            }
        }
        if g == h {
            warn!(g, h, "Pedersen generators coincide; commitments are not binding");
        }
        Ok(Self { g, h, p })
    }

    /// `gᵐ·hʳ mod p`; negative exponents are reduced mod `p - 1`
    pub fn commit(&self, message: i64, randomness: i64) -> Result<i64> {
        let order = self.p - 1;
        let gm = arith::mod_pow(self.g, message.rem_euclid(order) as u64, self.p)?;
        let hr = arith::mod_pow(self.h, randomness.rem_euclid(order) as u64, self.p)?;
        Ok(arith::mod_mul(gm, hr, self.p)?)
    }

    /// Checks an opening
    pub fn open(&self, commitment: i64, message: i64, randomness: i64) -> Result<bool> {
        Ok(self.commit(message, randomness)? == commitment.rem_euclid(self.p))
    }

    /// Homomorphic addition: `C(m1, r1)·C(m2, r2) = C(m1 + m2, r1 + r2)`
    pub fn combine(&self, c1: i64, c2: i64) -> Result<i64> {
        Ok(arith::mod_mul(c1, c2, self.p)?)
    }

    /// Uniform blinding factor in `[1, p - 2]`
    pub fn random_blinding<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(1..self.p - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{Sha256, ToyRolling32};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_hash_commitment_roundtrip() {
        let scheme = HashCommitment::<Sha256>::new();
        let mut rng = StdRng::seed_from_u64(3);
        let nonce = HashCommitment::<Sha256>::random_nonce(&mut rng);

        let c = scheme.commit(b"heads", &nonce);
        assert_eq!(c.len(), 32);
        assert!(scheme.open(&c, b"heads", &nonce));
        assert!(!scheme.open(&c, b"tails", &nonce));
        assert!(!scheme.open(&c, b"heads", &[0u8; NONCE_SIZE]));
    }

    #[test]
    fn test_hash_commitment_is_hiding_with_nonce() {
        let scheme = HashCommitment::<Sha256>::new();
        assert_ne!(scheme.commit(b"heads", b"n1"), scheme.commit(b"heads", b"n2"));
    }

    #[test]
    fn test_toy_hash_commitment() {
        let scheme = HashCommitment::<ToyRolling32>::new();
        let c = scheme.commit(b"7", b"salt");
        assert!(scheme.open(&c, b"7", b"salt"));
    }

    #[test]
    fn test_pedersen_known_values() {
        let scheme = Pedersen::new(3, 5, 23).unwrap();
        // 3^7 = 2187 ≡ 2, 5^13 ≡ 21, 2·21 = 42 ≡ 19
        assert_eq!(scheme.commit(7, 13).unwrap(), 19);
        assert!(scheme.open(19, 7, 13).unwrap());
        assert!(!scheme.open(19, 8, 13).unwrap());
    }

    #[test]
    fn test_pedersen_homomorphic() {
        let scheme = Pedersen::new(3, 5, 23).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..25 {
            let (m1, m2) = (rng.gen_range(0..50), rng.gen_range(0..50));
            let (r1, r2) = (scheme.random_blinding(&mut rng), scheme.random_blinding(&mut rng));
            let combined = scheme
                .combine(scheme.commit(m1, r1).unwrap(), scheme.commit(m2, r2).unwrap())
                .unwrap();
            assert_eq!(combined, scheme.commit(m1 + m2, r1 + r2).unwrap());
        }
    }

    #[test]
    fn test_pedersen_validation() {
        assert!(Pedersen::new(3, 5, 21).is_err());
        assert!(Pedersen::new(1, 5, 23).is_err());
        assert!(Pedersen::new(3, 23, 23).is_err());
    }
}
