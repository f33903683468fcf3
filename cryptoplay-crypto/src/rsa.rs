// src/rsa.rs

//! Textbook RSA over small primes.
//!
//! No padding, no blinding, deterministic encryption. Every weakness of
//! "raw" RSA is present; the point is to watch `Mᵉᵈ ≡ M (mod n)` work.

use crate::errors::{CryptoError, Result};
use cryptoplay_math::{arith, is_prime};
use serde::Serialize;
use tracing::debug;

/// Largest prime factor accepted, so that `n` stays well inside `i64`
pub const MAX_PRIME_FACTOR: i64 = 3_037_000_499;

/// Public half of an RSA key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RsaPublicKey {
    /// Modulus `n = p·q`
    pub n: i64,
    /// Public exponent
    pub e: i64,
}

impl RsaPublicKey {
    fn check_message(&self, m: i64) -> Result<()> {
        if m < 0 {
            return Err(CryptoError::InvalidInput(format!(
                "RSA message {} must be non-negative",
                m
            )));
        }
        if m >= self.n {
            return Err(CryptoError::MessageTooLarge {
                message: m,
                modulus: self.n,
            });
        }
        Ok(())
    }

    /// `C = Mᵉ mod n`
    pub fn encrypt(&self, m: i64) -> Result<i64> {
        self.check_message(m)?;
        Ok(arith::mod_pow(m, self.e as u64, self.n)?)
    }

    /// Checks `sᵉ mod n == m`
    pub fn verify(&self, m: i64, signature: i64) -> Result<bool> {
        self.check_message(m)?;
        if signature < 0 || signature >= self.n {
            return Ok(false);
        }
        Ok(arith::mod_pow(signature, self.e as u64, self.n)? == m)
    }
}

/// Full RSA key pair with its generation parameters
#[derive(Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    p: i64,
    q: i64,
    phi: i64,
    d: i64,
    /// Public key `(n, e)`
    pub public: RsaPublicKey,
}

impl std::fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("public", &self.public)
            .field("d", &"[REDACTED]")
            .finish()
    }
}

impl RsaKeyPair {
    /// Builds a key from primes `p`, `q` and public exponent `e`
    ///
    /// # Example
    /// ```
    /// use cryptoplay_crypto::rsa::RsaKeyPair;
    ///
    /// let key = RsaKeyPair::generate(61, 53, 17).unwrap();
    /// assert_eq!(key.public.n, 3233);
    /// assert_eq!(key.private_exponent(), 2753);
    /// assert_eq!(key.public.encrypt(65).unwrap(), 2790);
    /// ```
    pub fn generate(p: i64, q: i64, e: i64) -> Result<Self> {
        for (name, factor) in [("p", p), ("q", q)] {
            if !is_prime(factor) {
                return Err(CryptoError::InvalidParameters(format!(
                    "{} = {} is not prime",
                    name, factor
                )));
            }
            if factor > MAX_PRIME_FACTOR {
                return Err(CryptoError::InvalidParameters(format!(
                    "{} = {} exceeds {}",
                    name, factor, MAX_PRIME_FACTOR
                )));
            }
        }
        if p == q {
            return Err(CryptoError::InvalidParameters(
                "p and q must be distinct".to_string(),
            ));
        }

        let n = p * q;
        let phi = (p - 1) * (q - 1);
        if e <= 1 || e >= phi {
            return Err(CryptoError::InvalidParameters(format!(
                "e = {} must lie in (1, {})",
                e, phi
            )));
        }
        if arith::gcd(e, phi) != 1 {
            return Err(CryptoError::InvalidParameters(format!(
                "e = {} shares a factor with φ(n) = {}",
                e, phi
            )));
        }
        let d = arith::mod_inverse(e, phi)?;
        debug!(n, e, "Generated RSA key");

        Ok(Self {
            p,
            q,
            phi,
            d,
            public: RsaPublicKey { n, e },
        })
    }

    /// Private exponent `d = e⁻¹ mod φ(n)`
    pub fn private_exponent(&self) -> i64 {
        self.d
    }

    /// `φ(n) = (p-1)(q-1)`
    pub fn phi(&self) -> i64 {
        self.phi
    }

    /// Human-readable key generation walkthrough
    pub fn key_generation_steps(&self) -> Vec<String> {
        let RsaPublicKey { n, e } = self.public;
        vec![
            format!("1. Choose primes p = {} and q = {}", self.p, self.q),
            format!("2. n = p × q = {}", n),
            format!("3. φ(n) = (p-1)(q-1) = {}", self.phi),
            format!("4. Public exponent e = {} with gcd(e, φ(n)) = 1", e),
            format!("5. d = e⁻¹ mod φ(n) = {} (e·d mod φ(n) = 1)", self.d),
        ]
    }

    /// `C = Mᵉ mod n`
    pub fn encrypt(&self, m: i64) -> Result<i64> {
        self.public.encrypt(m)
    }

    /// `M = Cᵈ mod n`
    pub fn decrypt(&self, c: i64) -> Result<i64> {
        self.public.check_message(c)?;
        Ok(arith::mod_pow(c, self.d as u64, self.public.n)?)
    }

    /// `s = Mᵈ mod n`
    pub fn sign(&self, m: i64) -> Result<i64> {
        self.public.check_message(m)?;
        Ok(arith::mod_pow(m, self.d as u64, self.public.n)?)
    }

    /// Checks `sᵉ mod n == m`
    pub fn verify(&self, m: i64, signature: i64) -> Result<bool> {
        self.public.verify(m, signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> RsaKeyPair {
        RsaKeyPair::generate(61, 53, 17).unwrap()
    }

    #[test]
    fn test_classic_vector() {
        let key = classic();
        assert_eq!(key.public, RsaPublicKey { n: 3233, e: 17 });
        assert_eq!(key.phi(), 3120);
        assert_eq!(key.private_exponent(), 2753);
        assert_eq!(key.encrypt(65).unwrap(), 2790);
        assert_eq!(key.decrypt(2790).unwrap(), 65);
    }

    #[test]
    fn test_roundtrip_every_message() {
        let key = classic();
        for m in (0..3233).step_by(7) {
            assert_eq!(key.decrypt(key.encrypt(m).unwrap()).unwrap(), m);
        }
    }

    #[test]
    fn test_sign_verify() {
        let key = classic();
        let s = key.sign(123).unwrap();
        assert!(key.verify(123, s).unwrap());
        assert!(!key.verify(124, s).unwrap());
        assert!(!key.verify(123, 3233).unwrap());
    }

    #[test]
    fn test_message_too_large() {
        let key = classic();
        assert_eq!(
            key.encrypt(3233),
            Err(CryptoError::MessageTooLarge {
                message: 3233,
                modulus: 3233
            })
        );
        assert!(matches!(key.encrypt(-1), Err(CryptoError::InvalidInput(_))));
    }

    #[test]
    fn test_parameter_validation() {
        assert!(RsaKeyPair::generate(61, 61, 17).is_err());
        assert!(RsaKeyPair::generate(60, 53, 17).is_err());
        // φ = 3120 is divisible by 3
        assert!(RsaKeyPair::generate(61, 53, 3).is_err());
        assert!(RsaKeyPair::generate(61, 53, 1).is_err());
    }

    #[test]
    fn test_steps_and_debug() {
        let key = classic();
        let steps = key.key_generation_steps();
        assert_eq!(steps.len(), 5);
        assert!(steps[4].contains("2753"));
        assert!(!format!("{:?}", key).contains("2753"));
    }
}
