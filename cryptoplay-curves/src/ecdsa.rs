// src/ecdsa.rs

//! ECDSA over a toy curve.
//!
//! The digest is a rolling `h = h*31 + c mod n` over UTF-16 code units, which
//! collides constantly. It stands in for a real hash so that every number in
//! the signature stays small enough to check by hand.

use crate::domain::DomainParams;
use crate::errors::{CurveError, Result};
use crate::point::Point;
use cryptoplay_math::{arith, is_prime};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of nonces tried by [`Ecdsa::sign_random`] before giving up
pub const MAX_SIGNING_ATTEMPTS: usize = 64;

/// An ECDSA signature `(r, s)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// x coordinate of `kG`, reduced mod n
    pub r: i64,
    /// `k⁻¹(e + r·d) mod n`
    pub s: i64,
}

/// Toy message digest reduced into `[0, n)`
///
/// # Example
/// ```
/// use cryptoplay_curves::ecdsa::message_digest;
///
/// assert_eq!(message_digest("Hello, ECDSA!", 19), 3);
/// ```
pub fn message_digest(message: &str, n: u64) -> i64 {
    let n = n.max(1) as i128;
    message
        .encode_utf16()
        .fold(0i128, |h, c| (h * 31 + c as i128) % n) as i64
}

/// ECDSA bound to a base point of prime order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Ecdsa {
    domain: DomainParams,
}

impl Ecdsa {
    /// Wraps domain parameters, requiring a prime generator order
    pub fn new(domain: DomainParams) -> Result<Self> {
        let n = domain.order();
        if n > i64::MAX as u64 || !is_prime(n as i64) {
            return Err(CurveError::CompositeOrder(n));
        }
        Ok(Self { domain })
    }

    /// Domain parameters
    pub fn domain(&self) -> &DomainParams {
        &self.domain
    }

    fn n(&self) -> i64 {
        self.domain.order() as i64
    }

    /// Public key `Q = dG`
    pub fn public_key(&self, private: i64) -> Result<Point> {
        self.domain.check_scalar(private)?;
        self.domain.mul_generator(private)
    }

    /// Signs with an explicit nonce `k`
    ///
    /// # Arguments
    /// * `message` - Text to sign
    /// * `private` - Signing key d in `[1, n-1]`
    /// * `nonce` - Per-signature secret k in `[1, n-1]`; reusing it leaks d
    ///
    /// # Returns
    /// `CurveError::DegenerateSignature` when r or s comes out zero; pick
    /// another nonce in that case.
    pub fn sign(&self, message: &str, private: i64, nonce: i64) -> Result<Signature> {
        self.domain.check_scalar(private)?;
        self.domain.check_scalar(nonce)?;
        let n = self.n();

        let e = message_digest(message, n as u64);
        let r_point = self.domain.mul_generator(nonce)?;
        let r = match r_point.x() {
            Some(x) => x.rem_euclid(n),
            None => return Err(CurveError::DegenerateSignature("kG is ∞".to_string())),
        };
        if r == 0 {
            return Err(CurveError::DegenerateSignature("r = 0".to_string()));
        }

        let k_inv = arith::mod_inverse(nonce, n)?;
        let inner = arith::mod_add(e, arith::mod_mul(r, private, n)?, n)?;
        let s = arith::mod_mul(k_inv, inner, n)?;
        if s == 0 {
            return Err(CurveError::DegenerateSignature("s = 0".to_string()));
        }

        debug!(e, r, s, "Produced ECDSA signature");
        Ok(Signature { r, s })
    }

    /// Signs with fresh random nonces, retrying degenerate draws
    pub fn sign_random<R: Rng + ?Sized>(
        &self,
        message: &str,
        private: i64,
        rng: &mut R,
    ) -> Result<(Signature, i64)> {
        for _ in 0..MAX_SIGNING_ATTEMPTS {
            let nonce = self.domain.random_scalar(rng)?;
            match self.sign(message, private, nonce) {
                Ok(sig) => return Ok((sig, nonce)),
                Err(CurveError::DegenerateSignature(reason)) => {
                    warn!(nonce, %reason, "Discarding degenerate nonce");
                }
                Err(err) => return Err(err),
            }
        }
        Err(CurveError::DegenerateSignature(format!(
            "no usable nonce after {} attempts",
            MAX_SIGNING_ATTEMPTS
        )))
    }

    /// Checks `(u₁G + u₂Q).x mod n == r`
    pub fn verify(&self, message: &str, signature: &Signature, public: &Point) -> Result<bool> {
        let n = self.n();
        let in_range = |v: i64| (1..n).contains(&v);
        if !in_range(signature.r) || !in_range(signature.s) {
            return Ok(false);
        }
        if public.is_infinity() || !self.domain.curve().contains(public) {
            return Err(CurveError::InvalidPublicKey(format!("{} is not a valid key", public)));
        }

        let e = message_digest(message, n as u64);
        let w = arith::mod_inverse(signature.s, n)?;
        let u1 = arith::mod_mul(e, w, n)?;
        let u2 = arith::mod_mul(signature.r, w, n)?;

        let curve = self.domain.curve();
        let point = curve.add(
            &self.domain.mul_generator(u1)?,
            &curve.scalar_mul(u2, public)?,
        )?;
        Ok(match point.x() {
            Some(x) => x.rem_euclid(n) == signature.r,
            None => false,
        })
    }
}
