// src/ecdh.rs

//! Elliptic-curve Diffie-Hellman on a toy curve.
//!
//! Alice publishes `aG`, Bob publishes `bG`, and both arrive at `abG`.

use crate::domain::DomainParams;
use crate::errors::{CurveError, Result};
use crate::point::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Private scalar and the matching public point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveKeyPair {
    private: i64,
    /// Public point `dG`
    pub public: Point,
}

impl CurveKeyPair {
    /// Derives the public point for a chosen private scalar
    pub fn from_private(domain: &DomainParams, private: i64) -> Result<Self> {
        domain.check_scalar(private)?;
        let public = domain.mul_generator(private)?;
        Ok(Self { private, public })
    }

    /// Picks a random private scalar in `[1, n-1]`
    pub fn generate<R: Rng + ?Sized>(domain: &DomainParams, rng: &mut R) -> Result<Self> {
        let private = domain.random_scalar(rng)?;
        Self::from_private(domain, private)
    }

    /// Private scalar
    pub fn private(&self) -> i64 {
        self.private
    }
}

/// `private · peer_public`
///
/// # Example
/// ```
/// use cryptoplay_curves::{ecdh, Curve, DomainParams, Point};
///
/// let domain = DomainParams::new(Curve::new(2, 2, 17).unwrap(), Point::new(5, 1)).unwrap();
/// let alice = ecdh::CurveKeyPair::from_private(&domain, 7).unwrap();
/// let bob = ecdh::CurveKeyPair::from_private(&domain, 11).unwrap();
///
/// let s1 = ecdh::shared_secret(&domain, alice.private(), &bob.public).unwrap();
/// let s2 = ecdh::shared_secret(&domain, bob.private(), &alice.public).unwrap();
/// assert_eq!(s1, s2);
/// ```
pub fn shared_secret(domain: &DomainParams, private: i64, peer_public: &Point) -> Result<Point> {
    domain.check_scalar(private)?;
    if peer_public.is_infinity() {
        return Err(CurveError::InvalidPublicKey("peer sent the point at infinity".to_string()));
    }
    if !domain.curve().contains(peer_public) {
        return Err(CurveError::InvalidPublicKey(format!("{} is not on the curve", peer_public)));
    }
    let secret = domain.curve().scalar_mul(private, peer_public)?;
    debug!(peer = %peer_public, "Derived ECDH shared point");
    Ok(secret)
}
