// src/fingerprint.rs

//! Polynomial identity testing by random evaluation.
//!
//! Two distinct polynomials of degree at most `d` agree on at most `d`
//! points of F_p, so one random evaluation catches a difference with
//! probability at least `1 - d/p`.

use crate::errors::{Result, ZkError};
use cryptoplay_math::{is_prime, Polynomial};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// `P(point) mod p`
///
/// # Example
/// ```
/// use cryptoplay_math::Polynomial;
/// use cryptoplay_zk::fingerprint::fingerprint;
///
/// // x² + 2x + 3 at 5
/// let poly = Polynomial::from_descending(&[1, 2, 3]);
/// assert_eq!(fingerprint(&poly, 5, 101).unwrap(), 38);
/// ```
pub fn fingerprint(poly: &Polynomial, point: i64, p: i64) -> Result<i64> {
    Ok(poly.evaluate_mod(point, p)?)
}

/// Fingerprint at a uniformly random point of F_p
///
/// # Returns
/// `(point, P(point) mod p)`
pub fn random_fingerprint<R: Rng + ?Sized>(poly: &Polynomial, p: i64, rng: &mut R) -> Result<(i64, i64)> {
    check_prime(p)?;
    let point = rng.gen_range(0..p);
    Ok((point, fingerprint(poly, point, p)?))
}

/// Upper bound on the chance that one random point misses a difference
pub fn error_bound(degree: usize, p: i64) -> f64 {
    (degree as f64 / p as f64).min(1.0)
}

fn check_prime(p: i64) -> Result<()> {
    if !is_prime(p) {
        return Err(ZkError::InvalidInput(format!("fingerprint modulus {} is not prime", p)));
    }
    Ok(())
}

/// Outcome of a multi-round identity test
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IdentityCheck {
    /// Points that were tried, in order
    pub points: Vec<i64>,
    /// First point where the fingerprints differed
    pub witness: Option<i64>,
    /// Chance that unequal polynomials pass every round tried
    pub false_positive_bound: f64,
}

impl IdentityCheck {
    /// True when no round found a difference
    pub fn probably_equal(&self) -> bool {
        self.witness.is_none()
    }
}

/// Compares two polynomials at up to `rounds` random points of F_p
///
/// Stops at the first point where they differ.
pub fn identity_check<R: Rng + ?Sized>(
    first: &Polynomial,
    second: &Polynomial,
    p: i64,
    rounds: usize,
    rng: &mut R,
) -> Result<IdentityCheck> {
    check_prime(p)?;
    if rounds == 0 {
        return Err(ZkError::InvalidInput("at least one round is required".to_string()));
    }
    let per_round = error_bound(first.degree().max(second.degree()), p);
    let mut points = Vec::with_capacity(rounds);
    let mut witness = None;
    for _ in 0..rounds {
        let point = rng.gen_range(0..p);
        points.push(point);
        if fingerprint(first, point, p)? != fingerprint(second, point, p)? {
            witness = Some(point);
            break;
        }
    }
    debug!(rounds = points.len(), differ = witness.is_some(), "Identity check finished");
    Ok(IdentityCheck {
        false_positive_bound: per_round.powi(points.len() as i32),
        points,
        witness,
    })
}

/// True when the polynomials agree at `rounds` random points of F_p
pub fn probably_equal<R: Rng + ?Sized>(
    first: &Polynomial,
    second: &Polynomial,
    p: i64,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    Ok(identity_check(first, second, p, rounds, rng)?.probably_equal())
}
