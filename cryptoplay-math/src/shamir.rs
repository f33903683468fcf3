// src/shamir.rs

//! Shamir secret sharing.
//!
//! The field variant is the real scheme: a random polynomial of degree
//! `threshold - 1` over F_p whose constant term is the secret. The integer
//! variant keeps small integer coefficients so every share can be checked by
//! hand, which also means it leaks information about the secret.

use crate::errors::{MathError, Result};
use crate::field::PrimeField;
use crate::lagrange::{interpolate, interpolate_mod};
use crate::polynomial::Polynomial;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Upper bound (exclusive) for the integer variant's random coefficients
pub const INTEGER_COEFFICIENT_BOUND: i64 = 100;

/// A single share `(x, P(x))`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// Evaluation point, never zero
    pub x: i64,
    /// Polynomial value at `x`
    pub y: i64,
}

/// Output of a split: the dealer's polynomial and the issued shares
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sharing {
    /// Dealer polynomial; its constant term is the secret
    pub polynomial: Polynomial,
    /// Minimum number of shares needed to reconstruct
    pub threshold: usize,
    /// Issued shares at `x = 1..=n`
    pub shares: Vec<Share>,
}

fn check_threshold(threshold: usize, share_count: usize) -> Result<()> {
    if threshold == 0 {
        return Err(MathError::InvalidSharing("threshold must be at least 1".to_string()));
    }
    if share_count < threshold {
        return Err(MathError::InvalidSharing(format!(
            "share count {} is below threshold {}",
            share_count, threshold
        )));
    }
    Ok(())
}

fn to_points(shares: &[Share]) -> Result<Vec<(i64, i64)>> {
    if shares.is_empty() {
        return Err(MathError::NotEnoughPoints { needed: 1, got: 0 });
    }
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.x) {
            return Err(MathError::DuplicateX(share.x));
        }
    }
    Ok(shares.iter().map(|s| (s.x, s.y)).collect())
}

/// Splits `secret` into `share_count` shares over F_prime
///
/// # Arguments
/// * `secret` - Value in `[0, prime)`
/// * `threshold` - Shares required to reconstruct
/// * `share_count` - Shares issued, at `x = 1..=share_count`
/// * `prime` - Field modulus, larger than `share_count`
/// * `rng` - Source for the random coefficients
///
/// # Example
/// ```
/// use cryptoplay_math::shamir::{reconstruct, split};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let sharing = split(42, 3, 5, 97, &mut rng).unwrap();
/// assert_eq!(reconstruct(&sharing.shares[1..4], 97).unwrap(), 42);
/// ```
pub fn split<R: Rng + ?Sized>(
    secret: i64,
    threshold: usize,
    share_count: usize,
    prime: i64,
    rng: &mut R,
) -> Result<Sharing> {
    check_threshold(threshold, share_count)?;
    let field = PrimeField::new(prime)?;
    if !(0..prime).contains(&secret) {
        return Err(MathError::InvalidSharing(format!(
            "secret {} must lie in [0, {})",
            secret, prime
        )));
    }
    if share_count as i128 >= prime as i128 {
        return Err(MathError::InvalidSharing(format!(
            "{} shares need distinct non-zero points in F_{}",
            share_count, prime
        )));
    }

    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret);
    for _ in 1..threshold {
        coefficients.push(rng.gen_range(0..prime));
    }
    let polynomial = Polynomial::new(coefficients);

    let mut shares = Vec::with_capacity(share_count);
    for x in 1..=share_count as i64 {
        shares.push(Share {
            x,
            y: polynomial.evaluate_mod(x, field.modulus())?,
        });
    }

    debug!(threshold, share_count, prime, "Split secret over prime field");
    Ok(Sharing {
        polynomial,
        threshold,
        shares,
    })
}

/// Recovers the secret by interpolating the shares at zero over F_prime
pub fn reconstruct(shares: &[Share], prime: i64) -> Result<i64> {
    let points = to_points(shares)?;
    interpolate_mod(&points, 0, prime)
}

/// Splits over the integers with small coefficients, issuing `threshold + 2` shares
pub fn split_over_integers<R: Rng + ?Sized>(
    secret: i64,
    threshold: usize,
    rng: &mut R,
) -> Result<Sharing> {
    let share_count = threshold + 2;
    check_threshold(threshold, share_count)?;

    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret);
    for _ in 1..threshold {
        coefficients.push(rng.gen_range(0..INTEGER_COEFFICIENT_BOUND));
    }
    let polynomial = Polynomial::new(coefficients);

    let mut shares = Vec::with_capacity(share_count);
    for x in 1..=share_count as i64 {
        shares.push(Share {
            x,
            y: polynomial.evaluate(x)?,
        });
    }

    Ok(Sharing {
        polynomial,
        threshold,
        shares,
    })
}

/// Recovers an integer-variant secret with exact rational interpolation
pub fn reconstruct_over_integers(shares: &[Share]) -> Result<i64> {
    let points = to_points(shares)?;
    let value = interpolate(&points, 0)?;
    value.to_integer().ok_or_else(|| {
        MathError::InvalidSharing(format!("shares interpolate to non-integer {}", value))
    })
}
