// src/primality.rs

//! Probabilistic primality tests next to exact trial division.
//!
//! The panel this backs exists to show Carmichael numbers fooling the Fermat
//! test while Miller-Rabin catches them.

use crate::arith::{gcd, mod_pow, reduce};
use crate::errors::{MathError, Result};
use crate::field::is_prime;
use serde::{Deserialize, Serialize};

fn check_candidate(n: i64, a: i64) -> Result<()> {
    if n < 3 {
        return Err(MathError::InvalidInput(format!(
            "primality candidate must be at least 3, got {}",
            n
        )));
    }
    if a < 2 || a > n - 2 {
        return Err(MathError::InvalidInput(format!(
            "witness must lie in [2, {}], got {}",
            n - 2,
            a
        )));
    }
    Ok(())
}

/// Fermat test: `true` when `a^(n-1) ≡ 1 (mod n)`
///
/// A `true` result only means "probably prime".
pub fn fermat_test(n: i64, a: i64) -> Result<bool> {
    check_candidate(n, a)?;
    if gcd(a, n) != 1 {
        return Ok(false);
    }
    Ok(mod_pow(a, (n - 1) as u64, n)? == 1)
}

/// Single-witness Miller-Rabin test
///
/// # Example
/// ```
/// use cryptoplay_math::primality::{fermat_test, miller_rabin_test};
///
/// // 561 = 3 × 11 × 17 is a Carmichael number
/// assert!(fermat_test(561, 2).unwrap());
/// assert!(!miller_rabin_test(561, 2).unwrap());
/// ```
pub fn miller_rabin_test(n: i64, a: i64) -> Result<bool> {
    check_candidate(n, a)?;
    if n % 2 == 0 {
        return Ok(false);
    }

    let mut d = (n - 1) as u64;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    let mut x = mod_pow(a, d, n)?;
    if x == 1 || x == n - 1 {
        return Ok(true);
    }
    for _ in 1..s {
        x = reduce(x as i128 * x as i128, n);
        if x == n - 1 {
            return Ok(true);
        }
    }
    Ok(false)
}

/// All three verdicts for one candidate and witness
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimalityReport {
    /// Candidate
    pub n: i64,
    /// Witness base
    pub witness: i64,
    /// Fermat verdict
    pub fermat: bool,
    /// Miller-Rabin verdict
    pub miller_rabin: bool,
    /// Trial-division ground truth
    pub trial_division: bool,
}

impl PrimalityReport {
    /// True when Fermat says prime but the number is composite
    pub fn is_fermat_liar(&self) -> bool {
        self.fermat && !self.trial_division
    }
}

/// Runs every test against `n` with witness `a`
pub fn report(n: i64, a: i64) -> Result<PrimalityReport> {
    Ok(PrimalityReport {
        n,
        witness: a,
        fermat: fermat_test(n, a)?,
        miller_rabin: miller_rabin_test(n, a)?,
        trial_division: is_prime(n),
    })
}
