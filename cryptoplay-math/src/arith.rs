// src/arith.rs

//! Modular arithmetic primitives.
//!
//! Everything here works on `i64` inputs and widens to `i128` for products,
//! so toy parameters can never overflow. Results are always the least
//! non-negative residue.

use crate::errors::{MathError, Result};
use serde::{Deserialize, Serialize};

/// A computed value together with the human-readable steps that produced it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traced<T> {
    /// Final value
    pub value: T,

    /// One line per intermediate step, in order
    pub steps: Vec<String>,
}

impl<T> Traced<T> {
    /// Wraps a value with its step log
    pub fn new(value: T, steps: Vec<String>) -> Self {
        Self { value, steps }
    }
}

/// Rejects moduli that cannot define a residue ring
pub(crate) fn check_modulus(m: i64) -> Result<()> {
    if m < 2 {
        return Err(MathError::InvalidModulus(m));
    }
    Ok(())
}

/// Reduces a wide intermediate into `[0, m)`
#[inline]
pub(crate) fn reduce(value: i128, m: i64) -> i64 {
    value.rem_euclid(m as i128) as i64
}

/// Least non-negative residue of `a` modulo `m`
///
/// # Example
/// ```
/// use cryptoplay_math::arith::modulo;
///
/// assert_eq!(modulo(-3, 7).unwrap(), 4);
/// ```
pub fn modulo(a: i64, m: i64) -> Result<i64> {
    check_modulus(m)?;
    Ok(a.rem_euclid(m))
}

/// `(a + b) mod m`
pub fn mod_add(a: i64, b: i64, m: i64) -> Result<i64> {
    check_modulus(m)?;
    Ok(reduce(a as i128 + b as i128, m))
}

/// `(a - b) mod m`, never negative
pub fn mod_sub(a: i64, b: i64, m: i64) -> Result<i64> {
    check_modulus(m)?;
    Ok(reduce(a as i128 - b as i128, m))
}

/// `(a * b) mod m`
pub fn mod_mul(a: i64, b: i64, m: i64) -> Result<i64> {
    check_modulus(m)?;
    Ok(reduce(a as i128 * b as i128, m))
}

/// Modular exponentiation by repeated squaring
///
/// Runs in `O(log exp)` multiplications. `mod_pow(g, 0, p)` is 1 for every
/// valid modulus.
///
/// # Example
/// ```
/// use cryptoplay_math::arith::mod_pow;
///
/// assert_eq!(mod_pow(4, 13, 497).unwrap(), 445);
/// ```
pub fn mod_pow(base: i64, exp: u64, m: i64) -> Result<i64> {
    check_modulus(m)?;
    Ok(pow_reduced(base, exp, m))
}

/// Square-and-multiply for a modulus already known to be valid
pub(crate) fn pow_reduced(base: i64, exp: u64, m: i64) -> i64 {
    let modulus = m as i128;
    let mut result: i128 = 1;
    let mut current = (base as i128).rem_euclid(modulus);
    let mut remaining = exp;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result * current % modulus;
        }
        current = current * current % modulus;
        remaining >>= 1;
    }

    result as i64
}

/// Modular exponentiation that records every multiply and squaring
pub fn mod_pow_traced(base: i64, exp: u64, m: i64) -> Result<Traced<i64>> {
    check_modulus(m)?;
    let mut steps = vec![format!(
        "Computing {}^{} mod {} using repeated squaring:",
        base, exp, m
    )];

    if exp == 0 {
        steps.push(format!("{}^0 = 1", base));
        return Ok(Traced::new(1, steps));
    }

    let modulus = m as i128;
    let mut result: i128 = 1;
    let mut current = (base as i128).rem_euclid(modulus);
    let mut remaining = exp;

    steps.push(format!("Initial: base = {}, exp = {}", current, remaining));

    while remaining > 0 {
        if remaining & 1 == 1 {
            let previous = result;
            result = result * current % modulus;
            steps.push(format!(
                "Exp is odd: result = ({} × {}) mod {} = {}",
                previous, current, m, result
            ));
        }
        let previous = current;
        current = current * current % modulus;
        remaining >>= 1;

        if remaining > 0 {
            steps.push(format!(
                "Square base: {}² mod {} = {}, exp = {}",
                previous, m, current, remaining
            ));
        }
    }

    steps.push(format!("Final result: {}", result));
    Ok(Traced::new(result as i64, steps))
}

/// Greatest common divisor
///
/// `gcd(0, 0)` is 0. Unsigned so that `gcd(i64::MIN, 0) = 2⁶³` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let t = y;
        y = x % y;
        x = t;
    }
    x
}

fn extended_gcd_inner(a: i64, b: i64, mut steps: Option<&mut Vec<String>>) -> (u64, i64, i64) {
    let (mut old_r, mut r) = (a as i128, b as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    let (mut old_t, mut t) = (0i128, 1i128);

    if let Some(log) = steps.as_deref_mut() {
        log.push(format!(
            "Initial: r₀={}, r₁={}, s₀={}, s₁={}, t₀={}, t₁={}",
            old_r, r, old_s, s, old_t, t
        ));
    }

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);

        if let Some(log) = steps.as_deref_mut() {
            log.push(format!("q={}: r={}, s={}, t={}", quotient, r, old_s, old_t));
        }
    }

    // Normalise so the gcd is non-negative
    if old_r < 0 {
        old_r = -old_r;
        old_s = -old_s;
        old_t = -old_t;
    }

    // |s| ≤ |b| / g and |t| ≤ |a| / g, so both fit back into i64
    (old_r as u64, old_s as i64, old_t as i64)
}

/// Extended Euclidean algorithm
///
/// Returns `(g, s, t)` with `a*s + b*t == g` and `g == gcd(a, b)`.
///
/// # Example
/// ```
/// use cryptoplay_math::arith::extended_gcd;
///
/// let (g, s, t) = extended_gcd(240, 46);
/// assert_eq!((g, s, t), (2, -9, 47));
/// ```
pub fn extended_gcd(a: i64, b: i64) -> (u64, i64, i64) {
    extended_gcd_inner(a, b, None)
}

/// Extended Euclidean algorithm with a step log of every quotient
pub fn extended_gcd_traced(a: i64, b: i64) -> Traced<(u64, i64, i64)> {
    let mut steps = vec![format!("Extended Euclidean Algorithm for gcd({}, {}):", a, b)];
    let (g, s, t) = extended_gcd_inner(a, b, Some(&mut steps));
    steps.push(format!("gcd({}, {}) = {}", a, b, g));
    steps.push(format!("{} × {} + {} × {} = {}", a, s, b, t, g));
    Traced::new((g, s, t), steps)
}

/// Modular inverse via the extended Euclidean algorithm
///
/// # Returns
/// The unique `x` in `[1, m)` with `a*x ≡ 1 (mod m)`, or
/// `MathError::NoInverse` when `gcd(a, m) != 1`.
///
/// # Example
/// ```
/// use cryptoplay_math::arith::mod_inverse;
///
/// assert_eq!(mod_inverse(17, 3120).unwrap(), 2753);
/// assert!(mod_inverse(6, 9).is_err());
/// ```
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    check_modulus(m)?;
    let reduced = a.rem_euclid(m);
    let (g, s, _) = extended_gcd(reduced, m);
    if g != 1 {
        return Err(MathError::NoInverse { value: a, modulus: m });
    }
    Ok(s.rem_euclid(m))
}

/// One of the operations offered by the modular arithmetic panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModOp {
    /// `a + b mod m`
    Add,
    /// `a - b mod m`
    Sub,
    /// `a × b mod m`
    Mul,
    /// `a ^ exp mod m` (the second operand is ignored)
    Pow(u64),
}

impl ModOp {
    /// Applies the operation and explains each step
    ///
    /// # Example
    /// ```
    /// use cryptoplay_math::arith::ModOp;
    ///
    /// let traced = ModOp::Add.apply(17, 8, 23).unwrap();
    /// assert_eq!(traced.value, 2);
    /// assert_eq!(traced.steps, vec!["17 + 8 = 25", "25 mod 23 = 2"]);
    /// ```
    pub fn apply(self, a: i64, b: i64, m: i64) -> Result<Traced<i64>> {
        let (wide_a, wide_b) = (a as i128, b as i128);
        match self {
            ModOp::Add => {
                let value = mod_add(a, b, m)?;
                Ok(Traced::new(value, vec![
                    format!("{} + {} = {}", a, b, wide_a + wide_b),
                    format!("{} mod {} = {}", wide_a + wide_b, m, value),
                ]))
            }
            ModOp::Sub => {
                let value = mod_sub(a, b, m)?;
                Ok(Traced::new(value, vec![
                    format!("{} - {} = {}", a, b, wide_a - wide_b),
                    format!("{} mod {} = {}", wide_a - wide_b, m, value),
                ]))
            }
            ModOp::Mul => {
                let value = mod_mul(a, b, m)?;
                Ok(Traced::new(value, vec![
                    format!("{} × {} = {}", a, b, wide_a * wide_b),
                    format!("{} mod {} = {}", wide_a * wide_b, m, value),
                ]))
            }
            ModOp::Pow(exp) => mod_pow_traced(a, exp, m),
        }
    }
}
