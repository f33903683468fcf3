// src/polynomial.rs

//! Integer-coefficient polynomials.

use crate::arith::{check_modulus, reduce};
use crate::errors::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polynomial with coefficients stored lowest degree first
///
/// `coefficients[i]` multiplies `x^i`. Trailing zero coefficients are
/// stripped so that `degree()` is exact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<i64>,
}

impl Polynomial {
    /// Creates a polynomial from ascending coefficients
    ///
    /// # Example
    /// ```
    /// use cryptoplay_math::polynomial::Polynomial;
    ///
    /// let p = Polynomial::new(vec![3, 2, 1]);
    /// assert_eq!(p.to_string(), "x^2 + 2x + 3");
    /// assert_eq!(p.evaluate(2).unwrap(), 11);
    /// ```
    pub fn new(mut coefficients: Vec<i64>) -> Self {
        while coefficients.len() > 1 && coefficients.last() == Some(&0) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(0);
        }
        Self { coefficients }
    }

    /// Creates a polynomial from highest-degree-first coefficients
    pub fn from_descending(coefficients: &[i64]) -> Self {
        Self::new(coefficients.iter().rev().copied().collect())
    }

    /// Coefficients, lowest degree first
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Degree; the zero polynomial reports 0
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Constant term
    pub fn constant(&self) -> i64 {
        self.coefficients[0]
    }

    /// Horner evaluation over the integers
    ///
    /// # Returns
    /// `MathError::Overflow` if any intermediate leaves the `i64` range.
    pub fn evaluate(&self, x: i64) -> Result<i64> {
        let mut acc: i64 = 0;
        for &c in self.coefficients.iter().rev() {
            acc = acc
                .checked_mul(x)
                .and_then(|v| v.checked_add(c))
                .ok_or_else(|| MathError::Overflow(format!("evaluating {} at x = {}", self, x)))?;
        }
        Ok(acc)
    }

    /// Horner evaluation reduced modulo `p` at every step
    pub fn evaluate_mod(&self, x: i64, p: i64) -> Result<i64> {
        check_modulus(p)?;
        let x = x.rem_euclid(p) as i128;
        let mut acc: i128 = 0;
        for &c in self.coefficients.iter().rev() {
            acc = (acc * x + c.rem_euclid(p) as i128) % p as i128;
        }
        Ok(reduce(acc, p))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            let magnitude = c.unsigned_abs();
            if first {
                if c < 0 {
                    write!(f, "-")?;
                }
            } else if c < 0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            if magnitude != 1 || power == 0 {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
