// src/ratio.rs

//! Exact rationals for interpolation over the integers.

use crate::errors::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

fn gcd_wide(a: i128, b: i128) -> i128 {
    let (mut x, mut y) = (a.abs(), b.abs());
    while y != 0 {
        let t = y;
        y = x % y;
        x = t;
    }
    x
}

fn overflow(op: &str) -> MathError {
    MathError::Overflow(format!("rational {} left the i128 range", op))
}

/// A reduced fraction with a positive denominator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ratio {
    numer: i128,
    denom: i128,
}

impl Ratio {
    /// Zero
    pub const ZERO: Ratio = Ratio { numer: 0, denom: 1 };

    /// One
    pub const ONE: Ratio = Ratio { numer: 1, denom: 1 };

    /// Builds `numer / denom` in lowest terms
    ///
    /// # Example
    /// ```
    /// use cryptoplay_math::ratio::Ratio;
    ///
    /// let r = Ratio::new(6, -4).unwrap();
    /// assert_eq!((r.numer(), r.denom()), (-3, 2));
    /// ```
    pub fn new(numer: i128, denom: i128) -> Result<Self> {
        if denom == 0 {
            return Err(MathError::InvalidInput("zero denominator".to_string()));
        }
        let g = gcd_wide(numer, denom).max(1);
        let sign = if denom < 0 { -1 } else { 1 };
        Ok(Self {
            numer: sign * numer / g,
            denom: sign * denom / g,
        })
    }

    /// Whole number `n / 1`
    pub fn from_integer(n: i128) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// Numerator in lowest terms
    pub fn numer(&self) -> i128 {
        self.numer
    }

    /// Denominator in lowest terms, always positive
    pub fn denom(&self) -> i128 {
        self.denom
    }

    /// True when the denominator is 1
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// The value as an `i64`, if it is a whole number that fits
    pub fn to_integer(&self) -> Option<i64> {
        if self.is_integer() {
            i64::try_from(self.numer).ok()
        } else {
            None
        }
    }

    /// Lossy floating-point view, for display only
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Exact sum
    pub fn checked_add(self, other: Ratio) -> Result<Ratio> {
        let numer = self
            .numer
            .checked_mul(other.denom)
            .and_then(|a| other.numer.checked_mul(self.denom).and_then(|b| a.checked_add(b)))
            .ok_or_else(|| overflow("addition"))?;
        let denom = self
            .denom
            .checked_mul(other.denom)
            .ok_or_else(|| overflow("addition"))?;
        Ratio::new(numer, denom)
    }

    /// Exact product
    pub fn checked_mul(self, other: Ratio) -> Result<Ratio> {
        // Cross-reduce first to keep intermediates small
        let g1 = gcd_wide(self.numer, other.denom).max(1);
        let g2 = gcd_wide(other.numer, self.denom).max(1);
        let numer = (self.numer / g1)
            .checked_mul(other.numer / g2)
            .ok_or_else(|| overflow("multiplication"))?;
        let denom = (self.denom / g2)
            .checked_mul(other.denom / g1)
            .ok_or_else(|| overflow("multiplication"))?;
        Ratio::new(numer, denom)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_and_sign() {
        let r = Ratio::new(10, -4).unwrap();
        assert_eq!(r.numer(), -5);
        assert_eq!(r.denom(), 2);
        assert_eq!(r.to_string(), "-5/2");
        assert_eq!(Ratio::new(0, -9).unwrap(), Ratio::ZERO);
    }

    #[test]
    fn test_zero_denominator() {
        assert!(Ratio::new(1, 0).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let half = Ratio::new(1, 2).unwrap();
        let third = Ratio::new(1, 3).unwrap();
        assert_eq!(half.checked_add(third).unwrap(), Ratio::new(5, 6).unwrap());
        assert_eq!(half.checked_mul(third).unwrap(), Ratio::new(1, 6).unwrap());
        assert_eq!(
            Ratio::new(2, 3).unwrap().checked_mul(Ratio::new(3, 2).unwrap()).unwrap(),
            Ratio::ONE
        );
    }

    #[test]
    fn test_integer_views() {
        assert_eq!(Ratio::from_integer(17).to_integer(), Some(17));
        assert_eq!(Ratio::new(7, 2).unwrap().to_integer(), None);
        assert!((Ratio::new(7, 2).unwrap().to_f64() - 3.5).abs() < f64::EPSILON);
        assert_eq!(Ratio::from_integer(17).to_string(), "17");
    }

    #[test]
    fn test_overflow_detected() {
        let big = Ratio::from_integer(i128::MAX);
        assert!(matches!(big.checked_add(Ratio::ONE), Err(MathError::Overflow(_))));
    }
}
