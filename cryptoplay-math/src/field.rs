// src/field.rs

//! Prime fields F_p.

use crate::arith::{check_modulus, mod_inverse, pow_reduced, reduce};
use crate::errors::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Trial division primality check
///
/// Values below 2 are not prime.
///
/// # Example
/// ```
/// use cryptoplay_math::field::is_prime;
///
/// assert!(is_prime(23));
/// assert!(!is_prime(561));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let n = n as i128;
    let mut d: i128 = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// The finite field of integers modulo a prime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeField {
    p: i64,
}

impl PrimeField {
    /// Creates F_p, rejecting composite moduli
    pub fn new(p: i64) -> Result<Self> {
        check_modulus(p)?;
        if !is_prime(p) {
            return Err(MathError::NotPrime(p));
        }
        Ok(Self { p })
    }

    /// Field characteristic
    pub fn modulus(&self) -> i64 {
        self.p
    }

    /// All field elements in ascending order
    pub fn elements(&self) -> impl Iterator<Item = i64> {
        0..self.p
    }

    /// Canonical representative of `a`
    pub fn element(&self, a: i64) -> i64 {
        a.rem_euclid(self.p)
    }

    /// Field addition
    pub fn add(&self, a: i64, b: i64) -> i64 {
        reduce(a as i128 + b as i128, self.p)
    }

    /// Field subtraction
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        reduce(a as i128 - b as i128, self.p)
    }

    /// Field multiplication
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        reduce(a as i128 * b as i128, self.p)
    }

    /// Additive inverse
    pub fn neg(&self, a: i64) -> i64 {
        reduce(-(a as i128), self.p)
    }

    /// Multiplicative inverse; zero has none
    pub fn inv(&self, a: i64) -> Result<i64> {
        mod_inverse(a, self.p)
    }

    /// `a / b` in the field
    pub fn div(&self, a: i64, b: i64) -> Result<i64> {
        Ok(self.mul(a, self.inv(b)?))
    }

    /// `a^exp` in the field
    pub fn pow(&self, a: i64, exp: u64) -> i64 {
        pow_reduced(a, exp, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!is_prime(-7));
    }

    #[test]
    fn test_field_rejects_composite() {
        assert_eq!(PrimeField::new(15), Err(MathError::NotPrime(15)));
        assert_eq!(PrimeField::new(1), Err(MathError::InvalidModulus(1)));
    }

    #[test]
    fn test_field_ops() {
        let f = PrimeField::new(7).unwrap();
        assert_eq!(f.elements().count(), 7);
        assert_eq!(f.add(5, 4), 2);
        assert_eq!(f.sub(2, 5), 4);
        assert_eq!(f.mul(3, 5), 1);
        assert_eq!(f.neg(3), 4);
        assert_eq!(f.inv(3).unwrap(), 5);
        assert_eq!(f.div(1, 3).unwrap(), 5);
        assert_eq!(f.pow(3, 6), 1);
        assert!(f.inv(0).is_err());
    }

    #[test]
    fn test_every_nonzero_element_invertible() {
        let f = PrimeField::new(23).unwrap();
        for a in f.elements().skip(1) {
            let inv = f.inv(a).unwrap();
            assert_eq!(f.mul(a, inv), 1);
        }
    }
}
