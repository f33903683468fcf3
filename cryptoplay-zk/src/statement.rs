// src/statement.rs

//! Discrete-log statements: "I know x such that h = gˣ mod p".

use crate::errors::{Result, ZkError};
use cryptoplay_math::{arith, group, is_prime};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Public statement `h = gˣ mod p`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlogStatement {
    /// Base
    pub g: i64,
    /// Prime modulus
    pub p: i64,
    /// Public value
    pub h: i64,
}

fn check_group(g: i64, p: i64) -> Result<()> {
    if p < 3 || !is_prime(p) {
        return Err(ZkError::InvalidStatement(format!(
            "modulus {} must be an odd prime",
            p
        )));
    }
    if g <= 1 || g >= p {
        return Err(ZkError::InvalidStatement(format!(
            "base {} must lie in (1, {})",
            g, p
        )));
    }
    Ok(())
}

impl DlogStatement {
    /// Statement for an explicit public value
    pub fn new(g: i64, p: i64, h: i64) -> Result<Self> {
        check_group(g, p)?;
        if h < 1 || h >= p {
            return Err(ZkError::InvalidStatement(format!(
                "public value {} must lie in [1, {})",
                h, p
            )));
        }
        Ok(Self { g, p, h })
    }

    /// Statement whose witness is `secret`
    ///
    /// # Example
    /// ```
    /// use cryptoplay_zk::DlogStatement;
    ///
    /// let statement = DlogStatement::from_secret(3, 23, 7).unwrap();
    /// assert_eq!(statement.h, 2);
    /// ```
    pub fn from_secret(g: i64, p: i64, secret: i64) -> Result<Self> {
        check_group(g, p)?;
        if secret < 0 {
            return Err(ZkError::InvalidInput(format!(
                "secret exponent {} must be non-negative",
                secret
            )));
        }
        let h = arith::mod_pow(g, secret as u64, p)?;
        Ok(Self { g, p, h })
    }

    /// Exponents are taken mod `p - 1`
    pub fn exponent_modulus(&self) -> i64 {
        self.p - 1
    }

    /// Order of `g` in Z_p*
    pub fn generator_order(&self) -> Result<i64> {
        let order = group::multiplicative_order(self.g, self.p)?.ok_or_else(|| {
            ZkError::InvalidStatement(format!("{} has no order modulo {}", self.g, self.p))
        })?;
        if order < 3 {
            warn!(g = self.g, order, "Base generates a tiny subgroup");
        }
        Ok(order as i64)
    }

    /// Checks `gˣ ≡ h`
    pub fn is_witness(&self, secret: i64) -> Result<bool> {
        let reduced = secret.rem_euclid(self.exponent_modulus());
        Ok(arith::mod_pow(self.g, reduced as u64, self.p)? == self.h)
    }

    /// Fiat-Shamir hash input for commitment `a`
    pub fn challenge_input(&self, commitment: i64) -> String {
        format!("g={},h={},a={},p={}", self.g, self.h, commitment, self.p)
    }
}

impl fmt::Display for DlogStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}^x mod {}", self.h, self.g, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_secret() {
        let statement = DlogStatement::from_secret(3, 23, 7).unwrap();
        assert_eq!(statement, DlogStatement { g: 3, p: 23, h: 2 });
        assert!(statement.is_witness(7).unwrap());
        assert!(statement.is_witness(7 + 22).unwrap());
        assert!(!statement.is_witness(8).unwrap());
        assert_eq!(statement.to_string(), "2 = 3^x mod 23");
    }

    #[test]
    fn test_validation() {
        assert!(DlogStatement::new(3, 21, 2).is_err());
        assert!(DlogStatement::new(1, 23, 2).is_err());
        assert!(DlogStatement::new(3, 23, 0).is_err());
        assert!(DlogStatement::new(3, 23, 23).is_err());
        assert!(DlogStatement::from_secret(3, 23, -1).is_err());
    }

    #[test]
    fn test_generator_order() {
        assert_eq!(DlogStatement::from_secret(3, 23, 7).unwrap().generator_order().unwrap(), 11);
        assert_eq!(DlogStatement::from_secret(5, 23, 7).unwrap().generator_order().unwrap(), 22);
    }

    #[test]
    fn test_challenge_input() {
        let statement = DlogStatement::from_secret(3, 23, 7).unwrap();
        assert_eq!(statement.challenge_input(13), "g=3,h=2,a=13,p=23");
    }
}
