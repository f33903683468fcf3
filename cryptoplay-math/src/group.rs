// src/group.rs

//! The multiplicative group of units Z_n*.

use crate::arith::{check_modulus, gcd, reduce};
use crate::errors::Result;
use tracing::debug;

/// Elements of Z_n* (residues coprime to n), ascending
pub fn units(n: i64) -> Result<Vec<i64>> {
    check_modulus(n)?;
    Ok((1..n).filter(|&a| gcd(a, n) == 1).collect())
}

/// Euler's totient via prime factorisation
///
/// # Example
/// ```
/// use cryptoplay_math::group::euler_phi;
///
/// assert_eq!(euler_phi(12).unwrap(), 4);
/// assert_eq!(euler_phi(23).unwrap(), 22);
/// ```
pub fn euler_phi(n: i64) -> Result<i64> {
    check_modulus(n)?;
    let mut remaining = n;
    let mut result = n;
    let mut factor = 2i64;

    while (factor as i128) * (factor as i128) <= remaining as i128 {
        if remaining % factor == 0 {
            while remaining % factor == 0 {
                remaining /= factor;
            }
            result -= result / factor;
        }
        factor += 1;
    }
    if remaining > 1 {
        result -= result / remaining;
    }
    Ok(result)
}

/// Smallest k ≥ 1 with a^k ≡ 1 (mod n)
///
/// # Returns
/// `None` when `a` is not a unit modulo `n`.
pub fn multiplicative_order(a: i64, n: i64) -> Result<Option<u64>> {
    check_modulus(n)?;
    let a = a.rem_euclid(n);
    if gcd(a, n) != 1 {
        return Ok(None);
    }

    let mut value = a;
    let mut k = 1u64;
    while value != 1 {
        value = reduce(value as i128 * a as i128, n);
        k += 1;
    }
    Ok(Some(k))
}

/// Units whose order equals φ(n)
///
/// Empty when Z_n* is not cyclic.
pub fn generators(n: i64) -> Result<Vec<i64>> {
    let phi = euler_phi(n)? as u64;
    let mut found = Vec::new();
    for a in units(n)? {
        if multiplicative_order(a, n)? == Some(phi) {
            found.push(a);
        }
    }
    debug!(n, phi, count = found.len(), "Enumerated generators");
    Ok(found)
}
