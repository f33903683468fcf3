// tests/integration.rs

//! Integration tests for the number-theory kernels.
//!
//! Walks the same flows the arithmetic panels do:
//! - Modular arithmetic with step traces
//! - Field and group structure for a small prime
//! - Lagrange interpolation feeding Shamir reconstruction

use cryptoplay_math::*;
use cryptoplay_math::{arith, group, lagrange, primality, shamir};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_modular_arithmetic_panel_flow() {
    let add = ModOp::Add.apply(17, 8, DEFAULT_MODULUS).unwrap();
    assert_eq!(add.value, 2);

    let pow = ModOp::Pow(13).apply(4, 0, 497).unwrap();
    assert_eq!(pow.value, 445);
    assert_eq!(pow.steps.last().unwrap(), "Final result: 445");

    let (g, s, t) = arith::extended_gcd(17, 3120);
    assert_eq!((g, s, t), (1, -367, 2));
    assert_eq!(arith::mod_inverse(17, 3120).unwrap(), 2753);
}

#[test]
fn test_field_and_group_agree() {
    let field = PrimeField::new(DEFAULT_MODULUS).unwrap();
    let phi = group::euler_phi(DEFAULT_MODULUS).unwrap();
    assert_eq!(phi, DEFAULT_MODULUS - 1);

    for g in group::generators(DEFAULT_MODULUS).unwrap() {
        // A generator reaches every unit
        let mut seen: Vec<i64> = (0..phi as u64).map(|k| field.pow(g, k)).collect();
        seen.sort_unstable();
        assert_eq!(seen, group::units(DEFAULT_MODULUS).unwrap());
    }
}

#[test]
fn test_primality_panel() {
    let report = primality::report(CARMICHAEL_561, 2).unwrap();
    assert!(report.fermat);
    assert!(!report.miller_rabin);
    assert!(!report.trial_division);
}

#[test]
fn test_lagrange_then_shamir() {
    let value = lagrange::interpolate(&[(1, 2), (2, 5), (3, 10)], 4).unwrap();
    assert_eq!(value, Ratio::from_integer(17));

    let mut rng = StdRng::seed_from_u64(2024);
    let sharing = shamir::split(42, 3, 5, DEFAULT_SHAMIR_PRIME, &mut rng).unwrap();
    let picked = [sharing.shares[4], sharing.shares[0], sharing.shares[2]];
    assert_eq!(shamir::reconstruct(&picked, DEFAULT_SHAMIR_PRIME).unwrap(), 42);

    // Each share lies on the dealer polynomial
    for share in &sharing.shares {
        assert_eq!(
            sharing.polynomial.evaluate_mod(share.x, DEFAULT_SHAMIR_PRIME).unwrap(),
            share.y
        );
    }
}
