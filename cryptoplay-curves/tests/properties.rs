//! Property-based tests for the curve group law
//!
//! 1. **Agreement**: double-and-add matches repeated addition
//! 2. **Closure**: sums of curve points stay on the curve
//! 3. **Commutativity**: P + Q == Q + P
//! 4. **Distributivity**: (j + k)P == jP + kP

use cryptoplay_curves::{Curve, Point};
use proptest::prelude::*;

fn textbook() -> (Curve, Vec<Point>) {
    let curve = Curve::new(1, 1, 23).unwrap();
    let points = curve.points();
    (curve, points)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_scalar_mul_agrees(k in -60i64..60, idx in 0usize..27) {
        let (curve, points) = textbook();
        let p = points[idx];
        prop_assert_eq!(curve.scalar_mul(k, &p).unwrap(), curve.scalar_mul_naive(k, &p).unwrap());
    }

    #[test]
    fn prop_addition_closed_and_commutative(i in 0usize..27, j in 0usize..27) {
        let (curve, points) = textbook();
        let (p, q) = (points[i], points[j]);
        let sum = curve.add(&p, &q).unwrap();
        prop_assert!(curve.contains(&sum));
        prop_assert_eq!(sum, curve.add(&q, &p).unwrap());
    }

    #[test]
    fn prop_scalar_distributes(j in 0i64..40, k in 0i64..40, idx in 0usize..27) {
        let (curve, points) = textbook();
        let p = points[idx];
        let lhs = curve.scalar_mul(j + k, &p).unwrap();
        let rhs = curve.add(&curve.scalar_mul(j, &p).unwrap(), &curve.scalar_mul(k, &p).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }
}
