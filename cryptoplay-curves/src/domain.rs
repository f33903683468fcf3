// src/domain.rs

use crate::curve::Curve;
use crate::errors::{CurveError, Result};
use crate::point::Point;
use rand::Rng;
use serde::Serialize;

/// A curve with a chosen base point and the order of that point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DomainParams {
    curve: Curve,
    generator: Point,
    order: u64,
}

impl DomainParams {
    /// Validates `generator` and computes its order
    pub fn new(curve: Curve, generator: Point) -> Result<Self> {
        if generator.is_infinity() || !curve.contains(&generator) {
            let (x, y) = (generator.x().unwrap_or(0), generator.y().unwrap_or(0));
            return Err(CurveError::PointNotOnCurve { x, y });
        }
        let order = curve.order_of(&generator)?;
        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    /// Underlying curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Base point G
    pub fn generator(&self) -> Point {
        self.generator
    }

    /// Order n of G
    pub fn order(&self) -> u64 {
        self.order
    }

    /// `kG`
    pub fn mul_generator(&self, k: i64) -> Result<Point> {
        self.curve.scalar_mul(k, &self.generator)
    }

    /// Rejects scalars outside `[1, n-1]`
    pub fn check_scalar(&self, k: i64) -> Result<()> {
        if k < 1 || k as u64 >= self.order {
            return Err(CurveError::InvalidScalar(format!(
                "{} is outside [1, {}]",
                k,
                self.order.saturating_sub(1)
            )));
        }
        Ok(())
    }

    /// Uniform scalar in `[1, n-1]`
    pub fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64> {
        if self.order < 2 {
            return Err(CurveError::InvalidScalar("generator order is below 2".to_string()));
        }
        Ok(rng.gen_range(1..self.order) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn domain() -> DomainParams {
        DomainParams::new(Curve::new(2, 2, 17).unwrap(), Point::new(5, 1)).unwrap()
    }

    #[test]
    fn test_order_computed() {
        assert_eq!(domain().order(), 19);
        assert_eq!(domain().mul_generator(19).unwrap(), Point::Infinity);
    }

    #[test]
    fn test_bad_generator() {
        let curve = Curve::new(2, 2, 17).unwrap();
        assert!(DomainParams::new(curve, Point::Infinity).is_err());
        assert!(DomainParams::new(curve, Point::new(1, 1)).is_err());
    }

    #[test]
    fn test_scalar_range() {
        let d = domain();
        assert!(d.check_scalar(1).is_ok());
        assert!(d.check_scalar(18).is_ok());
        assert!(d.check_scalar(0).is_err());
        assert!(d.check_scalar(19).is_err());

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let k = d.random_scalar(&mut rng).unwrap();
            assert!(d.check_scalar(k).is_ok());
        }
    }
}
