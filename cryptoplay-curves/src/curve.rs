// src/curve.rs

//! Short-Weierstrass curves `y² = x³ + ax + b` over F_p.
//!
//! Every slope is computed by multiplying with a modular inverse, so the
//! group law is exact for any valid curve.

use crate::errors::{CurveError, Result};
use crate::point::Point;
use cryptoplay_math::{MathError, PrimeField, Traced};
use serde::Serialize;
use tracing::debug;

/// A non-singular curve over a prime field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Curve {
    a: i64,
    b: i64,
    field: PrimeField,
}

impl Curve {
    /// Creates `y² = x³ + ax + b (mod p)`
    ///
    /// # Returns
    /// `CurveError::SingularCurve` when `4a³ + 27b² ≡ 0 (mod p)`, or a math
    /// error when `p` is not prime.
    ///
    /// # Example
    /// ```
    /// use cryptoplay_curves::{Curve, CurveError};
    ///
    /// assert!(Curve::new(2, 2, 17).is_ok());
    /// assert!(matches!(Curve::new(-1, 1, 23), Err(CurveError::SingularCurve { .. })));
    /// ```
    pub fn new(a: i64, b: i64, p: i64) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let a3 = field.pow(a, 3);
        let b2 = field.pow(b, 2);
        let disc = field.add(field.mul(4, a3), field.mul(27, b2));
        if disc == 0 {
            return Err(CurveError::SingularCurve { a, b, p });
        }
        Ok(Self { a, b, field })
    }

    /// Linear coefficient as given
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Constant coefficient as given
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Field modulus
    pub fn p(&self) -> i64 {
        self.field.modulus()
    }

    /// Integer discriminant `-16(4a³ + 27b²)`
    ///
    /// Computed over the integers, so coefficients near the i64 limits
    /// overflow i128 and yield `MathError::Overflow`.
    pub fn discriminant(&self) -> Result<i128> {
        let (a, b) = (self.a as i128, self.b as i128);
        a.checked_mul(a)
            .and_then(|a2| a2.checked_mul(a))
            .and_then(|a3| a3.checked_mul(4))
            .zip(b.checked_mul(b).and_then(|b2| b2.checked_mul(27)))
            .and_then(|(x, y)| x.checked_add(y))
            .and_then(|sum| sum.checked_mul(-16))
            .ok_or_else(|| {
                MathError::Overflow(format!("discriminant of a = {}, b = {}", self.a, self.b))
                    .into()
            })
    }

    /// `x³ + ax + b mod p`
    fn rhs(&self, x: i64) -> i64 {
        let f = &self.field;
        f.add(f.add(f.pow(x, 3), f.mul(self.a, x)), self.b)
    }

    /// True for ∞ and for reduced points satisfying the equation
    pub fn contains(&self, point: &Point) -> bool {
        match *point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let range = 0..self.p();
                range.contains(&x) && range.contains(&y) && self.field.mul(y, y) == self.rhs(x)
            }
        }
    }

    /// Validated point constructor; coordinates are reduced first
    pub fn point(&self, x: i64, y: i64) -> Result<Point> {
        let point = Point::new(self.field.element(x), self.field.element(y));
        self.ensure_on_curve(&point)?;
        Ok(point)
    }

    fn ensure_on_curve(&self, point: &Point) -> Result<()> {
        match *point {
            Point::Affine { x, y } if !self.contains(point) => {
                Err(CurveError::PointNotOnCurve { x, y })
            }
            _ => Ok(()),
        }
    }

    /// All affine points, ordered by x then y
    pub fn points(&self) -> Vec<Point> {
        let mut found = Vec::new();
        for x in self.field.elements() {
            let rhs = self.rhs(x);
            for y in self.field.elements() {
                if self.field.mul(y, y) == rhs {
                    found.push(Point::new(x, y));
                }
            }
        }
        found
    }

    /// Number of points including ∞
    pub fn group_order(&self) -> u64 {
        self.points().len() as u64 + 1
    }

    /// `-P`
    pub fn negate(&self, point: &Point) -> Result<Point> {
        self.ensure_on_curve(point)?;
        Ok(match *point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(x, self.field.neg(y)),
        })
    }

    /// `P + Q`
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        self.add_inner(p, q, None)
    }

    /// `2P`
    pub fn double(&self, p: &Point) -> Result<Point> {
        self.add_inner(p, p, None)
    }

    /// `P + Q` with the slope and coordinate computations spelled out
    pub fn add_traced(&self, p: &Point, q: &Point) -> Result<Traced<Point>> {
        let mut steps = vec![format!("Adding {} + {}:", p, q)];
        let sum = self.add_inner(p, q, Some(&mut steps))?;
        steps.push(format!("Result: {}", sum));
        Ok(Traced::new(sum, steps))
    }

    fn add_inner(&self, p: &Point, q: &Point, mut steps: Option<&mut Vec<String>>) -> Result<Point> {
        self.ensure_on_curve(p)?;
        self.ensure_on_curve(q)?;
        let f = &self.field;
        let m = self.p();

        let (x1, y1, x2, y2) = match (*p, *q) {
            (Point::Infinity, other) | (other, Point::Infinity) => {
                if let Some(log) = steps.as_deref_mut() {
                    log.push("One operand is ∞, the identity".to_string());
                }
                return Ok(other);
            }
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        let lambda = if x1 == x2 {
            if f.add(y1, y2) == 0 {
                if let Some(log) = steps.as_deref_mut() {
                    if y1 == 0 {
                        log.push("y₁ = 0, the tangent is vertical: 2P = ∞".to_string());
                    } else {
                        log.push("Q = -P, so P + Q = ∞".to_string());
                    }
                }
                return Ok(Point::Infinity);
            }
            let numer = f.add(f.mul(3, f.mul(x1, x1)), self.a);
            let denom = f.mul(2, y1);
            let inv = f.inv(denom)?;
            let lambda = f.mul(numer, inv);
            if let Some(log) = steps.as_deref_mut() {
                log.push(format!(
                    "λ = (3x₁² + a) / (2y₁) = {} × {}⁻¹ = {} × {} mod {} = {}",
                    numer, denom, numer, inv, m, lambda
                ));
            }
            lambda
        } else {
            let numer = f.sub(y2, y1);
            let denom = f.sub(x2, x1);
            let inv = f.inv(denom)?;
            let lambda = f.mul(numer, inv);
            if let Some(log) = steps.as_deref_mut() {
                log.push(format!(
                    "λ = (y₂ - y₁) / (x₂ - x₁) = {} × {}⁻¹ = {} × {} mod {} = {}",
                    numer, denom, numer, inv, m, lambda
                ));
            }
            lambda
        };

        let x3 = f.sub(f.sub(f.mul(lambda, lambda), x1), x2);
        let y3 = f.sub(f.mul(lambda, f.sub(x1, x3)), y1);

        if let Some(log) = steps.as_deref_mut() {
            log.push(format!(
                "x₃ = λ² - x₁ - x₂ = {}² - {} - {} mod {} = {}",
                lambda, x1, x2, m, x3
            ));
            log.push(format!(
                "y₃ = λ(x₁ - x₃) - y₁ = {} × ({} - {}) - {} mod {} = {}",
                lambda, x1, x3, y1, m, y3
            ));
        }

        Ok(Point::new(x3, y3))
    }

    /// `kP` by repeated addition
    ///
    /// Takes `|k|` additions. Kept beside [`Curve::scalar_mul`] to show what
    /// double-and-add saves; only usable for tiny scalars.
    pub fn scalar_mul_naive(&self, k: i64, point: &Point) -> Result<Point> {
        let base = if k < 0 { self.negate(point)? } else { *point };
        self.ensure_on_curve(&base)?;
        let mut acc = Point::Infinity;
        for _ in 0..k.unsigned_abs() {
            acc = self.add(&acc, &base)?;
        }
        Ok(acc)
    }

    /// `kP` by double-and-add in `O(log |k|)` group operations
    ///
    /// # Example
    /// ```
    /// use cryptoplay_curves::{Curve, Point};
    ///
    /// let curve = Curve::new(2, 2, 17).unwrap();
    /// let g = Point::new(5, 1);
    /// assert_eq!(curve.scalar_mul(7, &g).unwrap(), Point::new(0, 6));
    /// assert_eq!(curve.scalar_mul(19, &g).unwrap(), Point::Infinity);
    /// ```
    pub fn scalar_mul(&self, k: i64, point: &Point) -> Result<Point> {
        let mut addend = if k < 0 { self.negate(point)? } else { *point };
        self.ensure_on_curve(&addend)?;
        let mut remaining = k.unsigned_abs();
        let mut acc = Point::Infinity;

        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = self.add(&acc, &addend)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                addend = self.double(&addend)?;
            }
        }
        Ok(acc)
    }

    /// Smallest `n ≥ 1` with `nP = ∞`
    pub fn order_of(&self, point: &Point) -> Result<u64> {
        self.ensure_on_curve(point)?;
        let mut acc = *point;
        let mut n = 1u64;
        while !acc.is_infinity() {
            acc = self.add(&acc, point)?;
            n += 1;
        }
        debug!(point = %point, order = n, "Computed point order");
        Ok(n)
    }
}
