// src/point.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on a short-Weierstrass curve, or the point at infinity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// Group identity
    Infinity,
    /// Finite point with reduced coordinates
    Affine {
        /// x coordinate in `[0, p)`
        x: i64,
        /// y coordinate in `[0, p)`
        y: i64,
    },
}

impl Point {
    /// Shorthand for `Point::Affine { x, y }`
    pub const fn new(x: i64, y: i64) -> Self {
        Point::Affine { x, y }
    }

    /// True for the identity
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x coordinate, if finite
    pub fn x(&self) -> Option<i64> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(*x),
        }
    }

    /// y coordinate, if finite
    pub fn y(&self) -> Option<i64> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(*y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "∞"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
