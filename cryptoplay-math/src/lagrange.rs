// src/lagrange.rs

//! Lagrange interpolation, exactly over the rationals or over F_p.

use crate::arith::mod_inverse;
use crate::errors::{MathError, Result};
use crate::field::PrimeField;
use crate::ratio::Ratio;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One basis polynomial `L_i` evaluated at the target x
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisTerm {
    /// Product of `(x - x_j)` for `j != i`
    pub numerator: i128,
    /// Product of `(x_i - x_j)` for `j != i`
    pub denominator: i128,
    /// Rendered step line
    pub text: String,
}

fn check_points(points: &[(i64, i64)]) -> Result<()> {
    if points.is_empty() {
        return Err(MathError::NotEnoughPoints { needed: 1, got: 0 });
    }
    let mut seen = HashSet::with_capacity(points.len());
    for &(x, _) in points {
        if !seen.insert(x) {
            return Err(MathError::DuplicateX(x));
        }
    }
    Ok(())
}

fn product(mut factors: impl Iterator<Item = i128>) -> Result<i128> {
    factors.try_fold(1i128, |acc, f| {
        acc.checked_mul(f)
            .ok_or_else(|| MathError::Overflow("Lagrange basis product".to_string()))
    })
}

/// Basis terms `L_i(x)` for step display
pub fn basis_terms(points: &[(i64, i64)], x: i64) -> Result<Vec<BasisTerm>> {
    check_points(points)?;
    let mut terms = Vec::with_capacity(points.len());

    for (i, &(xi, _)) in points.iter().enumerate() {
        let others = || points.iter().enumerate().filter(move |(j, _)| *j != i).map(|(_, p)| p.0);

        let numerator = product(others().map(|xj| x as i128 - xj as i128))?;
        let denominator = product(others().map(|xj| xi as i128 - xj as i128))?;

        let num_text: Vec<String> = others().map(|xj| format!("({}-{})", x, xj)).collect();
        let den_text: Vec<String> = others().map(|xj| format!("({}-{})", xi, xj)).collect();
        let text = if num_text.is_empty() {
            format!("L_{}({}) = 1", i, x)
        } else {
            format!(
                "L_{}({}) = {} / {} = {}/{}",
                i,
                x,
                num_text.join(""),
                den_text.join(""),
                numerator,
                denominator
            )
        };

        terms.push(BasisTerm {
            numerator,
            denominator,
            text,
        });
    }
    Ok(terms)
}

/// Exact Lagrange interpolation at `x`
///
/// # Example
/// ```
/// use cryptoplay_math::lagrange::interpolate;
///
/// let value = interpolate(&[(1, 2), (2, 5), (3, 10)], 4).unwrap();
/// assert_eq!(value.to_integer(), Some(17));
/// ```
pub fn interpolate(points: &[(i64, i64)], x: i64) -> Result<Ratio> {
    let terms = basis_terms(points, x)?;
    let mut total = Ratio::ZERO;
    for (term, &(_, yi)) in terms.iter().zip(points) {
        let basis = Ratio::new(term.numerator, term.denominator)?;
        total = total.checked_add(basis.checked_mul(Ratio::from_integer(yi as i128))?)?;
    }
    debug!(points = points.len(), x, result = %total, "Interpolated over Q");
    Ok(total)
}

/// Lagrange interpolation over F_p
///
/// Coordinates are reduced modulo `p` first, so two x values congruent
/// modulo `p` count as duplicates.
pub fn interpolate_mod(points: &[(i64, i64)], x: i64, p: i64) -> Result<i64> {
    let field = PrimeField::new(p)?;
    let reduced: Vec<(i64, i64)> = points
        .iter()
        .map(|&(xi, yi)| (field.element(xi), field.element(yi)))
        .collect();
    check_points(&reduced)?;

    let x = field.element(x);
    let mut total = 0;
    for (i, &(xi, yi)) in reduced.iter().enumerate() {
        let mut numerator = 1;
        let mut denominator = 1;
        for (j, &(xj, _)) in reduced.iter().enumerate() {
            if i != j {
                numerator = field.mul(numerator, field.sub(x, xj));
                denominator = field.mul(denominator, field.sub(xi, xj));
            }
        }
        let basis = field.mul(numerator, mod_inverse(denominator, p)?);
        total = field.add(total, field.mul(yi, basis));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [(i64, i64); 3] = [(1, 2), (2, 5), (3, 10)];

    #[test]
    fn test_interpolate_known_value() {
        assert_eq!(interpolate(&POINTS, 4).unwrap(), Ratio::from_integer(17));
        assert_eq!(interpolate(&POINTS, 0).unwrap(), Ratio::from_integer(1));
    }

    #[test]
    fn test_interpolate_passes_through_points() {
        for &(x, y) in &POINTS {
            assert_eq!(interpolate(&POINTS, x).unwrap().to_integer(), Some(y));
        }
    }

    #[test]
    fn test_fractional_result() {
        // Line through (0,0) and (2,1) at x = 1
        let value = interpolate(&[(0, 0), (2, 1)], 1).unwrap();
        assert_eq!(value, Ratio::new(1, 2).unwrap());
    }

    #[test]
    fn test_duplicate_x() {
        assert_eq!(interpolate(&[(1, 2), (1, 3)], 0), Err(MathError::DuplicateX(1)));
        assert_eq!(interpolate_mod(&[(1, 2), (8, 3)], 0, 7), Err(MathError::DuplicateX(1)));
    }

    #[test]
    fn test_empty_points() {
        assert_eq!(
            interpolate(&[], 0),
            Err(MathError::NotEnoughPoints { needed: 1, got: 0 })
        );
    }

    #[test]
    fn test_basis_terms_text() {
        let terms = basis_terms(&POINTS, 4).unwrap();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].numerator, 2);
        assert_eq!(terms[0].denominator, 2);
        assert_eq!(terms[0].text, "L_0(4) = (4-2)(4-3) / (1-2)(1-3) = 2/2");
        assert_eq!(basis_terms(&[(5, 9)], 1).unwrap()[0].text, "L_0(1) = 1");
    }

    #[test]
    fn test_interpolate_mod() {
        // 17 mod 13 = 4
        assert_eq!(interpolate_mod(&POINTS, 4, 13).unwrap(), 4);
        assert!(interpolate_mod(&POINTS, 4, 12).is_err());
    }
}
