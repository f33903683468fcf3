// src/panels/math.rs

use super::{join, yes_no};
use crate::config::{MathConfig, ShamirConfig};
use crate::errors::Result;
use crate::report::Report;
use cryptoplay_math::{arith, group, lagrange, primality, shamir, MathError, ModOp, PrimeField};
use rand::Rng;

/// Operation tables are only printed for fields this small
const MAX_TABLE_PRIME: i64 = 13;

/// `a + b`, `a - b`, `a·b`, `aᵉ`, gcd and inverse
pub fn modular(config: &MathConfig) -> Result<Report> {
    let (a, b, m) = (config.a, config.b, config.modulus);
    let add = ModOp::Add.apply(a, b, m)?;
    let sub = ModOp::Sub.apply(a, b, m)?;
    let mul = ModOp::Mul.apply(a, b, m)?;
    let pow = ModOp::Pow(config.exponent).apply(a, 0, m)?;
    let egcd = arith::extended_gcd_traced(config.gcd_a, config.gcd_b);
    let (g, s, t) = egcd.value;

    let inverse = match arith::mod_inverse(a, m) {
        Ok(inv) => inv.to_string(),
        Err(MathError::NoInverse { .. }) => format!("none (gcd({}, {}) = {})", a, m, arith::gcd(a, m)),
        Err(e) => return Err(e.into()),
    };

    Ok(Report::new("Modular Arithmetic")
        .entry(format!("{} + {} mod {}", a, b, m), add.value)
        .entry(format!("{} - {} mod {}", a, b, m), sub.value)
        .entry(format!("{} × {} mod {}", a, b, m), mul.value)
        .entry(format!("{}^{} mod {}", a, config.exponent, m), pow.value)
        .entry(format!("gcd({}, {})", config.gcd_a, config.gcd_b), g)
        .entry("Bézout coefficients", format!("s = {}, t = {}", s, t))
        .entry(format!("{}⁻¹ mod {}", a, m), inverse)
        .steps(pow.steps)
        .steps(egcd.steps))
}

fn table(field: &PrimeField, symbol: char, op: impl Fn(i64, i64) -> i64) -> Vec<String> {
    let cell = |v: i64| format!("{:>3}", v);
    let header: String = field.elements().map(cell).collect();
    let mut lines = vec![format!("{:>3} |{}", symbol, header)];
    for a in field.elements() {
        let row: String = field.elements().map(|b| cell(op(a, b))).collect();
        lines.push(format!("{:>3} |{}", a, row));
    }
    lines
}

/// Field operations in F_p and the structure of (Z/nZ)*
pub fn field(config: &MathConfig) -> Result<Report> {
    let field = PrimeField::new(config.field_prime)?;
    let p = field.modulus();
    let (a, b) = (field.element(config.field_a), field.element(config.field_b));
    let show = |r: std::result::Result<i64, MathError>| r.map_or_else(|e| e.to_string(), |v| v.to_string());

    let n = config.group_modulus;
    let units = group::units(n)?;
    let generators = group::generators(n)?;
    let mut orders = Vec::with_capacity(units.len());
    for &u in &units {
        let order = group::multiplicative_order(u, n)?
            .map_or_else(|| "undefined".to_string(), |k| k.to_string());
        orders.push(format!("ord({}) = {}", u, order));
    }

    let mut report = Report::new(format!("Finite Field F_{}", p))
        .entry(format!("{} + {}", a, b), field.add(a, b))
        .entry(format!("{} - {}", a, b), field.sub(a, b))
        .entry(format!("{} × {}", a, b), field.mul(a, b))
        .entry(format!("{}⁻¹", a), show(field.inv(a)))
        .entry(format!("{}⁻¹", b), show(field.inv(b)))
        .entry(format!("{} / {}", a, b), show(field.div(a, b)))
        .entry(format!("Units of Z/{}Z", n), join(&units))
        .entry(format!("φ({})", n), group::euler_phi(n)?)
        .entry(
            "Generators",
            if generators.is_empty() {
                "none (group is not cyclic)".to_string()
            } else {
                join(&generators)
            },
        );

    if p <= MAX_TABLE_PRIME {
        report = report
            .steps(table(&field, '+', |x, y| field.add(x, y)))
            .steps(table(&field, '×', |x, y| field.mul(x, y)));
    }
    Ok(report.steps(orders))
}

fn verdict(probably_prime: bool) -> &'static str {
    if probably_prime {
        "probably prime"
    } else {
        "composite"
    }
}

/// Fermat and Miller-Rabin against trial division
pub fn primality(config: &MathConfig) -> Result<Report> {
    let r = primality::report(config.primality_candidate, config.primality_witness)?;
    Ok(Report::new("Primality Testing")
        .entry("Candidate", r.n)
        .entry("Witness", r.witness)
        .entry("Fermat", verdict(r.fermat))
        .entry("Miller-Rabin", verdict(r.miller_rabin))
        .entry("Trial division", if r.trial_division { "prime" } else { "composite" })
        .entry("Fermat liar", yes_no(r.is_fermat_liar())))
}

/// Exact interpolation with every basis term shown
pub fn lagrange(config: &ShamirConfig) -> Result<Report> {
    let points = config.point_pairs();
    let x = config.interpolation_x;
    let terms = lagrange::basis_terms(&points, x)?;
    let value = lagrange::interpolate(&points, x)?;
    let over_field = lagrange::interpolate_mod(&points, x, config.prime)?;

    let sum: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, (_, y))| format!("{}·L_{}({})", y, i, x))
        .collect();

    Ok(Report::new("Lagrange Interpolation")
        .entry("Points", join(points.iter().map(|(px, py)| format!("({}, {})", px, py))))
        .entry(format!("P({})", x), value)
        .entry(format!("P({}) mod {}", x, config.prime), over_field)
        .steps(terms.into_iter().map(|t| t.text))
        .steps([format!("P({}) = {} = {}", x, sum.join(" + "), value)]))
}

/// Split over F_p, reconstruct from different subsets, then the integer variant
pub fn shamir<R: Rng + ?Sized>(config: &ShamirConfig, rng: &mut R) -> Result<Report> {
    let t = config.threshold;
    let sharing = shamir::split(config.secret, t, config.shares, config.prime, rng)?;
    let shares = &sharing.shares;
    let first = shamir::reconstruct(&shares[..t], config.prime)?;
    let last = shamir::reconstruct(&shares[shares.len() - t..], config.prime)?;

    let mut report = Report::new("Shamir Secret Sharing")
        .entry("Secret", config.secret)
        .entry("Field", format!("F_{}", config.prime))
        .entry("Polynomial", &sharing.polynomial)
        .entry(
            "Shares",
            join(shares.iter().map(|s| format!("({}, {})", s.x, s.y))),
        )
        .entry(format!("From shares 1..{}", t), first)
        .entry(format!("From shares {}..{}", shares.len() - t + 1, shares.len()), last);
    if t > 1 {
        let short = shamir::reconstruct(&shares[..t - 1], config.prime)?;
        report = report.entry(format!("From only {} shares", t - 1), short);
    }

    let integers = shamir::split_over_integers(config.secret, config.integer_threshold, rng)?;
    let recovered = shamir::reconstruct_over_integers(&integers.shares[..config.integer_threshold])?;
    Ok(report
        .entry("Integer polynomial", &integers.polynomial)
        .entry(
            "Integer shares",
            join(integers.shares.iter().map(|s| format!("({}, {})", s.x, s.y))),
        )
        .entry("Integer reconstruction", recovered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_modular_defaults() {
        let report = modular(&MathConfig::default()).unwrap();
        assert_eq!(report.value("17 + 8 mod 23"), Some("2"));
        assert_eq!(report.value("17 - 8 mod 23"), Some("9"));
        assert_eq!(report.value("17 × 8 mod 23"), Some("21"));
        assert_eq!(report.value("17^3 mod 23"), Some("14"));
        assert_eq!(report.value("gcd(48, 18)"), Some("6"));
        assert_eq!(report.value("17⁻¹ mod 23"), Some("19"));
        assert!(report.steps.iter().any(|s| s == "Final result: 14"));
    }

    #[test]
    fn test_missing_inverse_reported() {
        let config = MathConfig {
            a: 6,
            modulus: 9,
            ..MathConfig::default()
        };
        let report = modular(&config).unwrap();
        assert_eq!(report.value("6⁻¹ mod 9"), Some("none (gcd(6, 9) = 3)"));
    }

    #[test]
    fn test_field_defaults() {
        let report = field(&MathConfig::default()).unwrap();
        assert_eq!(report.title, "Finite Field F_7");
        assert_eq!(report.value("3 + 5"), Some("1"));
        assert_eq!(report.value("3 × 5"), Some("1"));
        assert_eq!(report.value("3⁻¹"), Some("5"));
        assert_eq!(report.value("3 / 5"), Some("2"));
        assert_eq!(report.value("Units of Z/12Z"), Some("1, 5, 7, 11"));
        assert_eq!(report.value("Generators"), Some("none (group is not cyclic)"));
        // Two 8-line tables, then one order line per unit
        assert_eq!(report.steps.len(), 16 + 4);
    }

    #[test]
    fn test_carmichael_panel() {
        let report = primality(&MathConfig::default()).unwrap();
        assert_eq!(report.value("Fermat"), Some("probably prime"));
        assert_eq!(report.value("Miller-Rabin"), Some("composite"));
        assert_eq!(report.value("Fermat liar"), Some("yes"));
    }

    #[test]
    fn test_lagrange_defaults() {
        let report = lagrange(&ShamirConfig::default()).unwrap();
        assert_eq!(report.value("P(4)"), Some("17"));
        assert_eq!(report.value("P(4) mod 97"), Some("17"));
        assert_eq!(report.steps.last().unwrap(), "P(4) = 2·L_0(4) + 5·L_1(4) + 10·L_2(4) = 17");
    }

    #[test]
    fn test_shamir_defaults() {
        let mut rng = StdRng::seed_from_u64(5);
        let report = shamir(&ShamirConfig::default(), &mut rng).unwrap();
        assert_eq!(report.value("From shares 1..3"), Some("42"));
        assert_eq!(report.value("From shares 3..5"), Some("42"));
        assert_eq!(report.value("Integer reconstruction"), Some("42"));
        assert!(report.value("From only 2 shares").is_some());
    }
}
