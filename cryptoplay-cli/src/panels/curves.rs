// src/panels/curves.rs

use super::yes_no;
use crate::config::CurveConfig;
use crate::errors::Result;
use crate::report::Report;
use cryptoplay_curves::ecdh::{self, CurveKeyPair};
use cryptoplay_curves::ecdsa::{message_digest, Ecdsa};
use cryptoplay_curves::Curve;

fn equation(curve: &Curve) -> String {
    format!("y² = x³ + {}x + {} (mod {})", curve.a(), curve.b(), curve.p())
}

/// Addition, doubling and both scalar multiplication algorithms
pub fn points(config: &CurveConfig) -> Result<Report> {
    let curve = config.textbook_curve()?;
    let p = curve.point(config.point1[0], config.point1[1])?;
    let q = curve.point(config.point2[0], config.point2[1])?;
    let k = config.scalar;

    let sum = curve.add_traced(&p, &q)?;
    let doubled = curve.add_traced(&p, &p)?;
    let fast = curve.scalar_mul(k, &p)?;
    let naive = curve.scalar_mul_naive(k, &p)?;

    Ok(Report::new("Elliptic Curve Points")
        .entry("Curve", equation(&curve))
        .entry("Points on curve", curve.group_order())
        .entry("P", p)
        .entry("Q", q)
        .entry("P + Q", sum.value)
        .entry("2P", doubled.value)
        .entry(format!("{}P (double-and-add)", k), fast)
        .entry(format!("{}P (repeated addition)", k), naive)
        .entry("ord(P)", curve.order_of(&p)?)
        .steps(sum.steps)
        .steps(doubled.steps))
}

/// Both parties derive the same point
pub fn ecdh(config: &CurveConfig) -> Result<Report> {
    let domain = config.ecdh_domain()?;
    let alice = CurveKeyPair::from_private(&domain, config.alice_private)?;
    let bob = CurveKeyPair::from_private(&domain, config.bob_private)?;
    let alice_shared = ecdh::shared_secret(&domain, alice.private(), &bob.public)?;
    let bob_shared = ecdh::shared_secret(&domain, bob.private(), &alice.public)?;

    Ok(Report::new("Elliptic Curve Diffie-Hellman")
        .entry("Curve", equation(domain.curve()))
        .entry("Generator G", domain.generator())
        .entry("Order of G", domain.order())
        .entry("Alice public aG", alice.public)
        .entry("Bob public bG", bob.public)
        .entry("Alice computes a(bG)", alice_shared)
        .entry("Bob computes b(aG)", bob_shared)
        .entry("Secrets agree", yes_no(alice_shared == bob_shared)))
}

/// Sign with a chosen nonce, verify, and verify a modified message
pub fn ecdsa(config: &CurveConfig) -> Result<Report> {
    let scheme = Ecdsa::new(config.signing_domain()?)?;
    let domain = *scheme.domain();
    let n = domain.order();
    let d = config.signing_private;
    let public = scheme.public_key(d)?;
    let signature = scheme.sign(&config.message, d, config.signing_nonce)?;
    let valid = scheme.verify(&config.message, &signature, &public)?;
    let tampered = format!("{}!", config.message);
    let tampered_valid = scheme.verify(&tampered, &signature, &public)?;

    Ok(Report::new("Toy ECDSA")
        .entry("Curve", equation(domain.curve()))
        .entry("Generator G", domain.generator())
        .entry("Order n", n)
        .entry("Private key d", d)
        .entry("Public key Q = dG", public)
        .entry("Message digest e", message_digest(&config.message, n))
        .entry("Nonce k", config.signing_nonce)
        .entry("Signature (r, s)", format!("({}, {})", signature.r, signature.s))
        .entry("Valid", yes_no(valid))
        .entry(format!("Valid for \"{}\"", tampered), yes_no(tampered_valid))
        .steps([
            "r = x(kG) mod n".to_string(),
            "s = k⁻¹(e + r·d) mod n".to_string(),
            "Verify: x(u₁G + u₂Q) mod n = r with u₁ = e·s⁻¹, u₂ = r·s⁻¹".to_string(),
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_defaults() {
        let report = points(&CurveConfig::default()).unwrap();
        assert_eq!(report.value("Curve"), Some("y² = x³ + 1x + 1 (mod 23)"));
        assert_eq!(report.value("Points on curve"), Some("28"));
        assert_eq!(report.value("P + Q"), Some("(17, 20)"));
        assert_eq!(report.value("2P"), Some("(7, 12)"));
        assert_eq!(report.value("7P (double-and-add)"), Some("(11, 3)"));
        assert_eq!(report.value("7P (repeated addition)"), Some("(11, 3)"));
        assert_eq!(report.value("ord(P)"), Some("28"));
    }

    #[test]
    fn test_point_not_on_curve() {
        let config = CurveConfig {
            point1: [3, 11],
            ..CurveConfig::default()
        };
        assert!(points(&config).is_err());
    }

    #[test]
    fn test_ecdh_defaults() {
        let report = ecdh(&CurveConfig::default()).unwrap();
        assert_eq!(report.value("Alice public aG"), Some("(11, 3)"));
        assert_eq!(report.value("Bob public bG"), Some("(18, 20)"));
        assert_eq!(report.value("Alice computes a(bG)"), Some("(11, 20)"));
        assert_eq!(report.value("Bob computes b(aG)"), Some("(11, 20)"));
        assert_eq!(report.value("Secrets agree"), Some("yes"));
    }

    #[test]
    fn test_ecdsa_defaults() {
        let report = ecdsa(&CurveConfig::default()).unwrap();
        assert_eq!(report.value("Order n"), Some("19"));
        assert_eq!(report.value("Public key Q = dG"), Some("(0, 6)"));
        assert_eq!(report.value("Message digest e"), Some("3"));
        assert_eq!(report.value("Signature (r, s)"), Some("(9, 17)"));
        assert_eq!(report.value("Valid"), Some("yes"));
        assert_eq!(report.value("Valid for \"Hello, ECDSA!!\""), Some("no"));
    }
}
