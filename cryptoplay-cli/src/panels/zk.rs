// src/panels/zk.rs

use super::{join, yes_no};
use crate::config::{FingerprintConfig, SigmaConfig};
use crate::errors::{CliError, Result};
use crate::report::Report;
use cryptoplay_crypto::hash::{Sha256, ToyRolling32};
use cryptoplay_math::Polynomial;
use cryptoplay_zk::fiat_shamir::{self, ChallengeOracle};
use cryptoplay_zk::{fingerprint as fp, sigma, DlogStatement};
use rand::Rng;

/// Challenges answered with one reused nonce in the extraction demo
const EXTRACTION_CHALLENGES: (i64, i64) = (1, 2);

/// Honest run, simulated transcript, and extraction from a reused nonce
pub fn sigma<R: Rng + ?Sized>(config: &SigmaConfig, rng: &mut R) -> Result<Report> {
    let statement = config.statement()?;
    let honest = sigma::run_interactive(&statement, config.secret, rng)?;
    let simulated = sigma::simulate(&statement, rng)?;

    let nonce = honest
        .nonce
        .ok_or_else(|| CliError::ZkError("honest transcript carries no nonce".to_string()))?;
    let (t1, t2) = sigma::respond_twice(&statement, config.secret, nonce, EXTRACTION_CHALLENGES)?;
    let extracted = sigma::extract_witness(&t1, &t2)?;

    Ok(Report::new("Sigma Protocol")
        .entry("Statement", statement)
        .entry("Public values", format!("g = {}, p = {}, h = {}", statement.g, statement.p, statement.h))
        .entry("Honest transcript accepted", yes_no(honest.accepted()))
        .entry(
            "Simulated (a, c, z)",
            format!("({}, {}, {})", simulated.commitment, simulated.challenge, simulated.response),
        )
        .entry("Simulated transcript accepted", yes_no(simulated.accepted()))
        .entry(
            format!(
                "Witness from c = {} and c = {} with one nonce",
                EXTRACTION_CHALLENGES.0, EXTRACTION_CHALLENGES.1
            ),
            format!("{} (mod ord(g) = {})", extracted, statement.generator_order()?),
        )
        .steps(honest.steps()))
}

fn fiat_shamir_with<H: ChallengeOracle, R: Rng + ?Sized>(
    statement: &DlogStatement,
    secret: i64,
    rng: &mut R,
) -> Result<Report> {
    let nonce = rng.gen_range(1..statement.exponent_modulus());
    let proof = fiat_shamir::prove_with_nonce::<H>(statement, secret, nonce)?;
    let valid = fiat_shamir::verify::<H>(statement, &proof)?;

    let mut forged = proof.clone();
    forged.response = (forged.response + 1).rem_euclid(statement.exponent_modulus());
    let forged_valid = fiat_shamir::verify::<H>(statement, &forged)?;

    Ok(Report::new("Fiat-Shamir Proof")
        .entry("Statement", statement)
        .entry("Oracle", proof.hash)
        .entry("Hash input", &proof.hash_input)
        .entry("Proof (a, c, z)", format!("({}, {}, {})", proof.commitment, proof.challenge, proof.response))
        .entry("Verifies", yes_no(valid))
        .entry("Verifies with z + 1", yes_no(forged_valid))
        .steps(proof.steps(statement, Some(nonce))?))
}

/// Non-interactive proof under the configured oracle
pub fn fiat_shamir<R: Rng + ?Sized>(config: &SigmaConfig, rng: &mut R) -> Result<Report> {
    let statement = config.statement()?;
    match config.hash.as_str() {
        "toy" => fiat_shamir_with::<ToyRolling32, R>(&statement, config.secret, rng),
        "sha256" => fiat_shamir_with::<Sha256, R>(&statement, config.secret, rng),
        other => Err(CliError::InvalidArgument(format!(
            "unknown Fiat-Shamir hash {}, expected toy or sha256",
            other
        ))),
    }
}

/// Fixed and random fingerprints, then identity tests
pub fn fingerprint<R: Rng + ?Sized>(config: &FingerprintConfig, rng: &mut R) -> Result<Report> {
    let p = config.prime;
    let first = Polynomial::from_descending(&config.coefficients);
    let second = Polynomial::from_descending(&config.other_coefficients);

    let fixed = fp::fingerprint(&first, config.point, p)?;
    let (random_point, random_value) = fp::random_fingerprint(&first, p, rng)?;
    let against_other = fp::identity_check(&first, &second, p, config.rounds, rng)?;
    let against_self = fp::identity_check(&first, &first, p, config.rounds, rng)?;

    let verdict = |equal: bool| if equal { "probably equal" } else { "different" };
    Ok(Report::new("Polynomial Fingerprinting")
        .entry("P(x)", &first)
        .entry("Q(x)", &second)
        .entry(format!("P({}) mod {}", config.point, p), fixed)
        .entry(format!("P({}) mod {}", random_point, p), random_value)
        .entry(
            "Miss chance per point",
            format!("{:.4}", fp::error_bound(first.degree().max(second.degree()), p)),
        )
        .entry("P vs Q", verdict(against_other.probably_equal()))
        .entry(
            "Distinguishing point",
            against_other
                .witness
                .map_or_else(|| "none".to_string(), |x| x.to_string()),
        )
        .entry("P vs P", verdict(against_self.probably_equal()))
        .entry(
            format!("False-positive bound after {} rounds", against_self.points.len()),
            format!("{:e}", against_self.false_positive_bound),
        )
        .steps([format!("P vs P points: {}", join(&against_self.points))]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_sigma_panel() {
        let report = sigma(&SigmaConfig::default(), &mut rng()).unwrap();
        assert_eq!(report.value("Statement"), Some("2 = 3^x mod 23"));
        assert_eq!(report.value("Honest transcript accepted"), Some("yes"));
        assert_eq!(report.value("Simulated transcript accepted"), Some("yes"));
        assert_eq!(
            report.value("Witness from c = 1 and c = 2 with one nonce"),
            Some("7 (mod ord(g) = 11)")
        );
        assert_eq!(report.steps.len(), 5);
    }

    #[test]
    fn test_fiat_shamir_panel_both_oracles() {
        let mut config = SigmaConfig::default();
        let report = fiat_shamir(&config, &mut rng()).unwrap();
        assert_eq!(report.value("Oracle"), Some("Toy-Rolling-32"));
        assert_eq!(report.value("Verifies"), Some("yes"));
        assert_eq!(report.value("Verifies with z + 1"), Some("no"));

        config.hash = "sha256".to_string();
        let report = fiat_shamir(&config, &mut rng()).unwrap();
        assert_eq!(report.value("Oracle"), Some("SHA-256"));
        assert_eq!(report.value("Verifies"), Some("yes"));

        config.hash = "md5".to_string();
        assert!(fiat_shamir(&config, &mut rng()).is_err());
    }

    #[test]
    fn test_fingerprint_panel() {
        let report = fingerprint(&FingerprintConfig::default(), &mut rng()).unwrap();
        assert_eq!(report.value("P(x)"), Some("x^2 + 2x + 3"));
        assert_eq!(report.value("P(5) mod 101"), Some("38"));
        assert_eq!(report.value("P vs Q"), Some("different"));
        assert_eq!(report.value("P vs P"), Some("probably equal"));
        assert!(report.value("False-positive bound after 10 rounds").is_some());
    }
}
