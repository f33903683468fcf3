// src/sigma.rs

//! Schnorr-style sigma protocol for knowledge of a discrete log.
//!
//! Three moves:
//! 1. Prover commits `a = gʳ mod p` for a fresh nonce `r`
//! 2. Verifier replies with a random challenge `c`
//! 3. Prover answers `z = r + c·x mod (p-1)`
//!
//! and the verifier accepts when `gᶻ ≡ a·hᶜ (mod p)`.
//!
//! [`Prover::commit`] consumes the prover and [`CommittedProver::respond`]
//! consumes the commitment, so a nonce can answer at most one challenge.
//! [`extract_witness`] shows what happens when that rule is broken.

use crate::errors::{Result, ZkError};
use crate::statement::DlogStatement;
use cryptoplay_math::arith;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

/// Prover holding a witness, before committing
#[derive(Debug)]
pub struct Prover {
    statement: DlogStatement,
    secret: i64,
}

/// Prover after the first move; answers exactly one challenge
#[derive(Debug)]
pub struct CommittedProver {
    statement: DlogStatement,
    secret: i64,
    nonce: i64,
    commitment: i64,
}

impl Prover {
    /// Creates a prover
    ///
    /// A secret that is not a witness is accepted so that cheating provers
    /// can be demonstrated; it is logged at `warn`.
    pub fn new(statement: DlogStatement, secret: i64) -> Result<Self> {
        if !statement.is_witness(secret)? {
            warn!(%statement, "Prover secret is not a witness for the statement");
        }
        Ok(Self { statement, secret })
    }

    /// First move with a fresh nonce in `[1, p-2]`
    pub fn commit<R: Rng + ?Sized>(self, rng: &mut R) -> Result<CommittedProver> {
        let nonce = rng.gen_range(1..self.statement.exponent_modulus());
        self.commit_with_nonce(nonce)
    }

    /// First move with a caller-chosen nonce
    pub fn commit_with_nonce(self, nonce: i64) -> Result<CommittedProver> {
        let order = self.statement.exponent_modulus();
        if nonce < 1 || nonce >= order {
            return Err(ZkError::InvalidInput(format!(
                "nonce {} must lie in [1, {})",
                nonce, order
            )));
        }
        let commitment = arith::mod_pow(self.statement.g, nonce as u64, self.statement.p)?;
        debug!(commitment, "Prover committed");
        Ok(CommittedProver {
            statement: self.statement,
            secret: self.secret,
            nonce,
            commitment,
        })
    }
}

impl CommittedProver {
    /// `a = gʳ mod p`
    pub fn commitment(&self) -> i64 {
        self.commitment
    }

    /// The nonce `r`; revealing it together with `z` reveals the secret
    pub fn nonce(&self) -> i64 {
        self.nonce
    }

    /// Third move: `z = r + c·x mod (p-1)`
    pub fn respond(self, challenge: i64) -> Result<i64> {
        check_challenge(&self.statement, challenge)?;
        let order = self.statement.exponent_modulus();
        let cx = arith::mod_mul(challenge, self.secret, order)?;
        Ok(arith::mod_add(self.nonce, cx, order)?)
    }
}

fn check_challenge(statement: &DlogStatement, challenge: i64) -> Result<()> {
    let max = statement.exponent_modulus();
    if challenge < 1 || challenge > max {
        return Err(ZkError::InvalidChallenge { challenge, max });
    }
    Ok(())
}

/// Honest verifier for one statement
#[derive(Clone, Copy, Debug)]
pub struct Verifier {
    statement: DlogStatement,
}

impl Verifier {
    /// Creates a verifier
    pub fn new(statement: DlogStatement) -> Self {
        Self { statement }
    }

    /// Uniform challenge in `[1, p-1]`
    pub fn challenge<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(1..=self.statement.exponent_modulus())
    }

    /// Final check on a transcript
    pub fn verify(&self, commitment: i64, challenge: i64, response: i64) -> Result<bool> {
        verify(&self.statement, commitment, challenge, response)
    }
}

/// Both sides of the verification equation: `(gᶻ mod p, a·hᶜ mod p)`
pub fn verification_sides(
    statement: &DlogStatement,
    commitment: i64,
    challenge: i64,
    response: i64,
) -> Result<(i64, i64)> {
    let DlogStatement { g, p, h } = *statement;
    let order = statement.exponent_modulus();
    let lhs = arith::mod_pow(g, response.rem_euclid(order) as u64, p)?;
    let hc = arith::mod_pow(h, challenge.rem_euclid(order) as u64, p)?;
    let rhs = arith::mod_mul(commitment, hc, p)?;
    Ok((lhs, rhs))
}

/// Checks `gᶻ ≡ a·hᶜ (mod p)`
///
/// # Example
/// ```
/// use cryptoplay_zk::{sigma, DlogStatement};
///
/// let statement = DlogStatement::from_secret(3, 23, 7).unwrap();
/// // r = 5, a = 13, c = 4, z = 5 + 4·7 mod 22 = 11
/// assert!(sigma::verify(&statement, 13, 4, 11).unwrap());
/// ```
pub fn verify(statement: &DlogStatement, commitment: i64, challenge: i64, response: i64) -> Result<bool> {
    if commitment < 1 || commitment >= statement.p {
        return Ok(false);
    }
    let (lhs, rhs) = verification_sides(statement, commitment, challenge, response)?;
    Ok(lhs == rhs)
}

/// Everything exchanged in one protocol run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Statement being proven
    pub statement: DlogStatement,
    /// Prover nonce, when known (absent for simulated transcripts)
    pub nonce: Option<i64>,
    /// `a`
    pub commitment: i64,
    /// `c`
    pub challenge: i64,
    /// `z`
    pub response: i64,
    /// `gᶻ mod p`
    pub lhs: i64,
    /// `a·hᶜ mod p`
    pub rhs: i64,
}

impl Transcript {
    fn new(
        statement: DlogStatement,
        nonce: Option<i64>,
        commitment: i64,
        challenge: i64,
        response: i64,
    ) -> Result<Self> {
        let (lhs, rhs) = verification_sides(&statement, commitment, challenge, response)?;
        Ok(Self {
            statement,
            nonce,
            commitment,
            challenge,
            response,
            lhs,
            rhs,
        })
    }

    /// Whether the verifier accepts
    pub fn accepted(&self) -> bool {
        self.lhs == self.rhs
    }

    /// Walkthrough of the five protocol steps
    pub fn steps(&self) -> Vec<String> {
        let nonce = self
            .nonce
            .map_or_else(|| "unknown (simulated)".to_string(), |r| r.to_string());
        vec![
            format!("1. Prover chooses random r = {}", nonce),
            format!("2. Prover computes commitment a = g^r mod p = {}", self.commitment),
            format!("3. Verifier sends challenge c = {}", self.challenge),
            format!("4. Prover computes response z = r + c*x mod (p-1) = {}", self.response),
            format!(
                "5. Verifier checks g^z = a * h^c mod p: {} = {}",
                self.lhs, self.rhs
            ),
        ]
    }
}

/// Runs commit, challenge and response between an honest verifier and a
/// prover holding `secret`
///
/// # Example
/// ```
/// use cryptoplay_zk::{sigma, DlogStatement};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let statement = DlogStatement::from_secret(3, 23, 7).unwrap();
/// let transcript = sigma::run_interactive(&statement, 7, &mut StdRng::seed_from_u64(1)).unwrap();
/// assert!(transcript.accepted());
/// ```
pub fn run_interactive<R: Rng + ?Sized>(
    statement: &DlogStatement,
    secret: i64,
    rng: &mut R,
) -> Result<Transcript> {
    let committed = Prover::new(*statement, secret)?.commit(rng)?;
    let (nonce, commitment) = (committed.nonce(), committed.commitment());
    let challenge = Verifier::new(*statement).challenge(rng);
    let response = committed.respond(challenge)?;
    let transcript = Transcript::new(*statement, Some(nonce), commitment, challenge, response)?;
    debug!(accepted = transcript.accepted(), "Sigma protocol finished");
    Ok(transcript)
}

/// Produces an accepting transcript without the secret
///
/// Picks `c` and `z` first and solves for `a = gᶻ·h⁻ᶜ`. Such transcripts are
/// distributed exactly like honest ones, which is why a transcript alone
/// convinces nobody but the verifier who chose `c` live.
pub fn simulate<R: Rng + ?Sized>(statement: &DlogStatement, rng: &mut R) -> Result<Transcript> {
    let order = statement.exponent_modulus();
    let challenge = rng.gen_range(1..=order);
    let response = rng.gen_range(0..order);
    let gz = arith::mod_pow(statement.g, response as u64, statement.p)?;
    let hc = arith::mod_pow(statement.h, challenge as u64, statement.p)?;
    let commitment = arith::mod_mul(gz, arith::mod_inverse(hc, statement.p)?, statement.p)?;
    Transcript::new(*statement, None, commitment, challenge, response)
}

/// Recovers the secret from two accepting transcripts that share a commitment
///
/// Solves `x = (z₁ − z₂)/(c₁ − c₂)` modulo the order of `g`. Fails when the
/// challenge difference is not invertible there.
pub fn extract_witness(first: &Transcript, second: &Transcript) -> Result<i64> {
    if first.statement != second.statement || first.commitment != second.commitment {
        return Err(ZkError::ExtractionFailed(
            "transcripts must share statement and commitment".to_string(),
        ));
    }
    if !first.accepted() || !second.accepted() {
        return Err(ZkError::ExtractionFailed(
            "both transcripts must verify".to_string(),
        ));
    }
    let order = first.statement.generator_order()?;
    let dc = arith::mod_sub(first.challenge, second.challenge, order)?;
    let dz = arith::mod_sub(first.response, second.response, order)?;
    let inv = arith::mod_inverse(dc, order).map_err(|_| {
        ZkError::ExtractionFailed(format!(
            "challenge difference {} is not invertible modulo {}",
            dc, order
        ))
    })?;
    Ok(arith::mod_mul(dz, inv, order)?)
}

/// Answers two challenges with one nonce, which a [`CommittedProver`]
/// refuses to do
pub fn respond_twice(
    statement: &DlogStatement,
    secret: i64,
    nonce: i64,
    challenges: (i64, i64),
) -> Result<(Transcript, Transcript)> {
    let run = |challenge: i64| -> Result<Transcript> {
        let committed = Prover::new(*statement, secret)?.commit_with_nonce(nonce)?;
        let commitment = committed.commitment();
        let response = committed.respond(challenge)?;
        Transcript::new(*statement, Some(nonce), commitment, challenge, response)
    };
    Ok((run(challenges.0)?, run(challenges.1)?))
}
