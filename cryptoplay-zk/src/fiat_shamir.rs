// src/fiat_shamir.rs

//! Non-interactive proofs via the Fiat-Shamir transform.
//!
//! The verifier's random challenge is replaced by a hash of the statement
//! and the commitment, `c = H("g=..,h=..,a=..,p=..")` mapped into `[1, p-1]`.
//! With [`ToyRolling32`] this is the textbook illustration and offers no
//! soundness at all; with a real hash it is the standard construction.

use crate::errors::{Result, ZkError};
use crate::sigma::{self, Prover};
use crate::statement::DlogStatement;
use cryptoplay_crypto::hash::{
    toy_rolling_mod, Blake3, HashFunction, Keccak256, Sha256, Sha3_256, Sha512, ToyRolling32,
};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Hash that maps a transcript string to a challenge in `[1, p-1]`
pub trait ChallengeOracle: HashFunction {
    /// Challenge for `input` under modulus `p`
    fn challenge(input: &str, p: i64) -> Result<i64>;
}

impl ChallengeOracle for ToyRolling32 {
    fn challenge(input: &str, p: i64) -> Result<i64> {
        Ok(toy_rolling_mod(input, p)?)
    }
}

/// First eight digest bytes, big-endian, reduced into `[1, p-1]`
fn digest_challenge<H: HashFunction>(input: &str, p: i64) -> Result<i64> {
    if p < 2 {
        return Err(ZkError::InvalidInput(format!(
            "challenge modulus must be at least 2, got {}",
            p
        )));
    }
    let digest = H::digest(input.as_bytes());
    let mut prefix = [0u8; 8];
    for (dst, src) in prefix.iter_mut().zip(&digest) {
        *dst = *src;
    }
    Ok((u64::from_be_bytes(prefix) % (p - 1) as u64) as i64 + 1)
}

macro_rules! digest_oracle {
    ($($hash:ty),*) => {
        $(
            impl ChallengeOracle for $hash {
                fn challenge(input: &str, p: i64) -> Result<i64> {
                    digest_challenge::<$hash>(input, p)
                }
            }
        )*
    };
}

digest_oracle!(Sha256, Sha512, Sha3_256, Keccak256, Blake3);

/// A non-interactive proof of knowledge of `log_g h`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FiatShamirProof {
    /// `a = gʳ mod p`
    pub commitment: i64,
    /// Derived challenge
    pub challenge: i64,
    /// `z = r + c·x mod (p-1)`
    pub response: i64,
    /// Name of the oracle hash
    pub hash: &'static str,
    /// String that was hashed
    pub hash_input: String,
}

impl FiatShamirProof {
    /// Walkthrough of the proof, including the prover's nonce when known
    pub fn steps(&self, statement: &DlogStatement, nonce: Option<i64>) -> Result<Vec<String>> {
        let (lhs, rhs) =
            sigma::verification_sides(statement, self.commitment, self.challenge, self.response)?;
        let nonce = nonce.map_or_else(|| "hidden".to_string(), |r| r.to_string());
        Ok(vec![
            format!("1. Prover chooses random r = {}", nonce),
            format!("2. Prover computes commitment a = g^r mod p = {}", self.commitment),
            format!(
                "3. Prover computes challenge c = {}({}) = {}",
                self.hash, self.hash_input, self.challenge
            ),
            format!("4. Prover computes response z = r + c*x mod (p-1) = {}", self.response),
            format!("5. Verifier checks g^z = a * h^c mod p: {} = {}", lhs, rhs),
        ])
    }
}

/// Proves knowledge of `secret` with a caller-chosen nonce
pub fn prove_with_nonce<H: ChallengeOracle>(
    statement: &DlogStatement,
    secret: i64,
    nonce: i64,
) -> Result<FiatShamirProof> {
    let committed = Prover::new(*statement, secret)?.commit_with_nonce(nonce)?;
    let commitment = committed.commitment();
    let hash_input = statement.challenge_input(commitment);
    let challenge = H::challenge(&hash_input, statement.p)?;
    let response = committed.respond(challenge)?;
    debug!(hash = H::NAME, challenge, "Derived Fiat-Shamir challenge");
    Ok(FiatShamirProof {
        commitment,
        challenge,
        response,
        hash: H::NAME,
        hash_input,
    })
}

/// Proves knowledge of `secret` with a fresh nonce
///
/// # Example
/// ```
/// use cryptoplay_crypto::hash::Sha256;
/// use cryptoplay_zk::{fiat_shamir, DlogStatement};
///
/// let statement = DlogStatement::from_secret(3, 23, 7).unwrap();
/// let proof = fiat_shamir::prove::<Sha256, _>(&statement, 7, &mut rand::thread_rng()).unwrap();
/// assert!(fiat_shamir::verify::<Sha256>(&statement, &proof).unwrap());
/// ```
pub fn prove<H: ChallengeOracle, R: Rng + ?Sized>(
    statement: &DlogStatement,
    secret: i64,
    rng: &mut R,
) -> Result<FiatShamirProof> {
    let nonce = rng.gen_range(1..statement.exponent_modulus());
    prove_with_nonce::<H>(statement, secret, nonce)
}

/// Recomputes the challenge from the statement and checks the proof
pub fn verify<H: ChallengeOracle>(statement: &DlogStatement, proof: &FiatShamirProof) -> Result<bool> {
    let expected = H::challenge(&statement.challenge_input(proof.commitment), statement.p)?;
    if expected != proof.challenge {
        debug!(expected, got = proof.challenge, "Fiat-Shamir challenge mismatch");
        return Ok(false);
    }
    sigma::verify(statement, proof.commitment, proof.challenge, proof.response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn statement() -> DlogStatement {
        DlogStatement::from_secret(3, 23, 7).unwrap()
    }

    #[test]
    fn test_oracles_reject_small_modulus() {
        for p in [1, 0, -5] {
            assert!(matches!(Sha256::challenge("x", p), Err(ZkError::InvalidInput(_))));
            assert!(Sha512::challenge("x", p).is_err());
            assert!(Sha3_256::challenge("x", p).is_err());
            assert!(Keccak256::challenge("x", p).is_err());
            assert!(Blake3::challenge("x", p).is_err());
            assert!(ToyRolling32::challenge("x", p).is_err());
        }
        assert_eq!(Sha256::challenge("x", 2).unwrap(), 1);
    }

    #[test]
    fn test_toy_oracle_known_values() {
        let proof = prove_with_nonce::<ToyRolling32>(&statement(), 7, 5).unwrap();
        assert_eq!(proof.commitment, 13);
        assert_eq!(proof.hash_input, "g=3,h=2,a=13,p=23");
        assert_eq!(proof.challenge, 13);
        assert_eq!(proof.response, 8);
        assert!(verify::<ToyRolling32>(&statement(), &proof).unwrap());
    }

    #[test]
    fn test_sha256_oracle_known_values() {
        let proof = prove_with_nonce::<Sha256>(&statement(), 7, 5).unwrap();
        assert_eq!(proof.challenge, 3);
        assert_eq!(proof.hash, "SHA-256");
        assert!(verify::<Sha256>(&statement(), &proof).unwrap());
    }

    #[test]
    fn test_completeness_every_oracle() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..20 {
            let proof = prove::<Blake3, _>(&statement(), 7, &mut rng).unwrap();
            assert!(verify::<Blake3>(&statement(), &proof).unwrap());
            let proof = prove::<Keccak256, _>(&statement(), 7, &mut rng).unwrap();
            assert!(verify::<Keccak256>(&statement(), &proof).unwrap());
            let proof = prove::<ToyRolling32, _>(&statement(), 7, &mut rng).unwrap();
            assert!((1..=22).contains(&proof.challenge));
            assert!(verify::<ToyRolling32>(&statement(), &proof).unwrap());
        }
    }

    #[test]
    fn test_proof_bound_to_statement() {
        let proof = prove_with_nonce::<Sha256>(&statement(), 7, 5).unwrap();
        let other = DlogStatement::from_secret(3, 23, 8).unwrap();
        assert!(!verify::<Sha256>(&other, &proof).unwrap());
    }

    #[test]
    fn test_tampered_challenge_rejected() {
        let mut proof = prove_with_nonce::<Sha256>(&statement(), 7, 5).unwrap();
        proof.challenge += 11;
        assert!(!verify::<Sha256>(&statement(), &proof).unwrap());
    }

    #[test]
    fn test_steps() {
        let proof = prove_with_nonce::<ToyRolling32>(&statement(), 7, 5).unwrap();
        let steps = proof.steps(&statement(), Some(5)).unwrap();
        assert_eq!(steps[0], "1. Prover chooses random r = 5");
        assert_eq!(steps[2], "3. Prover computes challenge c = Toy-Rolling-32(g=3,h=2,a=13,p=23) = 13");
        assert_eq!(steps[4], "5. Verifier checks g^z = a * h^c mod p: 6 = 6");
    }
}
