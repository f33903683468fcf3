// src/config.rs

//! Playground configuration.
//!
//! One section per panel. Defaults reproduce the values each panel starts
//! with; a JSON file can override any subset of them.

use crate::errors::{CliError, Result};
use cryptoplay_crypto::{DhParams, HashAlgorithm, Pedersen, RsaKeyPair};
use cryptoplay_curves::{Curve, DomainParams, Point};
use cryptoplay_math::{is_prime, PrimeField};
use cryptoplay_zk::DlogStatement;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Complete playground configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Modular arithmetic, fields, groups and primality
    pub math: MathConfig,
    /// Elliptic curves, ECDH and ECDSA
    pub curve: CurveConfig,
    /// Hash functions
    pub hash: HashConfig,
    /// Message authentication codes
    pub mac: MacConfig,
    /// Hash and Pedersen commitments
    pub commitment: CommitmentConfig,
    /// Classical ciphers, block modes and AES
    pub ciphers: CipherConfig,
    /// Finite-field Diffie-Hellman
    pub dh: DhConfig,
    /// Textbook RSA
    pub rsa: RsaConfig,
    /// Ed25519 signatures
    pub signature: SignatureConfig,
    /// Sigma protocol and Fiat-Shamir
    pub sigma: SigmaConfig,
    /// Lagrange interpolation and Shamir sharing
    pub shamir: ShamirConfig,
    /// Polynomial fingerprinting
    pub fingerprint: FingerprintConfig,
}

/// Modular arithmetic configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// First operand
    pub a: i64,
    /// Second operand
    pub b: i64,
    /// Modulus
    pub modulus: i64,
    /// Exponent for `a^e mod m`
    pub exponent: u64,
    /// First gcd operand
    pub gcd_a: i64,
    /// Second gcd operand
    pub gcd_b: i64,
    /// Prime of the field panel
    pub field_prime: i64,
    /// First field element
    pub field_a: i64,
    /// Second field element
    pub field_b: i64,
    /// Modulus of the group panel
    pub group_modulus: i64,
    /// Primality candidate
    pub primality_candidate: i64,
    /// Primality witness
    pub primality_witness: i64,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            a: 17,
            b: 8,
            modulus: 23,
            exponent: 3,
            gcd_a: 48,
            gcd_b: 18,
            field_prime: 7,
            field_a: 3,
            field_b: 5,
            group_modulus: 12,
            primality_candidate: 561,
            primality_witness: 2,
        }
    }
}

/// Elliptic-curve configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// `[a, b, p]` of the textbook curve
    pub curve: [i64; 3],
    /// First point for addition
    pub point1: [i64; 2],
    /// Second point for addition
    pub point2: [i64; 2],
    /// Scalar for the multiplication comparison
    pub scalar: i64,
    /// ECDH base point on the textbook curve
    pub base_point: [i64; 2],
    /// Alice's ECDH scalar
    pub alice_private: i64,
    /// Bob's ECDH scalar
    pub bob_private: i64,
    /// `[a, b, p]` of the signing curve
    pub signing_curve: [i64; 3],
    /// Prime-order generator of the signing curve
    pub signing_generator: [i64; 2],
    /// ECDSA private key
    pub signing_private: i64,
    /// ECDSA nonce
    pub signing_nonce: i64,
    /// Message to sign
    pub message: String,
}

impl Default for CurveConfig {
    fn default() -> Self {
        let (a, b, p) = cryptoplay_curves::TEXTBOOK_CURVE;
        let (sa, sb, sp) = cryptoplay_curves::SIGNING_CURVE;
        let (gx, gy) = cryptoplay_curves::SIGNING_GENERATOR;
        Self {
            curve: [a, b, p],
            point1: [3, 10],
            point2: [9, 7],
            scalar: 7,
            base_point: [3, 10],
            alice_private: 7,
            bob_private: 11,
            signing_curve: [sa, sb, sp],
            signing_generator: [gx, gy],
            signing_private: 7,
            signing_nonce: 5,
            message: "Hello, ECDSA!".to_string(),
        }
    }
}

impl CurveConfig {
    /// Textbook curve
    pub fn textbook_curve(&self) -> Result<Curve> {
        let [a, b, p] = self.curve;
        Ok(Curve::new(a, b, p)?)
    }

    /// ECDH domain on the textbook curve
    pub fn ecdh_domain(&self) -> Result<DomainParams> {
        let [x, y] = self.base_point;
        Ok(DomainParams::new(self.textbook_curve()?, Point::new(x, y))?)
    }

    /// ECDSA domain on the signing curve
    pub fn signing_domain(&self) -> Result<DomainParams> {
        let [a, b, p] = self.signing_curve;
        let [x, y] = self.signing_generator;
        Ok(DomainParams::new(Curve::new(a, b, p)?, Point::new(x, y))?)
    }
}

/// Hash configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Text to hash
    pub input: String,
    /// Algorithm highlighted in the report
    pub algorithm: String,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            input: "Hello, world!".to_string(),
            algorithm: "SHA-256".to_string(),
        }
    }
}

impl HashConfig {
    /// Parsed algorithm
    pub fn algorithm(&self) -> Result<HashAlgorithm> {
        Ok(self.algorithm.parse()?)
    }
}

/// MAC configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacConfig {
    /// Shared key
    pub key: String,
    /// Authenticated message
    pub message: String,
    /// Message an attacker substitutes
    pub tampered_message: String,
}

impl Default for MacConfig {
    fn default() -> Self {
        Self {
            key: "secret-key-123".to_string(),
            message: "Hello, World!".to_string(),
            tampered_message: "Hello, World! (modified)".to_string(),
        }
    }
}

/// Commitment configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitmentConfig {
    /// Secret for the hash commitment
    pub secret: String,
    /// Pedersen first generator
    pub g: i64,
    /// Pedersen second generator
    pub h: i64,
    /// Pedersen modulus
    pub p: i64,
    /// First committed value
    pub message: i64,
    /// First blinding factor
    pub randomness: i64,
    /// Second committed value
    pub message2: i64,
    /// Second blinding factor
    pub randomness2: i64,
}

impl Default for CommitmentConfig {
    fn default() -> Self {
        Self {
            secret: "42".to_string(),
            g: 3,
            h: 5,
            p: 23,
            message: 7,
            randomness: 13,
            message2: 11,
            randomness2: 17,
        }
    }
}

/// Cipher configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Caesar plaintext
    pub caesar_plaintext: String,
    /// Caesar shift
    pub caesar_shift: u32,
    /// XOR plaintext
    pub xor_plaintext: String,
    /// XOR key
    pub xor_key: String,
    /// Second message encrypted under the same XOR key
    pub xor_second_message: String,
    /// One-time pad plaintext
    pub otp_plaintext: String,
    /// Block-mode plaintext
    pub block_plaintext: String,
    /// Block-mode key, eight bytes
    pub block_key: String,
    /// AES-GCM plaintext
    pub aes_plaintext: String,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            caesar_plaintext: "HELLO WORLD".to_string(),
            caesar_shift: 3,
            xor_plaintext: "Hello, World!".to_string(),
            xor_key: "KEY".to_string(),
            xor_second_message: "Secret Message".to_string(),
            otp_plaintext: "ATTACK AT DAWN".to_string(),
            block_plaintext: "YELLOW SUBMARINEYELLOW SUBMARINE".to_string(),
            block_key: "toy key!".to_string(),
            aes_plaintext: "Hello, cryptography world!".to_string(),
        }
    }
}

/// Diffie-Hellman configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DhConfig {
    /// Prime modulus
    pub p: i64,
    /// Generator
    pub g: i64,
    /// Alice's exponent; random when absent
    pub alice_private: Option<i64>,
    /// Bob's exponent; random when absent
    pub bob_private: Option<i64>,
}

impl Default for DhConfig {
    fn default() -> Self {
        Self {
            p: cryptoplay_crypto::DEFAULT_DH_PRIME,
            g: cryptoplay_crypto::DEFAULT_DH_GENERATOR,
            alice_private: None,
            bob_private: None,
        }
    }
}

/// RSA configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsaConfig {
    /// First prime
    pub p: i64,
    /// Second prime
    pub q: i64,
    /// Public exponent
    pub e: i64,
    /// Message representative
    pub message: i64,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            p: 61,
            q: 53,
            e: 17,
            message: 65,
        }
    }
}

/// Ed25519 configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    /// Message to sign
    pub message: String,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            message: "This message will be signed to prove its authenticity and integrity."
                .to_string(),
        }
    }
}

/// Sigma protocol configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigmaConfig {
    /// Base
    pub g: i64,
    /// Prime modulus
    pub p: i64,
    /// Prover's secret
    pub secret: i64,
    /// Fiat-Shamir hash: `toy` or `sha256`
    pub hash: String,
}

impl Default for SigmaConfig {
    fn default() -> Self {
        Self {
            g: cryptoplay_zk::DEFAULT_GENERATOR,
            p: cryptoplay_zk::DEFAULT_MODULUS,
            secret: cryptoplay_zk::DEFAULT_SECRET,
            hash: "toy".to_string(),
        }
    }
}

impl SigmaConfig {
    /// Statement `h = g^secret mod p`
    pub fn statement(&self) -> Result<DlogStatement> {
        Ok(DlogStatement::from_secret(self.g, self.p, self.secret)?)
    }
}

/// Interpolation and secret-sharing configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShamirConfig {
    /// Points for the interpolation panel
    pub points: Vec<[i64; 2]>,
    /// Where to evaluate the interpolant
    pub interpolation_x: i64,
    /// Shared secret
    pub secret: i64,
    /// Shares needed to reconstruct
    pub threshold: usize,
    /// Shares issued
    pub shares: usize,
    /// Field prime
    pub prime: i64,
    /// Threshold for the integer variant
    pub integer_threshold: usize,
}

impl Default for ShamirConfig {
    fn default() -> Self {
        Self {
            points: vec![[1, 2], [2, 5], [3, 10]],
            interpolation_x: 4,
            secret: 42,
            threshold: 3,
            shares: 5,
            prime: cryptoplay_math::DEFAULT_SHAMIR_PRIME,
            integer_threshold: 2,
        }
    }
}

impl ShamirConfig {
    /// Points as tuples
    pub fn point_pairs(&self) -> Vec<(i64, i64)> {
        self.points.iter().map(|&[x, y]| (x, y)).collect()
    }
}

/// Fingerprinting configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Coefficients, highest degree first
    pub coefficients: Vec<i64>,
    /// Coefficients of the polynomial compared against
    pub other_coefficients: Vec<i64>,
    /// Fixed evaluation point
    pub point: i64,
    /// Field prime
    pub prime: i64,
    /// Random rounds for the identity test
    pub rounds: usize,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            coefficients: vec![1, 2, 3],
            other_coefficients: vec![1, 2, 4],
            point: 5,
            prime: cryptoplay_zk::DEFAULT_FINGERPRINT_PRIME,
            rounds: 10,
        }
    }
}

/// Largest modulus whose unit group the field panel enumerates
pub const MAX_GROUP_MODULUS: i64 = 10_000;

/// Largest curve modulus; point counting is quadratic in p
pub const MAX_CURVE_MODULUS: i64 = 1_000;

/// Largest |k| for the repeated-addition multiply
pub const MAX_NAIVE_SCALAR: i64 = 10_000;

fn config_error(section: &str, err: impl std::fmt::Display) -> CliError {
    CliError::ConfigError(format!("[{}] {}", section, err))
}

impl PlaygroundConfig {
    /// Loads configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| CliError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Saves configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Rejects values no panel can work with
    pub fn validate(&self) -> Result<()> {
        let math = &self.math;
        if math.modulus < 2 || math.group_modulus < 2 {
            return Err(config_error("math", "moduli must be at least 2"));
        }
        if math.group_modulus > MAX_GROUP_MODULUS {
            return Err(config_error(
                "math",
                format!("group modulus must be at most {}", MAX_GROUP_MODULUS),
            ));
        }
        PrimeField::new(math.field_prime).map_err(|e| config_error("math", e))?;
        if math.primality_candidate < 5 {
            return Err(config_error("math", "primality candidate must be at least 5"));
        }

        let curve = &self.curve;
        if curve.curve[2] > MAX_CURVE_MODULUS || curve.signing_curve[2] > MAX_CURVE_MODULUS {
            return Err(config_error(
                "curve",
                format!("curve moduli must be at most {}", MAX_CURVE_MODULUS),
            ));
        }
        if curve.scalar.unsigned_abs() > MAX_NAIVE_SCALAR as u64 {
            return Err(config_error(
                "curve",
                format!("scalar must lie in [-{0}, {0}]", MAX_NAIVE_SCALAR),
            ));
        }
        self.curve.ecdh_domain().map_err(|e| config_error("curve", e))?;
        self.curve.signing_domain().map_err(|e| config_error("curve", e))?;

        self.hash.algorithm().map_err(|e| config_error("hash", e))?;

        let c = &self.commitment;
        Pedersen::new(c.g, c.h, c.p).map_err(|e| config_error("commitment", e))?;

        let ciphers = &self.ciphers;
        if ciphers.xor_key.is_empty() {
            return Err(config_error("ciphers", "XOR key must not be empty"));
        }
        if ciphers.block_key.len() != cryptoplay_crypto::modes::TOY_BLOCK_SIZE {
            return Err(config_error(
                "ciphers",
                format!("block key must be {} bytes", cryptoplay_crypto::modes::TOY_BLOCK_SIZE),
            ));
        }

        let dh = DhParams::new(self.dh.p, self.dh.g).map_err(|e| config_error("dh", e))?;
        for private in [self.dh.alice_private, self.dh.bob_private].into_iter().flatten() {
            dh.public(private).map_err(|e| config_error("dh", e))?;
        }

        RsaKeyPair::generate(self.rsa.p, self.rsa.q, self.rsa.e).map_err(|e| config_error("rsa", e))?;

        self.sigma.statement().map_err(|e| config_error("sigma", e))?;
        match self.sigma.hash.as_str() {
            "toy" | "sha256" => {}
            other => {
                return Err(config_error(
                    "sigma",
                    format!("hash must be toy or sha256, got {}", other),
                ))
            }
        }

        let shamir = &self.shamir;
        let mut seen = HashSet::new();
        if !shamir.points.iter().all(|[x, _]| seen.insert(*x)) {
            return Err(config_error("shamir", "interpolation points need distinct x"));
        }
        if shamir.threshold < 1 || shamir.shares < shamir.threshold || !is_prime(shamir.prime) {
            return Err(config_error(
                "shamir",
                "need 1 <= threshold <= shares and a prime field",
            ));
        }

        let fp = &self.fingerprint;
        if !is_prime(fp.prime) || fp.rounds == 0 || fp.coefficients.is_empty() {
            return Err(config_error(
                "fingerprint",
                "need a prime field, at least one round and a polynomial",
            ));
        }
        Ok(())
    }
}
