// src/cli.rs

//! Command-line arguments.

use crate::config::PlaygroundConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cryptography playground
#[derive(Parser, Debug)]
#[command(name = "cryptoplay", version, about = "Toy-parameter cryptography playground")]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Seed for every random choice, for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Panel to run
    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per panel
///
/// Flags override the matching configuration value for this run only.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Modular arithmetic, gcd and inverses
    Math {
        /// First operand
        #[arg(long, allow_negative_numbers = true)]
        a: Option<i64>,
        /// Second operand
        #[arg(long, allow_negative_numbers = true)]
        b: Option<i64>,
        /// Modulus
        #[arg(long)]
        modulus: Option<i64>,
        /// Exponent
        #[arg(long)]
        exponent: Option<u64>,
    },
    /// Prime field tables and the group of units
    Field {
        /// Field prime
        #[arg(long)]
        prime: Option<i64>,
        /// Modulus of the unit group
        #[arg(long)]
        group_modulus: Option<i64>,
    },
    /// Fermat and Miller-Rabin side by side
    Primes {
        /// Candidate
        candidate: Option<i64>,
        /// Witness base
        #[arg(long)]
        witness: Option<i64>,
    },
    /// Point addition, doubling and scalar multiplication
    Curve {
        /// Scalar for kP
        #[arg(long, allow_negative_numbers = true)]
        scalar: Option<i64>,
    },
    /// Elliptic-curve Diffie-Hellman
    Ecdh {
        /// Alice's scalar
        #[arg(long)]
        alice: Option<i64>,
        /// Bob's scalar
        #[arg(long)]
        bob: Option<i64>,
    },
    /// Toy ECDSA sign and verify
    Ecdsa {
        /// Message to sign
        message: Option<String>,
        /// Nonce k
        #[arg(long)]
        nonce: Option<i64>,
    },
    /// Every hash function on one input
    Hash {
        /// Text to hash
        input: Option<String>,
        /// Highlighted algorithm
        #[arg(long)]
        algorithm: Option<String>,
    },
    /// HMAC tag, verification and tampering
    Mac {
        /// Message
        message: Option<String>,
        /// Shared key
        #[arg(long)]
        key: Option<String>,
    },
    /// Hash and Pedersen commitments
    Commit {
        /// Secret for the hash commitment
        secret: Option<String>,
    },
    /// Caesar, XOR and one-time pad
    Ciphers {
        /// Caesar plaintext
        text: Option<String>,
        /// Caesar shift
        #[arg(long)]
        shift: Option<u32>,
    },
    /// ECB against CBC on repeating plaintext
    Modes {
        /// Plaintext
        plaintext: Option<String>,
    },
    /// AES-256-GCM round trip
    Aes {
        /// Plaintext
        plaintext: Option<String>,
    },
    /// Finite-field Diffie-Hellman and the X25519 reference
    Dh {
        /// Alice's exponent
        #[arg(long)]
        alice: Option<i64>,
        /// Bob's exponent
        #[arg(long)]
        bob: Option<i64>,
    },
    /// Textbook RSA
    Rsa {
        /// Message representative
        #[arg(long)]
        message: Option<i64>,
        /// First prime
        #[arg(long)]
        p: Option<i64>,
        /// Second prime
        #[arg(long)]
        q: Option<i64>,
        /// Public exponent
        #[arg(long)]
        e: Option<i64>,
    },
    /// Ed25519 sign and verify
    Sign {
        /// Message to sign
        message: Option<String>,
    },
    /// Interactive sigma protocol for discrete log
    Sigma {
        /// Prover's secret
        #[arg(long)]
        secret: Option<i64>,
    },
    /// Non-interactive proof via Fiat-Shamir
    FiatShamir {
        /// Prover's secret
        #[arg(long)]
        secret: Option<i64>,
        /// Oracle hash: toy or sha256
        #[arg(long)]
        hash: Option<String>,
    },
    /// Lagrange interpolation
    Lagrange {
        /// Evaluation point
        #[arg(long, allow_negative_numbers = true)]
        x: Option<i64>,
    },
    /// Shamir secret sharing
    Shamir {
        /// Secret
        #[arg(long)]
        secret: Option<i64>,
        /// Shares needed
        #[arg(long)]
        threshold: Option<usize>,
        /// Shares issued
        #[arg(long)]
        shares: Option<usize>,
    },
    /// Polynomial fingerprinting
    Fingerprint {
        /// Random rounds for the identity test
        #[arg(long)]
        rounds: Option<usize>,
    },
    /// Print or write the default configuration
    DefaultConfig {
        /// Output path; stdout when absent
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

impl Command {
    /// Copies every flag the user gave into `config`
    pub fn apply_overrides(&self, config: &mut PlaygroundConfig) {
        match self {
            Command::Math { a, b, modulus, exponent } => {
                set(&mut config.math.a, a);
                set(&mut config.math.b, b);
                set(&mut config.math.modulus, modulus);
                set(&mut config.math.exponent, exponent);
            }
            Command::Field { prime, group_modulus } => {
                set(&mut config.math.field_prime, prime);
                set(&mut config.math.group_modulus, group_modulus);
            }
            Command::Primes { candidate, witness } => {
                set(&mut config.math.primality_candidate, candidate);
                set(&mut config.math.primality_witness, witness);
            }
            Command::Curve { scalar } => set(&mut config.curve.scalar, scalar),
            Command::Ecdh { alice, bob } => {
                set(&mut config.curve.alice_private, alice);
                set(&mut config.curve.bob_private, bob);
            }
            Command::Ecdsa { message, nonce } => {
                set(&mut config.curve.message, message);
                set(&mut config.curve.signing_nonce, nonce);
            }
            Command::Hash { input, algorithm } => {
                set(&mut config.hash.input, input);
                set(&mut config.hash.algorithm, algorithm);
            }
            Command::Mac { message, key } => {
                set(&mut config.mac.message, message);
                set(&mut config.mac.key, key);
            }
            Command::Commit { secret } => set(&mut config.commitment.secret, secret),
            Command::Ciphers { text, shift } => {
                set(&mut config.ciphers.caesar_plaintext, text);
                set(&mut config.ciphers.caesar_shift, shift);
            }
            Command::Modes { plaintext } => set(&mut config.ciphers.block_plaintext, plaintext),
            Command::Aes { plaintext } => set(&mut config.ciphers.aes_plaintext, plaintext),
            Command::Dh { alice, bob } => {
                if alice.is_some() {
                    config.dh.alice_private = *alice;
                }
                if bob.is_some() {
                    config.dh.bob_private = *bob;
                }
            }
            Command::Rsa { message, p, q, e } => {
                set(&mut config.rsa.message, message);
                set(&mut config.rsa.p, p);
                set(&mut config.rsa.q, q);
                set(&mut config.rsa.e, e);
            }
            Command::Sign { message } => set(&mut config.signature.message, message),
            Command::Sigma { secret } => set(&mut config.sigma.secret, secret),
            Command::FiatShamir { secret, hash } => {
                set(&mut config.sigma.secret, secret);
                set(&mut config.sigma.hash, hash);
            }
            Command::Lagrange { x } => set(&mut config.shamir.interpolation_x, x),
            Command::Shamir { secret, threshold, shares } => {
                set(&mut config.shamir.secret, secret);
                set(&mut config.shamir.threshold, threshold);
                set(&mut config.shamir.shares, shares);
            }
            Command::Fingerprint { rounds } => set(&mut config.fingerprint.rounds, rounds),
            Command::DefaultConfig { .. } => {}
        }
    }
}
