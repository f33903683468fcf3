// src/panels/mod.rs

//! One function per subcommand, each turning configuration into a [`Report`].

pub mod crypto;
pub mod curves;
pub mod math;
pub mod zk;

use crate::cli::Command;
use crate::config::PlaygroundConfig;
use crate::errors::{CliError, Result};
use crate::report::Report;
use rand::Rng;
use tracing::debug;

/// Runs the panel behind `command`
pub fn run<R: Rng + ?Sized>(
    command: &Command,
    config: &PlaygroundConfig,
    rng: &mut R,
) -> Result<Report> {
    debug!(?command, "Running panel");
    match command {
        Command::Math { .. } => math::modular(&config.math),
        Command::Field { .. } => math::field(&config.math),
        Command::Primes { .. } => math::primality(&config.math),
        Command::Lagrange { .. } => math::lagrange(&config.shamir),
        Command::Shamir { .. } => math::shamir(&config.shamir, rng),
        Command::Curve { .. } => curves::points(&config.curve),
        Command::Ecdh { .. } => curves::ecdh(&config.curve),
        Command::Ecdsa { .. } => curves::ecdsa(&config.curve),
        Command::Hash { .. } => crypto::hash(&config.hash),
        Command::Mac { .. } => crypto::mac(&config.mac),
        Command::Commit { .. } => crypto::commitment(&config.commitment, rng),
        Command::Ciphers { .. } => crypto::ciphers(&config.ciphers, rng),
        Command::Modes { .. } => crypto::modes(&config.ciphers, rng),
        Command::Aes { .. } => crypto::aes(&config.ciphers, rng),
        Command::Dh { .. } => crypto::dh(&config.dh, rng),
        Command::Rsa { .. } => crypto::rsa(&config.rsa),
        Command::Sign { .. } => crypto::sign(&config.signature, rng),
        Command::Sigma { .. } => zk::sigma(&config.sigma, rng),
        Command::FiatShamir { .. } => zk::fiat_shamir(&config.sigma, rng),
        Command::Fingerprint { .. } => zk::fingerprint(&config.fingerprint, rng),
        Command::DefaultConfig { .. } => Err(CliError::InvalidArgument(
            "default-config does not produce a report".to_string(),
        )),
    }
}

/// "yes" or "no"
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Comma-separated list
pub(crate) fn join<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
