// src/main.rs

//! Cryptoplay binary entry point.

use anyhow::Context;
use clap::Parser;
use cryptoplay_cli::{runner, Cli};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!("Cryptoplay {}", cryptoplay_cli::CLI_VERSION);

    let mut rng = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded randomness");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let output = runner::execute(&cli, &mut rng).context("panel failed")?;
    print!("{}", output);
    Ok(())
}
