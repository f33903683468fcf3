// src/runner.rs

//! Ties parsed arguments, configuration and panels together.

use crate::cli::{Cli, Command};
use crate::config::PlaygroundConfig;
use crate::errors::Result;
use crate::panels;
use rand::Rng;
use tracing::{debug, info};

/// Loads the configuration named on the command line, or the defaults
pub fn load_config(cli: &Cli) -> Result<PlaygroundConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            PlaygroundConfig::from_file(path)?
        }
        None => PlaygroundConfig::default(),
    };
    cli.command.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Runs the requested command and returns what should be printed
pub fn execute<R: Rng + ?Sized>(cli: &Cli, rng: &mut R) -> Result<String> {
    if let Command::DefaultConfig { output } = &cli.command {
        let config = PlaygroundConfig::default();
        return match output {
            Some(path) => {
                config.save_to_file(path)?;
                info!(path = %path.display(), "Wrote default configuration");
                Ok(format!("Wrote default configuration to {}\n", path.display()))
            }
            None => Ok(format!("{}\n", serde_json::to_string_pretty(&config)?)),
        };
    }

    let config = load_config(cli)?;
    let report = panels::run(&cli.command, &config, rng)?;
    debug!(title = %report.title, entries = report.entries.len(), "Panel finished");
    if cli.json {
        Ok(format!("{}\n", report.to_json()?))
    } else {
        Ok(report.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rand::{rngs::StdRng, SeedableRng};

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        execute(&cli, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_text_output() {
        let out = run(&["cryptoplay", "rsa"]).unwrap();
        assert!(out.starts_with("== Textbook RSA ==\n"));
        assert!(out.contains("Steps:\n  1. Choose primes p = 61 and q = 53\n"));
    }

    #[test]
    fn test_json_output() {
        let out = run(&["cryptoplay", "--json", "lagrange"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Lagrange Interpolation");
    }

    #[test]
    fn test_default_config_to_stdout() {
        let out = run(&["cryptoplay", "default-config"]).unwrap();
        let config: PlaygroundConfig = serde_json::from_str(&out).unwrap();
        assert_eq!(config, PlaygroundConfig::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        assert!(run(&["cryptoplay", "rsa", "--p", "60"]).is_err());
        assert!(run(&["cryptoplay", "math", "--modulus", "1"]).is_err());
    }

    #[test]
    fn test_same_seed_same_output() {
        assert_eq!(run(&["cryptoplay", "sigma"]).unwrap(), run(&["cryptoplay", "sigma"]).unwrap());
    }
}
