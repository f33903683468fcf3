// src/lib.rs

//! # Cryptoplay CLI
//!
//! Command-line front end for the playground crates. Each subcommand runs
//! one panel and prints a [`Report`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        cryptoplay (binary)              │
//! ├─────────────────────────────────────────┤
//! │  Cli  │  PlaygroundConfig  │  Report    │
//! ├───────┴────────────────────┴────────────┤
//! │              Panels                     │
//! ├──────────┬──────────┬─────────┬─────────┤
//! │  math    │  curves  │ crypto  │   zk    │
//! └──────────┴──────────┴─────────┴─────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use clap::Parser;
//! use cryptoplay_cli::{runner, Cli};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let cli = Cli::parse_from(["cryptoplay", "lagrange", "--x", "5"]);
//! let output = runner::execute(&cli, &mut StdRng::seed_from_u64(0)).unwrap();
//! assert!(output.contains("P(5)"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod errors;
pub mod panels;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use crate::cli::{Cli, Command};
pub use crate::config::PlaygroundConfig;
pub use crate::errors::{CliError, Result};
pub use crate::report::Report;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
