// tests/config_files.rs

use clap::Parser;
use cryptoplay_cli::{runner, Cli, CliError, PlaygroundConfig};
use rand::{rngs::StdRng, SeedableRng};
use tempfile::TempDir;

fn run(args: &[&str]) -> cryptoplay_cli::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    runner::execute(&cli, &mut StdRng::seed_from_u64(3))
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("playground.json");

    let mut config = PlaygroundConfig::default();
    config.rsa.message = 123;
    config.sigma.hash = "sha256".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = PlaygroundConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_default_config_written_then_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("defaults.json");
    let path_str = path.to_str().unwrap();

    let out = run(&["cryptoplay", "default-config", "--output", path_str]).unwrap();
    assert!(out.starts_with("Wrote default configuration"));

    let out = run(&["cryptoplay", "--config", path_str, "rsa"]).unwrap();
    assert!(out.contains("(3233, 17)"));
}

#[test]
fn test_partial_file_overrides_one_panel() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{ "shamir": { "points": [[0, 1], [1, 3]], "interpolation_x": 2 } }"#).unwrap();

    let out = run(&["cryptoplay", "--json", "--config", path.to_str().unwrap(), "lagrange"]).unwrap();
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    // Line through (0, 1) and (1, 3)
    let entries = report["entries"].as_array().unwrap();
    assert!(entries
        .iter()
        .any(|e| e["label"] == "P(2)" && e["value"] == "5"));
}

#[test]
fn test_command_flags_beat_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rsa.json");
    std::fs::write(&path, r#"{ "rsa": { "message": 100 } }"#).unwrap();
    let path_str = path.to_str().unwrap();

    let out = run(&["cryptoplay", "--config", path_str, "rsa"]).unwrap();
    assert!(out.contains("Message m"));
    assert!(out.contains("100"));

    let out = run(&["cryptoplay", "--config", path_str, "rsa", "--message", "65"]).unwrap();
    assert!(out.contains("2790"));
}

#[test]
fn test_bad_files_rejected() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.json");
    let err = run(&["cryptoplay", "--config", missing.to_str().unwrap(), "math"]).unwrap_err();
    assert!(matches!(err, CliError::IoError(_)));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json").unwrap();
    let err = run(&["cryptoplay", "--config", garbage.to_str().unwrap(), "math"]).unwrap_err();
    assert!(matches!(err, CliError::ConfigError(_)));

    let invalid = dir.path().join("invalid.json");
    std::fs::write(&invalid, r#"{ "dh": { "p": 24 } }"#).unwrap();
    let err = run(&["cryptoplay", "--config", invalid.to_str().unwrap(), "dh"]).unwrap_err();
    assert!(matches!(err, CliError::ConfigError(msg) if msg.starts_with("[dh]")));
}
