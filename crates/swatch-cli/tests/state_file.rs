//! Apply/init round trips through a JSON state file.

use std::fs;

use clap::Parser;
use swatch_cli::{run, Cli};
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("swatch").chain(args.iter().copied()))?;
    run(cli)
}

#[test]
fn apply_then_init_restores_theme() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    let state = state.to_str().unwrap();

    let out = run_args(&["apply", "roka", "--state", state]).unwrap();
    assert!(out.starts_with("applied roka\n"));
    assert!(out.contains("--color-primary: #d4af37;"));

    let out = run_args(&["init", "--state", state]).unwrap();
    assert!(out.starts_with("applied roka\n"));
}

#[test]
fn init_server_value_overrides_state() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    fs::write(&state, r#"{"theme": "roka"}"#).unwrap();

    let out = run_args(&["init", "--server", "midnight", "--state", state.to_str().unwrap()]).unwrap();
    assert!(out.starts_with("applied midnight\n"));

    let saved = fs::read_to_string(&state).unwrap();
    assert!(saved.contains("\"theme\": \"midnight\""));
}

#[test]
fn init_without_state_applies_default() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    let out = run_args(&["init", "--state", state.to_str().unwrap()]).unwrap();
    assert!(out.starts_with("applied classic\n"));
}

#[test]
fn apply_unknown_persists_requested_name() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    let out = run_args(&["apply", "sepia", "--state", state.to_str().unwrap()]).unwrap();
    assert!(out.starts_with("applied classic\n"));

    let saved = fs::read_to_string(&state).unwrap();
    assert!(saved.contains("\"theme\": \"sepia\""));
}

#[test]
fn configured_key_and_default_are_used() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    let config = dir.path().join("swatch.yaml");
    fs::write(&config, "storage_key: site-theme\ndefault_theme: midnight\n").unwrap();

    let out = run_args(&[
        "init",
        "--state",
        state.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    assert!(out.starts_with("applied midnight\n"));

    let saved = fs::read_to_string(&state).unwrap();
    assert!(saved.contains("\"site-theme\": \"midnight\""));
}

#[test]
fn malformed_state_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    fs::write(&state, "not json").unwrap();

    let err = run_args(&["init", "--state", state.to_str().unwrap()]).unwrap_err();
    assert!(format!("{err:#}").contains("malformed"));
}
