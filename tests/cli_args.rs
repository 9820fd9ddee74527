//! Tests for CLI argument parsing, run against the built binary.

mod common;

use common::temp_file;
use std::process::Command;

fn vitrine_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vitrine"));
    // Keep the user's own config out of the way.
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("vitrine-tests-no-config"));
    cmd.env("HOME", std::env::temp_dir().join("vitrine-tests-no-home"));
    cmd
}

#[test]
fn test_help_lists_options() {
    let output = vitrine_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--catalog"));
    assert!(stdout.contains("--snapshot"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_snapshot_prints_screen() {
    let output = vitrine_cmd()
        .args(["--snapshot", "--width", "90", "--height", "40"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 40);
    assert!(stdout.contains("Produits phares"));
    assert!(stdout.contains("Favoris : 0"));
    assert!(stdout.contains("Panier : 0 article(s)"));
}

#[test]
fn test_snapshot_uses_product_file() {
    let (_dir, path) = temp_file(
        "products.toml",
        r#"
[[catalog]]
id = "desk"
name = "Bureau Assis-Debout"
price = "399,00 €"
"#,
    );
    let output = vitrine_cmd()
        .arg("--snapshot")
        .arg("--catalog")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bureau Assis-Debout"));
    assert!(!stdout.contains("Casque Audio Élite"));
}

#[test]
fn test_missing_product_file_exits_with_error() {
    let output = vitrine_cmd()
        .args(["--snapshot", "--catalog", "/nonexistent/products.toml"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read product file"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_file("config.toml", "[ui]\nscroll_step = 0\n");
    let output = vitrine_cmd()
        .arg("--snapshot")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}
