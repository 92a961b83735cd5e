//! End-to-end tests for the `horizon` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from any user config file.
fn horizon(dir: &TempDir) -> Command {
    let config = dir.path().join("horizon.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = Command::cargo_bin("horizon").unwrap();
    cmd.env("HORIZON_CONFIG", &config).env_remove("RUST_LOG");
    cmd
}

fn write_json_curve(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("curve.json");
    fs::write(
        &path,
        r#"[
            {"tenor": 10, "rate": 4.6},
            {"tenor": 0.5, "rate": 4.1},
            {"tenor": 2, "rate": 4.3}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn test_price_golden_minimal() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["price", "--coupon", "5", "--maturity", "10", "--flat", "5", "--format", "minimal"])
        .assert()
        .success()
        .stdout("100.476722\n");
}

#[test]
fn test_price_json_report() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["price", "-c", "5", "-m", "10", "--flat", "5", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cleanPrice\""))
        .stdout(predicate::str::contains("\"modifiedDuration\""))
        .stdout(predicate::str::contains("\"couponRate\": 5.0"));
}

#[test]
fn test_price_table_has_risk_rows() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["price", "-c", "4", "-m", "7", "--elapsed", "0.3", "--flat", "4.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accrued Interest"))
        .stdout(predicate::str::contains("DV01"));
}

#[test]
fn test_matured_bond_prices_at_face() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["price", "-c", "5", "-m", "2", "--elapsed", "3", "--flat", "4", "--format", "minimal"])
        .assert()
        .success()
        .stdout("100.000000\n");
}

#[test]
fn test_price_before_issue_accepts_negative_elapsed() {
    let dir = TempDir::new().unwrap();
    // Half a year before issue: 21 semi-annual flows, first in 0.5y
    horizon(&dir)
        .args(["price", "-c", "5", "-m", "10", "--elapsed", "-0.5", "--flat", "5", "--format", "minimal"])
        .assert()
        .success()
        .stdout("100.494991\n");
}

#[test]
fn test_price_rejects_bad_frequency() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["price", "-c", "5", "-m", "10", "--frequency", "3", "--flat", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("frequency"));
}

#[test]
fn test_price_requires_a_curve() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["price", "-c", "5", "-m", "10"])
        .assert()
        .failure();
}

#[test]
fn test_rate_from_curve_file_hits_nodes() {
    let dir = TempDir::new().unwrap();
    let curve = write_json_curve(&dir);
    horizon(&dir)
        .args(["rate", "--curve"])
        .arg(&curve)
        .args(["--tenors", "0.1,2,40", "--format", "minimal"])
        .assert()
        .success()
        .stdout("4.100000\n4.300000\n4.600000\n");
}

#[test]
fn test_rate_from_toml_curve() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("curve.toml");
    fs::write(
        &path,
        "points = [\n  { tenor = 1.0, rate = 3.0 },\n  { tenor = 5.0, rate = 4.0 },\n]\n",
    )
    .unwrap();

    horizon(&dir)
        .args(["rate", "--curve"])
        .arg(&path)
        .args(["--tenors", "5", "--format", "minimal"])
        .assert()
        .success()
        .stdout("4.000000\n");
}

#[test]
fn test_rate_rejects_duplicate_tenors() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["rate", "--points", "1:3,1:3.5", "--tenors", "1"])
        .assert()
        .failure();
}

#[test]
fn test_attribute_with_scenario() {
    let dir = TempDir::new().unwrap();
    let curve = write_json_curve(&dir);
    horizon(&dir)
        .args(["attribute", "-c", "4.5", "-m", "10", "--curve-start"])
        .arg(&curve)
        .args(["--scenario", "steepener:25:25:5", "--horizon", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shapeReturn\""))
        .stdout(predicate::str::contains("\"rolldownReturn\""));
}

#[test]
fn test_attribute_table() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args([
            "attribute", "-c", "5", "-m", "5", "--flat-start", "4", "--flat-end", "4.5", "--horizon", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duration Return"))
        .stdout(predicate::str::contains("Annualized Return"));
}

#[test]
fn test_attribute_requires_end_curve() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["attribute", "-c", "5", "-m", "5", "--flat-start", "4"])
        .assert()
        .failure();
}

#[test]
fn test_attribute_rejects_bad_scenario() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["attribute", "-c", "5", "-m", "5", "--flat-start", "4", "--scenario", "twist:5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scenario"));
}

#[test]
fn test_attribute_negative_horizon_is_invalid() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args(["attribute", "-c", "5", "-m", "10", "--flat-start", "4", "--flat-end", "4.5"])
        .args(["--horizon", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid horizon"));
}

#[test]
fn test_sweep_csv() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .args([
            "sweep", "-c", "4", "-m", "10", "--flat-start", "4", "--scenario", "parallel:50",
            "--horizons", "0.5,1,2", "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("horizon,endPrice,"))
        .stdout(predicate::str::contains("\n2.0,"));
}

#[test]
fn test_config_from_file_sets_precision() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("horizon.toml"), "[output]\nprecision = 2\nformat = \"minimal\"\n").unwrap();

    horizon(&dir)
        .args(["price", "-c", "5", "-m", "10", "--flat", "5"])
        .assert()
        .success()
        .stdout("100.48\n");
}

#[test]
fn test_config_rejects_bad_solver_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("horizon.toml"), "[solver]\nmax_iterations = 0\n").unwrap();

    horizon(&dir)
        .args(["price", "-c", "5", "-m", "10", "--flat", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_iterations"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("horizon.toml");

    Command::cargo_bin("horizon")
        .unwrap()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    Command::cargo_bin("horizon")
        .unwrap()
        .args(["config", "show", "--format", "json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_iterations\": 20"));

    Command::cargo_bin("horizon")
        .unwrap()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
