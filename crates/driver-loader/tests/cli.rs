use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REGISTRY: &str = r#"{
  "plugin-driver:0": {
    "1": "{\"driverId\":1,\"driverCode\":\"mysql\",\"driverVersion\":\"5.1.47\"}",
    "2": {"driverId": 2, "driverCode": "mysql", "driverVersion": "8.0.21"},
    "3": {"driverId": 3, "driverCode": "hive", "driverVersion": "1.2.1"}
  },
  "plugin-driver:1": {
    "4": {"driverId": 4, "driverCode": "hive", "driverVersion": "2.3.7"}
  }
}"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

// Every invocation starts from a clean environment so ambient overrides
// cannot change the outcome.
fn loader_cmd() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("driver-loader")?;
    cmd.env_remove("DRIVER_LOADER_RUN_MODE")
        .env_remove("DRIVER_LOADER_STORE_TYPE")
        .env_remove("DRIVER_LOADER_INIT_LOAD")
        .env_remove("DRIVER_LOADER_STRICT");
    Ok(cmd)
}

#[test]
fn test_plan_star_selects_latest_per_code() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.json", REGISTRY);

    loader_cmd()?
        .arg("--registry")
        .arg(&registry)
        .args(["plan", "*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mysql@8.0.21 (#2) [guarded]"))
        .stdout(predicate::str::contains("hive@2.3.7 (#4) [guarded]"))
        .stdout(predicate::str::contains("mysql@5.1.47").not());

    Ok(())
}

#[test]
fn test_plan_reports_unresolvable_pin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.json", REGISTRY);

    loader_cmd()?
        .arg("--registry")
        .arg(&registry)
        .args(["plan", "hive@1.2.1,oracle@19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hive@1.2.1 (#3) [pinned]"))
        .stdout(predicate::str::contains("unresolvable pin: oracle@19"));

    Ok(())
}

#[test]
fn test_plan_without_registry_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    loader_cmd()?
        .args(["plan", "*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to load."));

    Ok(())
}

#[test]
fn test_load_skips_already_loaded_code() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.json", REGISTRY);

    loader_cmd()?
        .arg("--registry")
        .arg(&registry)
        .args(["load", "mysql,hive", "--loaded", "hive@1.2.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ mysql@8.0.21 (#2)"))
        .stdout(predicate::str::contains("= hive@2.3.7 (#4)"))
        .stdout(predicate::str::contains("Installed: 1, already loaded: 1, failed: 0"));

    Ok(())
}

#[test]
fn test_load_strict_fails_on_unresolved_pin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.json", REGISTRY);
    let config = write_file(dir.path(), "loader.json", r#"{"strict": true}"#);

    loader_cmd()?
        .arg("--config")
        .arg(&config)
        .arg("--registry")
        .arg(&registry)
        .args(["load", "mysql@9.9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Strict mode"));

    Ok(())
}

#[test]
fn test_startup_is_gated_in_dev_mode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.json", REGISTRY);
    let config = write_file(dir.path(), "loader.json", r#"{"init_load": "*"}"#);

    loader_cmd()?
        .arg("--config")
        .arg(&config)
        .arg("--registry")
        .arg(&registry)
        .arg("startup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Init-load skipped by startup gate."));

    Ok(())
}

#[test]
fn test_startup_runs_init_load_when_gate_open() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.json", REGISTRY);
    let config = write_file(dir.path(), "loader.json", r#"{"init_load": "hive"}"#);

    loader_cmd()?
        .env("DRIVER_LOADER_RUN_MODE", "prod")
        .env("DRIVER_LOADER_STORE_TYPE", "minio")
        .arg("--config")
        .arg(&config)
        .arg("--registry")
        .arg(&registry)
        .arg("startup")
        .assert()
        .success()
        .stdout(predicate::str::contains("+ hive@2.3.7 (#4)"))
        .stdout(predicate::str::contains("Installed: 1"));

    Ok(())
}

#[test]
fn test_unreadable_registry_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.ini", "not a registry");

    loader_cmd()?
        .arg("--registry")
        .arg(&registry)
        .args(["plan", "*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load registry"));

    Ok(())
}

#[test]
fn test_rust_log_routes_core_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let registry = write_file(dir.path(), "registry.json", REGISTRY);

    loader_cmd()?
        .env("RUST_LOG", "info")
        .arg("--registry")
        .arg(&registry)
        .args(["load", "mysql"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[dry-run] Would install mysql@8.0.21"))
        .stderr(predicate::str::contains("Failed to initialize env_logger").not());

    Ok(())
}
