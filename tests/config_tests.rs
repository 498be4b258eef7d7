//! Integration tests for configuration loading.
//!
//! These tests write config files in each supported format and verify
//! the values that reach the collector.

use std::fs;
use std::path::PathBuf;

use swapview::config::{load_config, validate_effective_config};
use swapview::ReportFormat;
use tempfile::TempDir;

#[test]
fn test_load_yaml_with_dashed_keys() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swapview.yaml");
    fs::write(&path, "proc-root: /host/proc\nparallelism: 4\nlog-level: debug\n").unwrap();

    let cfg = load_config(Some(path.as_path())).unwrap();
    assert_eq!(cfg.proc_root(), PathBuf::from("/host/proc"));
    assert_eq!(cfg.parallelism(), 4);
    assert_eq!(cfg.output(), ReportFormat::Table);
    assert!(validate_effective_config(&cfg).is_ok());
}

#[test]
fn test_load_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swapview.json");
    fs::write(&path, r#"{"output": "json", "parallelism": 2}"#).unwrap();

    let cfg = load_config(Some(path.as_path())).unwrap();
    assert_eq!(cfg.output(), ReportFormat::Json);
    assert_eq!(cfg.parallelism(), 2);
    // Unset keys fall back to defaults
    assert_eq!(cfg.proc_root(), PathBuf::from("/proc"));
}

#[test]
fn test_load_toml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swapview.toml");
    fs::write(&path, "proc_root = \"/tmp/p\"\nlog_level = \"trace\"\n").unwrap();

    let cfg = load_config(Some(path.as_path())).unwrap();
    assert_eq!(cfg.proc_root(), PathBuf::from("/tmp/p"));
    assert_eq!(cfg.log_level.as_deref(), Some("trace"));
}

#[test]
fn test_invalid_values_fail_validation() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swapview.yaml");
    fs::write(&path, "parallelism: 5000\n").unwrap();

    let cfg = load_config(Some(path.as_path())).unwrap();
    assert!(validate_effective_config(&cfg).is_err());
}

#[test]
fn test_unknown_output_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("swapview.yaml");
    fs::write(&path, "output: csv\n").unwrap();

    assert!(load_config(Some(path.as_path())).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(load_config(Some(tmp.path().join("nope.yaml").as_path())).is_err());
}
