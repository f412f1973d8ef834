//! Integration tests for ladder-config
//!
//! These tests load table files from disk the way the CLI does.

use ladder_config::{ConfigError, Registry, TableFile};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("tables.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_sample_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/tables.toml");
    let registry = Registry::load(&path).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.lookup("team_size", 2.0).unwrap().map(String::as_str),
        Some("team")
    );
    assert_eq!(
        registry.lookup("team_size", 100_000.0).unwrap().map(String::as_str),
        Some("enterprise")
    );
    assert_eq!(registry.lookup("team_size", 0.0).unwrap(), None);

    let latency = registry.table("p95_latency_ms").unwrap();
    assert_eq!(latency.map.gaps(), vec![(&1000.0, &2000.0)]);
    assert_eq!(registry.lookup("p95_latency_ms", 1500.0).unwrap(), None);
}

#[test]
fn test_load_from_tempfile() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        r#"
        [tables.score]
        description = "Score buckets"

        [[tables.score.ranges]]
        min = 0.5
        max = 1.0
        value = "high"

        [[tables.score.ranges]]
        min = 0.0
        max = 0.5
        value = "low"
        "#,
    );

    let file = TableFile::from_file(&path).unwrap();
    let registry = file.build().unwrap();
    let table = registry.table("score").unwrap();
    assert_eq!(table.description.as_deref(), Some("Score buckets"));
    assert_eq!(table.map.min(), "low");
    assert_eq!(table.map.max(), "high");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = Registry::load(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_invalid_table_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        r#"
        [[tables.good.ranges]]
        min = 0
        max = 1
        value = "a"

        [[tables.bad.ranges]]
        min = 0
        max = 10
        value = "a"

        [[tables.bad.ranges]]
        min = 9
        max = 12
        value = "b"
        "#,
    );

    let err = Registry::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Invalid table 'bad'"), "{}", err);
}
