//! Unit tests for application configuration
//!
//! Tests defaults, validation and TOML parsing of AppConfig.

use projauth_core::config::toml_config::{load_config_from_path, save_config_to_path};
use projauth_core::config::{AppConfig, CodeConfig};
use projauth_core::environment::Environment;
use projauth_core::error::{ConfigError, ProjauthError};
use projauth_core::types::CodeLength;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.environment, Environment::Prod);
    assert_eq!(config.code.length, CodeLength::new(6));
    assert_eq!(config.code.period_secs, 30);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "environment = \"dev\"\n").unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.environment, Environment::Dev);
    assert_eq!(config.code, CodeConfig::default());
}

#[test]
fn test_full_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
environment = "val"

[code]
length = 10
period_secs = 60
"#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.environment, Environment::Val);
    assert_eq!(config.code.length, CodeLength::new(10));
    assert_eq!(config.code.period_secs, 60);
}

#[test]
fn test_zero_length_in_file_is_clamped() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[code]\nlength = 0\n").unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.code.length, CodeLength::new(1));
}

#[test]
fn test_invalid_period_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[code]\nperiod_secs = 0\n").unwrap();

    assert!(matches!(
        load_config_from_path(&path),
        Err(ProjauthError::Config(ConfigError::ValidationError { .. }))
    ));
}

#[test]
fn test_oversized_length_rejected() {
    let config = AppConfig {
        environment: Environment::Prod,
        code: CodeConfig {
            length: CodeLength::new(65),
            period_secs: 30,
        },
    };
    assert_eq!(
        config.validate().unwrap_err(),
        "Code length must be between 1 and 64"
    );

    let temp_dir = tempdir().unwrap();
    assert!(save_config_to_path(&config, temp_dir.path().join("config.toml")).is_err());
}

#[test]
fn test_unknown_environment_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "environment = \"staging\"\n").unwrap();

    assert!(load_config_from_path(&path).is_err());
}
