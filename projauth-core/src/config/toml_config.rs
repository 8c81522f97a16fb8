//! TOML configuration file I/O
//!
//! Handles loading and saving the application configuration to/from a TOML
//! file in the user's configuration directory.

use crate::config::AppConfig;
use crate::error::{ConfigError, ProjauthError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "PROJAUTH_CONFIG_DIR";

/// Get the default configuration directory
///
/// Returns ~/.config/projauth, or PROJAUTH_CONFIG_DIR if set
pub fn get_config_dir() -> Result<PathBuf, ProjauthError> {
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        ProjauthError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("projauth"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, ProjauthError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default TOML file
///
/// A missing file yields the default configuration.
pub fn load_config() -> Result<AppConfig, ProjauthError> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }
    load_config_from_path(&config_path)
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<AppConfig, ProjauthError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ProjauthError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => ProjauthError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| {
        ProjauthError::Config(ConfigError::ValidationError {
            message: format!("Failed to parse config file: {}", e),
        })
    })?;

    config
        .validate()
        .map_err(|e| ProjauthError::Config(ConfigError::ValidationError { message: e }))?;

    debug!(
        environment = %config.environment,
        length = config.code.length.get(),
        period = config.code.period_secs,
        "Loaded configuration"
    );

    Ok(config)
}

/// Save configuration to the default TOML file
pub fn save_config(config: &AppConfig) -> Result<(), ProjauthError> {
    let config_path = get_config_path()?;
    save_config_to_path(config, &config_path)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ProjauthError> {
    config
        .validate()
        .map_err(|e| ProjauthError::Config(ConfigError::ValidationError { message: e }))?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ProjauthError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let toml_string = toml::to_string_pretty(config)?;

    std::fs::write(&path, toml_string).map_err(|_e| {
        ProjauthError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    info!("Saved configuration to {:?}", path.as_ref());
    Ok(())
}
