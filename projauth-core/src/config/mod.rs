//! Configuration module
//!
//! Handles the application settings: the default display code shape and
//! the selected backend environment.

use crate::environment::Environment;
use crate::types::{CodeLength, DEFAULT_PERIOD_SECS, MAX_CONFIG_CODE_LENGTH};
use serde::{Deserialize, Serialize};

pub mod toml_config;

/// Upper bound for the regeneration period
pub const MAX_PERIOD_SECS: u32 = 3600;

/// Display code settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConfig {
    /// Number of digits in the display code
    #[serde(default)]
    pub length: CodeLength,

    /// Seconds between automatic regenerations
    #[serde(default = "default_period_secs")]
    pub period_secs: u32,
}

fn default_period_secs() -> u32 {
    DEFAULT_PERIOD_SECS
}

impl CodeConfig {
    /// Validate the code settings
    pub fn validate(&self) -> Result<(), String> {
        if self.length.get() > MAX_CONFIG_CODE_LENGTH {
            return Err(format!(
                "Code length must be between 1 and {}",
                MAX_CONFIG_CODE_LENGTH
            ));
        }

        if self.period_secs == 0 || self.period_secs > MAX_PERIOD_SECS {
            return Err(format!(
                "Code period must be between 1 and {} seconds",
                MAX_PERIOD_SECS
            ));
        }

        Ok(())
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            length: CodeLength::default(),
            period_secs: DEFAULT_PERIOD_SECS,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected backend environment
    #[serde(default)]
    pub environment: Environment,

    /// Display code settings
    #[serde(default)]
    pub code: CodeConfig,
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.code.validate()
    }
}
