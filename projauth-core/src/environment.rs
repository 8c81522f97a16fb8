//! Backend environment selection
//!
//! The app can point at a development, validation or production backend.
//! Only the base URL is derived from the choice; nothing is contacted.
//! Switching environments sits behind a fixed password gate.

use crate::error::EnvironmentError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Password required to change the active environment
const ENV_PASSWORD: &str = "admin123";

/// Backend environment
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Val,
    #[default]
    Prod,
}

impl Environment {
    /// All environments in selection order
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Val, Environment::Prod];

    /// Short identifier used in config files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Val => "val",
            Environment::Prod => "prod",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Environment::Dev => "Development",
            Environment::Val => "Validation",
            Environment::Prod => "Production",
        }
    }

    /// Base URL of the backend for this environment
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Dev => "https://devjwtauth.jwtechinc.com",
            Environment::Val => "https://valjwtauth.jwtechinc.com",
            Environment::Prod => "https://jwtauth.jwtechinc.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Dev),
            "val" | "validation" => Ok(Environment::Val),
            "prod" | "production" => Ok(Environment::Prod),
            _ => Err(EnvironmentError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}

/// Check the environment selection password
pub fn validate_env_password(password: &SecretString) -> bool {
    password.expose_secret() == ENV_PASSWORD
}

/// Validate the password and return the requested environment
pub fn unlock_environment(
    requested: Environment,
    password: &SecretString,
) -> Result<Environment, EnvironmentError> {
    if validate_env_password(password) {
        Ok(requested)
    } else {
        tracing::warn!(environment = %requested, "Rejected environment change: invalid password");
        Err(EnvironmentError::InvalidPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_exact_match() {
        assert!(validate_env_password(&SecretString::new("admin123".to_string())));
        assert!(!validate_env_password(&SecretString::new("admin123 ".to_string())));
        assert!(!validate_env_password(&SecretString::new("ADMIN123".to_string())));
        assert!(!validate_env_password(&SecretString::new(String::new())));
    }

    #[test]
    fn test_parse_long_names() {
        assert_eq!("Development".parse::<Environment>(), Ok(Environment::Dev));
        assert_eq!(" val ".parse::<Environment>(), Ok(Environment::Val));
    }
}
