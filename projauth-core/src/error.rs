//! Error types for the projauth authenticator
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.
//! Display code operations are infallible and have no error type.

use thiserror::Error;

/// Main error type for the projauth application
#[derive(Error, Debug)]
pub enum ProjauthError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to the local session store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to mock authentication and form validation
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Errors related to environment selection
    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentError),

    /// Errors related to the scanned project list
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Local key-value store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store file: {path}")]
    ReadFailed { path: String },

    #[error("Failed to write store file: {path}")]
    WriteFailed { path: String },

    #[error("Store contents are corrupt: {message}")]
    Corrupt { message: String },

    #[error("Store is unavailable")]
    Unavailable,
}

/// Mock authentication errors
///
/// Validation variants carry the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{message}")]
    Validation { message: String },

    #[error("New password and confirm password do not match.")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("Stored session is malformed: {reason}")]
    MalformedSession { reason: String },

    #[error("Not logged in")]
    NotLoggedIn,
}

/// Environment selection errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("Unknown environment: {name}")]
    Unknown { name: String },

    #[error("Invalid password")]
    InvalidPassword,
}

/// Scanned project errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("No project with id {id}")]
    NotFound { id: String },

    #[error("Project {id} has already been scanned")]
    AlreadyExists { id: String },

    #[error("Scanned code is empty")]
    EmptyPayload,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProjauthError>;
