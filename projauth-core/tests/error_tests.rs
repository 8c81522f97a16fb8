//! Unit tests for error types and conversions

use projauth_core::error::{
    AuthError, ConfigError, EnvironmentError, ProjauthError, ProjectError, StoreError,
};

#[test]
fn test_config_error_display() {
    let error = ConfigError::ValidationError {
        message: "bad period".to_string(),
    };
    assert_eq!(error.to_string(), "Configuration validation error: bad period");
}

#[test]
fn test_auth_validation_message_is_verbatim() {
    let error = AuthError::Validation {
        message: "Please fill in all fields".to_string(),
    };
    assert_eq!(error.to_string(), "Please fill in all fields");
}

#[test]
fn test_password_errors_display() {
    assert_eq!(
        AuthError::PasswordMismatch.to_string(),
        "New password and confirm password do not match."
    );
    assert_eq!(
        AuthError::PasswordTooShort { min: 6 }.to_string(),
        "Password must be at least 6 characters long."
    );
}

#[test]
fn test_environment_error_display() {
    assert_eq!(EnvironmentError::InvalidPassword.to_string(), "Invalid password");
}

#[test]
fn test_projauth_error_from_store() {
    let error: ProjauthError = StoreError::Unavailable.into();
    assert!(matches!(error, ProjauthError::Store(_)));
    assert_eq!(error.to_string(), "Store error: Store is unavailable");
}

#[test]
fn test_projauth_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: ProjauthError = io_error.into();
    assert!(matches!(error, ProjauthError::Io(_)));
}

#[test]
fn test_projauth_error_from_toml() {
    let toml_error = toml::from_str::<toml::Table>("invalid toml =").unwrap_err();
    let error: ProjauthError = toml_error.into();
    assert!(matches!(error, ProjauthError::Toml(_)));
}

#[test]
fn test_project_error_converts_and_displays() {
    let error: ProjauthError = ProjectError::NotFound {
        id: "42".to_string(),
    }
    .into();
    assert!(matches!(error, ProjauthError::Project(ProjectError::NotFound { .. })));
    assert_eq!(error.to_string(), "Project error: No project with id 42");
}
