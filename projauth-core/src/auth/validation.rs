//! Form validation for the account commands
//!
//! Each check returns the message that is shown to the user on failure.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Minimum length for a new password
pub const MIN_PASSWORD_LENGTH: usize = 6;

fn missing(message: &str) -> AuthError {
    AuthError::Validation {
        message: message.to_string(),
    }
}

/// Login form: email and password must both be present
pub fn validate_login(email: &str, password: &SecretString) -> Result<(), AuthError> {
    if email.is_empty() || password.expose_secret().is_empty() {
        return Err(missing("Please fill in all fields"));
    }
    Ok(())
}

/// Registration form: every field must be present
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &SecretString,
) -> Result<(), AuthError> {
    if first_name.is_empty()
        || last_name.is_empty()
        || email.is_empty()
        || password.expose_secret().is_empty()
    {
        return Err(missing("Please fill in all fields"));
    }
    Ok(())
}

/// Forgot-password form: email must be present
pub fn validate_forgot_password(email: &str) -> Result<(), AuthError> {
    if email.is_empty() {
        return Err(missing("Please enter your email address"));
    }
    Ok(())
}

/// Change-password form
///
/// All fields must be non-blank, the new password must match its
/// confirmation and be at least [`MIN_PASSWORD_LENGTH`] characters long.
pub fn validate_change_password(
    email: &str,
    new_password: &SecretString,
    confirm_password: &SecretString,
) -> Result<(), AuthError> {
    let new_password = new_password.expose_secret();
    let confirm_password = confirm_password.expose_secret();

    if email.trim().is_empty() || new_password.trim().is_empty() || confirm_password.trim().is_empty()
    {
        return Err(missing("Please fill in all fields."));
    }

    if new_password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}
