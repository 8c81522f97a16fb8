//! Interactive prompt helpers shared by the account and env commands

use projauth_core::error::ProjauthError;
use secrecy::SecretString;
use std::io::{self, Write};

/// Prompt for a password
///
/// Input is not echoed back in any output; the value is wrapped at once.
pub fn prompt_password(prompt: &str) -> Result<SecretString, ProjauthError> {
    let input = prompt_input(&format!("{}: ", prompt))?;
    Ok(SecretString::new(input))
}

/// Low-level input prompting
pub fn prompt_input(prompt: &str) -> Result<String, ProjauthError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(ProjauthError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(ProjauthError::Io)?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
