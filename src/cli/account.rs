//! Account commands backed by the mock auth service
//!
//! Sessions are kept in `session.json` next to the config file.

use crate::cli::prompt::prompt_password;
use colored::Colorize;
use projauth_core::auth::MockAuthService;
use projauth_core::error::ProjauthError;
use projauth_core::store::FileStore;

fn service() -> Result<MockAuthService<FileStore>, ProjauthError> {
    Ok(MockAuthService::new(FileStore::open_default()?))
}

/// Run the login command
pub fn run_login(email: &str) -> Result<(), ProjauthError> {
    let password = prompt_password("Password")?;
    let session = service()?.login(email, &password)?;

    println!(
        "{} Signed in as {} <{}>",
        "✓".green(),
        session.user.full_name(),
        session.user.email
    );
    Ok(())
}

/// Run the register command
pub fn run_register(first_name: &str, last_name: &str, email: &str) -> Result<(), ProjauthError> {
    let password = prompt_password("Password")?;
    let session = service()?.register(first_name, last_name, email, &password)?;

    println!(
        "{} Registered and signed in as {}",
        "✓".green(),
        session.user.full_name()
    );
    Ok(())
}

/// Run the logout command
pub fn run_logout() -> Result<(), ProjauthError> {
    service()?.logout()?;
    println!("Signed out");
    Ok(())
}

/// Run the whoami command
pub fn run_whoami() -> Result<(), ProjauthError> {
    let user = service()?.current_user()?;
    println!("{} <{}>", user.full_name(), user.email);
    Ok(())
}

/// Run the forgot-password command
pub fn run_forgot_password(email: &str) -> Result<(), ProjauthError> {
    service()?.forgot_password(email)?;
    println!(
        "{} A password reset link has been sent to {}",
        "✓".green(),
        email
    );
    Ok(())
}

/// Run the change-password command
pub fn run_change_password(email: &str) -> Result<(), ProjauthError> {
    let new_password = prompt_password("New password")?;
    let confirm_password = prompt_password("Confirm password")?;

    service()?.change_password(email, &new_password, &confirm_password)?;
    println!("{} Your password has been changed", "✓".green());
    Ok(())
}
