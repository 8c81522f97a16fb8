//! Environment commands
//!
//! `projauth env show` reports the active backend; `projauth env set`
//! switches it after the environment password check.

use crate::cli::prompt::prompt_password;
use colored::Colorize;
use projauth_core::config::toml_config::{load_config, save_config};
use projauth_core::environment::{unlock_environment, Environment};
use projauth_core::error::ProjauthError;
use tracing::info;

/// Run the env show command
pub fn run_env_show() -> Result<(), ProjauthError> {
    let config = load_config()?;
    let env = config.environment;

    println!(
        "Environment: {} ({})",
        env.display_name().bold(),
        env.as_str()
    );
    println!("Base URL:    {}", env.base_url());
    Ok(())
}

/// Run the env set command
pub fn run_env_set(requested: &str) -> Result<(), ProjauthError> {
    let requested: Environment = requested.parse()?;
    let password = prompt_password("Environment password")?;

    let environment = match unlock_environment(requested, &password) {
        Ok(environment) => environment,
        Err(e) => {
            println!("{} {}", "❌".red(), e);
            return Err(e.into());
        }
    };

    let mut config = load_config()?;
    config.environment = environment;
    save_config(&config)?;

    info!(environment = %environment, "Environment selected");
    println!(
        "{} You have selected {} environment",
        "✓".green(),
        environment.as_str().to_uppercase()
    );
    Ok(())
}
