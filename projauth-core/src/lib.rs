//! Core library for the projauth authenticator
//!
//! This crate provides the rotating display code mechanism together with
//! the mock session, scanned project list, environment selection and
//! configuration layers used by the `projauth` CLI.

pub mod error;
pub mod types;

pub mod auth;
pub mod code;
pub mod config;
pub mod environment;
pub mod project;
pub mod store;

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running under systemd.
/// Otherwise logs to stderr, honouring `RUST_LOG` and defaulting to INFO.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(tracing_subscriber::filter::LevelFilter::INFO)
                .init();
            return Ok(());
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Stderr keeps stdout free for machine-parsable output such as `code --once`
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .init();

    Ok(())
}
