//! Rotating code command
//!
//! `projauth code` keeps a display code on screen together with the seconds
//! left before it regenerates. Typing `r` regenerates now, a number changes
//! the length and `q` (or Ctrl-C) quits. `--once` prints a single code.

use colored::Colorize;
use projauth_core::code::generator::generate;
use projauth_core::code::rotator::{CodeRotator, CodeSnapshot};
use projauth_core::config::toml_config::load_config;
use projauth_core::error::ProjauthError;
use projauth_core::types::{CodeLength, TokenLengthPreset};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Width of the countdown bar in characters
const BAR_WIDTH: usize = 20;

/// A line typed while the code is displayed
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Regenerate,
    Length(CodeLength),
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "r" | "regenerate" => Input::Regenerate,
        "q" | "quit" => Input::Quit,
        other => {
            if let Ok(digits) = other.parse::<i64>() {
                Input::Length(CodeLength::bounded(digits))
            } else if let Ok(preset) = other.parse::<TokenLengthPreset>() {
                Input::Length(preset.length())
            } else {
                Input::Unknown
            }
        }
    }
}

/// Pick the code length: explicit digits, then preset, then config
fn resolve_length(
    length: Option<i64>,
    preset: Option<TokenLengthPreset>,
    configured: CodeLength,
) -> CodeLength {
    match (length, preset) {
        (Some(digits), _) => CodeLength::bounded(digits),
        (None, Some(preset)) => preset.length(),
        (None, None) => configured,
    }
}

/// Run the code command
pub fn run_code(
    length: Option<i64>,
    preset: Option<TokenLengthPreset>,
    once: bool,
) -> Result<(), ProjauthError> {
    let config = load_config()?;
    let length = resolve_length(length, preset, config.code.length);

    if once {
        // Only the code on stdout (machine-parsable)
        println!("{}", generate(length));
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(display_loop(length, config.code.period_secs));

    // A pending blocking stdin read must not hold up exit
    runtime.shutdown_background();
    result
}

async fn display_loop(length: CodeLength, period_secs: u32) -> Result<(), ProjauthError> {
    let handle = CodeRotator::start(length, period_secs);
    let mut updates = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    println!(
        "{}",
        "Enter 'r' to regenerate, a number or preset to change the length, 'q' to quit".dimmed()
    );
    render(&handle.snapshot())?;

    let outcome = loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let snapshot = updates.borrow_and_update().clone();
                render(&snapshot)?;
            }

            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => match parse_input(&line) {
                        Input::Regenerate => handle.regenerate_now(),
                        Input::Length(length) => handle.set_length(length),
                        Input::Quit => break Ok(()),
                        Input::Unknown => debug!("Ignoring unrecognised input"),
                    },
                    Ok(None) => stdin_open = false,
                    Err(e) => break Err(ProjauthError::Io(e)),
                }
            }

            _ = tokio::signal::ctrl_c() => break Ok(()),
        }
    };

    handle.stop().await;
    println!();
    outcome
}

fn render(snapshot: &CodeSnapshot) -> Result<(), ProjauthError> {
    let mut stdout = std::io::stdout();
    write!(
        stdout,
        "\r\x1b[2KCode: {}  Regenerates in: {}s  {}",
        snapshot.code.as_str().bold().cyan(),
        snapshot.remaining,
        countdown_bar(snapshot.progress())
    )?;
    stdout.flush()?;
    Ok(())
}

fn countdown_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).ceil() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
