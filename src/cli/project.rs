//! Scanned project commands
//!
//! Projects share `session.json` with the account commands. `project show`
//! prints the project and then runs the rotating code display.

use crate::cli::code::run_code;
use crate::cli::prompt::prompt_input;
use colored::Colorize;
use projauth_core::error::ProjauthError;
use projauth_core::project::{Project, ProjectRegistry};
use projauth_core::store::FileStore;
use projauth_core::types::TokenLengthPreset;

fn registry() -> Result<ProjectRegistry<FileStore>, ProjauthError> {
    Ok(ProjectRegistry::new(FileStore::open_default()?))
}

fn print_details(project: &Project) {
    println!("Project:    {}", project.project_name.bold());
    println!("Email:      {}", project.email);
    println!("Code:       {}", project.code());
    println!("Scanned at: {}", project.scanned_at.format("%Y-%m-%d %H:%M UTC"));
}

/// Run the project list command
pub fn run_project_list() -> Result<(), ProjauthError> {
    let projects = registry()?.list()?;

    if projects.is_empty() {
        println!("No projects yet. Scan a code with `projauth project add`.");
        return Ok(());
    }

    for project in projects {
        println!(
            "{}  {}  {}  {}",
            project.id.dimmed(),
            project.project_name.bold(),
            project.email,
            project.code()
        );
    }
    Ok(())
}

/// Run the project add command with a scanned payload
pub fn run_project_add(payload: &str) -> Result<(), ProjauthError> {
    let project = registry()?.add_scanned(payload)?;

    println!("{} Added {}", "✓".green(), project.project_name.bold());
    print_details(&project);
    Ok(())
}

/// Run the project show command
pub fn run_project_show(
    id: &str,
    length: Option<i64>,
    preset: Option<TokenLengthPreset>,
    once: bool,
) -> Result<(), ProjauthError> {
    let project = registry()?.get(id)?;
    print_details(&project);
    println!();
    run_code(length, preset, once)
}

/// Run the project remove command, confirming unless `yes` is set
pub fn run_project_remove(id: &str, yes: bool) -> Result<(), ProjauthError> {
    let mut registry = registry()?;
    let project = registry.get(id)?;

    if !yes {
        let answer = prompt_input(&format!(
            "Delete {}? This cannot be undone [y/N]: ",
            project.project_name
        ))?;
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            println!("Cancelled");
            return Ok(());
        }
    }

    let removed = registry.remove(id)?;
    println!("{} Deleted {}", "✓".green(), removed.project_name);
    Ok(())
}
