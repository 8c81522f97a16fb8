//! projauth - project authenticator CLI
//!
//! Shows a rotating numeric display code and manages scanned projects, a
//! mock local session and the selected backend environment.

use clap::{Parser, Subcommand};
use projauth_core::{error::ProjauthError, init_logging, types::TokenLengthPreset};

mod cli;

#[derive(Parser)]
#[command(name = "projauth")]
#[command(about = "Project authenticator with rotating display codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rotating display code
    Code {
        /// Number of digits (clamped to 1..=64)
        #[arg(long, short = 'l', allow_negative_numbers = true, conflicts_with = "preset")]
        length: Option<i64>,
        /// Named length: short, medium, long or extended
        #[arg(long, short = 'p')]
        preset: Option<TokenLengthPreset>,
        /// Print a single code and exit
        #[arg(long)]
        once: bool,
    },
    /// Manage scanned projects
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Show or change the backend environment
    Env {
        #[command(subcommand)]
        action: EnvCommands,
    },
    /// Sign in (mock)
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create an account and sign in (mock)
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },
    /// Remove the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Request a password reset link (mock)
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Change the account password (mock)
    ChangePassword {
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// List scanned projects
    List,
    /// Add a project from a scanned code (`<appid>_<user_id>_<unique_id>`)
    Add {
        payload: String,
    },
    /// Show a project and its rotating display code
    Show {
        id: String,
        /// Number of digits (clamped to 1..=64)
        #[arg(long, short = 'l', allow_negative_numbers = true, conflicts_with = "preset")]
        length: Option<i64>,
        /// Named length: short, medium, long or extended
        #[arg(long, short = 'p')]
        preset: Option<TokenLengthPreset>,
        /// Print a single code and exit
        #[arg(long)]
        once: bool,
    },
    /// Delete a project
    Remove {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum EnvCommands {
    /// Show the active environment
    Show,
    /// Select an environment (password protected)
    Set {
        /// dev, val or prod
        environment: String,
    },
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Code {
            length,
            preset,
            once,
        } => cli::code::run_code(length, preset, once),
        Commands::Project { action } => match action {
            ProjectCommands::List => cli::project::run_project_list(),
            ProjectCommands::Add { payload } => cli::project::run_project_add(&payload),
            ProjectCommands::Show {
                id,
                length,
                preset,
                once,
            } => cli::project::run_project_show(&id, length, preset, once),
            ProjectCommands::Remove { id, yes } => cli::project::run_project_remove(&id, yes),
        },
        Commands::Env { action } => match action {
            EnvCommands::Show => cli::env::run_env_show(),
            EnvCommands::Set { environment } => cli::env::run_env_set(&environment),
        },
        Commands::Login { email } => cli::account::run_login(&email),
        Commands::Register {
            first_name,
            last_name,
            email,
        } => cli::account::run_register(&first_name, &last_name, &email),
        Commands::Logout => cli::account::run_logout(),
        Commands::Whoami => cli::account::run_whoami(),
        Commands::ForgotPassword { email } => cli::account::run_forgot_password(&email),
        Commands::ChangePassword { email } => cli::account::run_change_password(&email),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration and user input problems (exit code 2)
                ProjauthError::Config(_) | ProjauthError::Toml(_) | ProjauthError::TomlSerialize(_) => 2,
                ProjauthError::Auth(_) | ProjauthError::Environment(_) | ProjauthError::Project(_) => 2,
                // Runtime failures (exit code 1)
                ProjauthError::Store(_) | ProjauthError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
