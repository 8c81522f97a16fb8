//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod account;
pub mod code;
pub mod env;
pub mod project;
pub mod prompt;
