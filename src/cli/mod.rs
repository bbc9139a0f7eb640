//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the account models.

pub mod account;

pub use account::{handle_account_command, AccountCommands, OutputFormat};
