//! Veridex CLI library
//!
//! Command-line surface for the Veridex legal-situation analysis
//! pipeline: argument parsing, configuration, output formatting, the
//! interactive REPL, and the command implementations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, CliFormat, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
