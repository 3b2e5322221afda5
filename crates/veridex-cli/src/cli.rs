//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Veridex CLI - Deterministic legal-situation analysis.
#[derive(Debug, Parser)]
#[command(name = "veridex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal output)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a legal document or text
    Analyze(AnalyzeArgs),

    /// Search the legal-authority corpus
    Search(SearchArgs),

    /// Score text on the servile↔sovereign axis
    Score(ScoreArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Path to the document to analyze
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Text to analyze directly
    #[arg(short, long)]
    pub text: Option<String>,

    /// Pin the situation type (e.g. traffic_stop, fee_demand)
    #[arg(long)]
    pub situation_type: Option<String>,

    /// Pin the primary jurisdiction
    #[arg(long)]
    pub jurisdiction: Option<String>,

    /// Directory to save the analysis JSON into (defaults to config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query
    #[arg(required = true)]
    pub query: Vec<String>,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Text to score
    #[arg(required = true)]
    pub text: Vec<String>,
}
