//! Veridex CLI - command-line interface for the legal-situation analysis pipeline.

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use veridex_cli::commands;
use veridex_cli::repl;
use veridex_cli::{Cli, Command, Config, Formatter};
use veridex_ledger::FileLedger;
use veridex_pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run().map_err(Into::into)
}

fn run() -> veridex_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format and color setting
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Composition root: corpus, ledger, and stage components built once
    let ledger = Arc::new(FileLedger::open(config.ledger_path()?)?);
    let mut builder = Pipeline::builder()
        .detector(config.pipeline.detector.as_str())
        .tone_analyzer(config.pipeline.tone_analyzer.as_str())
        .ledger(ledger);
    if let Some(corpus_dir) = &config.pipeline.corpus_dir {
        builder = builder.corpus_dir(corpus_dir);
    }
    let pipeline = builder.build()?;

    match cli.command {
        None | Some(Command::Repl) => repl::run_repl(&pipeline, &config, &formatter)?,
        Some(Command::Analyze(args)) => {
            commands::execute_analyze(args, &pipeline, &config, &formatter)?
        }
        Some(Command::Search(args)) => commands::execute_search(args, &pipeline, &formatter)?,
        Some(Command::Score(args)) => commands::execute_score(args, &pipeline, &formatter)?,
    }

    Ok(())
}
