//! The analyze command: run the full pipeline over a document or text.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use veridex_domain::ContextHint;
use veridex_pipeline::Pipeline;

/// Run a full analysis and persist the per-session result document.
pub fn execute_analyze(
    args: AnalyzeArgs,
    pipeline: &Pipeline,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let text = match (&args.file, &args.text) {
        (Some(path), _) => fs::read_to_string(path)?,
        (None, Some(text)) => text.clone(),
        (None, None) => {
            return Err(CliError::InvalidInput(
                "provide a document with --file or text with --text".into(),
            ))
        }
    };

    let hint = build_hint(&args);
    let result = pipeline.analyze(&text, hint.as_ref());

    println!("{}", formatter.format_analysis(&result)?);

    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => config.output_dir()?,
    };
    let path = pipeline.save_result(&result, &output_dir)?;
    println!(
        "{}",
        formatter.success(&format!("Full analysis saved to {}", path.display()))
    );

    Ok(())
}

fn build_hint(args: &AnalyzeArgs) -> Option<ContextHint> {
    if args.situation_type.is_none() && args.jurisdiction.is_none() {
        return None;
    }
    Some(ContextHint {
        situation_type: args.situation_type.clone(),
        jurisdiction: args.jurisdiction.clone(),
    })
}
