//! The score command: sovereignty-score a text directly.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use veridex_pipeline::Pipeline;

/// Score text on the servile↔sovereign axis and print the metrics.
pub fn execute_score(args: ScoreArgs, pipeline: &Pipeline, formatter: &Formatter) -> Result<()> {
    let text = args.text.join(" ");
    let metrics = pipeline.score(&text);
    println!("{}", formatter.format_score(&metrics)?);
    Ok(())
}
