//! The search command: query the legal-authority corpus.

use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;
use veridex_pipeline::Pipeline;

/// Search legal authorities and print the combined report.
pub fn execute_search(args: SearchArgs, pipeline: &Pipeline, formatter: &Formatter) -> Result<()> {
    let query = args.query.join(" ");
    let report = pipeline.search(&query);
    println!("{}", formatter.format_search(&report)?);
    Ok(())
}
