//! Veridex Pipeline Layer
//!
//! The composition root and orchestrator for one deterministic analysis
//! run per session:
//!
//! - `PipelineBuilder`: builds the corpus store, ledger, and every stage
//!   component once; stage strategies are resolved by name through a
//!   static registry, so unknown names fail at composition time, not at
//!   call time
//! - `Pipeline`: sequences interpreter → structural analysis → tone/risk
//!   → corpus search → sovereignty scoring → remedy synthesis →
//!   recommendation aggregation, writing a provenance entry around every
//!   stage, and assembles the immutable per-session result

#![warn(missing_docs)]

mod orchestrator;
mod registry;

use std::path::PathBuf;
use thiserror::Error;

pub use orchestrator::{Pipeline, PipelineBuilder};
pub use registry::{detector_names, resolve_detector, resolve_tone_analyzer, tone_analyzer_names};

/// Errors that can occur while composing a pipeline or persisting results
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No contradiction detector is registered under the given name
    #[error("unknown contradiction detector: {0}")]
    UnknownDetector(String),

    /// No tone analyzer is registered under the given name
    #[error("unknown tone analyzer: {0}")]
    UnknownToneAnalyzer(String),

    /// The analysis result could not be written
    #[error("failed to write analysis result to {path}: {source}")]
    ResultWrite {
        /// Target path of the failed write
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The analysis result could not be serialized
    #[error("failed to serialize analysis result: {0}")]
    Serialize(#[from] serde_json::Error),
}
