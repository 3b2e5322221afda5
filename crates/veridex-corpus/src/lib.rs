//! Veridex Corpus Layer
//!
//! Owns the immutable legal-authority corpus and the term-based relevance
//! engine that ranks records against free-text queries.
//!
//! # Architecture
//!
//! - `CorpusStore`: loads per-category JSON files once at startup; any
//!   missing or unparseable category degrades to built-in fallback records
//!   rather than failing startup
//! - `RelevanceEngine`: deterministic term scoring, filtering, capping,
//!   and quote extraction over the store
//!
//! The store is read-only after loading and safe to share across
//! concurrently running sessions without locking.

#![warn(missing_docs)]

mod builtin;
mod engine;
mod store;

use thiserror::Error;

pub use engine::RelevanceEngine;
pub use store::CorpusStore;

/// Errors that can occur while reading a corpus category file
///
/// These never escape startup: a failed category falls back to the
/// built-in records for that category and the error is logged.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Category file could not be read
    #[error("corpus file error: {0}")]
    Io(#[from] std::io::Error),

    /// Category file was not valid JSON for its record type
    #[error("corpus parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
