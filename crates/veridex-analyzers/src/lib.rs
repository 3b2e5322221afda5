//! Veridex Analyzer Layer
//!
//! The deterministic text-analysis stages of the pipeline:
//!
//! - `SituationInterpreter`: classifies raw text into a situation context
//! - `StructuralAnalyzer`: extracts clauses; `HeuristicDetector` flags
//!   contradictions between them
//! - `KeywordToneAnalyzer`: scores tone and legal risk
//! - `SovereigntyScorer`: scores text on the servile↔sovereign axis
//!
//! Every analyzer is a total, pure function of its input and static
//! keyword tables: no I/O, no errors, identical output for identical
//! input.

#![warn(missing_docs)]

pub mod interpreter;
pub mod sovereignty;
pub mod structural;
pub mod tone;

pub use interpreter::SituationInterpreter;
pub use sovereignty::SovereigntyScorer;
pub use structural::{extract_clauses, HeuristicDetector, StructuralAnalyzer};
pub use tone::KeywordToneAnalyzer;
