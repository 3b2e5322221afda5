//! Veridex Synthesis Layer
//!
//! Maps analysis signals to outcomes:
//!
//! - `RemedySynthesizer`: decision table from (situation type, risk
//!   level) to a remedy category and strategy list
//! - `RecommendationAggregator`: merges every stage's contributions into
//!   prioritized, deduplicated action lists
//!
//! Both are pure mappings: no I/O, no errors, unknown inputs resolve to
//! generic defaults.

#![warn(missing_docs)]

pub mod recommend;
pub mod remedy;

pub use recommend::RecommendationAggregator;
pub use remedy::RemedySynthesizer;
