//! Trait definitions for pluggable stages and sinks
//!
//! These traits define the boundaries between the pipeline and the
//! swappable pieces inside it. Default implementations live in other
//! crates; the orchestrator only sees these contracts.

use crate::analysis::{Contradiction, ToneRiskReport};
use crate::provenance::ProvenanceEntry;

/// Strategy for detecting contradictions between extracted clauses
///
/// The shipped detector is heuristic; a stronger detector can be
/// substituted at composition time without touching the orchestrator.
/// Implementations must be total: empty input yields empty output,
/// never an error.
pub trait ContradictionDetector: Send + Sync {
    /// Registry name of this detector
    fn name(&self) -> &'static str;

    /// Detect contradictions between the given clauses
    ///
    /// Confidence values must lie in [0, 1].
    fn detect(&self, clauses: &[String]) -> Vec<Contradiction>;
}

/// Strategy for assessing tone and legal risk of a text
///
/// Must be total and deterministic for identical input.
pub trait ToneAnalyzer: Send + Sync {
    /// Registry name of this analyzer
    fn name(&self) -> &'static str;

    /// Assess tone and risk of the given text
    fn analyze(&self, text: &str) -> ToneRiskReport;
}

/// Append-only sink for provenance entries
///
/// Implementations absorb their own write failures (reporting them on
/// an operational channel) so that audit-trail durability is best-effort
/// and never aborts a pipeline run.
pub trait ProvenanceSink: Send + Sync {
    /// Append one entry to the trail
    fn record(&self, entry: ProvenanceEntry);
}
