//! The top-level analysis result assembled once per session

use crate::analysis::{Contradiction, ToneRiskReport};
use crate::authority::AuthorityReport;
use crate::recommend::RecommendationBundle;
use crate::remedy::RemedyProposal;
use crate::session::SessionId;
use crate::situation::SituationContext;
use crate::sovereignty::SovereigntyMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Clause, contradiction, and tone findings for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalAnalysis {
    /// Clauses extracted from the input, in document order
    pub clauses: Vec<String>,

    /// Contradictions detected between clauses
    pub contradictions: Vec<Contradiction>,

    /// Tone and risk assessment
    pub tone_analysis: ToneRiskReport,
}

/// Sovereignty scores for the input text and the synthesized remedy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SovereigntyAnalysis {
    /// Score of the raw input text
    pub input_sovereignty: SovereigntyMetrics,

    /// Score of the synthesized remedy decision
    pub remedy_sovereignty: SovereigntyMetrics,
}

/// Complete output of one pipeline run
///
/// Created once by the orchestrator and immutable after assembly. The
/// session id appears in every provenance entry written during the run,
/// which is what makes the full trace reconstructible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Unique identifier of this run
    pub session_id: SessionId,

    /// When the run completed
    pub timestamp: DateTime<Utc>,

    /// Structured classification of the input
    pub situation_analysis: SituationContext,

    /// Clause, contradiction, and tone findings
    pub legal_analysis: LegalAnalysis,

    /// Sovereignty scores for input and remedy
    pub sovereignty_analysis: SovereigntyAnalysis,

    /// The synthesized remedy
    pub remedy: RemedyProposal,

    /// Merged, prioritized recommendations
    pub recommendations: RecommendationBundle,

    /// Corpus search results, when a search was performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus_search: Option<AuthorityReport>,
}
