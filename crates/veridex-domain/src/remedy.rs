//! Remedy proposals

use crate::analysis::Contradiction;
use serde::{Deserialize, Serialize};

/// A recommended category of corrective action plus supporting strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyProposal {
    /// Remedy category, e.g. "UCC Administrative Process"
    #[serde(rename = "type")]
    pub remedy_type: String,

    /// What to do
    pub description: String,

    /// Why this remedy fits the situation
    pub reasoning: String,

    /// Ordered supporting strategies
    pub legal_strategies: Vec<String>,

    /// Synthesizer confidence in [0, 1]
    pub confidence: f64,

    /// Contradictions carried through unmodified for downstream aggregation
    pub contradictions: Vec<Contradiction>,
}
