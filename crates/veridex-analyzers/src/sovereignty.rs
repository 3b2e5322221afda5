//! Sovereignty scoring: the servile↔sovereign keyword-ratio heuristic

use tracing::debug;
use veridex_domain::{SovereigntyLevel, SovereigntyMetrics};

// The two indicator sets are disjoint by construction.
const SOVEREIGN_TERMS: &[&str] = &[
    "lawful",
    "right",
    "remedy",
    "without prejudice",
    "private",
    "notice",
    "demand",
];
const SERVILE_TERMS: &[&str] = &[
    "request",
    "please",
    "submit",
    "person",
    "employee",
    "permission",
    "appeal",
];

const IMPROVEMENT_SUGGESTIONS: &[&str] = &[
    "Consider replacing servile language (e.g., 'request') with more assertive, \
     sovereign terms (e.g., 'demand', 'notice').",
    "Clearly state reservation of rights.",
    "Identify the matter as private and proceed by notice rather than application.",
    "Remove permission-seeking phrasing; state terms and conditions instead.",
];

const LANGUAGE_WEIGHT: f64 = 0.8;
const REMEDY_WEIGHT: f64 = 0.1;
const AUTONOMY_WEIGHT: f64 = 0.1;

/// Scores text on the servile↔sovereign axis
///
/// `overall_score` is the ratio of sovereign-indicator hits to total
/// indicator hits (case-insensitive substring occurrences), with an
/// explicit neutral 0.5 when neither set matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SovereigntyScorer;

impl SovereigntyScorer {
    /// Create a new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score a free-form text
    pub fn score_text(&self, text: &str) -> SovereigntyMetrics {
        let lower = text.to_lowercase();

        let sovereign_count: usize = SOVEREIGN_TERMS
            .iter()
            .map(|t| lower.matches(t).count())
            .sum();
        let servile_count: usize = SERVILE_TERMS
            .iter()
            .map(|t| lower.matches(t).count())
            .sum();

        let total = sovereign_count + servile_count;
        let overall_score = if total > 0 {
            sovereign_count as f64 / total as f64
        } else {
            0.5
        };

        let sovereignty_level = SovereigntyLevel::from_score(overall_score);
        debug!(
            sovereign_count,
            servile_count,
            score = overall_score,
            level = sovereignty_level.as_str(),
            "sovereignty scored"
        );

        let improvement_suggestions = if sovereignty_level == SovereigntyLevel::Sovereign {
            Vec::new()
        } else {
            IMPROVEMENT_SUGGESTIONS
                .iter()
                .map(|s| s.to_string())
                .collect()
        };

        SovereigntyMetrics {
            overall_score,
            language_score: overall_score * LANGUAGE_WEIGHT,
            remedy_score: overall_score * REMEDY_WEIGHT,
            autonomy_score: overall_score * AUTONOMY_WEIGHT,
            sovereignty_level,
            sovereign_indicators: present_terms(&lower, SOVEREIGN_TERMS),
            servile_flags: present_terms(&lower, SERVILE_TERMS),
            improvement_suggestions,
        }
    }

    /// Score a synthesized decision by concatenating its field values
    ///
    /// Field values are joined in slice order and scored exactly like
    /// free-form text.
    pub fn score_decision(&self, fields: &[(&str, &str)]) -> SovereigntyMetrics {
        let combined = fields
            .iter()
            .map(|(_, value)| *value)
            .collect::<Vec<_>>()
            .join(" ");
        self.score_text(&combined)
    }
}

fn present_terms(lower: &str, terms: &[&str]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| lower.contains(*t))
        .map(|t| t.to_string())
        .collect()
}
