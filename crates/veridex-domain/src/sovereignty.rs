//! Sovereignty metrics - the servile↔sovereign keyword-ratio score

use serde::{Deserialize, Serialize};

/// Classification of a text on the servile↔sovereign axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SovereigntyLevel {
    /// Score ≤ 0.4: deferential, permission-seeking language dominates
    Servile,
    /// 0.4 < score ≤ 0.7: mixed language
    Transitional,
    /// Score > 0.7: rights-asserting language dominates
    Sovereign,
}

impl SovereigntyLevel {
    /// Get the level as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SovereigntyLevel::Servile => "Servile",
            SovereigntyLevel::Transitional => "Transitional",
            SovereigntyLevel::Sovereign => "Sovereign",
        }
    }

    /// Classify an overall score into a level
    ///
    /// Boundaries are deliberate: exactly 0.4 is Servile, exactly 0.7 is
    /// Transitional.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            SovereigntyLevel::Sovereign
        } else if score > 0.4 {
            SovereigntyLevel::Transitional
        } else {
            SovereigntyLevel::Servile
        }
    }
}

/// Sovereignty assessment of one text
///
/// One instance per scored text; immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SovereigntyMetrics {
    /// Ratio of sovereign hits to total hits, in [0, 1]; 0.5 when neutral
    pub overall_score: f64,

    /// Language sub-score
    pub language_score: f64,

    /// Remedy-strength sub-score
    pub remedy_score: f64,

    /// Autonomy sub-score
    pub autonomy_score: f64,

    /// Classification derived from the overall score
    pub sovereignty_level: SovereigntyLevel,

    /// Sovereign-indicator terms present in the text, in table order
    pub sovereign_indicators: Vec<String>,

    /// Servile-indicator terms present in the text, in table order
    pub servile_flags: Vec<String>,

    /// Static suggestions, populated whenever the level is not Sovereign
    pub improvement_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_at_0_4_is_servile() {
        assert_eq!(SovereigntyLevel::from_score(0.4), SovereigntyLevel::Servile);
    }

    #[test]
    fn test_just_above_0_4_is_transitional() {
        assert_eq!(
            SovereigntyLevel::from_score(0.4 + f64::EPSILON),
            SovereigntyLevel::Transitional
        );
    }

    #[test]
    fn test_boundary_at_0_7_is_transitional() {
        assert_eq!(
            SovereigntyLevel::from_score(0.7),
            SovereigntyLevel::Transitional
        );
    }

    #[test]
    fn test_just_above_0_7_is_sovereign() {
        assert_eq!(
            SovereigntyLevel::from_score(0.7 + 1e-9),
            SovereigntyLevel::Sovereign
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_classification_matches_thresholds(score in 0.0f64..=1.0) {
            match SovereigntyLevel::from_score(score) {
                SovereigntyLevel::Sovereign => proptest::prop_assert!(score > 0.7),
                SovereigntyLevel::Transitional => {
                    proptest::prop_assert!(score > 0.4 && score <= 0.7)
                }
                SovereigntyLevel::Servile => proptest::prop_assert!(score <= 0.4),
            }
        }
    }
}
