//! Structural and tone/risk analysis outputs

use serde::{Deserialize, Serialize};

/// A detected contradiction between clauses of the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    /// Contradiction taxonomy tag ("semantic", "rhetorical", ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable description of the conflict
    pub description: String,

    /// Detector confidence in [0, 1]
    pub confidence: f64,
}

/// Overall tone category of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneCategory {
    /// Demanding or hostile language
    Aggressive,
    /// No tonal signal detected
    Neutral,
    /// Accommodating or apologetic language
    Conciliatory,
    /// Favorable or cooperative language
    Positive,
}

impl ToneCategory {
    /// Get the tone category as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneCategory::Aggressive => "aggressive",
            ToneCategory::Neutral => "neutral",
            ToneCategory::Conciliatory => "conciliatory",
            ToneCategory::Positive => "positive",
        }
    }
}

/// Legal risk level of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// No risk indicators present
    Low,
    /// Financial or procedural pressure present
    Medium,
    /// Enforcement or liberty/property threat present
    High,
}

impl RiskLevel {
    /// Get the risk level as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Combined tone and risk assessment of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneRiskReport {
    /// Detected tone category
    pub tone: ToneCategory,

    /// Assessed risk level
    pub risk: RiskLevel,

    /// One-sentence human-readable summary
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_risk_serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
    }
}
