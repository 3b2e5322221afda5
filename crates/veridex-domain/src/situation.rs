//! Situation context - the structured classification of raw input text

use serde::{Deserialize, Serialize};

/// Category of legal/administrative situation detected in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SituationType {
    /// Roadside encounter with an officer (citation, license demand, ...)
    TrafficStop,
    /// A demand for payment: bill, fee, fine, invoice
    FeeDemand,
    /// A summons or notice to appear before a court
    CourtSummons,
    /// No specific category detected
    General,
}

impl SituationType {
    /// Get the situation type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SituationType::TrafficStop => "traffic_stop",
            SituationType::FeeDemand => "fee_demand",
            SituationType::CourtSummons => "court_summons",
            SituationType::General => "general",
        }
    }

    /// Parse a situation type from a string; unknown values map to `General`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "traffic_stop" => SituationType::TrafficStop,
            "fee_demand" => SituationType::FeeDemand,
            "court_summons" => SituationType::CourtSummons,
            _ => SituationType::General,
        }
    }
}

/// Urgency of the situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    /// Informational; no deadline pressure detected
    Low,
    /// Default when no signal is found
    Medium,
    /// Deadlines or enforcement language detected
    High,
}

impl UrgencyLevel {
    /// Get the urgency level as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
        }
    }
}

/// Primary and secondary jurisdiction tags for a situation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Best-matching jurisdiction tag ("commercial", "federal", ...),
    /// or "unknown" when no signal was found
    pub primary: String,

    /// Additional jurisdiction tags that also matched
    #[serde(default)]
    pub secondary: Vec<String>,
}

impl Jurisdiction {
    /// The context when no jurisdiction signal is present
    pub fn unknown() -> Self {
        Self {
            primary: "unknown".to_string(),
            secondary: Vec::new(),
        }
    }
}

/// People and organizations extracted from the input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Personal names, insertion-ordered and deduplicated
    #[serde(default)]
    pub people: Vec<String>,

    /// Organization names, insertion-ordered and deduplicated
    #[serde(default)]
    pub organizations: Vec<String>,
}

/// Structured classification of a legal situation
///
/// Created by the situation interpreter and consumed read-only by every
/// downstream stage. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationContext {
    /// Detected situation category
    #[serde(rename = "type")]
    pub situation_type: SituationType,

    /// Detected urgency level
    pub urgency: UrgencyLevel,

    /// Detected jurisdiction tags
    pub jurisdiction: Jurisdiction,

    /// Extracted entities
    pub entities: Entities,

    /// One-line human-readable summary of the classification
    pub summary: String,
}

impl SituationContext {
    /// The context returned for empty or signal-free input
    pub fn default_context() -> Self {
        Self {
            situation_type: SituationType::General,
            urgency: UrgencyLevel::Medium,
            jurisdiction: Jurisdiction::unknown(),
            entities: Entities::default(),
            summary: "No specific legal situation detected.".to_string(),
        }
    }
}

/// Caller-supplied hints that pin parts of the classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHint {
    /// Pin the situation type, bypassing detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation_type: Option<String>,

    /// Pin the primary jurisdiction, bypassing detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
}
