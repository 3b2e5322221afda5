//! Provenance tracking - the append-only audit trail

use crate::session::SessionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable audit record describing a stage's action within a session
///
/// Entries are append-only: once written to a sink they are never mutated
/// or deleted, and write order is the system's audit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    /// When the action happened
    pub timestamp: DateTime<Utc>,

    /// The pipeline run this entry belongs to
    pub session_id: SessionId,

    /// Acting stage or component name
    pub agent: String,

    /// Action taxonomy tag ("analysis_started", "stage_complete", ...)
    pub action_type: String,

    /// Human-readable description of the action
    pub description: String,

    /// Optional input snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,

    /// Optional output snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
}

impl ProvenanceEntry {
    /// Create a new provenance entry stamped with the current time
    pub fn new(
        session_id: SessionId,
        agent: impl Into<String>,
        action_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            agent: agent.into(),
            action_type: action_type.into(),
            description: description.into(),
            input: None,
            output: None,
        }
    }

    /// Attach an input snapshot
    pub fn with_input(mut self, input: serde_json::Value) -> Self {
        self.input = Some(input);
        self
    }

    /// Attach an output snapshot
    pub fn with_output(mut self, output: serde_json::Value) -> Self {
        self.output = Some(output);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_to_flat_json() {
        let session = SessionId::new();
        let entry = ProvenanceEntry::new(session, "Interpreter", "analysis", "Classified input")
            .with_output(serde_json::json!({"type": "fee_demand"}));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["agent"], "Interpreter");
        assert_eq!(json["action_type"], "analysis");
        assert_eq!(json["session_id"], session.to_string());
        assert_eq!(json["output"]["type"], "fee_demand");
        // Absent snapshots are omitted, not null
        assert!(json.get("input").is_none());
    }
}
