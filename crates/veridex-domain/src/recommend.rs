//! Recommendation bundles - merged, deduplicated action lists

use serde::{Deserialize, Serialize};

/// Prioritized recommendations merged from every pipeline stage
///
/// Each list is deduplicated by exact string equality and preserves
/// insertion order: the first contributor of a string wins its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    /// Actions to take now
    pub immediate_actions: Vec<String>,

    /// Actions for the coming days
    pub short_term_actions: Vec<String>,

    /// Longer-horizon actions
    pub long_term_actions: Vec<String>,

    /// Risk and language warnings
    pub warnings: Vec<String>,

    /// Favorable openings worth preserving or using
    pub opportunities: Vec<String>,

    /// Language-improvement suggestions from the sovereignty scorer
    pub sovereignty_improvements: Vec<String>,
}

impl RecommendationBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `item` onto `list` unless an equal string is already present
    pub fn push_unique(list: &mut Vec<String>, item: impl Into<String>) {
        let item = item.into();
        if !list.contains(&item) {
            list.push(item);
        }
    }

    /// True when every list is empty
    pub fn is_empty(&self) -> bool {
        self.immediate_actions.is_empty()
            && self.short_term_actions.is_empty()
            && self.long_term_actions.is_empty()
            && self.warnings.is_empty()
            && self.opportunities.is_empty()
            && self.sovereignty_improvements.is_empty()
    }
}
