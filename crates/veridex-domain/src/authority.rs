//! Relevance-search results over the legal-authority corpus

use crate::record::AffidavitTemplate;
use serde::{Deserialize, Serialize};

/// Authority category a relevance match came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityCategory {
    /// Court decisions
    CaseLaw,
    /// Statutes and code sections
    Statute,
    /// Constitutional provisions
    Constitutional,
}

impl AuthorityCategory {
    /// Get the category as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorityCategory::CaseLaw => "case_law",
            AuthorityCategory::Statute => "statute",
            AuthorityCategory::Constitutional => "constitutional",
        }
    }
}

/// One scored search result
///
/// Ephemeral: owned by the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceMatch {
    /// Category of the source record
    pub category: AuthorityCategory,

    /// Title of the source record
    pub title: String,

    /// Citation of the source record
    pub citation: String,

    /// Relevance score, clamped to [0, 2.0]
    pub relevance_score: f64,

    /// Best-matching quote extracted from the record body
    pub quotable_text: String,
}

/// A top authority recommended for citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAuthority {
    /// Category of the recommended record
    #[serde(rename = "type")]
    pub category: AuthorityCategory,

    /// Title of the recommended record
    pub authority: String,

    /// Citation of the recommended record
    pub citation: String,

    /// Why it was recommended
    pub reason: String,
}

/// Combined result of a search across every authority category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorityReport {
    /// The query that produced this report
    pub query: String,

    /// Case-law matches, best first (at most 20)
    pub case_law: Vec<RelevanceMatch>,

    /// Statute matches, best first (at most 15)
    pub statutes: Vec<RelevanceMatch>,

    /// Constitutional-provision matches, best first
    pub constitutional: Vec<RelevanceMatch>,

    /// Model affidavit templates included for reference
    pub affidavits: Vec<AffidavitTemplate>,

    /// Human-readable result summary
    pub summary: String,

    /// Top authorities recommended for citation (3 cases + 2 statutes)
    pub recommended_authorities: Vec<RecommendedAuthority>,
}

impl AuthorityReport {
    /// A report for a query that matched nothing
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            case_law: Vec::new(),
            statutes: Vec::new(),
            constitutional: Vec::new(),
            affidavits: Vec::new(),
            summary: "No direct matches found. Consider refining search terms.".to_string(),
            recommended_authorities: Vec::new(),
        }
    }
}
