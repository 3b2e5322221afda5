//! Term-based relevance ranking over the corpus store

use crate::CorpusStore;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;
use veridex_domain::{
    AffidavitTemplate, AuthorityCategory, AuthorityReport, CorpusRecord, RecommendedAuthority,
    RelevanceMatch,
};

/// Records scoring at or below this are discarded
const MIN_RELEVANCE: f64 = 0.1;
/// Scores are clamped to this ceiling
const MAX_SCORE: f64 = 2.0;
/// Full-phrase match bonus
const PHRASE_BONUS: f64 = 1.0;
/// Per-occurrence bonus for each individual term in the body
const TERM_OCCURRENCE_BONUS: f64 = 0.1;
/// Per-term bonus for appearing in the title/citation
const TITLE_BONUS: f64 = 0.5;
/// Quote sentences must be longer than this many characters
const MIN_QUOTE_LEN: usize = 20;
/// Fallback quote prefix length when no sentence scores
const QUOTE_PREFIX_LEN: usize = 200;

const CASE_LAW_CAP: usize = 20;
const STATUTE_CAP: usize = 15;
const RECOMMENDED_CASES: usize = 3;
const RECOMMENDED_STATUTES: usize = 2;

/// Term-based search and ranking over the corpus store
///
/// All scoring is deterministic: stable sort by descending score, with
/// equal scores preserving store load order.
pub struct RelevanceEngine {
    store: Arc<CorpusStore>,
}

impl RelevanceEngine {
    /// Create an engine over a shared corpus store
    pub fn new(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }

    /// Search case law, optionally filtered by jurisdiction and remedy type
    ///
    /// Returns at most 20 matches, best first. Empty queries match nothing.
    pub fn search_case_law(
        &self,
        query: &str,
        jurisdiction: Option<&str>,
        remedy_type: Option<&str>,
    ) -> Vec<RelevanceMatch> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }
        self.search_records(
            self.store.cases(),
            AuthorityCategory::CaseLaw,
            &terms,
            |record| {
                jurisdiction.is_none_or(|j| record.jurisdiction() == Some(j))
                    && remedy_type.is_none_or(|r| {
                        record.remedy_types().iter().any(|t| t.as_str() == r)
                    })
            },
            Some(CASE_LAW_CAP),
        )
    }

    /// Search remedy statutes, optionally filtered by code type
    ///
    /// Returns at most 15 matches, best first. Empty queries match nothing.
    pub fn find_remedy_statutes(&self, query: &str, code_type: Option<&str>) -> Vec<RelevanceMatch> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }
        self.search_records(
            self.store.statutes(),
            AuthorityCategory::Statute,
            &terms,
            |record| {
                code_type.is_none_or(|ct| {
                    matches!(record, CorpusRecord::Statute(s) if s.code_type == ct)
                })
            },
            Some(STATUTE_CAP),
        )
    }

    /// Search constitutional provisions (uncapped)
    pub fn search_constitutional(&self, query: &str) -> Vec<RelevanceMatch> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }
        self.search_records(
            self.store.provisions(),
            AuthorityCategory::Constitutional,
            &terms,
            |_| true,
            None,
        )
    }

    /// Retrieve model affidavit templates, optionally filtered by kind
    pub fn model_affidavits(&self, kind: Option<&str>) -> Vec<AffidavitTemplate> {
        self.store
            .affidavits()
            .iter()
            .filter(|a| kind.is_none_or(|k| a.kind == k))
            .cloned()
            .collect()
    }

    /// Comprehensive search across every authority category
    ///
    /// Fans the query out over case law, statutes, and constitutional
    /// provisions, and merges the results into one report with a
    /// human-readable summary and the top authorities for citation.
    pub fn search_legal_authorities(&self, query: &str) -> AuthorityReport {
        if tokenize(query).is_empty() {
            return AuthorityReport::empty(query);
        }
        debug!(query, "searching legal authorities");

        let case_law = self.search_case_law(query, None, None);
        let statutes = self.find_remedy_statutes(query, None);
        let constitutional = self.search_constitutional(query);
        let affidavits = self.model_affidavits(None);

        let summary = build_summary(&case_law, &statutes, &constitutional);
        let recommended_authorities = recommend_authorities(&case_law, &statutes);

        AuthorityReport {
            query: query.to_string(),
            case_law,
            statutes,
            constitutional,
            affidavits,
            summary,
            recommended_authorities,
        }
    }

    fn search_records(
        &self,
        records: &[CorpusRecord],
        category: AuthorityCategory,
        terms: &[String],
        keep: impl Fn(&CorpusRecord) -> bool,
        cap: Option<usize>,
    ) -> Vec<RelevanceMatch> {
        let mut results: Vec<RelevanceMatch> = records
            .iter()
            .filter(|record| keep(*record))
            .filter_map(|record| {
                let score = relevance_score(terms, record);
                (score > MIN_RELEVANCE).then(|| RelevanceMatch {
                    category,
                    title: record.title().to_string(),
                    citation: record.citation().to_string(),
                    relevance_score: score,
                    quotable_text: extract_quote(terms, record.body()),
                })
            })
            .collect();

        // Stable: equal scores keep store load order
        results.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        if let Some(cap) = cap {
            results.truncate(cap);
        }
        results
    }
}

fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Score one record against the query terms
///
/// Phrase hit +1.0; +0.1 per occurrence of each term in the searchable
/// body; +0.5 per term present in the title/citation. Clamped to
/// [0, 2.0]. A record with no searchable text scores 0.
fn relevance_score(terms: &[String], record: &CorpusRecord) -> f64 {
    let text = record.searchable_text();
    if text.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;

    let phrase = terms.join(" ");
    if text.contains(&phrase) {
        score += PHRASE_BONUS;
    }

    for term in terms {
        score += text.matches(term.as_str()).count() as f64 * TERM_OCCURRENCE_BONUS;
    }

    let title = format!("{} {}", record.title(), record.citation()).to_lowercase();
    for term in terms {
        if title.contains(term.as_str()) {
            score += TITLE_BONUS;
        }
    }

    score.clamp(0.0, MAX_SCORE)
}

/// Select the sentence with the most query-term hits as the quote
///
/// Sentences at or under 20 characters are ignored as fragments; a
/// strictly higher hit count is required to displace an earlier
/// sentence, so ties go to the first occurrence. When no sentence
/// scores, a truncated prefix of the body is returned instead.
fn extract_quote(terms: &[String], body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    let mut best = "";
    let mut best_hits = 0usize;
    for sentence in body.split(['.', '!', '?']) {
        let sentence = sentence.trim();
        if sentence.len() <= MIN_QUOTE_LEN {
            continue;
        }
        let lower = sentence.to_lowercase();
        let hits = terms.iter().filter(|t| lower.contains(t.as_str())).count();
        if hits > best_hits {
            best_hits = hits;
            best = sentence;
        }
    }

    if best_hits > 0 {
        best.to_string()
    } else if body.chars().count() > QUOTE_PREFIX_LEN {
        let prefix: String = body.chars().take(QUOTE_PREFIX_LEN).collect();
        format!("{}...", prefix)
    } else {
        body.to_string()
    }
}

fn build_summary(
    cases: &[RelevanceMatch],
    statutes: &[RelevanceMatch],
    constitutional: &[RelevanceMatch],
) -> String {
    let mut parts = Vec::new();
    if !cases.is_empty() {
        parts.push(format!("Found {} relevant case law authorities", cases.len()));
    }
    if !statutes.is_empty() {
        parts.push(format!("Found {} relevant statutes and codes", statutes.len()));
    }
    if !constitutional.is_empty() {
        parts.push(format!(
            "Found {} constitutional provisions",
            constitutional.len()
        ));
    }

    if parts.is_empty() {
        "No direct matches found. Consider refining search terms.".to_string()
    } else {
        format!("{}.", parts.join(". "))
    }
}

fn recommend_authorities(
    cases: &[RelevanceMatch],
    statutes: &[RelevanceMatch],
) -> Vec<RecommendedAuthority> {
    let mut recommendations = Vec::new();

    for case in cases.iter().take(RECOMMENDED_CASES) {
        recommendations.push(RecommendedAuthority {
            category: AuthorityCategory::CaseLaw,
            authority: case.title.clone(),
            citation: case.citation.clone(),
            reason: "High relevance and precedent value".to_string(),
        });
    }
    for statute in statutes.iter().take(RECOMMENDED_STATUTES) {
        recommendations.push(RecommendedAuthority {
            category: AuthorityCategory::Statute,
            authority: statute.title.clone(),
            citation: statute.citation.clone(),
            reason: "Direct statutory authority".to_string(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridex_domain::{CaseLaw, CorpusRecord};

    fn record_with_holding(holding: &str) -> CorpusRecord {
        CorpusRecord::CaseLaw(CaseLaw {
            case_name: "Test v. Case".to_string(),
            citation: "1 U.S. 1 (1800)".to_string(),
            year: 1800,
            jurisdiction: "supreme_court".to_string(),
            holding: holding.to_string(),
            remedy_types: Vec::new(),
            key_principles: Vec::new(),
        })
    }

    #[test]
    fn test_phrase_match_outscores_scattered_terms() {
        let terms = tokenize("sovereign immunity");
        let phrase = record_with_holding("The doctrine of sovereign immunity bars the claim.");
        let scattered =
            record_with_holding("The sovereign state asserted immunity from process later.");
        assert!(relevance_score(&terms, &phrase) > relevance_score(&terms, &scattered));
        assert!(relevance_score(&terms, &phrase) >= 1.0);
    }

    #[test]
    fn test_score_monotonic_in_term_occurrences() {
        let terms = tokenize("remedy");
        let one = record_with_holding("A remedy exists.");
        let two = record_with_holding("A remedy exists. The remedy is administrative.");
        assert!(relevance_score(&terms, &two) > relevance_score(&terms, &one));
    }

    #[test]
    fn test_score_clamped_at_ceiling() {
        let terms = tokenize("remedy");
        let stuffed = record_with_holding(&"remedy ".repeat(100));
        assert_eq!(relevance_score(&terms, &stuffed), 2.0);
    }

    #[test]
    fn test_empty_body_scores_zero() {
        let terms = tokenize("remedy");
        assert_eq!(relevance_score(&terms, &record_with_holding("")), 0.0);
    }

    #[test]
    fn test_quote_prefers_sentence_with_most_terms() {
        let terms = tokenize("jurisdiction remedy");
        let body = "This sentence mentions jurisdiction only, nothing else here. \
                    This sentence mentions jurisdiction and remedy together today.";
        let quote = extract_quote(&terms, body);
        assert!(quote.contains("remedy"));
    }

    #[test]
    fn test_quote_ignores_short_fragments() {
        let terms = tokenize("remedy");
        let body = "Short remedy. This longer sentence also mentions the remedy available.";
        let quote = extract_quote(&terms, body);
        assert_eq!(
            quote,
            "This longer sentence also mentions the remedy available"
        );
    }

    #[test]
    fn test_quote_falls_back_to_prefix() {
        let terms = tokenize("zebra");
        let body = "x".repeat(300);
        let quote = extract_quote(&terms, &body);
        assert_eq!(quote.chars().count(), 203);
        assert!(quote.ends_with("..."));
    }
}
