//! Integration tests for the corpus relevance engine
//!
//! These exercise search behavior end-to-end over the built-in corpus
//! plus synthetic stores loaded from disk.

use proptest::prelude::*;
use std::fs;
use std::sync::Arc;
use veridex_corpus::{CorpusStore, RelevanceEngine};

fn engine() -> RelevanceEngine {
    RelevanceEngine::new(Arc::new(CorpusStore::builtin()))
}

#[test]
fn test_empty_query_returns_nothing() {
    let engine = engine();
    assert!(engine.search_case_law("", None, None).is_empty());
    assert!(engine.search_case_law("   \t  ", None, None).is_empty());
    assert!(engine.find_remedy_statutes("", None).is_empty());
    assert!(engine.search_constitutional("").is_empty());

    let report = engine.search_legal_authorities("");
    assert!(report.case_law.is_empty());
    assert!(report.statutes.is_empty());
    assert!(report.recommended_authorities.is_empty());
    assert_eq!(
        report.summary,
        "No direct matches found. Consider refining search terms."
    );
}

#[test]
fn test_exact_phrase_ranks_first_with_high_score() {
    // Hale v. Henkel carries "sovereign immunity" as a key principle
    let engine = engine();
    let results = engine.search_case_law("sovereign immunity", None, None);
    assert!(!results.is_empty());
    assert_eq!(results[0].title, "Hale v. Henkel");
    assert!(results[0].relevance_score >= 1.0);

    // Anything after it at most shares the top score
    for m in &results[1..] {
        assert!(m.relevance_score <= results[0].relevance_score);
    }
}

#[test]
fn test_jurisdiction_filter_excludes_before_scoring() {
    let engine = engine();
    let all = engine.search_case_law("rights", None, None);
    let filtered = engine.search_case_law("rights", Some("state"), None);
    assert!(!all.is_empty());
    assert!(filtered.is_empty());
}

#[test]
fn test_remedy_type_filter() {
    let engine = engine();
    let results = engine.search_case_law("judicial", None, Some("judicial_review"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Marbury v. Madison");
}

#[test]
fn test_code_type_filter() {
    let engine = engine();
    let ucc_only = engine.find_remedy_statutes("rights", Some("UCC"));
    assert!(ucc_only.iter().all(|m| m.citation.starts_with("UCC")));
}

#[test]
fn test_result_caps_hold_on_large_corpus() {
    // A corpus of 60 identical cases and 40 identical statutes on disk
    let dir = tempfile::tempdir().unwrap();
    let case = serde_json::json!({
        "case_name": "Doe v. Roe",
        "citation": "1 U.S. 1 (1900)",
        "year": 1900,
        "jurisdiction": "federal",
        "holding": "The remedy for an unlawful demand is a timely challenge to the demand.",
        "remedy_types": ["rights_protection"],
        "key_principles": ["remedy"]
    });
    let statute = serde_json::json!({
        "statute_name": "Remedy Act",
        "citation": "R.A. § 1",
        "code_type": "State",
        "section": "1",
        "text": "A remedy shall be available for every wrong suffered by any party.",
        "application": "General remedies",
        "key_provisions": ["remedy"]
    });
    let cases: Vec<_> = (0..60).map(|_| case.clone()).collect();
    let statutes: Vec<_> = (0..40).map(|_| statute.clone()).collect();
    fs::write(
        dir.path().join("case_law.json"),
        serde_json::to_string(&cases).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.path().join("statutes.json"),
        serde_json::to_string(&statutes).unwrap(),
    )
    .unwrap();

    let engine = RelevanceEngine::new(Arc::new(CorpusStore::load(dir.path())));
    assert_eq!(engine.search_case_law("remedy", None, None).len(), 20);
    assert_eq!(engine.find_remedy_statutes("remedy", None).len(), 15);

    let report = engine.search_legal_authorities("remedy");
    assert!(report.case_law.len() <= 20);
    assert!(report.statutes.len() <= 15);
    assert_eq!(report.recommended_authorities.len(), 5);
}

#[test]
fn test_combined_report_summary_and_recommendations() {
    let engine = engine();
    let report = engine.search_legal_authorities("rights");
    assert!(report.summary.starts_with("Found"));
    assert!(report.recommended_authorities.len() <= 5);
    assert!(!report.affidavits.is_empty());
}

#[test]
fn test_affidavit_kind_filter() {
    let engine = engine();
    let all = engine.model_affidavits(None);
    let jurisdiction_only = engine.model_affidavits(Some("jurisdiction"));
    assert_eq!(all.len(), 2);
    assert_eq!(jurisdiction_only.len(), 1);
    assert_eq!(jurisdiction_only[0].kind, "jurisdiction");
}

proptest! {
    #[test]
    fn prop_scores_stay_in_bounds(query in "[a-z ]{0,40}") {
        let engine = engine();
        for m in engine.search_case_law(&query, None, None) {
            prop_assert!(m.relevance_score > 0.1);
            prop_assert!(m.relevance_score <= 2.0);
        }
    }

    #[test]
    fn prop_caps_never_exceeded(query in "[a-z ]{0,40}") {
        let engine = engine();
        prop_assert!(engine.search_case_law(&query, None, None).len() <= 20);
        prop_assert!(engine.find_remedy_statutes(&query, None).len() <= 15);
    }
}
