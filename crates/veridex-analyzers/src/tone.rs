//! Tone and legal-risk assessment

use veridex_domain::traits::ToneAnalyzer;
use veridex_domain::{RiskLevel, ToneCategory, ToneRiskReport};

const AGGRESSIVE_TERMS: &[&str] = &[
    "demand",
    "failure to comply",
    "immediately",
    "final",
    "enforcement",
    "penalty",
    "consequences",
];
const POSITIVE_TERMS: &[&str] = &[
    "thank you",
    "appreciate",
    "pleased",
    "agree",
    "welcome",
    "glad",
];
const CONCILIATORY_TERMS: &[&str] = &[
    "apologize",
    "regret",
    "sorry",
    "understand",
    "accommodate",
];

const HIGH_RISK_TERMS: &[&str] = &[
    "warrant",
    "arrest",
    "seizure",
    "garnish",
    "judgment",
    "prosecution",
    "penalty",
    "foreclosure",
    "final notice",
];
const MEDIUM_RISK_TERMS: &[&str] = &[
    "fee",
    "fine",
    "violation",
    "demand",
    "deadline",
    "collection",
    "late",
];

/// The shipped keyword-table tone/risk analyzer
///
/// Total and deterministic: tone is the category with the most term
/// occurrences (ties prefer aggressive, then positive, then
/// conciliatory; zero hits is neutral), risk is the highest tier with
/// any term present.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordToneAnalyzer;

impl KeywordToneAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }
}

impl ToneAnalyzer for KeywordToneAnalyzer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn analyze(&self, text: &str) -> ToneRiskReport {
        let lower = text.to_lowercase();

        let tone = detect_tone(&lower);
        let risk = detect_risk(&lower);

        ToneRiskReport {
            summary: format!(
                "Tone reads as {} with {} legal risk.",
                tone.as_str(),
                risk.as_str()
            ),
            tone,
            risk,
        }
    }
}

fn occurrences(lower: &str, terms: &[&str]) -> usize {
    terms.iter().map(|t| lower.matches(t).count()).sum()
}

fn detect_tone(lower: &str) -> ToneCategory {
    // Order doubles as the tie-break preference
    let scored = [
        (ToneCategory::Aggressive, occurrences(lower, AGGRESSIVE_TERMS)),
        (ToneCategory::Positive, occurrences(lower, POSITIVE_TERMS)),
        (
            ToneCategory::Conciliatory,
            occurrences(lower, CONCILIATORY_TERMS),
        ),
    ];

    let mut best = ToneCategory::Neutral;
    let mut best_hits = 0usize;
    for (tone, hits) in scored {
        if hits > best_hits {
            best_hits = hits;
            best = tone;
        }
    }
    best
}

fn detect_risk(lower: &str) -> RiskLevel {
    if HIGH_RISK_TERMS.iter().any(|t| lower.contains(t)) {
        RiskLevel::High
    } else if MEDIUM_RISK_TERMS.iter().any(|t| lower.contains(t)) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral_low() {
        let report = KeywordToneAnalyzer::new().analyze("");
        assert_eq!(report.tone, ToneCategory::Neutral);
        assert_eq!(report.risk, RiskLevel::Low);
    }

    #[test]
    fn test_enforcement_language_is_aggressive_high() {
        let report = KeywordToneAnalyzer::new().analyze(
            "FINAL NOTICE: failure to comply will result in a penalty and a warrant.",
        );
        assert_eq!(report.tone, ToneCategory::Aggressive);
        assert_eq!(report.risk, RiskLevel::High);
    }

    #[test]
    fn test_favorable_language_is_positive() {
        let report = KeywordToneAnalyzer::new()
            .analyze("Thank you for your cooperation; we are pleased to agree to these terms.");
        assert_eq!(report.tone, ToneCategory::Positive);
        assert_eq!(report.risk, RiskLevel::Low);
    }

    #[test]
    fn test_fee_language_is_medium_risk() {
        let report = KeywordToneAnalyzer::new().analyze("A late fee applies to this account.");
        assert_eq!(report.risk, RiskLevel::Medium);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = KeywordToneAnalyzer::new();
        let text = "We demand payment immediately or enforcement follows.";
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }
}
