//! Structural analysis: clause extraction and contradiction detection

use veridex_domain::traits::ContradictionDetector;
use veridex_domain::Contradiction;

/// Clauses shorter than this are dropped as fragments
const MIN_CLAUSE_LEN: usize = 10;

const SOFTENER_TERMS: &[&str] = &["friendly", "courtesy", "reminder", "thank you"];
const THREAT_TERMS: &[&str] = &[
    "penalty",
    "warrant",
    "seizure",
    "enforcement",
    "prosecution",
    "arrest",
];
const MANDATORY_TERMS: &[&str] = &["must", "shall", "required to"];
const VOLUNTARY_TERMS: &[&str] = &["voluntary", "optional", "may decline", "not required"];

/// Split text into clause strings, in document order
///
/// Clauses are separated by sentence terminators, semicolons, and line
/// breaks; fragments shorter than 10 characters are dropped. Empty input
/// yields empty output.
pub fn extract_clauses(text: &str) -> Vec<String> {
    text.split(['.', '!', '?', ';', '\n'])
        .map(str::trim)
        .filter(|clause| clause.len() >= MIN_CLAUSE_LEN)
        .map(str::to_string)
        .collect()
}

/// The shipped keyword-heuristic contradiction detector
///
/// Two rules: rhetorical conflicts (courteous framing alongside
/// enforcement language) and semantic obligation conflicts (mandatory
/// language alongside voluntary language). A stronger detector can be
/// swapped in through the [`ContradictionDetector`] seam without
/// touching any caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicDetector;

impl HeuristicDetector {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }
}

impl ContradictionDetector for HeuristicDetector {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn detect(&self, clauses: &[String]) -> Vec<Contradiction> {
        let lowered: Vec<String> = clauses.iter().map(|c| c.to_lowercase()).collect();
        let mut contradictions = Vec::new();

        detect_rhetorical(&lowered, &mut contradictions);
        detect_obligation_conflicts(clauses, &lowered, &mut contradictions);

        contradictions
    }
}

fn detect_rhetorical(lowered: &[String], out: &mut Vec<Contradiction>) {
    let softener = SOFTENER_TERMS
        .iter()
        .find(|t| lowered.iter().any(|c| c.contains(*t)));
    let threat = THREAT_TERMS
        .iter()
        .find(|t| lowered.iter().any(|c| c.contains(*t)));

    if let (Some(softener), Some(threat)) = (softener, threat) {
        out.push(Contradiction {
            kind: "rhetorical".to_string(),
            description: format!(
                "Document frames itself as \"{}\" while using enforcement language (\"{}\").",
                softener, threat
            ),
            confidence: 0.92,
        });
    }
}

fn detect_obligation_conflicts(
    clauses: &[String],
    lowered: &[String],
    out: &mut Vec<Contradiction>,
) {
    let mandatory: Vec<usize> = indices_containing(lowered, MANDATORY_TERMS);
    let voluntary: Vec<usize> = indices_containing(lowered, VOLUNTARY_TERMS);

    for &m in &mandatory {
        for &v in &voluntary {
            if m == v {
                continue;
            }
            let description = format!(
                "Mandatory language (\"{}\") conflicts with voluntary language (\"{}\").",
                snippet(&clauses[m]),
                snippet(&clauses[v])
            );
            if out.iter().any(|c| c.description == description) {
                continue;
            }
            out.push(Contradiction {
                kind: "semantic".to_string(),
                description,
                confidence: 0.78,
            });
        }
    }
}

fn indices_containing(lowered: &[String], terms: &[&str]) -> Vec<usize> {
    lowered
        .iter()
        .enumerate()
        .filter_map(|(i, clause)| terms.iter().any(|t| clause.contains(t)).then_some(i))
        .collect()
}

fn snippet(clause: &str) -> String {
    if clause.chars().count() <= 60 {
        clause.to_string()
    } else {
        let prefix: String = clause.chars().take(60).collect();
        format!("{}...", prefix)
    }
}

/// Convenience wrapper pairing clause extraction with a detector
pub struct StructuralAnalyzer {
    detector: Box<dyn ContradictionDetector>,
}

impl StructuralAnalyzer {
    /// Create an analyzer around the given detector strategy
    pub fn new(detector: Box<dyn ContradictionDetector>) -> Self {
        Self { detector }
    }

    /// Name of the underlying detector
    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }

    /// Extract clauses and run contradiction detection over them
    pub fn analyze(&self, text: &str) -> (Vec<String>, Vec<Contradiction>) {
        let clauses = extract_clauses(text);
        let contradictions = self.detector.detect(&clauses);
        (clauses, contradictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_clauses() {
        assert!(extract_clauses("").is_empty());
        assert!(extract_clauses("   ").is_empty());
    }

    #[test]
    fn test_fragments_are_dropped() {
        let clauses = extract_clauses("Yes. This clause is long enough to keep.");
        assert_eq!(clauses, vec!["This clause is long enough to keep".to_string()]);
    }

    #[test]
    fn test_empty_clauses_yield_no_contradictions() {
        let detector = HeuristicDetector::new();
        assert!(detector.detect(&[]).is_empty());
    }

    #[test]
    fn test_rhetorical_contradiction() {
        let detector = HeuristicDetector::new();
        let clauses = extract_clauses(
            "This is a friendly reminder about your account. \
             Failure to respond may result in a penalty and enforcement action.",
        );
        let found = detector.detect(&clauses);
        assert!(found.iter().any(|c| c.kind == "rhetorical"));
        assert!(found.iter().all(|c| (0.0..=1.0).contains(&c.confidence)));
    }

    #[test]
    fn test_obligation_conflict() {
        let detector = HeuristicDetector::new();
        let clauses = vec![
            "You must respond within ten days of receipt".to_string(),
            "Participation in this program is voluntary".to_string(),
        ];
        let found = detector.detect(&clauses);
        assert!(found.iter().any(|c| c.kind == "semantic"));
    }

    #[test]
    fn test_same_clause_does_not_conflict_with_itself() {
        let detector = HeuristicDetector::new();
        let clauses = vec!["You must treat this voluntary program seriously".to_string()];
        assert!(detector.detect(&clauses).is_empty());
    }

    #[test]
    fn test_neutral_text_has_no_contradictions() {
        let detector = HeuristicDetector::new();
        let clauses = extract_clauses("The meeting is scheduled for Tuesday afternoon.");
        assert!(detector.detect(&clauses).is_empty());
    }
}
