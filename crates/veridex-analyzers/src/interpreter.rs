//! Situation interpretation: raw text → structured situation context

use tracing::debug;
use veridex_domain::{
    ContextHint, Entities, Jurisdiction, SituationContext, SituationType, UrgencyLevel,
};

// Keyword tables, checked in order; the first table doubles as the
// tie-break winner when hit counts are equal.
const TYPE_TABLE: &[(SituationType, &[&str])] = &[
    (
        SituationType::TrafficStop,
        &[
            "traffic",
            "officer",
            "vehicle",
            "license",
            "pulled over",
            "citation",
            "registration",
        ],
    ),
    (
        SituationType::FeeDemand,
        &[
            "payment",
            "fee",
            "invoice",
            "bill",
            "amount due",
            "balance",
            "remit",
        ],
    ),
    (
        SituationType::CourtSummons,
        &[
            "summons",
            "court",
            "hearing",
            "appear",
            "docket",
            "plaintiff",
            "defendant",
        ],
    ),
];

const HIGH_URGENCY_TERMS: &[&str] = &[
    "immediately",
    "urgent",
    "final notice",
    "deadline",
    "warrant",
    "within 10 days",
    "time-sensitive",
];

const LOW_URGENCY_TERMS: &[&str] = &["informational", "no action required", "for your records"];

const JURISDICTION_TABLE: &[(&str, &[&str])] = &[
    (
        "commercial",
        &["ucc", "invoice", "merchant", "commercial", "contract", "payment"],
    ),
    (
        "federal",
        &["united states", "federal", "u.s.c", "usc", "irs", "congress"],
    ),
    ("state", &["state of", "statute", "municipal", "county"]),
    ("common_law", &["common law"]),
];

const ORG_MARKERS: &[&str] = &[
    "Corp",
    "Corporation",
    "Inc",
    "LLC",
    "Company",
    "Department",
    "Agency",
    "Bureau",
    "Court",
    "Bank",
    "Office",
    "Authority",
];

/// Classifies raw input text into a [`SituationContext`]
///
/// Pure function of the input and the static keyword tables above.
/// Always returns a complete context: `General`/`Medium`/"unknown"
/// defaults when no signal is found, never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SituationInterpreter;

impl SituationInterpreter {
    /// Create a new interpreter
    pub fn new() -> Self {
        Self
    }

    /// Classify `text`, letting `hint` pin the type and/or jurisdiction
    pub fn interpret(&self, text: &str, hint: Option<&ContextHint>) -> SituationContext {
        if text.trim().is_empty() {
            let mut ctx = SituationContext::default_context();
            apply_hint(&mut ctx, hint);
            return ctx;
        }

        let lower = text.to_lowercase();

        let situation_type = detect_type(&lower);
        let urgency = detect_urgency(&lower);
        let jurisdiction = detect_jurisdiction(&lower);
        let entities = extract_entities(text);

        let mut ctx = SituationContext {
            summary: String::new(),
            situation_type,
            urgency,
            jurisdiction,
            entities,
        };
        apply_hint(&mut ctx, hint);
        ctx.summary = format!(
            "Appears to be a {} matter of {} urgency in {} jurisdiction.",
            ctx.situation_type.as_str().replace('_', " "),
            ctx.urgency.as_str(),
            ctx.jurisdiction.primary
        );

        debug!(
            situation_type = ctx.situation_type.as_str(),
            urgency = ctx.urgency.as_str(),
            jurisdiction = %ctx.jurisdiction.primary,
            "situation interpreted"
        );
        ctx
    }
}

fn apply_hint(ctx: &mut SituationContext, hint: Option<&ContextHint>) {
    let Some(hint) = hint else { return };
    if let Some(ty) = &hint.situation_type {
        ctx.situation_type = SituationType::parse(ty);
    }
    if let Some(jurisdiction) = &hint.jurisdiction {
        ctx.jurisdiction.primary = jurisdiction.clone();
    }
}

fn detect_type(lower: &str) -> SituationType {
    let mut best = SituationType::General;
    let mut best_hits = 0usize;
    for (ty, terms) in TYPE_TABLE {
        let hits = terms.iter().filter(|t| lower.contains(*t)).count();
        if hits > best_hits {
            best_hits = hits;
            best = *ty;
        }
    }
    best
}

fn detect_urgency(lower: &str) -> UrgencyLevel {
    if HIGH_URGENCY_TERMS.iter().any(|t| lower.contains(t)) {
        UrgencyLevel::High
    } else if LOW_URGENCY_TERMS.iter().any(|t| lower.contains(t)) {
        UrgencyLevel::Low
    } else {
        UrgencyLevel::Medium
    }
}

fn detect_jurisdiction(lower: &str) -> Jurisdiction {
    let mut matched: Vec<(&str, usize)> = JURISDICTION_TABLE
        .iter()
        .filter_map(|(tag, terms)| {
            let hits = terms.iter().filter(|t| lower.contains(*t)).count();
            (hits > 0).then_some((*tag, hits))
        })
        .collect();

    if matched.is_empty() {
        return Jurisdiction::unknown();
    }

    // Stable: equal hit counts keep table order
    matched.sort_by(|a, b| b.1.cmp(&a.1));
    Jurisdiction {
        primary: matched[0].0.to_string(),
        secondary: matched[1..].iter().map(|(tag, _)| tag.to_string()).collect(),
    }
}

/// Capitalized-run heuristic for people and organizations
///
/// Runs of two or more capitalized words become organization candidates
/// when they contain an organizational marker, otherwise person
/// candidates when they are short title-case runs.
fn extract_entities(text: &str) -> Entities {
    let mut entities = Entities::default();

    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .collect();

    let mut run: Vec<&str> = Vec::new();
    for word in words.iter().copied().chain(std::iter::once("")) {
        let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());
        if capitalized {
            run.push(word);
            continue;
        }
        classify_run(&run, &mut entities);
        run.clear();
    }
    entities
}

fn classify_run(run: &[&str], entities: &mut Entities) {
    if run.len() < 2 {
        return;
    }
    let name = run.join(" ");
    if run.iter().any(|w| ORG_MARKERS.contains(w)) {
        push_unique(&mut entities.organizations, name);
    } else if run.len() <= 3 && run.iter().all(|w| is_title_case(w)) {
        push_unique(&mut entities.people, name);
    }
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_uppercase()) && chars.all(|c| c.is_lowercase())
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_default_context() {
        let ctx = SituationInterpreter::new().interpret("", None);
        assert_eq!(ctx.situation_type, SituationType::General);
        assert_eq!(ctx.urgency, UrgencyLevel::Medium);
        assert_eq!(ctx.jurisdiction.primary, "unknown");
    }

    #[test]
    fn test_fee_demand_detection() {
        let ctx = SituationInterpreter::new().interpret(
            "Your invoice shows an amount due of $150. Please remit payment.",
            None,
        );
        assert_eq!(ctx.situation_type, SituationType::FeeDemand);
    }

    #[test]
    fn test_court_summons_with_high_urgency() {
        let ctx = SituationInterpreter::new().interpret(
            "You are hereby commanded to appear before the court immediately. \
             A warrant may issue on failure to appear at the hearing.",
            None,
        );
        assert_eq!(ctx.situation_type, SituationType::CourtSummons);
        assert_eq!(ctx.urgency, UrgencyLevel::High);
    }

    #[test]
    fn test_hint_overrides_detection() {
        let hint = ContextHint {
            situation_type: Some("traffic_stop".to_string()),
            jurisdiction: Some("common_law".to_string()),
        };
        let ctx = SituationInterpreter::new()
            .interpret("Your invoice shows an amount due.", Some(&hint));
        assert_eq!(ctx.situation_type, SituationType::TrafficStop);
        assert_eq!(ctx.jurisdiction.primary, "common_law");
    }

    #[test]
    fn test_commercial_jurisdiction_detection() {
        let ctx = SituationInterpreter::new().interpret(
            "This invoice is issued under UCC merchant provisions.",
            None,
        );
        assert_eq!(ctx.jurisdiction.primary, "commercial");
    }

    #[test]
    fn test_entity_extraction() {
        let ctx = SituationInterpreter::new().interpret(
            "John Doe received a demand from Acme Collections Agency about the bill.",
            None,
        );
        assert!(ctx.entities.people.contains(&"John Doe".to_string()));
        assert!(ctx
            .entities
            .organizations
            .contains(&"Acme Collections Agency".to_string()));
    }

    #[test]
    fn test_interpretation_is_deterministic() {
        let text = "Notice: final notice of fee demand from the State of Confusion.";
        let a = SituationInterpreter::new().interpret(text, None);
        let b = SituationInterpreter::new().interpret(text, None);
        assert_eq!(a, b);
    }
}
