//! Remedy synthesis: (situation type, risk level) → remedy proposal

use tracing::debug;
use veridex_domain::{
    Contradiction, RemedyProposal, RiskLevel, SituationContext, SituationType,
};

const BASELINE_CONFIDENCE: f64 = 0.88;
const FALLBACK_CONFIDENCE: f64 = 0.75;

/// Maps situation and risk signals to a remedy category with strategies
///
/// A pure decision table: unknown or general situations fall back to a
/// generic administrative-process remedy, never an error. Contradictions
/// pass through unmodified for downstream aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemedySynthesizer;

impl RemedySynthesizer {
    /// Create a new synthesizer
    pub fn new() -> Self {
        Self
    }

    /// Synthesize a remedy proposal for the analyzed situation
    pub fn synthesize(
        &self,
        situation: &SituationContext,
        risk: RiskLevel,
        contradictions: Vec<Contradiction>,
    ) -> RemedyProposal {
        let (remedy_type, description, strategies, confidence) =
            select_remedy(situation.situation_type, risk);

        debug!(
            situation_type = situation.situation_type.as_str(),
            risk = risk.as_str(),
            remedy_type,
            "remedy selected"
        );

        RemedyProposal {
            remedy_type: remedy_type.to_string(),
            description: description.to_string(),
            reasoning: build_reasoning(situation, risk, &contradictions),
            legal_strategies: strategies.iter().map(|s| s.to_string()).collect(),
            confidence,
            contradictions,
        }
    }
}

fn select_remedy(
    situation_type: SituationType,
    risk: RiskLevel,
) -> (&'static str, &'static str, &'static [&'static str], f64) {
    match situation_type {
        SituationType::TrafficStop => (
            "Administrative Notice",
            "Prepare and serve a notice of lawful travel documenting the encounter.",
            &[
                "Challenge jurisdiction",
                "Demand proof of commercial activity",
                "Preserve the record of the encounter",
            ],
            BASELINE_CONFIDENCE,
        ),
        SituationType::FeeDemand => (
            "UCC Administrative Process",
            fee_description(risk),
            &[
                "Challenge lawful authority for the fee",
                "Demand a fee schedule and due-process hearing",
                "Send notice and opportunity to cure",
            ],
            BASELINE_CONFIDENCE,
        ),
        SituationType::CourtSummons => (
            "Jurisdictional Challenge",
            "File a special appearance challenging jurisdiction before the response deadline.",
            &[
                "Calculate and honor the response deadline",
                "Appear specially to challenge jurisdiction",
                "Reserve all rights on the record",
            ],
            BASELINE_CONFIDENCE,
        ),
        SituationType::General => (
            "UCC Administrative Process",
            fee_description(risk),
            &["Challenge jurisdiction", "Send notice and opportunity to cure"],
            FALLBACK_CONFIDENCE,
        ),
    }
}

fn fee_description(risk: RiskLevel) -> &'static str {
    if risk == RiskLevel::High {
        "Generate and send a Conditional Acceptance for Value (CAFV)."
    } else {
        "Generate and send a Notice of Defect."
    }
}

fn build_reasoning(
    situation: &SituationContext,
    risk: RiskLevel,
    contradictions: &[Contradiction],
) -> String {
    let mut reasoning = format!(
        "The presentment pattern of a {} matter supports administrative remedy.",
        situation.situation_type.as_str().replace('_', " ")
    );
    if !contradictions.is_empty() {
        reasoning.push_str(&format!(
            " {} contradiction(s) indicate a flawed presentment.",
            contradictions.len()
        ));
    }
    if risk == RiskLevel::High {
        reasoning.push_str(" The high risk level warrants conditional acceptance over rejection.");
    }
    reasoning
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridex_domain::SituationContext;

    fn situation(ty: SituationType) -> SituationContext {
        let mut ctx = SituationContext::default_context();
        ctx.situation_type = ty;
        ctx
    }

    #[test]
    fn test_unknown_situation_falls_back_to_generic_remedy() {
        let remedy = RemedySynthesizer::new().synthesize(
            &situation(SituationType::General),
            RiskLevel::Low,
            Vec::new(),
        );
        assert_eq!(remedy.remedy_type, "UCC Administrative Process");
        assert_eq!(remedy.description, "Generate and send a Notice of Defect.");
        assert!(!remedy.legal_strategies.is_empty());
        assert!(remedy.confidence > 0.0 && remedy.confidence <= 1.0);
    }

    #[test]
    fn test_high_risk_upgrades_to_conditional_acceptance() {
        let remedy = RemedySynthesizer::new().synthesize(
            &situation(SituationType::FeeDemand),
            RiskLevel::High,
            Vec::new(),
        );
        assert!(remedy.description.contains("Conditional Acceptance for Value"));
    }

    #[test]
    fn test_contradictions_pass_through_unmodified() {
        let contradictions = vec![Contradiction {
            kind: "semantic".to_string(),
            description: "Payment terms conflict.".to_string(),
            confidence: 0.78,
        }];
        let remedy = RemedySynthesizer::new().synthesize(
            &situation(SituationType::FeeDemand),
            RiskLevel::Medium,
            contradictions.clone(),
        );
        assert_eq!(remedy.contradictions, contradictions);
        assert!(remedy.reasoning.contains("flawed presentment"));
    }

    #[test]
    fn test_court_summons_gets_jurisdictional_challenge() {
        let remedy = RemedySynthesizer::new().synthesize(
            &situation(SituationType::CourtSummons),
            RiskLevel::Medium,
            Vec::new(),
        );
        assert_eq!(remedy.remedy_type, "Jurisdictional Challenge");
        assert!(remedy
            .legal_strategies
            .iter()
            .any(|s| s.contains("response deadline")));
    }
}
