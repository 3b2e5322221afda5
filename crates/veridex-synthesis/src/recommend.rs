//! Recommendation aggregation: merging every stage's contributions

use veridex_domain::{
    RecommendationBundle, RemedyProposal, RiskLevel, SituationContext, SituationType,
    SovereigntyLevel, SovereigntyMetrics, ToneCategory, ToneRiskReport, UrgencyLevel,
};

/// How many improvement suggestions a transitional text receives
const TRANSITIONAL_SUGGESTION_CAP: usize = 3;
/// Overall scores below this trigger the critical language warning
const CRITICAL_SCORE: f64 = 0.4;

type ActionSet = (&'static [&'static str], &'static [&'static str], &'static [&'static str]);

/// Merges all stage signals into prioritized, deduplicated action lists
///
/// Contributions are applied in fixed precedence order: sovereignty →
/// urgency → risk → contradictions → situation-type tables → tone and
/// jurisdiction opportunities. Within each list the first contributor of
/// a string wins its position.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationAggregator;

impl RecommendationAggregator {
    /// Create a new aggregator
    pub fn new() -> Self {
        Self
    }

    /// Build the recommendation bundle for one completed analysis
    pub fn aggregate(
        &self,
        situation: &SituationContext,
        tone_risk: &ToneRiskReport,
        remedy: &RemedyProposal,
        sovereignty: &SovereigntyMetrics,
    ) -> RecommendationBundle {
        let mut bundle = RecommendationBundle::new();

        self.apply_sovereignty(&mut bundle, sovereignty);
        self.apply_urgency(&mut bundle, situation.urgency);
        self.apply_risk(&mut bundle, tone_risk.risk);
        self.apply_contradictions(&mut bundle, remedy);
        self.apply_situation_actions(&mut bundle, situation.situation_type);
        self.apply_opportunities(&mut bundle, situation, tone_risk.tone);

        bundle
    }

    fn apply_sovereignty(&self, bundle: &mut RecommendationBundle, metrics: &SovereigntyMetrics) {
        match metrics.sovereignty_level {
            SovereigntyLevel::Servile => {
                RecommendationBundle::push_unique(
                    &mut bundle.warnings,
                    "SOVEREIGNTY WARNING: Language contains servile patterns",
                );
                for suggestion in &metrics.improvement_suggestions {
                    RecommendationBundle::push_unique(
                        &mut bundle.sovereignty_improvements,
                        suggestion.clone(),
                    );
                }
            }
            SovereigntyLevel::Transitional => {
                RecommendationBundle::push_unique(
                    &mut bundle.opportunities,
                    "SOVEREIGNTY OPPORTUNITY: Language shows transitional sovereignty - can be improved",
                );
                for suggestion in metrics
                    .improvement_suggestions
                    .iter()
                    .take(TRANSITIONAL_SUGGESTION_CAP)
                {
                    RecommendationBundle::push_unique(
                        &mut bundle.sovereignty_improvements,
                        suggestion.clone(),
                    );
                }
            }
            SovereigntyLevel::Sovereign => {
                RecommendationBundle::push_unique(
                    &mut bundle.opportunities,
                    "SOVEREIGNTY STRENGTH: Language demonstrates sovereign principles",
                );
            }
        }

        if metrics.overall_score < CRITICAL_SCORE {
            RecommendationBundle::push_unique(
                &mut bundle.immediate_actions,
                "CRITICAL: Review language for servile patterns and replace with sovereign alternatives",
            );
        }
    }

    fn apply_urgency(&self, bundle: &mut RecommendationBundle, urgency: UrgencyLevel) {
        if urgency == UrgencyLevel::High {
            for action in [
                "URGENT: Time-sensitive situation detected",
                "Review all deadlines and timelines immediately",
                "Consider emergency legal consultation",
            ] {
                RecommendationBundle::push_unique(&mut bundle.immediate_actions, action);
            }
        }
    }

    fn apply_risk(&self, bundle: &mut RecommendationBundle, risk: RiskLevel) {
        if risk == RiskLevel::High {
            RecommendationBundle::push_unique(
                &mut bundle.immediate_actions,
                "HIGH RISK: Seek immediate legal counsel",
            );
            RecommendationBundle::push_unique(
                &mut bundle.warnings,
                "Situation contains high-risk legal elements",
            );
        }
    }

    fn apply_contradictions(&self, bundle: &mut RecommendationBundle, remedy: &RemedyProposal) {
        if !remedy.contradictions.is_empty() {
            RecommendationBundle::push_unique(
                &mut bundle.short_term_actions,
                "Challenge contradictory provisions in documents",
            );
        }
    }

    fn apply_situation_actions(
        &self,
        bundle: &mut RecommendationBundle,
        situation_type: SituationType,
    ) {
        let Some((immediate, short_term, long_term)) = situation_actions(situation_type) else {
            return;
        };
        for action in immediate {
            RecommendationBundle::push_unique(&mut bundle.immediate_actions, *action);
        }
        for action in short_term {
            RecommendationBundle::push_unique(&mut bundle.short_term_actions, *action);
        }
        for action in long_term {
            RecommendationBundle::push_unique(&mut bundle.long_term_actions, *action);
        }
    }

    fn apply_opportunities(
        &self,
        bundle: &mut RecommendationBundle,
        situation: &SituationContext,
        tone: ToneCategory,
    ) {
        if tone == ToneCategory::Positive {
            RecommendationBundle::push_unique(
                &mut bundle.opportunities,
                "Document contains favorable language - preserve these terms",
            );
        }
        if situation.jurisdiction.primary == "commercial" {
            RecommendationBundle::push_unique(
                &mut bundle.opportunities,
                "Commercial jurisdiction may provide UCC protections",
            );
        }
    }
}

fn situation_actions(situation_type: SituationType) -> Option<ActionSet> {
    match situation_type {
        SituationType::TrafficStop => Some((
            &[
                "Document all details of the encounter",
                "Preserve any evidence",
            ],
            &[
                "Review citation for errors",
                "Research applicable traffic laws",
            ],
            &[
                "Consider challenging jurisdiction",
                "File administrative remedy if applicable",
            ],
        )),
        SituationType::FeeDemand => Some((
            &[
                "Do not pay without challenging authority",
                "Request fee schedule",
            ],
            &[
                "Challenge lawful authority for fee",
                "Demand due process hearing",
            ],
            &[
                "File administrative appeal",
                "Consider legal action if rights violated",
            ],
        )),
        SituationType::CourtSummons => Some((
            &["Calculate response deadline", "Preserve all rights"],
            &[
                "File appropriate response",
                "Challenge jurisdiction if applicable",
            ],
            &[
                "Prepare defense strategy",
                "Consider counterclaims if applicable",
            ],
        )),
        SituationType::General => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use veridex_domain::{Contradiction, Jurisdiction, SituationContext};

    fn metrics(level: SovereigntyLevel, score: f64) -> SovereigntyMetrics {
        SovereigntyMetrics {
            overall_score: score,
            language_score: score * 0.8,
            remedy_score: score * 0.1,
            autonomy_score: score * 0.1,
            sovereignty_level: level,
            sovereign_indicators: Vec::new(),
            servile_flags: Vec::new(),
            improvement_suggestions: if level == SovereigntyLevel::Sovereign {
                Vec::new()
            } else {
                vec![
                    "Suggestion one".to_string(),
                    "Suggestion two".to_string(),
                    "Suggestion three".to_string(),
                    "Suggestion four".to_string(),
                ]
            },
        }
    }

    fn tone_risk(tone: ToneCategory, risk: RiskLevel) -> ToneRiskReport {
        ToneRiskReport {
            tone,
            risk,
            summary: String::new(),
        }
    }

    fn remedy(contradictions: Vec<Contradiction>) -> RemedyProposal {
        RemedyProposal {
            remedy_type: "UCC Administrative Process".to_string(),
            description: String::new(),
            reasoning: String::new(),
            legal_strategies: Vec::new(),
            confidence: 0.88,
            contradictions,
        }
    }

    #[test]
    fn test_high_urgency_always_yields_urgent_immediate_action() {
        for risk in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let mut situation = SituationContext::default_context();
            situation.urgency = UrgencyLevel::High;
            let bundle = RecommendationAggregator::new().aggregate(
                &situation,
                &tone_risk(ToneCategory::Neutral, risk),
                &remedy(Vec::new()),
                &metrics(SovereigntyLevel::Transitional, 0.5),
            );
            assert!(!bundle.immediate_actions.is_empty());
            assert!(bundle
                .immediate_actions
                .iter()
                .any(|a| a.starts_with("URGENT")));
        }
    }

    #[test]
    fn test_servile_text_gets_warning_and_all_suggestions() {
        let bundle = RecommendationAggregator::new().aggregate(
            &SituationContext::default_context(),
            &tone_risk(ToneCategory::Neutral, RiskLevel::Low),
            &remedy(Vec::new()),
            &metrics(SovereigntyLevel::Servile, 0.0),
        );
        assert!(bundle
            .warnings
            .iter()
            .any(|w| w.starts_with("SOVEREIGNTY WARNING")));
        assert_eq!(bundle.sovereignty_improvements.len(), 4);
        assert!(bundle
            .immediate_actions
            .iter()
            .any(|a| a.starts_with("CRITICAL")));
    }

    #[test]
    fn test_transitional_text_gets_capped_suggestions() {
        let bundle = RecommendationAggregator::new().aggregate(
            &SituationContext::default_context(),
            &tone_risk(ToneCategory::Neutral, RiskLevel::Low),
            &remedy(Vec::new()),
            &metrics(SovereigntyLevel::Transitional, 0.5),
        );
        assert_eq!(bundle.sovereignty_improvements.len(), 3);
        assert!(bundle
            .opportunities
            .iter()
            .any(|o| o.starts_with("SOVEREIGNTY OPPORTUNITY")));
    }

    #[test]
    fn test_contradictions_drive_short_term_action() {
        let contradiction = Contradiction {
            kind: "semantic".to_string(),
            description: "conflict".to_string(),
            confidence: 0.78,
        };
        let bundle = RecommendationAggregator::new().aggregate(
            &SituationContext::default_context(),
            &tone_risk(ToneCategory::Neutral, RiskLevel::Low),
            &remedy(vec![contradiction]),
            &metrics(SovereigntyLevel::Sovereign, 1.0),
        );
        assert!(bundle
            .short_term_actions
            .contains(&"Challenge contradictory provisions in documents".to_string()));
    }

    #[test]
    fn test_no_duplicates_in_any_list() {
        let mut situation = SituationContext::default_context();
        situation.situation_type = SituationType::FeeDemand;
        situation.urgency = UrgencyLevel::High;
        situation.jurisdiction = Jurisdiction {
            primary: "commercial".to_string(),
            secondary: Vec::new(),
        };
        let contradiction = Contradiction {
            kind: "rhetorical".to_string(),
            description: "conflict".to_string(),
            confidence: 0.92,
        };
        let bundle = RecommendationAggregator::new().aggregate(
            &situation,
            &tone_risk(ToneCategory::Positive, RiskLevel::High),
            &remedy(vec![contradiction]),
            &metrics(SovereigntyLevel::Servile, 0.1),
        );

        for list in [
            &bundle.immediate_actions,
            &bundle.short_term_actions,
            &bundle.long_term_actions,
            &bundle.warnings,
            &bundle.opportunities,
            &bundle.sovereignty_improvements,
        ] {
            let unique: HashSet<&String> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn test_commercial_jurisdiction_opportunity() {
        let mut situation = SituationContext::default_context();
        situation.jurisdiction.primary = "commercial".to_string();
        let bundle = RecommendationAggregator::new().aggregate(
            &situation,
            &tone_risk(ToneCategory::Neutral, RiskLevel::Low),
            &remedy(Vec::new()),
            &metrics(SovereigntyLevel::Sovereign, 1.0),
        );
        assert!(bundle
            .opportunities
            .contains(&"Commercial jurisdiction may provide UCC protections".to_string()));
    }
}
