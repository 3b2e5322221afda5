//! The pipeline orchestrator: one deterministic analysis run per session

use crate::registry::{resolve_detector, resolve_tone_analyzer};
use crate::PipelineError;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use veridex_analyzers::{
    SituationInterpreter, SovereigntyScorer, StructuralAnalyzer,
};
use veridex_corpus::{CorpusStore, RelevanceEngine};
use veridex_domain::traits::{ProvenanceSink, ToneAnalyzer};
use veridex_domain::{
    AnalysisResult, AuthorityReport, ContextHint, LegalAnalysis, ProvenanceEntry, SessionId,
    SituationType, SovereigntyAnalysis, SovereigntyMetrics,
};
use veridex_ledger::MemoryLedger;
use veridex_synthesis::{RecommendationAggregator, RemedySynthesizer};

/// Length of the input snippet captured in provenance
const SNIPPET_LEN: usize = 200;

// Search terms fanned out per situation type when no explicit query is given
const SEARCH_TERMS: &[(SituationType, &[&str])] = &[
    (
        SituationType::TrafficStop,
        &["travel", "right", "license", "commercial"],
    ),
    (
        SituationType::FeeDemand,
        &["tender", "obligation", "discharge"],
    ),
    (
        SituationType::CourtSummons,
        &["jurisdiction", "summons", "appearance", "due process"],
    ),
];

/// Composition root for the analysis pipeline
///
/// Builds the corpus store, ledger, and every stage component once.
/// Stage strategies are resolved by registry name here, so misconfigured
/// names fail before any session starts.
pub struct PipelineBuilder {
    corpus_dir: Option<PathBuf>,
    detector: String,
    tone_analyzer: String,
    ledger: Option<Arc<dyn ProvenanceSink>>,
}

impl PipelineBuilder {
    /// Start a builder with default strategies and the built-in corpus
    pub fn new() -> Self {
        Self {
            corpus_dir: None,
            detector: "heuristic".to_string(),
            tone_analyzer: "keyword".to_string(),
            ledger: None,
        }
    }

    /// Load the corpus from this directory (missing categories degrade
    /// to built-in records)
    pub fn corpus_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.corpus_dir = Some(dir.into());
        self
    }

    /// Select the contradiction detector by registry name
    pub fn detector(mut self, name: impl Into<String>) -> Self {
        self.detector = name.into();
        self
    }

    /// Select the tone analyzer by registry name
    pub fn tone_analyzer(mut self, name: impl Into<String>) -> Self {
        self.tone_analyzer = name.into();
        self
    }

    /// Record provenance into this sink
    pub fn ledger(mut self, sink: Arc<dyn ProvenanceSink>) -> Self {
        self.ledger = Some(sink);
        self
    }

    /// Compose the pipeline, failing fast on unknown strategy names
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        let store = Arc::new(match &self.corpus_dir {
            Some(dir) => CorpusStore::load(dir),
            None => CorpusStore::builtin(),
        });
        let detector = resolve_detector(&self.detector)?;
        let tone = resolve_tone_analyzer(&self.tone_analyzer)?;
        let ledger = self
            .ledger
            .unwrap_or_else(|| Arc::new(MemoryLedger::new()));

        Ok(Pipeline {
            engine: RelevanceEngine::new(store),
            interpreter: SituationInterpreter::new(),
            structural: StructuralAnalyzer::new(detector),
            tone,
            scorer: SovereigntyScorer::new(),
            synthesizer: RemedySynthesizer::new(),
            aggregator: RecommendationAggregator::new(),
            ledger,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequences all analysis stages into one deterministic run per session
///
/// Each run is single-threaded and synchronous; stages execute in fixed
/// order and every stage writes to the provenance ledger. The corpus
/// store is shared read-only across concurrent sessions.
pub struct Pipeline {
    engine: RelevanceEngine,
    interpreter: SituationInterpreter,
    structural: StructuralAnalyzer,
    tone: Box<dyn ToneAnalyzer>,
    scorer: SovereigntyScorer,
    synthesizer: RemedySynthesizer,
    aggregator: RecommendationAggregator,
    ledger: Arc<dyn ProvenanceSink>,
}

impl Pipeline {
    /// Start composing a pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run the full analysis pipeline over `text`
    ///
    /// Total: malformed or empty input flows through every stage's
    /// default behavior and still produces a complete result with a
    /// full provenance trail.
    pub fn analyze(&self, text: &str, hint: Option<&ContextHint>) -> AnalysisResult {
        let session_id = SessionId::new();
        info!(%session_id, text_len = text.len(), "starting analysis session");

        self.log(
            session_id,
            "Pipeline",
            "analysis_started",
            "Starting comprehensive situation analysis",
        );

        let situation = self.interpreter.interpret(text, hint);
        self.ledger.record(
            ProvenanceEntry::new(
                session_id,
                "SituationInterpreter",
                "analysis",
                format!(
                    "Classified situation as {}",
                    situation.situation_type.as_str()
                ),
            )
            .with_input(serde_json::json!(snippet(text)))
            .with_output(serde_json::json!({
                "type": situation.situation_type.as_str(),
                "urgency": situation.urgency.as_str(),
                "jurisdiction": situation.jurisdiction.primary,
            })),
        );

        let (clauses, contradictions) = self.structural.analyze(text);
        self.ledger.record(
            ProvenanceEntry::new(
                session_id,
                "StructuralAnalyzer",
                "analysis",
                format!(
                    "Extracted {} clauses, detected {} contradictions",
                    clauses.len(),
                    contradictions.len()
                ),
            )
            .with_output(serde_json::json!({
                "detector": self.structural.detector_name(),
                "clauses": clauses.len(),
                "contradictions": contradictions.len(),
            })),
        );

        let tone_analysis = self.tone.analyze(text);
        self.log(
            session_id,
            "ToneRiskAnalyzer",
            "analysis",
            tone_analysis.summary.clone(),
        );

        let corpus_search = self.search_authorities(session_id, situation.situation_type);

        self.ledger.record(
            ProvenanceEntry::new(
                session_id,
                "SovereigntyScorer",
                "sovereignty_analysis",
                "Analyzing sovereignty alignment of input text",
            )
            .with_input(serde_json::json!(snippet(text))),
        );
        let input_sovereignty = self.scorer.score_text(text);

        let remedy =
            self.synthesizer
                .synthesize(&situation, tone_analysis.risk, contradictions.clone());
        self.log(
            session_id,
            "RemedySynthesizer",
            "synthesis",
            format!("Selected remedy: {}", remedy.remedy_type),
        );

        let strategies = remedy.legal_strategies.join(" ");
        let remedy_sovereignty = self.scorer.score_decision(&[
            ("description", remedy.description.as_str()),
            ("reasoning", remedy.reasoning.as_str()),
            ("recommendations", strategies.as_str()),
            ("remedy_type", remedy.remedy_type.as_str()),
        ]);
        self.log(
            session_id,
            "SovereigntyScorer",
            "sovereignty_analysis",
            "Scored synthesized remedy for sovereignty alignment",
        );

        let recommendations =
            self.aggregator
                .aggregate(&situation, &tone_analysis, &remedy, &input_sovereignty);
        self.log(
            session_id,
            "RecommendationAggregator",
            "aggregation",
            "Merged stage signals into prioritized recommendations",
        );

        self.ledger.record(
            ProvenanceEntry::new(
                session_id,
                "Pipeline",
                "analysis_complete",
                "Comprehensive analysis completed",
            )
            .with_output(serde_json::json!({
                "sovereignty_score": input_sovereignty.overall_score,
                "remedy_score": remedy_sovereignty.overall_score,
            })),
        );

        AnalysisResult {
            session_id,
            timestamp: Utc::now(),
            situation_analysis: situation,
            legal_analysis: LegalAnalysis {
                clauses,
                contradictions,
                tone_analysis,
            },
            sovereignty_analysis: SovereigntyAnalysis {
                input_sovereignty,
                remedy_sovereignty,
            },
            remedy,
            recommendations,
            corpus_search,
        }
    }

    /// Search legal authorities directly (the corpus entry point)
    pub fn search(&self, query: &str) -> AuthorityReport {
        self.engine.search_legal_authorities(query)
    }

    /// Score a free-form text on the servile↔sovereign axis
    pub fn score(&self, text: &str) -> SovereigntyMetrics {
        self.scorer.score_text(text)
    }

    /// Persist one result as a pretty-printed JSON document
    ///
    /// Writes `analysis_<session_id>.json` under `dir` and returns the
    /// path. The provenance trail already on disk stays valid even when
    /// this write fails.
    pub fn save_result(
        &self,
        result: &AnalysisResult,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf, PipelineError> {
        let dir = dir.as_ref();
        let path = dir.join(format!("analysis_{}.json", result.session_id));
        let json = serde_json::to_string_pretty(result)?;

        fs::create_dir_all(dir).map_err(|source| PipelineError::ResultWrite {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| PipelineError::ResultWrite {
            path: path.clone(),
            source,
        })?;

        self.log(
            result.session_id,
            "Pipeline",
            "result_saved",
            format!("Analysis results saved to {}", path.display()),
        );
        Ok(path)
    }

    fn search_authorities(
        &self,
        session_id: SessionId,
        situation_type: SituationType,
    ) -> Option<AuthorityReport> {
        let terms = SEARCH_TERMS
            .iter()
            .find(|(ty, _)| *ty == situation_type)
            .map(|(_, terms)| *terms);

        let Some(terms) = terms else {
            self.log(
                session_id,
                "RelevanceEngine",
                "corpus_search_skipped",
                "No situation-specific search terms; corpus search skipped",
            );
            return None;
        };

        let query = terms.join(" ");
        let report = self.engine.search_legal_authorities(&query);
        self.log(
            session_id,
            "RelevanceEngine",
            "corpus_search",
            format!(
                "Searched authorities for \"{}\": {} cases, {} statutes",
                query,
                report.case_law.len(),
                report.statutes.len()
            ),
        );
        Some(report)
    }

    fn log(
        &self,
        session_id: SessionId,
        agent: &str,
        action_type: &str,
        description: impl Into<String>,
    ) {
        self.ledger
            .record(ProvenanceEntry::new(session_id, agent, action_type, description));
    }
}

fn snippet(text: &str) -> String {
    if text.chars().count() > SNIPPET_LEN {
        let prefix: String = text.chars().take(SNIPPET_LEN).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}
