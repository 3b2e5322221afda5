//! Static stage registries
//!
//! Pluggable stage strategies are registered here under stable names and
//! resolved once at composition time. An unknown name is a composition
//! error; it can never surface mid-run.

use crate::PipelineError;
use veridex_analyzers::{HeuristicDetector, KeywordToneAnalyzer};
use veridex_domain::traits::{ContradictionDetector, ToneAnalyzer};

type DetectorCtor = fn() -> Box<dyn ContradictionDetector>;
type ToneCtor = fn() -> Box<dyn ToneAnalyzer>;

fn heuristic_detector() -> Box<dyn ContradictionDetector> {
    Box::new(HeuristicDetector::new())
}

fn keyword_tone_analyzer() -> Box<dyn ToneAnalyzer> {
    Box::new(KeywordToneAnalyzer::new())
}

const DETECTORS: &[(&str, DetectorCtor)] = &[("heuristic", heuristic_detector)];

const TONE_ANALYZERS: &[(&str, ToneCtor)] = &[("keyword", keyword_tone_analyzer)];

/// Resolve a contradiction detector by registry name
pub fn resolve_detector(name: &str) -> Result<Box<dyn ContradictionDetector>, PipelineError> {
    DETECTORS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, ctor)| ctor())
        .ok_or_else(|| PipelineError::UnknownDetector(name.to_string()))
}

/// Resolve a tone analyzer by registry name
pub fn resolve_tone_analyzer(name: &str) -> Result<Box<dyn ToneAnalyzer>, PipelineError> {
    TONE_ANALYZERS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, ctor)| ctor())
        .ok_or_else(|| PipelineError::UnknownToneAnalyzer(name.to_string()))
}

/// Names of all registered contradiction detectors
pub fn detector_names() -> Vec<&'static str> {
    DETECTORS.iter().map(|(name, _)| *name).collect()
}

/// Names of all registered tone analyzers
pub fn tone_analyzer_names() -> Vec<&'static str> {
    TONE_ANALYZERS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategies_resolve() {
        assert!(resolve_detector("heuristic").is_ok());
        assert!(resolve_tone_analyzer("keyword").is_ok());
    }

    #[test]
    fn test_unknown_names_fail_fast() {
        assert!(matches!(
            resolve_detector("semantic_v2"),
            Err(PipelineError::UnknownDetector(_))
        ));
        assert!(matches!(
            resolve_tone_analyzer("sentiment"),
            Err(PipelineError::UnknownToneAnalyzer(_))
        ));
    }

    #[test]
    fn test_registry_listings() {
        assert_eq!(detector_names(), vec!["heuristic"]);
        assert_eq!(tone_analyzer_names(), vec!["keyword"]);
    }
}
