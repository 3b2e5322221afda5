//! Veridex Domain Layer
//!
//! This crate contains the core value objects and trait interfaces for the
//! Veridex legal-situation analysis pipeline. It carries only the primitives
//! the output contract requires (ids, timestamps, serialization) and defines
//! the concepts every other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **Session**: one end-to-end pipeline run, identified by a UUIDv7
//! - **Situation Context**: structured classification of raw input text
//! - **Corpus Record**: an immutable legal authority (case, statute, ...)
//! - **Sovereignty Metrics**: keyword-ratio score on the servile↔sovereign axis
//! - **Provenance Entry**: one immutable audit record within a session
//!
//! ## Architecture
//!
//! - Pure value objects and pure-logic helpers only
//! - Trait definitions for every pluggable stage and sink
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod authority;
pub mod provenance;
pub mod recommend;
pub mod record;
pub mod remedy;
pub mod result;
pub mod session;
pub mod situation;
pub mod sovereignty;
pub mod traits;

// Re-exports for convenience
pub use analysis::{Contradiction, RiskLevel, ToneCategory, ToneRiskReport};
pub use authority::{AuthorityCategory, AuthorityReport, RecommendedAuthority, RelevanceMatch};
pub use provenance::ProvenanceEntry;
pub use recommend::RecommendationBundle;
pub use record::{AffidavitTemplate, CaseLaw, ConstitutionalProvision, CorpusRecord, Statute};
pub use remedy::RemedyProposal;
pub use result::{AnalysisResult, LegalAnalysis, SovereigntyAnalysis};
pub use session::SessionId;
pub use situation::{ContextHint, Entities, Jurisdiction, SituationContext, SituationType, UrgencyLevel};
pub use sovereignty::{SovereigntyLevel, SovereigntyMetrics};
