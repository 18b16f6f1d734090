//! Credibility analysis: record types, the canonical record set and engines.

pub mod catalog;
pub mod engine;
pub mod record;

pub use catalog::{canonical_records, select, select_with};
pub use engine::{
    AnalysisEngine, AnalysisFailure, DEFAULT_SIMULATED_DELAY, MockAnalysisEngine,
};
pub use record::{AnalysisRecord, CredibilityStatus, ImmunityTip, RecordError, ScoreBand};
