//! Embedding-similarity compliance of repository sections against a briefing.

pub mod analyzer;
pub mod coverage;

pub use analyzer::{ComplianceAnalyzer, ComplianceOutcome};
pub use coverage::weighted_score;
