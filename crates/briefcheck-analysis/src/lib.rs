//! # briefcheck-analysis
//!
//! Scores a repository against a project briefing.
//!
//! ```text
//! briefing ──► ComplianceAnalyzer ──► ComplianceFragment ─┐
//!   │              └── tier_coverage ──► CoverageReport ───┤
//!   └────────► TierClassifier ──► TierRequirements ───────┼──► build_report ──► AnalysisReport
//! repository ──► ProjectTypeDetector / stats ─────────────┘
//! ```
//!
//! `RequirementsAnalyzer` wires the whole run; the pieces are usable alone.

pub mod compliance;
pub mod pipeline;
pub mod report;

pub use compliance::{ComplianceAnalyzer, ComplianceOutcome};
pub use pipeline::RequirementsAnalyzer;
pub use report::{build_report, ReportExt};
