//! # briefcheck-core
//!
//! Foundation crate for the briefcheck compliance engine.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BriefcheckConfig;
pub use errors::{BriefcheckError, BriefcheckResult};
pub use models::{
    AnalysisReport, ComplianceFragment, ComplianceResult, ComplianceStatus, RepositorySection,
    RepositoryStats, Tier, TierRequirements,
};
