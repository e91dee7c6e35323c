use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::compliance::{ComplianceResult, ComplianceStatus};
use super::coverage::CoverageReport;
use super::tier::TierRequirements;

/// Tier classification, flattened so the four tier keys sit directly under
/// `tier_analysis`, plus optional coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierAnalysis {
    #[serde(flatten)]
    pub requirements: TierRequirements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageReport>,
}

/// Terminal output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Repository identifier (path or `owner/repo`), when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Briefing document path, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub briefing: Option<String>,
    pub project_type: String,
    /// Pass-through from the repository statistics collaborator.
    pub repository_stats: serde_json::Value,
    pub tier_analysis: TierAnalysis,
    pub overall_compliance: f64,
    pub total_sections: usize,
    pub compliant_sections: usize,
    pub detailed_results: Vec<ComplianceResult>,
    pub compliance_status: ComplianceStatus,
    pub generated_at: DateTime<Utc>,
}
