use serde::{Deserialize, Serialize};

/// Similarity of one repository section against the briefing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub section: String,
    /// Cosine similarity scaled to a percentage and rounded (-100..=100).
    pub similarity: f64,
    /// Raw cosine compared against the threshold (inclusive).
    pub compliant: bool,
}

/// How a compliance fragment came to be.
///
/// `EmptyBriefing`, `NoSections` and `ReferenceUnavailable` all carry zero
/// results; the status keeps them apart for diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Scored,
    EmptyBriefing,
    NoSections,
    ReferenceUnavailable,
}

/// Aggregated compliance over every scored section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFragment {
    /// Percentage of compliant sections, two decimals.
    pub overall_compliance: f64,
    pub total_sections: usize,
    pub compliant_sections: usize,
    pub detailed_results: Vec<ComplianceResult>,
    pub status: ComplianceStatus,
}

impl ComplianceFragment {
    /// A zero fragment: no results, 0% compliance.
    pub fn empty(status: ComplianceStatus) -> Self {
        Self {
            overall_compliance: 0.0,
            total_sections: 0,
            compliant_sections: 0,
            detailed_results: Vec::new(),
            status,
        }
    }

    /// Aggregate scored results.
    ///
    /// An empty result list is reported with `status` unchanged, so callers
    /// can tell "nothing scored" apart from "reference unavailable".
    pub fn from_results(results: Vec<ComplianceResult>, status: ComplianceStatus) -> Self {
        let total_sections = results.len();
        let compliant_sections = results.iter().filter(|r| r.compliant).count();
        Self {
            overall_compliance: compliance_percentage(compliant_sections, total_sections),
            total_sections,
            compliant_sections,
            detailed_results: results,
            status,
        }
    }
}

/// `100 * compliant / total`, rounded to two decimals; 0 when `total == 0`.
pub fn compliance_percentage(compliant: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = 100.0 * compliant as f64 / total as f64;
    (pct * 100.0).round() / 100.0
}
