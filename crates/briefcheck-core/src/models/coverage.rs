use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// Best section match for a single briefing requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementMatch {
    pub requirement: String,
    /// Best-matching section id, if any section could be scored.
    pub best_section: Option<String>,
    /// Best similarity as a percentage, if any section could be scored.
    pub best_similarity: Option<f64>,
    pub met: bool,
}

/// Coverage of one tier's requirements by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCoverage {
    pub tier: Tier,
    pub total: usize,
    pub met: usize,
    /// `100 * met / total`, two decimals; 0 for an empty tier.
    pub coverage: f64,
    pub requirements: Vec<RequirementMatch>,
}

/// Per-tier coverage plus the tier-weighted completion score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub tiers: Vec<TierCoverage>,
    /// Weighted share of met requirements across tiers, two decimals.
    pub weighted_score: f64,
}

impl CoverageReport {
    pub fn tier(&self, tier: Tier) -> Option<&TierCoverage> {
        self.tiers.iter().find(|c| c.tier == tier)
    }
}
