use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Tier;

/// Compliance scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Raw cosine threshold at or above which a section is compliant.
    pub threshold: f64,
    /// Upper bound on concurrent section embedding calls. 1 = sequential.
    pub max_concurrency: usize,
    /// Compute per-tier requirement coverage and the weighted score.
    pub tier_coverage: bool,
    pub tier_weights: TierWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_COMPLIANCE_THRESHOLD,
            max_concurrency: defaults::DEFAULT_MAX_CONCURRENCY,
            tier_coverage: defaults::DEFAULT_TIER_COVERAGE,
            tier_weights: TierWeights::default(),
        }
    }
}

/// Weight of each tier in the completion score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierWeights {
    #[serde(rename = "nivel_esencial")]
    pub essential: f64,
    #[serde(rename = "nivel_medio")]
    pub medium: f64,
    #[serde(rename = "nivel_avanzado")]
    pub advanced: f64,
    #[serde(rename = "nivel_experto")]
    pub expert: f64,
}

impl TierWeights {
    pub fn weight(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Essential => self.essential,
            Tier::Medium => self.medium,
            Tier::Advanced => self.advanced,
            Tier::Expert => self.expert,
        }
    }
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            essential: defaults::DEFAULT_WEIGHT_ESSENTIAL,
            medium: defaults::DEFAULT_WEIGHT_MEDIUM,
            advanced: defaults::DEFAULT_WEIGHT_ADVANCED,
            expert: defaults::DEFAULT_WEIGHT_EXPERT,
        }
    }
}
