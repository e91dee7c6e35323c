use std::fmt;

use serde::{Deserialize, Serialize};

/// The four ordered requirement difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "nivel_esencial")]
    Essential,
    #[serde(rename = "nivel_medio")]
    Medium,
    #[serde(rename = "nivel_avanzado")]
    Advanced,
    #[serde(rename = "nivel_experto")]
    Expert,
}

impl Tier {
    /// All tiers, easiest first.
    pub const ALL: [Tier; 4] = [Tier::Essential, Tier::Medium, Tier::Advanced, Tier::Expert];

    /// Wire key used in model responses and reports.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Essential => "nivel_esencial",
            Self::Medium => "nivel_medio",
            Self::Advanced => "nivel_avanzado",
            Self::Expert => "nivel_experto",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Human-readable English label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Medium => "medium",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Briefing requirements grouped by tier.
///
/// All four keys are always serialized, even when a tier is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRequirements {
    #[serde(rename = "nivel_esencial", default)]
    pub essential: Vec<String>,
    #[serde(rename = "nivel_medio", default)]
    pub medium: Vec<String>,
    #[serde(rename = "nivel_avanzado", default)]
    pub advanced: Vec<String>,
    #[serde(rename = "nivel_experto", default)]
    pub expert: Vec<String>,
}

impl TierRequirements {
    pub fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Essential => &self.essential,
            Tier::Medium => &self.medium,
            Tier::Advanced => &self.advanced,
            Tier::Expert => &self.expert,
        }
    }

    pub fn get_mut(&mut self, tier: Tier) -> &mut Vec<String> {
        match tier {
            Tier::Essential => &mut self.essential,
            Tier::Medium => &mut self.medium,
            Tier::Advanced => &mut self.advanced,
            Tier::Expert => &mut self.expert,
        }
    }

    /// Iterate tiers in order with their requirements.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[String])> {
        Tier::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// Total number of requirements across all tiers.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, reqs)| reqs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_key(tier.key()), Some(tier));
        }
        assert_eq!(Tier::from_key("nivel_basico"), None);
    }

    #[test]
    fn tiers_are_ordered_by_difficulty() {
        assert!(Tier::Essential < Tier::Medium);
        assert!(Tier::Advanced < Tier::Expert);
    }

    #[test]
    fn empty_requirements_serialize_all_keys() {
        let json = serde_json::to_value(TierRequirements::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for tier in Tier::ALL {
            assert_eq!(obj[tier.key()], serde_json::json!([]));
        }
    }

    #[test]
    fn total_counts_every_tier() {
        let mut reqs = TierRequirements::default();
        reqs.get_mut(Tier::Essential).push("a".into());
        reqs.get_mut(Tier::Expert).push("b".into());
        assert_eq!(reqs.total(), 2);
        assert!(!reqs.is_empty());
    }
}
