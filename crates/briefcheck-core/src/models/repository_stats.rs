use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Share of repository bytes written in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    /// Percentage of walked bytes, two decimals.
    pub percentage: f64,
}

/// Repository activity and composition statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryStats {
    pub branches: Vec<String>,
    pub commit_count: usize,
    /// Author name → number of commits.
    pub contributors: BTreeMap<String, usize>,
    pub languages: Vec<LanguageShare>,
}

impl RepositoryStats {
    /// Opaque JSON form placed in the analysis report.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }
}
