use std::path::Path;

use briefcheck_core::errors::RepositoryError;
use briefcheck_core::models::RepositoryStats;
use briefcheck_core::traits::IRepositoryStatsProvider;

/// Returns the same statistics for every repository, or always fails.
pub struct StaticStats {
    stats: Option<RepositoryStats>,
}

impl StaticStats {
    pub fn new(stats: RepositoryStats) -> Self {
        Self { stats: Some(stats) }
    }

    pub fn failing() -> Self {
        Self { stats: None }
    }
}

impl IRepositoryStatsProvider for StaticStats {
    fn stats(&self, root: &Path) -> Result<RepositoryStats, RepositoryError> {
        self.stats.clone().ok_or_else(|| RepositoryError::Git {
            path: root.display().to_string(),
            message: "not a git repository".to_string(),
        })
    }
}
