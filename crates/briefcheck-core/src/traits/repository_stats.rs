use std::path::Path;

use crate::errors::RepositoryError;
use crate::models::RepositoryStats;

/// Produces activity and composition statistics for a checked-out repository.
pub trait IRepositoryStatsProvider: Send + Sync {
    fn stats(&self, root: &Path) -> Result<RepositoryStats, RepositoryError>;
}
