pub mod compliance;
pub mod coverage;
pub mod report;
pub mod repository_stats;
pub mod section;
pub mod tier;

pub use compliance::{compliance_percentage, ComplianceFragment, ComplianceResult, ComplianceStatus};
pub use coverage::{CoverageReport, RequirementMatch, TierCoverage};
pub use report::{AnalysisReport, TierAnalysis};
pub use repository_stats::{LanguageShare, RepositoryStats};
pub use section::RepositorySection;
pub use tier::{Tier, TierRequirements};
