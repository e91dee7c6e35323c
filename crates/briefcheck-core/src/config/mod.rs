//! Configuration system for briefcheck.
//! TOML-based, layered: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod api_key;
pub mod briefcheck_config;
pub mod defaults;
pub mod embedding_config;
pub mod generation_config;
pub mod observability_config;
pub mod repository_config;

pub use analysis_config::{AnalysisConfig, TierWeights};
pub use api_key::ApiKey;
pub use briefcheck_config::{BriefcheckConfig, CliOverrides};
pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use repository_config::RepositoryConfig;
