//! Top-level briefcheck configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    AnalysisConfig, ApiKey, EmbeddingConfig, GenerationConfig, ObservabilityConfig,
    RepositoryConfig,
};
use crate::constants::{API_KEY_ENV_VARS, PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`BRIEFCHECK_*`)
/// 3. Project config (`briefcheck.toml` in the project root, or an explicit file)
/// 4. User config (`~/.briefcheck/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefcheckConfig {
    pub analysis: AnalysisConfig,
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub repository: RepositoryConfig,
    pub observability: ObservabilityConfig,
    /// Model API key. Read from config or env, never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<ApiKey>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threshold: Option<f64>,
    pub max_concurrency: Option<usize>,
    pub embedding_model: Option<String>,
    pub generation_model: Option<String>,
    pub api_key: Option<String>,
}

impl BriefcheckConfig {
    /// Load configuration, using `briefcheck.toml` in `root` as the project layer.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project = root.join(PROJECT_CONFIG_FILE);
        let project = project.exists().then_some(project);
        Self::load_layers(project, cli_overrides)
    }

    /// Load configuration with an explicit project-layer file, which must exist.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Self::load_layers(Some(path.to_path_buf()), cli_overrides)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn load_layers(
        project: Option<PathBuf>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut merged = toml::Value::Table(toml::map::Map::new());

        // Layer 4 (lowest priority): user config
        if let Some(user_path) = user_config_path() {
            if user_path.exists() {
                merge_values(&mut merged, read_toml_file(&user_path)?);
            }
        }

        // Layer 3: project config
        if let Some(project_path) = project {
            merge_values(&mut merged, read_toml_file(&project_path)?);
        }

        let mut config: Self = merged.try_into().map_err(|e: toml::de::Error| {
            ConfigError::ParseError {
                path: "<merged>".to_string(),
                message: e.to_string(),
            }
        })?;

        // Layer 2: environment variables
        config.apply_env_overrides();

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.analysis.threshold;
        if !threshold.is_finite() || !(-1.0..=1.0).contains(&threshold) {
            return Err(invalid("analysis.threshold", "must be between -1.0 and 1.0"));
        }
        if self.analysis.max_concurrency == 0 {
            return Err(invalid("analysis.max_concurrency", "must be at least 1"));
        }
        let weights = self.analysis.tier_weights;
        let all = [weights.essential, weights.medium, weights.advanced, weights.expert];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(invalid("analysis.tier_weights", "weights must be non-negative"));
        }
        if all.iter().sum::<f64>() <= 0.0 {
            return Err(invalid("analysis.tier_weights", "weights must not all be zero"));
        }
        if self.embedding.model.trim().is_empty() {
            return Err(invalid("embedding.model", "must not be empty"));
        }
        if self.embedding.timeout_secs == 0 {
            return Err(invalid("embedding.timeout_secs", "must be greater than 0"));
        }
        if self.generation.model.trim().is_empty() {
            return Err(invalid("generation.model", "must not be empty"));
        }
        if self.generation.timeout_secs == 0 {
            return Err(invalid("generation.timeout_secs", "must be greater than 0"));
        }
        if self.generation.project_types.is_empty() {
            return Err(invalid("generation.project_types", "must list at least one label"));
        }
        if self.repository.chunk_size == 0 {
            return Err(invalid("repository.chunk_size", "must be greater than 0"));
        }
        if self.repository.chunk_overlap >= self.repository.chunk_size {
            return Err(invalid(
                "repository.chunk_overlap",
                "must be smaller than repository.chunk_size",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `BRIEFCHECK_THRESHOLD`, `BRIEFCHECK_EMBEDDING_MODEL`, etc.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<f64>("BRIEFCHECK_THRESHOLD") {
            self.analysis.threshold = v;
        }
        if let Some(v) = env_parse::<usize>("BRIEFCHECK_MAX_CONCURRENCY") {
            self.analysis.max_concurrency = v;
        }
        if let Ok(v) = std::env::var("BRIEFCHECK_EMBEDDING_PROVIDER") {
            self.embedding.provider = v;
        }
        if let Ok(v) = std::env::var("BRIEFCHECK_EMBEDDING_MODEL") {
            self.embedding.model = v;
        }
        if let Ok(v) = std::env::var("BRIEFCHECK_EMBEDDING_ENDPOINT") {
            self.embedding.endpoint = Some(v);
        }
        if let Ok(v) = std::env::var("BRIEFCHECK_GENERATION_PROVIDER") {
            self.generation.provider = v;
        }
        if let Ok(v) = std::env::var("BRIEFCHECK_GENERATION_MODEL") {
            self.generation.model = v;
        }
        if let Ok(v) = std::env::var("BRIEFCHECK_GENERATION_ENDPOINT") {
            self.generation.endpoint = Some(v);
        }
        if let Ok(v) = std::env::var("BRIEFCHECK_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(ApiKey::new)
        {
            self.api_key = Some(key);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(v) = cli.threshold {
            self.analysis.threshold = v;
        }
        if let Some(v) = cli.max_concurrency {
            self.analysis.max_concurrency = v;
        }
        if let Some(ref v) = cli.embedding_model {
            self.embedding.model = v.clone();
        }
        if let Some(ref v) = cli.generation_model {
            self.generation.model = v.clone();
        }
        if let Some(key) = cli.api_key.clone().and_then(ApiKey::new) {
            self.api_key = Some(key);
        }
    }

    /// Serialize the config back to TOML. The API key is never included.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

fn read_toml_file(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Deep-merge `overlay` into `base`. Tables merge key by key; any other value
/// in `overlay` replaces the one in `base`.
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Returns the user config path: `~/.briefcheck/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_scalars_and_keeps_siblings() {
        let mut base: toml::Value = toml::from_str("[analysis]\nthreshold = 0.7\nmax_concurrency = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[analysis]\nthreshold = 0.8").unwrap();
        merge_values(&mut base, overlay);
        assert_eq!(base["analysis"]["threshold"].as_float(), Some(0.8));
        assert_eq!(base["analysis"]["max_concurrency"].as_integer(), Some(2));
    }

    #[test]
    fn defaults_validate() {
        assert!(BriefcheckConfig::default().validate().is_ok());
    }
}
