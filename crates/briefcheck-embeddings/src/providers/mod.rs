//! Provider registry.
//!
//! `ollama` (local) and `api` (OpenAI-compatible, needs an API key). The
//! selected provider is wrapped in the L1 cache unless caching is disabled.

pub mod api_provider;
pub mod ollama_provider;

pub use api_provider::ApiProvider;
pub use ollama_provider::OllamaProvider;

use std::time::Duration;

use briefcheck_core::config::defaults::DEFAULT_OLLAMA_URL;
use briefcheck_core::config::{ApiKey, EmbeddingConfig};
use briefcheck_core::errors::ConfigError;
use briefcheck_core::traits::IEmbeddingProvider;
use tracing::info;

use crate::cache::CachedEmbedder;

/// Build the configured embedding provider.
///
/// Misconfiguration (unknown provider, `api` without a key) is reported here,
/// at construction, never at call time.
pub fn create_provider(
    config: &EmbeddingConfig,
    api_key: Option<&ApiKey>,
) -> Result<Box<dyn IEmbeddingProvider>, ConfigError> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let provider: Box<dyn IEmbeddingProvider> = match config.provider.as_str() {
        "ollama" => {
            let base_url = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
            info!(provider = "ollama", model = %config.model, %base_url, "embedding provider configured");
            Box::new(OllamaProvider::new(config.model.clone(), base_url, timeout))
        }
        "api" => {
            let key = api_key.cloned().ok_or_else(|| ConfigError::MissingSecret {
                field: "api_key".to_string(),
            })?;
            info!(provider = "api", model = %config.model, "embedding provider configured");
            Box::new(ApiProvider::new(
                config.model.clone(),
                key,
                config.endpoint.clone(),
                timeout,
            ))
        }
        other => {
            return Err(ConfigError::UnknownProvider {
                field: "embedding.provider".to_string(),
                value: other.to_string(),
            })
        }
    };

    if config.cache_capacity == 0 {
        Ok(provider)
    } else {
        Ok(Box::new(CachedEmbedder::new(provider, config.cache_capacity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_without_key_is_a_config_error() {
        let config = EmbeddingConfig {
            provider: "api".into(),
            ..Default::default()
        };
        let err = create_provider(&config, None).err().unwrap();
        assert!(matches!(err, ConfigError::MissingSecret { .. }));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let config = EmbeddingConfig {
            provider: "onnx".into(),
            ..Default::default()
        };
        let err = create_provider(&config, None).err().unwrap();
        assert!(matches!(err, ConfigError::UnknownProvider { .. }));
    }

    #[test]
    fn ollama_needs_no_key() {
        let provider = create_provider(&EmbeddingConfig::default(), None).unwrap();
        assert_eq!(provider.name(), "nomic-embed-text");
    }
}
