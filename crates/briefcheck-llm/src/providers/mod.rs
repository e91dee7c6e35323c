//! Generative model registry: `ollama` (local) or `api` (OpenAI-compatible
//! chat completions, e.g. Groq).

pub mod chat_model;
pub mod ollama_model;

pub use chat_model::ChatCompletionsModel;
pub use ollama_model::OllamaModel;

use std::time::Duration;

use briefcheck_core::config::defaults::{DEFAULT_CHAT_COMPLETIONS_URL, DEFAULT_OLLAMA_URL};
use briefcheck_core::config::{ApiKey, GenerationConfig};
use briefcheck_core::errors::{ConfigError, GenerationError};
use briefcheck_core::traits::IGenerativeModel;
use tracing::info;

/// Build the configured generative model. Fails at construction when the
/// provider is unknown or an `api` provider has no key.
pub fn create_model(
    config: &GenerationConfig,
    api_key: Option<&ApiKey>,
) -> Result<Box<dyn IGenerativeModel>, ConfigError> {
    let timeout = Duration::from_secs(config.timeout_secs);
    match config.provider.as_str() {
        "ollama" => {
            let base_url = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
            info!(provider = "ollama", model = %config.model, "generative model configured");
            Ok(Box::new(OllamaModel::new(
                config.model.clone(),
                base_url,
                config.temperature,
                timeout,
            )))
        }
        "api" => {
            let key = api_key.cloned().ok_or_else(|| ConfigError::MissingSecret {
                field: "api_key".to_string(),
            })?;
            let endpoint = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_CHAT_COMPLETIONS_URL.to_string());
            info!(provider = "api", model = %config.model, %endpoint, "generative model configured");
            Ok(Box::new(ChatCompletionsModel::new(
                config.model.clone(),
                key,
                endpoint,
                config.temperature,
                timeout,
            )))
        }
        other => Err(ConfigError::UnknownProvider {
            field: "generation.provider".to_string(),
            value: other.to_string(),
        }),
    }
}

/// Map a reqwest failure to a timeout or a request failure.
pub(crate) fn http_error(model: &str, timeout: Duration, e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout {
            model: model.to_string(),
            timeout_secs: timeout.as_secs(),
        }
    } else {
        GenerationError::RequestFailed {
            model: model.to_string(),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_provider_requires_key() {
        let err = create_model(&GenerationConfig::default(), None).err().unwrap();
        assert!(matches!(err, ConfigError::MissingSecret { .. }));
    }

    #[test]
    fn api_provider_with_key_builds() {
        let key = ApiKey::new("gsk-test").unwrap();
        let model = create_model(&GenerationConfig::default(), Some(&key)).unwrap();
        assert_eq!(model.name(), "mixtral-8x7b-32768");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let config = GenerationConfig {
            provider: "huggingface".into(),
            ..Default::default()
        };
        assert!(matches!(
            create_model(&config, None).err().unwrap(),
            ConfigError::UnknownProvider { .. }
        ));
    }
}
