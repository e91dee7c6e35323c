//! Ollama local embedding provider.
//!
//! Talks to a local Ollama instance over `POST /api/embed`.

use std::time::Duration;

use briefcheck_core::errors::EmbeddingError;
use briefcheck_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ollama local embedding provider.
pub struct OllamaProvider {
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    /// Create a new Ollama provider. `base_url` is the server root,
    /// e.g. `http://localhost:11434`.
    pub fn new(model: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout,
        }
    }

    fn request_embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let url = format!("{}/api/embed", self.base_url);
        let request = OllamaEmbedRequest {
            model: &self.model,
            input: texts,
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| self.failed(format!("runtime error: {e}")))?;

        let embeddings = rt.block_on(async {
            let client = reqwest::Client::new();
            let response = client
                .post(&url)
                .timeout(self.timeout)
                .json(&request)
                .send()
                .await
                .map_err(|e| self.http_error(e))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(self.failed(format!("Ollama returned {status}: {body}")));
            }

            let resp: OllamaEmbedResponse = response
                .json()
                .await
                .map_err(|e| self.http_error(e))?;
            Ok(resp.embeddings)
        })?;

        debug!(model = %self.model, count = embeddings.len(), "ollama embeddings received");
        if embeddings.len() != texts.len() {
            return Err(self.failed(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }
        Ok(embeddings)
    }

    fn failed(&self, reason: String) -> EmbeddingError {
        EmbeddingError::InferenceFailed {
            provider: self.model.clone(),
            reason,
        }
    }

    fn http_error(&self, e: reqwest::Error) -> EmbeddingError {
        if e.is_timeout() {
            EmbeddingError::Timeout {
                provider: self.model.clone(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            self.failed(format!("Ollama HTTP error: {e}"))
        }
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results
            .into_iter()
            .next()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| EmbeddingError::EmptyResponse {
                provider: self.model.clone(),
            })
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
