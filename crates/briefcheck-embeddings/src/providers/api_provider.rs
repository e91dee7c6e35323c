//! OpenAI-compatible embedding API provider.
//!
//! Bearer-authenticated `POST` to an `/v1/embeddings`-style endpoint. No
//! retries: a failed or timed-out call is reported to the caller, which
//! decides whether the failure skips a section or fails the batch.

use std::time::Duration;

use briefcheck_core::config::ApiKey;
use briefcheck_core::errors::EmbeddingError;
use briefcheck_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default endpoint when none is configured.
pub const DEFAULT_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";

/// Cloud API embedding provider.
pub struct ApiProvider {
    model: String,
    api_key: ApiKey,
    endpoint: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn new(
        model: impl Into<String>,
        api_key: ApiKey,
        endpoint: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            model: model.into(),
            api_key,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_EMBEDDINGS_URL.to_string()),
            timeout,
        }
    }

    fn request_embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| self.failed(format!("runtime error: {e}")))?;

        let request = EmbedRequest {
            model: &self.model,
            input: texts,
        };

        let mut data = rt.block_on(async {
            let response = reqwest::Client::new()
                .post(&self.endpoint)
                .timeout(self.timeout)
                .bearer_auth(self.api_key.expose())
                .json(&request)
                .send()
                .await
                .map_err(|e| self.http_error(e))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(self.failed(format!("API returned {status}: {body}")));
            }

            let resp: EmbedResponse = response.json().await.map_err(|e| self.http_error(e))?;
            Ok(resp.data)
        })?;

        debug!(model = %self.model, count = data.len(), "api embeddings received");
        if data.len() != texts.len() {
            return Err(self.failed(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                data.len()
            )));
        }
        // The API may reorder results; `index` restores input order.
        data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));
        Ok(data.into_iter().map(|d| d.embedding).collect())
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
            self.failed(format!("HTTP error: {e}"))
        }
    }
}

impl IEmbeddingProvider for ApiProvider {
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
