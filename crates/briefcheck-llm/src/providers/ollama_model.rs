//! Ollama `/api/generate` client, non-streaming.

use std::time::Duration;

use briefcheck_core::errors::GenerationError;
use briefcheck_core::traits::IGenerativeModel;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct OllamaModel {
    base_url: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaModel {
    pub fn new(
        model: impl Into<String>,
        base_url: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature,
            timeout,
        }
    }
}

impl IGenerativeModel for OllamaModel {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GenerationError::RequestFailed {
                model: self.model.clone(),
                reason: format!("runtime error: {e}"),
            })?;

        let text = rt.block_on(async {
            let response = reqwest::Client::new()
                .post(&url)
                .timeout(self.timeout)
                .json(&request)
                .send()
                .await
                .map_err(|e| super::http_error(&self.model, self.timeout, e))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(GenerationError::ApiStatus {
                    model: self.model.clone(),
                    status: status.as_u16(),
                    body,
                });
            }

            let body: GenerateResponse = response
                .json()
                .await
                .map_err(|e| super::http_error(&self.model, self.timeout, e))?;
            Ok(body.response)
        })?;

        debug!(model = %self.model, chars = text.len(), "ollama generation received");
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse {
                model: self.model.clone(),
            });
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
