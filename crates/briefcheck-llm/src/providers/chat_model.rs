//! OpenAI-compatible chat completions client (Groq, OpenAI, vLLM, ...).
//! One user message per call; the first choice's content is the answer.

use std::time::Duration;

use briefcheck_core::config::ApiKey;
use briefcheck_core::errors::GenerationError;
use briefcheck_core::traits::IGenerativeModel;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct ChatCompletionsModel {
    model: String,
    api_key: ApiKey,
    endpoint: String,
    temperature: f32,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsModel {
    pub fn new(
        model: impl Into<String>,
        api_key: ApiKey,
        endpoint: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        Self {
            model: model.into(),
            api_key,
            endpoint: endpoint.into(),
            temperature,
            timeout,
        }
    }
}

impl IGenerativeModel for ChatCompletionsModel {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GenerationError::RequestFailed {
                model: self.model.clone(),
                reason: format!("runtime error: {e}"),
            })?;

        let reply = rt.block_on(async {
            let response = reqwest::Client::new()
                .post(&self.endpoint)
                .timeout(self.timeout)
                .bearer_auth(self.api_key.expose())
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

            let body: ChatResponse = response
                .json()
                .await
                .map_err(|e| super::http_error(&self.model, self.timeout, e))?;
            Ok(body
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .unwrap_or_default())
        })?;

        debug!(model = %self.model, chars = reply.len(), "chat completion received");
        if reply.trim().is_empty() {
            return Err(GenerationError::EmptyResponse {
                model: self.model.clone(),
            });
        }
        Ok(reply)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
