use std::collections::VecDeque;
use std::sync::Mutex;

use briefcheck_core::errors::GenerationError;
use briefcheck_core::traits::IGenerativeModel;

/// Replays queued responses in order and records every prompt it receives.
#[derive(Default)]
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    pub fn fail(self, error: GenerationError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: Result<String, GenerationError>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl IGenerativeModel for ScriptedModel {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| {
                Err(GenerationError::RequestFailed {
                    model: self.name().to_string(),
                    reason: "script exhausted".to_string(),
                })
            })
    }

    fn name(&self) -> &str {
        "scripted-model"
    }
}
