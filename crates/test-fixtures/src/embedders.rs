use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use briefcheck_core::errors::EmbeddingError;
use briefcheck_core::traits::IEmbeddingProvider;

/// Embeds by exact-text lookup. Unknown texts get the fallback vector if one
/// is set, otherwise fail.
#[derive(Default)]
pub struct MapEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Option<Vec<f32>>,
    fail_on: HashSet<String>,
    log: Mutex<Vec<String>>,
}

impl MapEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    pub fn with_fallback(mut self, vector: Vec<f32>) -> Self {
        self.fallback = Some(vector);
        self
    }

    /// Make embedding of this exact text fail.
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.fail_on.insert(text.into());
        self
    }

    /// Number of `embed` calls served so far (hits and failures).
    pub fn calls(&self) -> usize {
        self.call_log().len()
    }

    /// Texts passed to `embed`, in the order the calls arrived.
    pub fn call_log(&self) -> Vec<String> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl IEmbeddingProvider for MapEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
        if self.fail_on.contains(text) {
            return Err(EmbeddingError::InferenceFailed {
                provider: self.name().to_string(),
                reason: "scripted failure".to_string(),
            });
        }
        self.vectors
            .get(text)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                provider: self.name().to_string(),
                reason: format!("no vector for {text:?}"),
            })
    }

    fn name(&self) -> &str {
        "map-embedder"
    }
}

/// Every call fails, as an unreachable embedding service would.
#[derive(Default)]
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }
}
