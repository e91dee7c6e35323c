//! L1 in-memory embedding cache using moka.
//!
//! Keys are blake3 hashes of the provider name and the text, so a briefing
//! and its requirements are embedded once across a batch run.

use std::time::Duration;

use briefcheck_core::errors::EmbeddingError;
use briefcheck_core::traits::IEmbeddingProvider;
use moka::sync::Cache;
use tracing::trace;

/// Caching wrapper around any embedding provider. Failures are never cached.
pub struct CachedEmbedder {
    inner: Box<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
}

impl CachedEmbedder {
    pub fn new(inner: Box<dyn IEmbeddingProvider>, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { inner, cache }
    }

    fn key(&self, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.inner.name().as_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        hasher.finalize().to_hex().to_string()
    }
}

impl IEmbeddingProvider for CachedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let key = self.key(text);
        if let Some(hit) = self.cache.get(&key) {
            trace!(provider = self.inner.name(), "embedding cache hit");
            return Ok(hit);
        }
        let embedding = self.inner.embed(text)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let keys: Vec<String> = texts.iter().map(|t| self.key(t)).collect();
        let mut out: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        let missing: Vec<usize> = (0..texts.len()).filter(|i| out[*i].is_none()).collect();
        if !missing.is_empty() {
            let batch: Vec<String> = missing.iter().map(|i| texts[*i].clone()).collect();
            let fresh = self.inner.embed_batch(&batch)?;
            if fresh.len() != batch.len() {
                return Err(EmbeddingError::InferenceFailed {
                    provider: self.inner.name().to_string(),
                    reason: format!("expected {} embeddings, got {}", batch.len(), fresh.len()),
                });
            }
            for (i, embedding) in missing.into_iter().zip(fresh) {
                self.cache.insert(keys[i].clone(), embedding.clone());
                out[i] = Some(embedding);
            }
        }

        Ok(out.into_iter().flatten().collect())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
