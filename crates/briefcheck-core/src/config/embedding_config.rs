use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "ollama" or "api".
    pub provider: String,
    /// Embedding model identifier.
    pub model: String,
    /// Provider base URL (Ollama) or full embeddings endpoint (API).
    pub endpoint: Option<String>,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// L1 in-memory cache max entries. 0 disables caching.
    pub cache_capacity: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            endpoint: None,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
            cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
        }
    }
}
