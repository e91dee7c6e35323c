//! # briefcheck-embeddings
//!
//! Embedding generation and similarity scoring.
//!
//! ## Architecture
//!
//! ```text
//! create_provider(EmbeddingConfig)
//! ├── CachedEmbedder (moka L1, blake3 keys)
//! │   ├── OllamaProvider (local, /api/embed)
//! │   └── ApiProvider (OpenAI-compatible /v1/embeddings)
//! similarity
//! └── cosine_similarity / to_percentage / meets_threshold
//! ```

pub mod cache;
pub mod providers;
pub mod similarity;

pub use cache::CachedEmbedder;
pub use providers::{create_provider, ApiProvider, OllamaProvider};
pub use similarity::{cosine_similarity, meets_threshold, to_percentage};
