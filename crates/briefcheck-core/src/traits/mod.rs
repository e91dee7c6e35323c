//! Collaborator seams. Everything that talks to the outside world sits
//! behind one of these traits so the scoring core can be tested in isolation.

pub mod embedding;
pub mod extractor;
pub mod generative;
pub mod repository_stats;

pub use embedding::IEmbeddingProvider;
pub use extractor::ITextExtractor;
pub use generative::IGenerativeModel;
pub use repository_stats::IRepositoryStatsProvider;
