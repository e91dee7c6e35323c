//! # briefcheck-repo
//!
//! Everything between "a repository URL or path" and "an ordered list of
//! `RepositorySection`s plus `RepositoryStats`".
//!
//! ```text
//! acquire ──► SourceWalker ──► TextChunker ──► SectionCollector ──► Vec<RepositorySection>
//!    └──────► GitStatsProvider ─────────────────────────────────► RepositoryStats
//! ```

pub mod acquire;
pub mod chunker;
pub mod language;
pub mod sections;
pub mod stats;
pub mod walker;

pub use acquire::{acquire, extract_repo_name, AcquiredRepository, RepositorySource};
pub use chunker::TextChunker;
pub use sections::SectionCollector;
pub use stats::GitStatsProvider;
pub use walker::{SourceFile, SourceWalker};
