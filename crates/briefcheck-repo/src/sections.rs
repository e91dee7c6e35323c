use std::path::Path;

use briefcheck_core::config::RepositoryConfig;
use briefcheck_core::errors::RepositoryError;
use briefcheck_core::models::RepositorySection;
use tracing::info;

use crate::chunker::TextChunker;
use crate::walker::SourceWalker;

/// Walks a repository and chunks every accepted file into sections with ids
/// of the form `<relative path>#<chunk index>`.
pub struct SectionCollector<'a> {
    walker: SourceWalker<'a>,
    chunker: TextChunker,
}

impl<'a> SectionCollector<'a> {
    pub fn new(config: &'a RepositoryConfig) -> Self {
        Self {
            walker: SourceWalker::new(config),
            chunker: TextChunker::from_config(config),
        }
    }

    pub fn collect(&self, root: &Path) -> Result<Vec<RepositorySection>, RepositoryError> {
        let files = self.walker.walk(root)?;
        let sections: Vec<RepositorySection> = files
            .iter()
            .flat_map(|file| {
                self.chunker
                    .split(&file.content)
                    .into_iter()
                    .enumerate()
                    .map(move |(i, chunk)| {
                        RepositorySection::new(format!("{}#{i}", file.relative_path), chunk)
                    })
            })
            .collect();
        info!(
            root = %root.display(),
            files = files.len(),
            sections = sections.len(),
            "repository sections collected"
        );
        Ok(sections)
    }
}
