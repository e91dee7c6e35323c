use serde::{Deserialize, Serialize};

use super::defaults;

/// Repository walking and chunking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Maximum chunk length, in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks.
    pub chunk_overlap: usize,
    /// Files larger than this (bytes) are skipped.
    pub max_file_size: u64,
    /// File extensions (with leading dot) treated as analysable source.
    pub extensions: Vec<String>,
}

impl RepositoryConfig {
    pub fn accepts_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            chunk_overlap: defaults::DEFAULT_CHUNK_OVERLAP,
            max_file_size: defaults::DEFAULT_MAX_FILE_SIZE,
            extensions: defaults::DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
