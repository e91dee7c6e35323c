//! Source file discovery using `ignore`.
//!
//! Honours `.gitignore`, skips hidden entries (including `.git`), and keeps
//! only files whose name ends in an allow-listed extension and whose size is
//! within `max_file_size`. Files that are not valid UTF-8 are skipped.

use std::path::Path;

use briefcheck_core::config::RepositoryConfig;
use briefcheck_core::errors::RepositoryError;
use ignore::WalkBuilder;
use tracing::{debug, warn};

/// One readable source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the repository root, `/`-separated.
    pub relative_path: String,
    pub content: String,
}

pub struct SourceWalker<'a> {
    config: &'a RepositoryConfig,
}

impl<'a> SourceWalker<'a> {
    pub fn new(config: &'a RepositoryConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and read every accepted file, sorted by path.
    pub fn walk(&self, root: &Path) -> Result<Vec<SourceFile>, RepositoryError> {
        if !root.is_dir() {
            return Err(RepositoryError::NotFound {
                path: root.display().to_string(),
            });
        }

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        let mut skipped = 0usize;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "walk error, continuing");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !self.config.accepts_extension(file_name) {
                continue;
            }
            match entry.metadata() {
                Ok(meta) if meta.len() > self.config.max_file_size => {
                    debug!(path = %path.display(), size = meta.len(), "skipping oversized file");
                    skipped += 1;
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot stat file, skipping");
                    skipped += 1;
                    continue;
                }
            }

            let content = match std::fs::read(path).map(String::from_utf8) {
                Ok(Ok(content)) => content,
                Ok(Err(_)) => {
                    warn!(path = %path.display(), "file is not valid UTF-8, skipping");
                    skipped += 1;
                    continue;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot read file, skipping");
                    skipped += 1;
                    continue;
                }
            };

            files.push(SourceFile {
                relative_path: relative_path(root, path),
                content,
            });
        }

        debug!(root = %root.display(), files = files.len(), skipped, "repository walked");
        Ok(files)
    }
}

pub(crate) fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
