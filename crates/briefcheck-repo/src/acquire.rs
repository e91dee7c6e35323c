//! Repository acquisition: a local directory, or a fresh clone of a URL.

use std::path::{Path, PathBuf};

use briefcheck_core::errors::RepositoryError;
use git2::build::RepoBuilder;
use tempfile::TempDir;
use tracing::{info, warn};

/// Where the repository under analysis comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySource {
    Local(PathBuf),
    Remote { url: String, branch: Option<String> },
}

impl RepositorySource {
    /// Classify a CLI target: anything that looks like a URL (`scheme://` or
    /// scp-style `git@host:path`) is remote, everything else a local path.
    pub fn parse(target: &str, branch: Option<String>) -> Self {
        if target.contains("://") || target.starts_with("git@") {
            Self::Remote {
                url: target.to_string(),
                branch,
            }
        } else {
            if let Some(branch) = branch {
                warn!(target, %branch, "branch ignored for a local repository path");
            }
            Self::Local(PathBuf::from(target))
        }
    }

    /// Identifier used in reports: `owner/repo` for URLs, the path otherwise.
    pub fn display_name(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Remote { url, .. } => extract_repo_name(url).unwrap_or_else(|_| url.clone()),
        }
    }
}

/// A repository ready to read. A cloned checkout is deleted on drop.
#[derive(Debug)]
pub struct AcquiredRepository {
    root: PathBuf,
    name: String,
    checkout: Option<TempDir>,
}

impl AcquiredRepository {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_temporary(&self) -> bool {
        self.checkout.is_some()
    }
}

/// Make the repository available on disk.
pub fn acquire(source: &RepositorySource) -> Result<AcquiredRepository, RepositoryError> {
    match source {
        RepositorySource::Local(path) => {
            if !path.is_dir() {
                return Err(RepositoryError::NotFound {
                    path: path.display().to_string(),
                });
            }
            Ok(AcquiredRepository {
                root: path.clone(),
                name: source.display_name(),
                checkout: None,
            })
        }
        RepositorySource::Remote { url, branch } => {
            let name = extract_repo_name(url)?;
            let checkout = TempDir::new().map_err(|e| RepositoryError::CloneFailed {
                url: url.clone(),
                message: format!("cannot create checkout directory: {e}"),
            })?;

            info!(%url, branch = branch.as_deref().unwrap_or("<default>"), "cloning repository");
            let mut builder = RepoBuilder::new();
            if let Some(branch) = branch {
                builder.branch(branch);
            }
            builder
                .clone(url, checkout.path())
                .map_err(|e| RepositoryError::CloneFailed {
                    url: url.clone(),
                    message: e.message().to_string(),
                })?;

            Ok(AcquiredRepository {
                root: checkout.path().to_path_buf(),
                name,
                checkout: Some(checkout),
            })
        }
    }
}

/// `owner/repo` from a repository URL.
///
/// Accepts `https://host/owner/repo[.git][/tree/branch/...]`, scp-style
/// `git@host:owner/repo.git`, and `file:///any/path/owner/repo`, where the
/// last two path segments name the repository.
pub fn extract_repo_name(url: &str) -> Result<String, RepositoryError> {
    let invalid = || RepositoryError::InvalidUrl {
        url: url.to_string(),
    };

    let (path, from_end) = if let Some(rest) = url.strip_prefix("file://") {
        (rest, true)
    } else if let Some((_, rest)) = url.split_once("://") {
        // Drop the host.
        (rest.split_once('/').map(|(_, path)| path).ok_or_else(invalid)?, false)
    } else if let Some(rest) = url.strip_prefix("git@") {
        (rest.split_once(':').map(|(_, path)| path).ok_or_else(invalid)?, false)
    } else {
        return Err(invalid());
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let (owner, repo) = match (from_end, segments.as_slice()) {
        (true, [.., owner, repo]) | (false, [owner, repo, ..]) => (*owner, *repo),
        _ => return Err(invalid()),
    };
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return Err(invalid());
    }
    Ok(format!("{owner}/{repo}"))
}
