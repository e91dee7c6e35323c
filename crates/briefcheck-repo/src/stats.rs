//! Repository statistics from the local clone via git2.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use briefcheck_core::errors::RepositoryError;
use briefcheck_core::models::{LanguageShare, RepositoryStats};
use briefcheck_core::traits::IRepositoryStatsProvider;
use git2::{BranchType, Oid, Repository};
use ignore::WalkBuilder;
use tracing::debug;

use crate::language::language_for_extension;

/// Name used for commits without an author name.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Branches, commits and contributors from git history, language share from
/// the working tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitStatsProvider;

impl GitStatsProvider {
    fn history(
        &self,
        root: &Path,
    ) -> Result<(Vec<String>, usize, BTreeMap<String, usize>), RepositoryError> {
        let git_err = |e: git2::Error| RepositoryError::Git {
            path: root.display().to_string(),
            message: e.message().to_string(),
        };

        let repo = Repository::open(root).map_err(git_err)?;
        // A fresh clone only has the default branch locally; the rest live
        // under remote-tracking refs. Both are merged by short name.
        let mut branches: BTreeSet<String> = BTreeSet::new();
        let mut tips: Vec<Oid> = Vec::new();
        for kind in [BranchType::Local, BranchType::Remote] {
            for branch in repo.branches(Some(kind)).map_err(git_err)? {
                let (branch, _) = branch.map_err(git_err)?;
                let Some(name) = branch.name().map_err(git_err)? else {
                    continue;
                };
                let short = match kind {
                    BranchType::Local => name,
                    BranchType::Remote => name.split_once('/').map_or(name, |(_, rest)| rest),
                };
                if short == "HEAD" {
                    continue;
                }
                branches.insert(short.to_string());
                if let Some(tip) = branch.get().target() {
                    tips.push(tip);
                }
            }
        }
        let branches: Vec<String> = branches.into_iter().collect();

        // A commit reachable from several branches is counted once.
        let mut seen: HashSet<Oid> = HashSet::new();
        let mut contributors: BTreeMap<String, usize> = BTreeMap::new();
        if !tips.is_empty() {
            let mut walk = repo.revwalk().map_err(git_err)?;
            for tip in tips {
                walk.push(tip).map_err(git_err)?;
            }
            for oid in walk {
                let oid = oid.map_err(git_err)?;
                if !seen.insert(oid) {
                    continue;
                }
                let commit = repo.find_commit(oid).map_err(git_err)?;
                let author = commit.author();
                let name = author
                    .name()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or(UNKNOWN_AUTHOR);
                *contributors.entry(name.to_string()).or_insert(0) += 1;
            }
        }

        Ok((branches, seen.len(), contributors))
    }
}

/// Share of working-tree bytes per language, two decimals, largest first.
pub fn language_shares(root: &Path) -> Vec<LanguageShare> {
    let mut bytes: BTreeMap<&'static str, u64> = BTreeMap::new();
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .build();
    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Some(lang) = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(language_for_extension)
        else {
            continue;
        };
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        *bytes.entry(lang).or_insert(0) += size;
    }

    let total: u64 = bytes.values().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut shares: Vec<LanguageShare> = bytes
        .into_iter()
        .map(|(name, b)| LanguageShare {
            name: name.to_string(),
            percentage: (10_000.0 * b as f64 / total as f64).round() / 100.0,
        })
        .collect();
    shares.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then_with(|| a.name.cmp(&b.name))
    });
    shares
}

impl IRepositoryStatsProvider for GitStatsProvider {
    fn stats(&self, root: &Path) -> Result<RepositoryStats, RepositoryError> {
        let (branches, commit_count, contributors) = self.history(root)?;
        let languages = language_shares(root);
        debug!(
            root = %root.display(),
            branches = branches.len(),
            commit_count,
            contributors = contributors.len(),
            "repository stats collected"
        );
        Ok(RepositoryStats {
            branches,
            commit_count,
            contributors,
            languages,
        })
    }
}
