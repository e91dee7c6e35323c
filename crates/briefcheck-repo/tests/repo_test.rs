use std::path::Path;

use briefcheck_core::config::RepositoryConfig;
use briefcheck_core::traits::IRepositoryStatsProvider;
use briefcheck_repo::{acquire, GitStatsProvider, RepositorySource, SectionCollector, SourceWalker};
use git2::{Repository, Signature};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Commit every file currently in the working tree as `author`.
fn commit_all(repo: &Repository, author: &str, message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now(author, &format!("{}@example.com", author.to_lowercase())).unwrap();
    let parents: Vec<git2::Commit> = repo
        .head()
        .ok()
        .and_then(|h| h.target())
        .map(|oid| vec![repo.find_commit(oid).unwrap()])
        .unwrap_or_default();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

#[test]
fn walker_filters_by_extension_ignore_and_size() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/app.py", "print('hello')\n");
    write(root, "README.md", "# Project\n");
    write(root, "logo.jpg", "binary");
    write(root, "build/out.js", "generated()");
    write(root, ".gitignore", "build/\n");
    write(root, ".hidden/secret.txt", "nope");
    write(root, "big.txt", &"x".repeat(200));
    std::fs::write(root.join("bad.txt"), [0xffu8, 0xfe, 0x00]).unwrap();

    let config = RepositoryConfig {
        max_file_size: 100,
        ..Default::default()
    };
    let files = SourceWalker::new(&config).walk(root).unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(paths, ["README.md", "src/app.py"]);
}

#[test]
fn sections_are_ids_by_path_and_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "a.txt", "alpha beta gamma delta");
    write(root, "b.py", "x = 1");

    let config = RepositoryConfig {
        chunk_size: 12,
        chunk_overlap: 0,
        ..Default::default()
    };
    let sections = SectionCollector::new(&config).collect(root).unwrap();
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a.txt#0", "a.txt#1", "b.py#0"]);
    assert_eq!(sections[2].content, "x = 1");
    assert!(sections.iter().all(|s| s.content.chars().count() <= 12));
}

#[test]
fn stats_count_unique_commits_across_branches() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let repo = Repository::init(root).unwrap();

    write(root, "main.py", &"a".repeat(300));
    let first = commit_all(&repo, "Ana", "initial");
    write(root, "app.js", &"b".repeat(100));
    commit_all(&repo, "Luis", "add frontend");
    write(root, "main.py", &("a".repeat(300) + "\n"));
    commit_all(&repo, "Ana", "tweak");

    // A second branch at the first commit shares history with the default one.
    let base = repo.find_commit(first).unwrap();
    repo.branch("feature", &base, false).unwrap();

    let stats = GitStatsProvider.stats(root).unwrap();
    assert_eq!(stats.branches.len(), 2);
    assert!(stats.branches.contains(&"feature".to_string()));
    assert_eq!(stats.commit_count, 3);
    assert_eq!(stats.contributors.get("Ana"), Some(&2));
    assert_eq!(stats.contributors.get("Luis"), Some(&1));

    let names: Vec<&str> = stats.languages.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Python", "JavaScript"]);
    let total: f64 = stats.languages.iter().map(|l| l.percentage).sum();
    assert!((total - 100.0).abs() < 0.02);
}

#[test]
fn stats_on_clone_include_remote_branches() {
    let origin = tempfile::tempdir().unwrap();
    let origin_root = origin.path().join("acme").join("widget");
    std::fs::create_dir_all(&origin_root).unwrap();
    let repo = Repository::init(&origin_root).unwrap();
    write(&origin_root, "main.py", "print('widget')\n");
    let first = commit_all(&repo, "Ana", "initial");
    let default_ref = repo.head().unwrap().name().unwrap().to_string();

    // One extra commit that only exists on `feature`.
    repo.branch("feature", &repo.find_commit(first).unwrap(), false)
        .unwrap();
    repo.set_head("refs/heads/feature").unwrap();
    write(&origin_root, "extra.py", "x = 1\n");
    commit_all(&repo, "Luis", "feature work");
    repo.set_head(&default_ref).unwrap();

    let url = format!("file://{}", origin_root.display());
    let acquired = acquire(&RepositorySource::parse(&url, None)).unwrap();
    let stats = GitStatsProvider.stats(acquired.root()).unwrap();

    let default_branch = default_ref.trim_start_matches("refs/heads/");
    let mut expected = vec!["feature".to_string(), default_branch.to_string()];
    expected.sort();
    assert_eq!(stats.branches, expected);
    assert_eq!(stats.commit_count, 2);
    assert_eq!(stats.contributors.get("Ana"), Some(&1));
    assert_eq!(stats.contributors.get("Luis"), Some(&1));
}

#[test]
fn stats_on_plain_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(GitStatsProvider.stats(dir.path()).is_err());
}

#[test]
fn remote_clone_lives_until_drop() {
    let origin = tempfile::tempdir().unwrap();
    let origin_root = origin.path().join("acme").join("widget");
    std::fs::create_dir_all(&origin_root).unwrap();
    let repo = Repository::init(&origin_root).unwrap();
    write(&origin_root, "lib.rs", "pub fn widget() {}");
    commit_all(&repo, "Ana", "initial");

    let url = format!("file://{}", origin_root.display());
    let source = RepositorySource::parse(&url, None);
    let acquired = acquire(&source).unwrap();
    assert!(acquired.is_temporary());
    assert_eq!(acquired.name(), "acme/widget");
    let checkout = acquired.root().to_path_buf();
    assert!(checkout.join("lib.rs").exists());

    drop(acquired);
    assert!(!checkout.exists());
}

#[test]
fn clone_of_missing_remote_fails() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("file://{}/nowhere/repo", dir.path().display());
    let err = acquire(&RepositorySource::parse(&url, None)).unwrap_err();
    assert!(matches!(
        err,
        briefcheck_core::errors::RepositoryError::CloneFailed { .. }
    ));
}
