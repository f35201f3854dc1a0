//! Integration tests for scribe-git
//!
//! These tests build a scratch git repository with real commits and verify
//! extraction end-to-end: windowing, exclusion filtering, and patch
//! enrichment.

use std::fs;
use std::path::Path;
use std::process::Command;

use scribe_git::{Commit, GitError, GitHistory, HistoryOptions};
use tempfile::TempDir;

/// Run a git command in the scratch repository, panicking on failure
fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .env("GIT_AUTHOR_NAME", "Alice Example")
        .env("GIT_AUTHOR_EMAIL", "alice@example.com")
        .env("GIT_COMMITTER_NAME", "Alice Example")
        .env("GIT_COMMITTER_EMAIL", "alice@example.com")
        .output()
        .expect("spawn git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a scratch repository with one commit per (file content, message)
fn scratch_repo(commits: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    git(dir.path(), &["init", "--initial-branch=main"]);

    for (i, (content, message)) in commits.iter().enumerate() {
        let file = dir.path().join(format!("file_{i}.txt"));
        fs::write(&file, content).expect("write file");
        git(dir.path(), &["add", "."]);
        git(dir.path(), &["commit", "-m", message]);
    }

    dir
}

#[test]
fn test_collect_recent_commits_with_diffs() {
    let repo = scratch_repo(&[
        ("one", "Add first file"),
        ("two", "Add second file"),
        ("three", "Add third file"),
    ]);
    let history = GitHistory::open(repo.path()).expect("open repo");

    let commits = history
        .collect(&HistoryOptions::last_commits(2))
        .expect("collect");

    assert_eq!(commits.len(), 2);
    // Most recent first
    assert_eq!(commits[0].message, "Add third file");
    assert_eq!(commits[1].message, "Add second file");

    for commit in &commits {
        assert!(Commit::is_valid_hash(&commit.hash));
        assert_eq!(commit.author, "Alice Example");
        let diff = commit.diff.as_deref().expect("diff populated");
        assert!(diff.contains("+++"), "patch text expected: {diff}");
    }
}

#[test]
fn test_day_window_includes_fresh_commits() {
    let repo = scratch_repo(&[("one", "Add first file"), ("two", "Add second file")]);
    let history = GitHistory::open(repo.path()).expect("open repo");

    let commits = history
        .collect(&HistoryOptions::since_days(7))
        .expect("collect");

    // Both commits were created moments ago, well inside the window
    assert_eq!(commits.len(), 2);
}

#[test]
fn test_exclusion_filter_end_to_end() {
    let repo = scratch_repo(&[
        ("one", "Fix bug"),
        ("two", "WIP: half-finished refactor"),
        ("three", "Add docs"),
    ]);
    let history = GitHistory::open(repo.path()).expect("open repo");

    let commits = history
        .collect(&HistoryOptions::since_days(1).excluding("WIP"))
        .expect("collect");

    let messages: Vec<&str> = commits.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["Add docs", "Fix bug"]);
    assert!(commits.iter().all(Commit::has_diff));
}

#[test]
fn test_enrichment_preserves_order_and_count() {
    let repo = scratch_repo(&[
        ("one", "First"),
        ("two", "Second"),
        ("three", "Third"),
        ("four", "Fourth"),
    ]);
    let history = GitHistory::open(repo.path()).expect("open repo");

    let commits = history
        .collect(&HistoryOptions::last_commits(4))
        .expect("collect");

    assert_eq!(commits.len(), 4);
    let messages: Vec<&str> = commits.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["Fourth", "Third", "Second", "First"]);
    assert!(commits.iter().all(Commit::has_diff));
}

#[test]
fn test_commits_serialize_for_tool_payload() {
    let repo = scratch_repo(&[("one", "Add first file")]);
    let history = GitHistory::open(repo.path()).expect("open repo");

    let commits = history
        .collect(&HistoryOptions::last_commits(1))
        .expect("collect");
    let json = serde_json::to_string(&commits).expect("serialize");

    assert!(json.starts_with('['));
    assert!(json.contains("\"hash\""));
    assert!(json.contains("\"diff\""));
    assert!(json.contains("Add first file"));
}

#[test]
fn test_open_plain_directory_fails() {
    let dir = TempDir::new().expect("tempdir");
    let result = GitHistory::open(dir.path());
    assert!(matches!(result, Err(GitError::RepositoryNotFound { .. })));
}
