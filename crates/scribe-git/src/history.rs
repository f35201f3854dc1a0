// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Git history extraction
//!
//! This module runs the `git` binary against a repository to list a bounded
//! window of commits and fetch each surviving commit's patch. Two query
//! kinds are issued: a delimited one-line-per-commit log listing, then one
//! `git show` per commit that survives the exclusion filter.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{Duration, Utc};
use tracing::debug;

use crate::commit::Commit;
use crate::error::GitError;
use crate::parser::{self, LOG_FORMAT};

/// Lookback window for history collection
///
/// The two selection modes are mutually exclusive by construction: a window
/// is either day-based or count-based, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryWindow {
    /// All commits from the last N days
    SinceDays(u32),
    /// The N most recent commits
    LastCommits(u32),
}

impl Default for HistoryWindow {
    /// Day-count mode, looking back one week
    fn default() -> Self {
        Self::SinceDays(7)
    }
}

/// Configuration for collecting commit history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Which commits to select
    pub window: HistoryWindow,
    /// Drop commits whose message contains this substring
    pub exclude: Option<String>,
}

impl HistoryOptions {
    /// Options selecting all commits from the last N days
    #[must_use]
    pub fn since_days(days: u32) -> Self {
        Self {
            window: HistoryWindow::SinceDays(days),
            ..Default::default()
        }
    }

    /// Options selecting the N most recent commits
    #[must_use]
    pub fn last_commits(n: u32) -> Self {
        Self {
            window: HistoryWindow::LastCommits(n),
            ..Default::default()
        }
    }

    /// Exclude commits whose message contains the given substring
    #[must_use]
    pub fn excluding(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }
}

/// A git repository to collect history from
pub struct GitHistory {
    repo: PathBuf,
}

impl GitHistory {
    /// Open the repository at the given path
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RepositoryNotFound`] if the path does not exist
    /// or carries no `.git` root.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        if !path.is_dir() || !path.join(".git").exists() {
            return Err(GitError::RepositoryNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(Self {
            repo: path.to_path_buf(),
        })
    }

    /// The repository path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.repo
    }

    /// Collect fully-populated commits for the given window
    ///
    /// Lists commits most recent first, parses the delimited log output,
    /// applies the exclusion filter, then fetches each surviving commit's
    /// patch. Enrichment preserves the order and count of the filtered
    /// listing.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if a git invocation fails or log output is
    /// malformed.
    pub fn collect(&self, options: &HistoryOptions) -> Result<Vec<Commit>, GitError> {
        let listing = self.list_commits(options.window)?;
        let commits = parser::parse_log(&listing)?;
        debug!(parsed = commits.len(), "Parsed log listing");

        let commits = parser::filter_excluded(commits, options.exclude.as_deref());
        debug!(surviving = commits.len(), "Applied exclusion filter");

        commits
            .into_iter()
            .map(|c| {
                let diff = self.fetch_patch(&c.hash)?;
                Ok(c.with_diff(diff))
            })
            .collect()
    }

    /// Run the windowed log listing query
    fn list_commits(&self, window: HistoryWindow) -> Result<String, GitError> {
        let format = format!("--pretty=format:{LOG_FORMAT}");
        let mut args = vec!["log", &format, "--date=iso"];

        let since;
        let count;
        match window {
            HistoryWindow::SinceDays(days) => {
                since = (Utc::now() - Duration::days(i64::from(days))).to_rfc3339();
                args.push("--since");
                args.push(&since);
            }
            HistoryWindow::LastCommits(n) => {
                count = n.to_string();
                args.push("-n");
                args.push(&count);
            }
        }

        self.run_git(&args)
    }

    /// Fetch the full patch text for one commit
    fn fetch_patch(&self, hash: &str) -> Result<String, GitError> {
        self.run_git(&["show", hash])
    }

    /// Run a git subcommand in the repository, capturing stdout
    fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        debug!(?args, repo = %self.repo.display(), "Running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.first().unwrap_or(&"git").to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
