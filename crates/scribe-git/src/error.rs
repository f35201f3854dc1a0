// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Error types for scribe-git

use thiserror::Error;

/// Errors that can occur during git history extraction
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// The git binary could not be spawned
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// A git invocation exited with a non-zero status
    #[error("git {command} failed: {stderr}")]
    CommandFailed {
        /// The git subcommand that failed
        command: String,
        /// Captured stderr from the failed invocation
        stderr: String,
    },

    /// A log line did not split into the expected four fields
    #[error("Malformed log line: {line}")]
    MalformedLogLine {
        /// The offending line of log output
        line: String,
    },

    /// A log line carried a date that could not be parsed
    #[error("Invalid commit date '{date}': {source}")]
    InvalidDate {
        /// The date field as rendered by git
        date: String,
        /// The underlying parse failure
        source: chrono::ParseError,
    },
}
