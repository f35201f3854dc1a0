// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Git log output parsing
//!
//! This module parses the delimited one-line-per-commit output produced by
//! `git log --pretty=format:%h|%s|%ad|%an --date=iso` into [`Commit`]
//! records, and applies the optional message-exclusion filter.

use crate::commit::Commit;
use crate::error::GitError;
use chrono::{DateTime, Utc};

/// The pretty format handed to `git log`: hash, subject, date, author
pub const LOG_FORMAT: &str = "%h|%s|%ad|%an";

/// The field delimiter used by [`LOG_FORMAT`]
pub const LOG_DELIMITER: char = '|';

/// Format string matching git's `--date=iso` rendering
const GIT_ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parse one line of log output into a [`Commit`]
///
/// The line must carry exactly four delimited fields: hash, subject, date,
/// author. Subject lines may themselves contain the delimiter; the hash is
/// taken from the left and the date and author from the right so the fixed
/// outer fields can never misalign. The `diff` field is left unset.
///
/// # Errors
///
/// Returns [`GitError::MalformedLogLine`] when fewer than four fields are
/// present, and [`GitError::InvalidDate`] when the date field does not parse.
pub fn parse_log_line(line: &str) -> Result<Commit, GitError> {
    let malformed = || GitError::MalformedLogLine {
        line: line.to_string(),
    };

    let (hash, rest) = line.split_once(LOG_DELIMITER).ok_or_else(malformed)?;
    let (rest, author) = rest.rsplit_once(LOG_DELIMITER).ok_or_else(malformed)?;
    let (message, date) = rest.rsplit_once(LOG_DELIMITER).ok_or_else(malformed)?;

    if hash.is_empty() || author.is_empty() {
        return Err(malformed());
    }

    let date = parse_git_date(date)?;

    Ok(Commit {
        hash: hash.to_string(),
        message: message.to_string(),
        date,
        author: author.to_string(),
        diff: None,
    })
}

/// Parse a `--date=iso` timestamp, normalizing to UTC
fn parse_git_date(date: &str) -> Result<DateTime<Utc>, GitError> {
    DateTime::parse_from_str(date, GIT_ISO_FORMAT)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|source| GitError::InvalidDate {
            date: date.to_string(),
            source,
        })
}

/// Parse full log output into commits, most recent first
///
/// Empty lines are skipped; every non-empty line must parse.
///
/// # Errors
///
/// Returns the first per-line error encountered.
pub fn parse_log(output: &str) -> Result<Vec<Commit>, GitError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_log_line)
        .collect()
}

/// Drop commits whose message contains the exclusion substring
///
/// A pure, idempotent filter: literal case-sensitive containment, no
/// pattern matching. With no pattern configured the input passes through
/// untouched.
#[must_use]
pub fn filter_excluded(commits: Vec<Commit>, exclude: Option<&str>) -> Vec<Commit> {
    match exclude {
        Some(pattern) => commits
            .into_iter()
            .filter(|c| !c.message_contains(pattern))
            .collect(),
        None => commits,
    }
}
