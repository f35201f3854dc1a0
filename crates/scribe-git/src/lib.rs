// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! scribe-git: Git history extraction for scribe
//!
//! This library crate collects a bounded window of commits from a git
//! repository, together with their patches, for consumption by the scribe
//! changelog agent.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use scribe_git::{GitHistory, HistoryOptions};
//!
//! let history = GitHistory::open(".").expect("open repo");
//! let commits = history
//!     .collect(&HistoryOptions::last_commits(10))
//!     .expect("collect commits");
//!
//! for c in commits {
//!     println!("{} - {}", c.hash, c.message);
//! }
//! ```

pub mod commit;
pub mod error;
pub mod history;
pub mod parser;

pub use commit::Commit;
pub use error::GitError;
pub use history::{GitHistory, HistoryOptions, HistoryWindow};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::history::{GitHistory, HistoryOptions, HistoryWindow};
}
