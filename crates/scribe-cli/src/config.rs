//! Configuration for the scribe CLI
//!
//! Command-line arguments, their validation, and the translation into the
//! core's history window. Everything here runs before the conversation
//! loop is constructed: a rejected configuration never reaches the core.

use std::path::PathBuf;

use clap::Parser;

use scribe_agent::model::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use scribe_git::HistoryWindow;

/// Scribe - summarize recent git changes into a changelog
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scribe")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository to summarize
    pub filepath: PathBuf,

    /// Number of days to look back (default 7)
    ///
    /// Mutually exclusive with --num-commits.
    #[arg(short = 's', long, conflicts_with = "num_commits")]
    pub num_days: Option<u32>,

    /// Number of commits to look back
    ///
    /// Mutually exclusive with --num-days.
    #[arg(short = 'n', long)]
    pub num_commits: Option<u32>,

    /// Exclude commits whose message contains this substring
    #[arg(short = 'e', long)]
    pub exclude: Option<String>,

    /// Model name to invoke
    #[arg(long, env = "SCRIBE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// OpenAI-compatible API root
    #[arg(long, env = "GROQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key for the model endpoint
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Maximum model invocations before giving up
    #[arg(long, default_value_t = scribe_agent::graph::DEFAULT_MAX_TURNS)]
    pub max_turns: usize,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout carries only the summary.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// The lookback window the extractor should use
    ///
    /// Day-count mode with a one-week default unless a commit count was
    /// requested; the clap `conflicts_with` rule has already ruled out
    /// receiving both.
    #[must_use]
    pub fn window(&self) -> HistoryWindow {
        match self.num_commits {
            Some(n) => HistoryWindow::LastCommits(n),
            None => HistoryWindow::SinceDays(self.num_days.unwrap_or(7)),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path does not exist, is not a
    /// directory, or carries no `.git` root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.filepath.exists() {
            return Err(ConfigError::PathNotFound(self.filepath.clone()));
        }
        if !self.filepath.is_dir() {
            return Err(ConfigError::PathNotDirectory(self.filepath.clone()));
        }
        if !self.filepath.join(".git").exists() {
            return Err(ConfigError::NoGitRepository(self.filepath.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("File not found at path: {0}")]
    PathNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Path is not a directory: {0}")]
    PathNotDirectory(PathBuf),

    /// No `.git` root under the given path
    #[error("No git repository found at: {0}")]
    NoGitRepository(PathBuf),
}
