// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Error types for scribe-agent

use thiserror::Error;

/// Errors that abort a conversation run
///
/// Tool handler failures are deliberately absent: those are caught at the
/// tool-executor boundary and rendered as textual tool results so the model
/// can react to them.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The HTTP request to the model endpoint failed or the body could not
    /// be decoded
    #[error("Model request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The model endpoint answered with a non-success status
    #[error("Model returned HTTP {status}: {body}")]
    Model {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The model response carried no choices
    #[error("Model returned no choices")]
    EmptyResponse,

    /// The agent/tools loop did not reach a final answer within the cap
    #[error("Tool loop exceeded {max_turns} model invocations without a final answer")]
    TurnLimit {
        /// The configured invocation cap
        max_turns: usize,
    },
}
