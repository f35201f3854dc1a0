// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! scribe-agent: Tool-calling conversation loop for scribe
//!
//! This library crate drives a remote language model through an
//! agent/tools loop: the model is invoked with the conversation so far and
//! a set of tool descriptors, any tool calls it emits are executed and fed
//! back as tool results, and the loop repeats until the model answers with
//! plain content. Conversation state lives in a checkpoint store keyed by
//! thread id.

#![warn(missing_docs)]

pub mod checkpoint;
pub mod error;
pub mod graph;
pub mod message;
pub mod model;
pub mod tool;

pub use checkpoint::MemorySaver;
pub use error::AgentError;
pub use graph::{Agent, Step};
pub use message::{ChatMessage, Role, ToolCall};
pub use model::{ChatModel, GroqModel};
pub use tool::{ToolDescriptor, ToolRegistry, get_commits_tool};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::checkpoint::MemorySaver;
    pub use crate::error::AgentError;
    pub use crate::graph::{Agent, Step};
    pub use crate::message::{ChatMessage, Role, ToolCall};
    pub use crate::model::{ChatModel, GroqModel};
    pub use crate::tool::{ToolRegistry, get_commits_tool};
}
