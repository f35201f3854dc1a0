// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Tool registry and executor
//!
//! Tools are registered as a descriptor (name, description, input schema)
//! paired with a handler, looked up by name when the model requests a call.
//! A handler failure never propagates past [`ToolRegistry::execute`]: it is
//! rendered as a textual error tool-result so the model can see and react
//! to it.

use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, warn};

use scribe_git::{GitHistory, HistoryOptions};

use crate::message::{ChatMessage, ToolCall};

/// Name of the single tool this system registers
pub const GET_COMMITS: &str = "get_commits";

/// Failures surfaced to the model as tool-result text
#[derive(Debug, Error)]
pub enum ToolError {
    /// The commit history extractor failed
    #[error("Error getting commits: {0}")]
    Extraction(String),

    /// The model requested a tool that is not registered
    #[error("Error: unknown tool '{0}'")]
    UnknownTool(String),
}

/// Static description of one callable tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Tool name, as the model must request it
    pub name: String,
    /// Human-readable description shown to the model
    pub description: String,
    /// JSON schema for the tool's input object
    pub parameters: Value,
}

impl ToolDescriptor {
    /// Render the descriptor in the chat-completions `tools` wire shape
    #[must_use]
    pub fn to_schema(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }
}

/// A tool implementation; the registry boundary converts errors to text
pub type ToolHandler = Box<dyn Fn() -> Result<String, ToolError> + Send + Sync>;

/// Registry mapping tool names to descriptor/handler pairs
///
/// The tool set is fixed at construction; there is no runtime discovery.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<(ToolDescriptor, ToolHandler)>,
}

impl ToolRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register(&mut self, descriptor: ToolDescriptor, handler: ToolHandler) {
        self.tools.push((descriptor, handler));
    }

    /// Wire-shape schemas of every registered tool, in registration order
    #[must_use]
    pub fn schemas(&self) -> Vec<Value> {
        self.tools.iter().map(|(d, _)| d.to_schema()).collect()
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a batch of pending calls, in request order
    ///
    /// Produces exactly one tool-result message per call, tagged with the
    /// originating call id. Handler errors and unknown tool names are
    /// rendered as error text, never raised.
    #[must_use]
    pub fn execute(&self, calls: &[ToolCall]) -> Vec<ChatMessage> {
        calls
            .iter()
            .map(|call| {
                let name = call.function.name.as_str();
                debug!(tool = name, call_id = %call.id, "Executing tool call");
                let text = match self.lookup(name) {
                    Some(handler) => handler().unwrap_or_else(|e| {
                        warn!(tool = name, error = %e, "Tool handler failed");
                        e.to_string()
                    }),
                    None => {
                        warn!(tool = name, "Unknown tool requested");
                        ToolError::UnknownTool(name.to_string()).to_string()
                    }
                };
                ChatMessage::tool_result(call.id.clone(), text)
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Option<&ToolHandler> {
        self.tools
            .iter()
            .find(|(d, _)| d.name == name)
            .map(|(_, h)| h)
    }
}

/// Build the `get_commits` tool over a repository
///
/// The descriptor declares an empty input object; the handler ignores
/// arguments, collects the configured history window, and returns the
/// commits (diffs included) as a JSON array.
#[must_use]
pub fn get_commits_tool(
    history: GitHistory,
    options: HistoryOptions,
) -> (ToolDescriptor, ToolHandler) {
    let descriptor = ToolDescriptor {
        name: GET_COMMITS.to_string(),
        description: "Get recent git commits from a repository. This will return a JSON \
                      array of commits that include the commit hash, message, date, and \
                      author. It will also include the diff."
            .to_string(),
        parameters: json!({ "type": "object", "properties": {} }),
    };

    let handler: ToolHandler = Box::new(move || {
        let commits = history
            .collect(&options)
            .map_err(|e| ToolError::Extraction(e.to_string()))?;
        serde_json::to_string(&commits).map_err(|e| ToolError::Extraction(e.to_string()))
    });

    (descriptor, handler)
}
