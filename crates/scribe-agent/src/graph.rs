// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Conversation state machine
//!
//! An explicit finite-state machine over the message log: `Agent` invokes
//! the model, `Tools` executes the pending calls of the model's last turn,
//! and the loop alternates between the two until the model answers with
//! plain content. The message log, held by the checkpoint store, is the
//! single source of truth driving transitions; each transition appends to
//! it and nothing else mutates it.

use tracing::{debug, info};

use crate::checkpoint::MemorySaver;
use crate::error::AgentError;
use crate::message::{ChatMessage, ToolCall};
use crate::model::ChatModel;
use crate::tool::ToolRegistry;

/// Cap on model invocations per run
///
/// The loop itself places no bound on `Agent ⇄ Tools` cycles, so a model
/// that keeps requesting tools would otherwise never terminate.
pub const DEFAULT_MAX_TURNS: usize = 25;

/// States of the conversation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Before the first model invocation
    Start,
    /// Invoke the model with the conversation so far
    Agent,
    /// Execute the pending tool calls of the last assistant turn
    Tools,
    /// Terminal; the last message holds the final answer
    End,
}

impl Step {
    /// Pure transition function over the shape of the most recent message
    ///
    /// `Start` always advances to `Agent`; `Agent` advances to `Tools` iff
    /// the last message is an assistant turn with pending calls, otherwise
    /// to `End`; `Tools` always returns to `Agent`; `End` is absorbing.
    #[must_use]
    pub fn next(self, last: Option<&ChatMessage>) -> Step {
        match self {
            Step::Start | Step::Tools => Step::Agent,
            Step::Agent => match last {
                Some(message) if message.has_tool_calls() => Step::Tools,
                _ => Step::End,
            },
            Step::End => Step::End,
        }
    }
}

/// The conversation loop: model, tools, and checkpointed message log
pub struct Agent<M> {
    model: M,
    registry: ToolRegistry,
    checkpoints: MemorySaver,
    max_turns: usize,
}

impl<M: ChatModel> Agent<M> {
    /// Build an agent over a model, a tool registry, and a checkpoint store
    #[must_use]
    pub fn new(model: M, registry: ToolRegistry, checkpoints: MemorySaver) -> Self {
        Self {
            model,
            registry,
            checkpoints,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Override the model-invocation cap
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// The message sequence recorded under a thread id
    #[must_use]
    pub fn messages(&self, thread_id: &str) -> &[ChatMessage] {
        self.checkpoints.messages(thread_id)
    }

    /// Run the loop to completion, returning the final answer's text
    ///
    /// Seeds the thread with the given messages, then alternates model
    /// invocation and tool execution until the model stops requesting
    /// tools. Exactly one tool-result is appended per pending call, in
    /// request order, before the model is invoked again.
    ///
    /// # Errors
    ///
    /// Returns `AgentError` when a model invocation fails or the turn cap
    /// is exceeded. Tool handler failures do not abort the run; they are
    /// fed back to the model as error text.
    pub async fn run(
        &mut self,
        thread_id: &str,
        seed: Vec<ChatMessage>,
    ) -> Result<String, AgentError> {
        let schemas = self.registry.schemas();
        self.checkpoints.append(thread_id, seed);

        let mut step = Step::Start;
        let mut turns = 0usize;

        loop {
            step = step.next(self.checkpoints.last(thread_id));
            debug!(?step, turns, "Transition");

            match step {
                Step::Agent => {
                    if turns >= self.max_turns {
                        return Err(AgentError::TurnLimit {
                            max_turns: self.max_turns,
                        });
                    }
                    turns += 1;
                    let response = self
                        .model
                        .invoke(self.checkpoints.messages(thread_id), &schemas)
                        .await?;
                    self.checkpoints.append(thread_id, [response]);
                }
                Step::Tools => {
                    let calls: Vec<ToolCall> = self
                        .checkpoints
                        .last(thread_id)
                        .map(|m| m.tool_calls.clone())
                        .unwrap_or_default();
                    let results = self.registry.execute(&calls);
                    self.checkpoints.append(thread_id, results);
                }
                Step::End => {
                    let answer = self
                        .checkpoints
                        .last(thread_id)
                        .map(|m| m.text().to_string())
                        .unwrap_or_default();
                    info!(turns, "Conversation finished");
                    return Ok(answer);
                }
                // next() never yields Start
                Step::Start => continue,
            }
        }
    }
}
