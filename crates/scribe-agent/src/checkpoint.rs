// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! Conversation checkpointing
//!
//! Holds conversation state keyed by thread id for the lifetime of one run.
//! All writes go through the [`MemorySaver::append`] reducer; the message
//! sequence is append-only, except that a tool result sharing a call id
//! with an earlier tool result completes that entry instead of duplicating
//! it. Single-writer assumption: no two runs may mutate the same thread id.

use std::collections::HashMap;

use crate::message::{ChatMessage, Role};

/// In-memory checkpoint store keyed by thread id
///
/// A durable store is a valid substitution with the same contract;
/// persistence across process exit is out of scope here.
#[derive(Debug, Default)]
pub struct MemorySaver {
    threads: HashMap<String, Vec<ChatMessage>>,
}

impl MemorySaver {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append messages to a thread through the reducer
    ///
    /// Each incoming tool result whose call id matches an existing tool
    /// entry replaces that entry; every other message is appended in order.
    pub fn append(&mut self, thread_id: &str, messages: impl IntoIterator<Item = ChatMessage>) {
        let thread = self.threads.entry(thread_id.to_string()).or_default();
        for message in messages {
            let existing = match (&message.role, &message.tool_call_id) {
                (Role::Tool, Some(call_id)) => thread.iter().position(|m| {
                    m.role == Role::Tool && m.tool_call_id.as_deref() == Some(call_id.as_str())
                }),
                _ => None,
            };
            match existing {
                Some(index) => thread[index] = message,
                None => thread.push(message),
            }
        }
    }

    /// The full message sequence for a thread (empty if unknown)
    #[must_use]
    pub fn messages(&self, thread_id: &str) -> &[ChatMessage] {
        self.threads.get(thread_id).map_or(&[], Vec::as_slice)
    }

    /// The most recent message of a thread
    #[must_use]
    pub fn last(&self, thread_id: &str) -> Option<&ChatMessage> {
        self.threads.get(thread_id).and_then(|t| t.last())
    }
}
