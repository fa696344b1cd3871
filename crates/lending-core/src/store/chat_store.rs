use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::models::{ChatAuthor, ChatMessage};

/// Append-only message log for one inbox item
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    last_id: u64,
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message stamped with `at`; returns the assigned id
    pub fn append(
        &mut self,
        author: ChatAuthor,
        body: String,
        related_documents: Vec<String>,
        at: DateTime<Local>,
    ) -> u64 {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id + 1);
        self.last_id = id;
        self.messages.push(ChatMessage {
            id,
            author,
            body,
            timestamp: at.format("%H:%M:%S").to_string(),
            related_documents,
        });
        id
    }
}

/// Chat logs keyed by inbox item id
#[derive(Debug, Clone, Default)]
pub struct ChatStore {
    logs: HashMap<u32, ChatLog>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, item_id: u32) -> Option<&ChatLog> {
        self.logs.get(&item_id)
    }

    pub fn log_mut(&mut self, item_id: u32) -> &mut ChatLog {
        self.logs.entry(item_id).or_default()
    }

    pub fn messages(&self, item_id: u32) -> &[ChatMessage] {
        self.logs.get(&item_id).map(|l| l.messages()).unwrap_or(&[])
    }
}
