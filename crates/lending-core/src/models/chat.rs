use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAuthor {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Millisecond timestamp, bumped when needed so ids stay unique within a log
    pub id: u64,
    pub author: ChatAuthor,
    pub body: String,
    /// Local wall-clock time for display ("14:03:27")
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_documents: Vec<String>,
}

impl ChatMessage {
    pub fn is_from_agent(&self) -> bool {
        self.author == ChatAuthor::Agent
    }
}
