use serde::Serialize;

use super::inbox::ItemStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ActivityKind {
    EmailReceived,
    StatusChange { from: ItemStatus, to: ItemStatus },
    DocumentsAnalyzed,
    ResponseGenerated,
    EmailSent,
}

/// One milestone in the live activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u64,
    pub kind: ActivityKind,
    pub item_id: u32,
    pub sender: String,
    pub loan_account: String,
    pub message: String,
    pub timestamp: String,
}
