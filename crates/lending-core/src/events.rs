use serde::Serialize;

/// Something the timers changed; returned from `Dashboard::advance`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum CoreEvent {
    ItemArrived { item_id: u32 },
    StageAdvanced { item_id: u32, stage: usize },
    ProcessingCompleted { item_id: u32 },
    AgentReplied { item_id: u32, message_id: u64 },
    NoticeExpired,
}
