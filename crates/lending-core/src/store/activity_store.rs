use std::collections::VecDeque;

use crate::constants::ACTIVITY_LOG_CAPACITY;
use crate::models::{ActivityEntry, ActivityKind, InboxItem};

/// Bounded activity feed, newest entry first
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
    next_id: u64,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_capacity(ACTIVITY_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    pub fn record(&mut self, kind: ActivityKind, item: &InboxItem, timestamp: String) {
        let message = describe(kind, item);
        let entry = ActivityEntry {
            id: self.next_id,
            kind,
            item_id: item.id,
            sender: item.from.clone(),
            loan_account: item.loan_account.clone(),
            message,
            timestamp,
        };
        self.next_id += 1;
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(kind: ActivityKind, item: &InboxItem) -> String {
    match kind {
        ActivityKind::EmailReceived => format!("New email received from {}", item.from),
        ActivityKind::StatusChange { to, .. } => format!("Status changed to {}", to.label()),
        ActivityKind::DocumentsAnalyzed => format!("Documents analyzed for {}", item.loan_account),
        ActivityKind::ResponseGenerated => format!("AI response generated for {}", item.loan_account),
        ActivityKind::EmailSent => format!("Response sent to {}", item.from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;
    use crate::seed::seed_inbox;

    #[test]
    fn test_newest_first() {
        let items = seed_inbox();
        let mut log = ActivityLog::new();
        log.record(ActivityKind::EmailReceived, &items[0], "10:00:00".into());
        log.record(ActivityKind::EmailSent, &items[1], "10:00:01".into());
        let first = log.entries().next().unwrap();
        assert_eq!(first.kind, ActivityKind::EmailSent);
        assert_eq!(first.message, "Response sent to sarah.jones@retailplus.com");
    }

    #[test]
    fn test_bounded() {
        let items = seed_inbox();
        let mut log = ActivityLog::with_capacity(3);
        for _ in 0..5 {
            log.record(ActivityKind::DocumentsAnalyzed, &items[0], "t".into());
        }
        assert_eq!(log.len(), 3);
        let ids: Vec<u64> = log.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[test]
    fn test_status_change_message() {
        let items = seed_inbox();
        let mut log = ActivityLog::new();
        log.record(
            ActivityKind::StatusChange {
                from: ItemStatus::Pending,
                to: ItemStatus::Processing,
            },
            &items[0],
            "t".into(),
        );
        assert_eq!(log.entries().next().unwrap().message, "Status changed to processing");
    }
}
