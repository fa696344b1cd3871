use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::models::InboxItem;
use crate::store::InboxStore;

/// Feeds queued items into the visible inbox, one per tick, while active.
///
/// A tick is a no-op when inactive, when the queue is empty, or when the
/// inbox is already at capacity.
#[derive(Debug, Clone)]
pub struct ArrivalSimulator {
    pending: VecDeque<InboxItem>,
    capacity: usize,
    active: bool,
}

impl ArrivalSimulator {
    pub fn new(pending: impl IntoIterator<Item = InboxItem>, capacity: usize) -> Self {
        Self {
            pending: pending.into_iter().collect(),
            capacity,
            active: false,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// No further arrivals will ever happen
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn peek(&self) -> Option<&InboxItem> {
        self.pending.front()
    }

    /// Inject the next pending item if allowed; returns its id
    pub fn tick(&mut self, inbox: &mut InboxStore) -> Option<u32> {
        if !self.active || inbox.len() >= self.capacity {
            return None;
        }
        let item = self.pending.pop_front()?;
        let id = item.id;
        if inbox.prepend(item) {
            debug!(item_id = id, visible = inbox.len(), "arrival injected");
            Some(id)
        } else {
            warn!(item_id = id, "dropping queued arrival with duplicate id");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{pending_arrivals, seed_inbox};

    fn run_ticks(sim: &mut ArrivalSimulator, inbox: &mut InboxStore, ticks: usize) -> Vec<u32> {
        (0..ticks).filter_map(|_| sim.tick(inbox)).collect()
    }

    #[test]
    fn test_inactive_never_injects() {
        let mut inbox = InboxStore::from_items(seed_inbox());
        let mut sim = ArrivalSimulator::new(pending_arrivals(), 7);
        assert!(run_ticks(&mut sim, &mut inbox, 5).is_empty());
        assert_eq!(inbox.len(), 3);
        assert_eq!(sim.pending_len(), 3);
    }

    #[test]
    fn test_fifo_order_and_new_flag() {
        let mut inbox = InboxStore::from_items(seed_inbox());
        let mut sim = ArrivalSimulator::new(pending_arrivals(), 7);
        sim.activate();
        assert_eq!(run_ticks(&mut sim, &mut inbox, 10), vec![4, 5, 7]);
        let head: Vec<u32> = inbox.items().iter().take(3).map(|i| i.id).collect();
        assert_eq!(head, vec![7, 5, 4]);
        assert!(inbox.items()[0].is_new);
        assert!(sim.is_exhausted());
    }

    #[test]
    fn test_capacity_limits_injections() {
        let mut inbox = InboxStore::from_items(seed_inbox());
        let mut sim = ArrivalSimulator::new(pending_arrivals(), 4);
        sim.activate();
        // min(N=3, C-initial=1) = 1
        assert_eq!(run_ticks(&mut sim, &mut inbox, 10), vec![4]);
        assert_eq!(inbox.len(), 4);
        assert_eq!(sim.pending_len(), 2);
    }

    #[test]
    fn test_deactivate_pauses() {
        let mut inbox = InboxStore::from_items(seed_inbox());
        let mut sim = ArrivalSimulator::new(pending_arrivals(), 7);
        sim.activate();
        assert_eq!(sim.tick(&mut inbox), Some(4));
        sim.deactivate();
        assert_eq!(sim.tick(&mut inbox), None);
        sim.activate();
        assert_eq!(sim.tick(&mut inbox), Some(5));
    }

    #[test]
    fn test_duplicate_id_is_dropped() {
        let mut inbox = InboxStore::from_items(seed_inbox());
        let mut sim = ArrivalSimulator::new(seed_inbox(), 7);
        sim.activate();
        assert_eq!(sim.tick(&mut inbox), None);
        assert_eq!(inbox.len(), 3);
        assert_eq!(sim.pending_len(), 2);
    }
}
