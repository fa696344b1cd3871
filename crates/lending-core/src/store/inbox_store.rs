use crate::models::{InboxItem, ItemStatus};

/// Visible inbox list, newest first. Item ids are unique.
#[derive(Debug, Clone, Default)]
pub struct InboxStore {
    items: Vec<InboxItem>,
}

impl InboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a seed list, dropping later duplicates of an id
    pub fn from_items(items: impl IntoIterator<Item = InboxItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            if !store.contains(item.id) {
                store.items.push(item);
            }
        }
        store
    }

    // ===== Getters =====

    pub fn items(&self) -> &[InboxItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn get(&self, id: u32) -> Option<&InboxItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Requests not yet completed
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_active()).count()
    }

    // ===== Mutations =====

    /// Insert at the head as a new arrival. Returns false if the id is already present.
    pub fn prepend(&mut self, mut item: InboxItem) -> bool {
        if self.contains(item.id) {
            return false;
        }
        item.is_new = true;
        self.items.insert(0, item);
        true
    }

    /// Set an item's status, returning the previous one
    pub fn set_status(&mut self, id: u32, status: ItemStatus) -> Option<ItemStatus> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        Some(std::mem::replace(&mut item.status, status))
    }

    pub fn clear_new(&mut self, id: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.is_new = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{pending_arrivals, seed_inbox};

    #[test]
    fn test_from_items_dedupes() {
        let mut items = seed_inbox();
        items.push(items[0].clone());
        let store = InboxStore::from_items(items);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_prepend_marks_new_and_rejects_duplicates() {
        let mut store = InboxStore::from_items(seed_inbox());
        let mut arrival = pending_arrivals().remove(0);
        arrival.is_new = false;
        assert!(store.prepend(arrival.clone()));
        assert_eq!(store.items()[0].id, arrival.id);
        assert!(store.items()[0].is_new);
        assert!(!store.prepend(arrival));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_set_status_returns_previous() {
        let mut store = InboxStore::from_items(seed_inbox());
        assert_eq!(store.set_status(1, ItemStatus::Processing), Some(ItemStatus::Pending));
        assert_eq!(store.get(1).map(|i| i.status), Some(ItemStatus::Processing));
        assert_eq!(store.set_status(99, ItemStatus::Completed), None);
    }

    #[test]
    fn test_active_count_excludes_completed() {
        let store = InboxStore::from_items(seed_inbox());
        // Seed has one pending and two completed requests
        assert_eq!(store.active_count(), 1);
    }
}
