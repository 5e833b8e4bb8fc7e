//! Multi-row selection.
//!
//! Select-all is scoped to the visible page, not the whole collection.
//! Selected ids that leave the view (narrowing search, external delete) are
//! kept but inert until the view includes them again or the selection is
//! cleared.

use crate::model::RecordId;
use crate::state::RecordStore;
use std::collections::HashSet;

/// Set of checked record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<RecordId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, otherwise remove it.
    pub fn toggle(&mut self, id: RecordId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Page-scoped select-all.
    ///
    /// Clears the selection when it already equals exactly `visible_ids`
    /// (order-independent); otherwise replaces it with `visible_ids`,
    /// discarding selections on other pages.
    pub fn toggle_all_on_page(&mut self, visible_ids: &[RecordId]) {
        if self.is_exactly(visible_ids) {
            self.ids.clear();
        } else {
            self.ids = visible_ids.iter().cloned().collect();
        }
    }

    /// Whether the selection holds exactly `ids` and nothing else.
    pub fn is_exactly(&self, ids: &[RecordId]) -> bool {
        let other: HashSet<&RecordId> = ids.iter().collect();
        other.len() == self.ids.len() && other.iter().all(|id| self.ids.contains(*id))
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Delete every selected record from `store`, then clear.
    ///
    /// Ids no longer in the store are ignored. Returns the number of records
    /// actually removed.
    pub fn delete_selected(&mut self, store: &mut RecordStore) -> usize {
        let removed = store.delete_many(&self.ids);
        self.clear();
        removed
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Selected ids that are in `visible_ids`, in `visible_ids` order.
    pub fn visible_subset(&self, visible_ids: &[RecordId]) -> Vec<RecordId> {
        visible_ids
            .iter()
            .filter(|id| self.ids.contains(*id))
            .cloned()
            .collect()
    }

    /// All selected ids, including ones outside the current view.
    pub fn ids(&self) -> &HashSet<RecordId> {
        &self.ids
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
