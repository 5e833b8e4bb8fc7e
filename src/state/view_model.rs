//! View-model coordinator.
//!
//! Owns the record store, search term, page cursor, selection and edit
//! session, and derives one `Snapshot` for the rendering layer. Derived data
//! (filtered view, page slice) is never cached: `snapshot()` recomputes it
//! from the current inputs, so a render can never see a filtered view and a
//! page slice computed from different states.

use crate::model::{Field, Record, RecordId};
use crate::state::edit_session::EditSession;
use crate::state::filter::filter_records;
use crate::state::pagination::{self, PageNav, PageSize};
use crate::state::selection::Selection;
use crate::state::store::RecordStore;
use tracing::{debug, info};

// ===== Snapshot =====

/// Page position shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Total pages, at least 1.
    pub page_count: usize,
    /// Records matching the search term.
    pub matching: usize,
    /// Records in the store.
    pub total: usize,
}

impl PageInfo {
    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Records on the current page, in filtered-view order.
    pub visible_records: Vec<Record>,
    /// Selected ids that are on the current page, in page order.
    pub selection: Vec<RecordId>,
    /// The page is non-empty and the whole selection is exactly this page,
    /// so select-all would clear it.
    pub page_selected: bool,
    /// Current edit session.
    pub edit_session: EditSession,
    /// Page position.
    pub page_info: PageInfo,
}

impl Snapshot {
    /// Ids of the visible records, in page order.
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible_records.iter().map(|r| r.id.clone()).collect()
    }

    /// Whether `id` is on this page and selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }
}

// ===== ViewModel =====

/// Coordinator wiring store, filter, pagination, selection and edit session.
#[derive(Debug, Clone)]
pub struct ViewModel {
    store: RecordStore,
    search_term: String,
    current_page: usize,
    page_size: PageSize,
    selection: Selection,
    edit_session: EditSession,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ViewModel {
    /// Create an empty view-model with a fixed page size.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            store: RecordStore::new(),
            search_term: String::new(),
            current_page: 1,
            page_size,
            selection: Selection::new(),
            edit_session: EditSession::Idle,
        }
    }

    // ----- Store -----

    /// Install the initial record collection.
    pub fn load(&mut self, records: Vec<Record>) {
        info!(count = records.len(), "Installing record collection");
        self.store.replace_all(records);
        self.store_changed();
    }

    /// Delete one record. Unknown ids are ignored.
    pub fn delete_record(&mut self, id: &RecordId) {
        if self.store.delete_by_id(id) {
            debug!(%id, "Deleted record");
            self.store_changed();
        }
    }

    /// Delete every selected record, then clear the selection.
    ///
    /// Selected ids missing from the store are ignored. Returns the number of
    /// records removed.
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.selection.delete_selected(&mut self.store);
        debug!(removed, "Deleted selected records");
        if removed > 0 {
            self.store_changed();
        }
        removed
    }

    // ----- Search -----

    /// Replace the search term. Returns to page 1 only when the term changes.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.current_page = 1;
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    // ----- Pagination -----

    /// Move the page cursor. The stored page is kept clamped.
    pub fn navigate(&mut self, nav: PageNav) {
        let page_count = self.page_count();
        self.current_page = pagination::navigate(self.current_page, page_count, nav);
    }

    /// Records per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    // ----- Selection -----

    /// Toggle one id.
    ///
    /// Removing always works, so stale ids can be unchecked; adding requires
    /// the id to exist in the store.
    pub fn toggle_selection(&mut self, id: &RecordId) {
        if self.selection.contains(id) || self.store.contains(id) {
            self.selection.toggle(id.clone());
        }
    }

    /// Page-scoped select-all over the current page.
    pub fn toggle_all_on_page(&mut self) {
        let visible_ids = self.snapshot().visible_ids();
        self.selection.toggle_all_on_page(&visible_ids);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Full selection, including ids outside the current page.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // ----- Editing -----

    /// Begin editing a copy of the record with `id`. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: &RecordId) {
        if let Some(record) = self.store.get(id) {
            self.edit_session.begin_edit(record);
        }
    }

    /// Update one field of the draft.
    pub fn change_field(&mut self, field: Field, value: impl Into<String>) {
        self.edit_session.change_field(field, value);
    }

    /// Commit the draft and return to Idle.
    pub fn save_edit(&mut self) {
        if self.edit_session.save(&mut self.store) {
            debug!("Saved edit");
            self.store_changed();
        }
    }

    /// Discard the draft.
    pub fn cancel_edit(&mut self) {
        self.edit_session.cancel();
    }

    /// Current edit session.
    pub fn edit_session(&self) -> &EditSession {
        &self.edit_session
    }

    // ----- Derived -----

    /// Read-only access to the store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Derive the page shown to the operator.
    ///
    /// Order: filter the store by the term, paginate the filtered view, then
    /// intersect the selection with the page.
    pub fn snapshot(&self) -> Snapshot {
        let filtered = filter_records(self.store.records(), &self.search_term);
        let page = pagination::paginate(&filtered, self.page_size, self.current_page);

        let visible_records: Vec<Record> = page.slice.iter().map(|r| (*r).clone()).collect();
        let visible_ids: Vec<RecordId> = visible_records.iter().map(|r| r.id.clone()).collect();

        Snapshot {
            selection: self.selection.visible_subset(&visible_ids),
            page_selected: !visible_ids.is_empty() && self.selection.is_exactly(&visible_ids),
            visible_records,
            edit_session: self.edit_session.clone(),
            page_info: PageInfo {
                current_page: page.page,
                page_count: page.page_count,
                matching: filtered.len(),
                total: self.store.len(),
            },
        }
    }

    fn page_count(&self) -> usize {
        let matching = filter_records(self.store.records(), &self.search_term).len();
        pagination::page_count(matching, self.page_size)
    }

    fn store_changed(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
#[path = "view_model_tests.rs"]
mod tests;
