//! Authoritative in-memory record collection.
//!
//! Every operation is synchronous and total: unknown ids are no-ops.
//! No operation changes a record's id.

use crate::model::{Record, RecordId};
use std::collections::HashSet;

/// Ordered collection of records, identity by `RecordId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new authoritative collection, replacing the old one.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Remove one record. Returns `true` if a record was removed.
    pub fn delete_by_id(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| &record.id != id);
        self.records.len() != before
    }

    /// Remove every record whose id is in `ids`. Returns the number removed.
    pub fn delete_many(&mut self, ids: &HashSet<RecordId>) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !ids.contains(&record.id));
        before - self.records.len()
    }

    /// Replace one record's fields, keeping its id and position.
    ///
    /// Whatever id `new_record` carries is ignored. Returns `true` if a record
    /// with `id` existed.
    pub fn update_by_id(&mut self, id: &RecordId, new_record: Record) -> bool {
        match self.records.iter_mut().find(|record| &record.id == id) {
            Some(slot) => {
                *slot = Record {
                    id: slot.id.clone(),
                    ..new_record
                };
                true
            }
            None => false,
        }
    }

    /// All records in store order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Whether a record with `id` exists.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordStore {
        let mut store = RecordStore::new();
        store.replace_all(vec![
            Record::new("1", "Alice", "a@x.com", "ADMIN"),
            Record::new("2", "Bob", "b@x.com", "member"),
            Record::new("3", "Carol", "c@x.com", "member"),
        ]);
        store
    }

    fn ids(store: &RecordStore) -> Vec<&str> {
        store.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn replace_all_installs_collection_in_order() {
        let store = sample();
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn delete_by_id_removes_one_record() {
        let mut store = sample();
        assert!(store.delete_by_id(&RecordId::from("2")));
        assert_eq!(ids(&store), vec!["1", "3"]);
    }

    #[test]
    fn delete_by_unknown_id_is_noop() {
        let mut store = sample();
        assert!(!store.delete_by_id(&RecordId::from("99")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn delete_many_ignores_unknown_ids() {
        let mut store = sample();
        let doomed: HashSet<RecordId> = ["2", "3", "99"].into_iter().map(RecordId::from).collect();

        assert_eq!(store.delete_many(&doomed), 2);
        assert_eq!(ids(&store), vec!["1"]);
    }

    #[test]
    fn update_by_id_preserves_id_and_position() {
        let mut store = sample();
        let replacement = Record::new("something-else", "Bobby", "bobby@x.com", "admin");

        assert!(store.update_by_id(&RecordId::from("2"), replacement));

        assert_eq!(ids(&store), vec!["1", "2", "3"]);
        let updated = store.get(&RecordId::from("2")).unwrap();
        assert_eq!(updated.name, "Bobby");
        assert_eq!(updated.email, "bobby@x.com");
        assert_eq!(updated.role, "admin");
        assert!(!store.contains(&RecordId::from("something-else")));
    }

    #[test]
    fn update_by_unknown_id_is_noop() {
        let mut store = sample();
        let before = store.clone();

        assert!(!store.update_by_id(
            &RecordId::from("99"),
            Record::new("99", "Ghost", "g@x.com", "member")
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn empty_store_reports_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
