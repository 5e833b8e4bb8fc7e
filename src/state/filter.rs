//! Search filter over the record collection.
//!
//! Pure function of (records, term); no hidden state, so repeated calls with
//! the same inputs always return the same view.

use crate::model::Record;

/// Return the records matching `term`, in store order.
///
/// A record matches if any of its fields (id, name, email, role) contains
/// `term` as a case-insensitive substring. The empty term matches everything.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let term_lower = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_lowercase(&term_lower))
        .collect()
}
