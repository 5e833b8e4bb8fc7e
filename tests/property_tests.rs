//! Property-based tests for filtering, pagination and selection invariants.
//!
//! Tests validate:
//! 1. Filtering keeps source order and returns exactly the matching records
//! 2. Pages partition the filtered view and the page number is always clamped
//! 3. Page-scoped select-all replaces the selection with the page, or clears it
//! 4. Deletes keep selection and store consistent

use proptest::prelude::*;
use roster::model::{Record, RecordId};
use roster::state::{filter_records, paginate, PageSize, ViewModel};
use std::collections::HashSet;

fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[a-zA-Z ]{1,12}",
        "[a-z]{1,8}@[a-z]{1,5}\\.com",
        prop_oneof!["admin", "member", "ADMIN", "Member"],
    )
        .prop_map(|(name, email, role)| Record::new("0", name, email, role))
}

/// Records with unique ids "1".."n".
fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..60).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                record.id = RecordId::from((index + 1).to_string());
                record
            })
            .collect()
    })
}

fn arb_page_size() -> impl Strategy<Value = PageSize> {
    (1usize..=15).prop_map(|n| PageSize::new(n).unwrap_or_default())
}

// ===== Property 1: Filtering =====

proptest! {
    #[test]
    fn empty_term_keeps_everything(records in arb_records()) {
        let filtered = filter_records(&records, "");
        prop_assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn filtered_view_is_ordered_subsequence(records in arb_records(), term in "[a-z]{0,3}") {
        let filtered = filter_records(&records, &term);

        let mut source = records.iter();
        for kept in &filtered {
            prop_assert!(source.any(|r| r.id == kept.id), "order must be preserved");
        }
    }

    #[test]
    fn every_kept_record_contains_term(records in arb_records(), term in "[a-zA-Z]{1,3}") {
        let needle = term.to_lowercase();
        for record in filter_records(&records, &term) {
            let hit = [
                record.id.as_str(),
                record.name.as_str(),
                record.email.as_str(),
                record.role.as_str(),
            ]
                .iter()
                .any(|text| text.to_lowercase().contains(&needle));
            prop_assert!(hit, "{:?} does not contain {:?}", record, term);
        }
    }

    #[test]
    fn every_matching_record_is_kept(records in arb_records(), term in "[a-zA-Z@.]{0,3}") {
        let needle = term.to_lowercase();
        let expected: Vec<&RecordId> = records
            .iter()
            .filter(|r| r.matches_lowercase(&needle))
            .map(|r| &r.id)
            .collect();

        let filtered = filter_records(&records, &term);
        let kept: Vec<&RecordId> = filtered.iter().map(|r| &r.id).collect();

        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn term_case_does_not_matter(records in arb_records(), term in "[a-z]{1,3}") {
        let lower = filter_records(&records, &term).len();
        let upper = filter_records(&records, &term.to_uppercase()).len();
        prop_assert_eq!(lower, upper);
    }
}

// ===== Property 2: Pagination =====

proptest! {
    #[test]
    fn page_is_always_in_range(
        records in arb_records(),
        page_size in arb_page_size(),
        requested in 0usize..100,
    ) {
        let page = paginate(&records, page_size, requested);

        prop_assert!(page.page_count >= 1);
        prop_assert!(page.page >= 1 && page.page <= page.page_count);
        prop_assert!(page.slice.len() <= page_size.get());
    }

    #[test]
    fn pages_partition_the_view(records in arb_records(), page_size in arb_page_size()) {
        let page_count = paginate(&records, page_size, 1).page_count;

        let concatenated: Vec<&Record> = (1..=page_count)
            .flat_map(|n| {
                let slice = paginate(&records, page_size, n).slice;
                slice.iter()
            })
            .collect();

        prop_assert_eq!(concatenated.len(), records.len());
        for (a, b) in concatenated.iter().zip(records.iter()) {
            prop_assert_eq!(&a.id, &b.id);
        }
    }
}

// ===== Property 3 & 4: Selection and deletes through the view-model =====

proptest! {
    #[test]
    fn toggle_all_selects_exactly_the_page_or_clears(
        records in arb_records(),
        page_size in arb_page_size(),
        pre_selected in prop::collection::vec(1usize..60, 0..10),
    ) {
        let mut vm = ViewModel::new(page_size);
        vm.load(records);
        for n in pre_selected {
            vm.toggle_selection(&RecordId::from(n.to_string()));
        }
        let visible: HashSet<RecordId> = vm.snapshot().visible_ids().into_iter().collect();
        let was_exactly_page = vm.selection().ids() == &visible;

        vm.toggle_all_on_page();

        if was_exactly_page {
            prop_assert!(vm.selection().is_empty());
        } else {
            prop_assert_eq!(vm.selection().ids(), &visible);
        }
    }

    #[test]
    fn toggle_all_from_exact_page_round_trips(
        records in arb_records(),
        page_size in arb_page_size(),
    ) {
        let mut vm = ViewModel::new(page_size);
        vm.load(records);
        vm.toggle_all_on_page();
        let selected = vm.selection().clone();

        vm.toggle_all_on_page();
        vm.toggle_all_on_page();

        prop_assert_eq!(vm.selection(), &selected);
    }

    #[test]
    fn selection_only_holds_existing_ids(
        records in arb_records(),
        toggles in prop::collection::vec(1usize..80, 0..20),
    ) {
        let mut vm = ViewModel::new(PageSize::default());
        vm.load(records);
        for n in toggles {
            vm.toggle_selection(&RecordId::from(n.to_string()));
        }

        for id in vm.selection().ids() {
            prop_assert!(vm.store().contains(id));
        }
    }

    #[test]
    fn delete_selected_removes_exactly_the_selection(
        records in arb_records(),
        toggles in prop::collection::vec(1usize..60, 0..20),
    ) {
        let mut vm = ViewModel::new(PageSize::default());
        vm.load(records);
        for n in toggles {
            vm.toggle_selection(&RecordId::from(n.to_string()));
        }
        let selected = vm.selection().ids().clone();
        let before = vm.store().len();

        let removed = vm.delete_selected();

        prop_assert_eq!(removed, selected.len());
        prop_assert_eq!(vm.store().len(), before - removed);
        prop_assert!(vm.selection().is_empty());
        for id in &selected {
            prop_assert!(!vm.store().contains(id));
        }
    }

    #[test]
    fn current_page_stays_valid_after_deletes(
        records in arb_records(),
        page_size in arb_page_size(),
        deletes in prop::collection::vec(1usize..60, 0..30),
    ) {
        let mut vm = ViewModel::new(page_size);
        vm.load(records);
        vm.navigate(roster::state::PageNav::Last);

        for n in deletes {
            vm.delete_record(&RecordId::from(n.to_string()));
            let info = vm.snapshot().page_info;
            prop_assert!(info.current_page >= 1 && info.current_page <= info.page_count);
        }
    }
}
