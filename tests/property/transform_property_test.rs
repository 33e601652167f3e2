//! Property-based tests for the data-shaping pipeline: every sort mode
//! must be a permutation of its input, count sorts must honor their
//! ordering, and the summary aggregates must stay consistent with the
//! raw data.

use proptest::prelude::*;
use std::collections::BTreeMap;
use verdash::services::transform::{compare_versions, sorted_entries, summarize};
use verdash::types::client_data::ClientData;
use verdash::types::preferences::SortMode;

fn arb_client_data() -> impl Strategy<Value = ClientData> {
    proptest::collection::btree_map("[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", 0u64..100_000, 0..40)
        .prop_map(|map: BTreeMap<String, u64>| {
            let mut data = ClientData::new();
            for (version, count) in map {
                data.insert(&version, count);
            }
            data
        })
}

fn arb_sort_mode() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::ByVersion),
        Just(SortMode::CountAscending),
        Just(SortMode::CountDescending),
    ]
}

proptest! {
    #[test]
    fn prop_sorting_is_a_permutation(data in arb_client_data(), mode in arb_sort_mode()) {
        let sorted = sorted_entries(&data, mode);

        prop_assert_eq!(sorted.len(), data.len());
        for entry in &sorted {
            prop_assert_eq!(data.get(&entry.version), Some(entry.count));
        }
    }

    #[test]
    fn prop_version_sort_is_lexicographically_nondecreasing(data in arb_client_data()) {
        let sorted = sorted_entries(&data, SortMode::ByVersion);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].version <= pair[1].version);
        }
    }

    #[test]
    fn prop_count_sorts_are_monotonic(data in arb_client_data()) {
        let ascending = sorted_entries(&data, SortMode::CountAscending);
        for pair in ascending.windows(2) {
            prop_assert!(pair[0].count <= pair[1].count);
        }

        let descending = sorted_entries(&data, SortMode::CountDescending);
        for pair in descending.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn prop_count_ties_keep_relative_input_order(data in arb_client_data(), mode in arb_sort_mode()) {
        let sorted = sorted_entries(&data, mode);
        let input_pos = |version: &str| {
            data.entries().iter().position(|e| e.version == version).unwrap()
        };

        for pair in sorted.windows(2) {
            let tied = match mode {
                SortMode::ByVersion => pair[0].version == pair[1].version,
                _ => pair[0].count == pair[1].count,
            };
            if tied {
                prop_assert!(input_pos(&pair[0].version) < input_pos(&pair[1].version));
            }
        }
    }

    #[test]
    fn prop_summary_totals_are_consistent(data in arb_client_data()) {
        let summary = summarize(&data);
        let expected_total: u64 = data.entries().iter().map(|e| e.count).sum();

        prop_assert_eq!(summary.total_clients, expected_total);
        prop_assert_eq!(summary.version_count, data.len());

        if data.is_empty() {
            prop_assert_eq!(summary.top_version, "");
            prop_assert_eq!(summary.top_share, 0.0);
        } else {
            // The top version carries the maximum count
            let max = data.entries().iter().map(|e| e.count).max().unwrap();
            prop_assert_eq!(summary.top_count, max);
            prop_assert_eq!(data.get(&summary.top_version), Some(max));
            // Shares always land in [0, 100]
            prop_assert!((0.0..=100.0).contains(&summary.top_share));
            prop_assert!((0.0..=100.0).contains(&summary.latest_share));
        }
    }

    #[test]
    fn prop_sort_mode_never_changes_the_summary(data in arb_client_data(), mode in arb_sort_mode()) {
        // Sorting is presentation only; rebuilding from the sorted
        // sequence must summarize identically.
        let sorted = sorted_entries(&data, mode);
        let pairs: Vec<(String, u64)> = sorted.iter().map(|e| (e.version.clone(), e.count)).collect();
        let mut reordered = ClientData::new();
        for (version, count) in &pairs {
            reordered.insert(version, *count);
        }

        let a = summarize(&data);
        let b = summarize(&reordered);
        prop_assert_eq!(a.total_clients, b.total_clients);
        prop_assert_eq!(a.version_count, b.version_count);
        // Distinct labels can compare equal (e.g. leading zeros), and an
        // equal tie is broken by insertion order, so only the numeric
        // identity of the latest version is order-independent.
        prop_assert_eq!(
            compare_versions(&a.latest_version, &b.latest_version),
            std::cmp::Ordering::Equal
        );
    }
}
