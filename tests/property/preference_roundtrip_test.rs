//! Property-based tests for the preference store: arbitrary values must
//! round-trip intact, writes must be idempotent, and a decline must
//! always leave the store scrubbed of dashboard records.

use proptest::prelude::*;
use std::sync::Arc;
use verdash::database::Database;
use verdash::managers::consent_manager::{ConsentManager, ConsentManagerTrait};
use verdash::services::preference_store::{
    PreferenceStore, PreferenceStoreTrait, CONSENT_KEY, LANGUAGE_KEY, SORT_TYPE_KEY,
    VISIBLE_ITEMS_KEY,
};

fn memory_store() -> PreferenceStore {
    PreferenceStore::new(Arc::new(Database::open_in_memory().expect("open db")))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_values_round_trip_verbatim(value in "\\PC{0,64}") {
        let store = memory_store();
        store.set(LANGUAGE_KEY, &value, 30).unwrap();
        prop_assert_eq!(store.get(LANGUAGE_KEY).unwrap(), Some(value));
    }

    #[test]
    fn prop_repeated_writes_are_idempotent(value in "[a-z0-9_]{1,32}", repeats in 1usize..5) {
        let db = Arc::new(Database::open_in_memory().expect("open db"));
        let store = PreferenceStore::new(db.clone());
        for _ in 0..repeats {
            store.set(SORT_TYPE_KEY, &value, 30).unwrap();
        }
        prop_assert_eq!(store.get(SORT_TYPE_KEY).unwrap(), Some(value));

        let rows: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
            .unwrap();
        prop_assert_eq!(rows, 1);
    }

    #[test]
    fn prop_last_write_wins(values in proptest::collection::vec("[a-z]{1,16}", 1..8)) {
        let store = memory_store();
        for value in &values {
            store.set(VISIBLE_ITEMS_KEY, value, 30).unwrap();
        }
        let stored = store.get(VISIBLE_ITEMS_KEY).unwrap();
        prop_assert_eq!(stored.as_deref(), values.last().map(|s| s.as_str()));
    }

    #[test]
    fn prop_decline_scrubs_dashboard_records(
        language in "[a-z]{2}",
        sort in "[a-z]{1,8}",
        items in "[0-9]{1,3}",
    ) {
        let store = memory_store();
        store.set(LANGUAGE_KEY, &language, 365).unwrap();
        store.set(SORT_TYPE_KEY, &sort, 30).unwrap();
        store.set(VISIBLE_ITEMS_KEY, &items, 30).unwrap();

        let mut consent = ConsentManager::new(store.clone());
        consent.decline_all().unwrap();

        for key in [LANGUAGE_KEY, SORT_TYPE_KEY, VISIBLE_ITEMS_KEY] {
            prop_assert_eq!(store.get(key).unwrap(), None);
        }
        let decision = store.get(CONSENT_KEY).unwrap();
        prop_assert_eq!(decision.as_deref(), Some("declined"));
        prop_assert!(!consent.allows_persistence());
    }

    #[test]
    fn prop_expired_records_never_resurface(value in "[a-z]{1,16}") {
        let store = memory_store();
        store.set(LANGUAGE_KEY, &value, 0).unwrap();
        prop_assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
        prop_assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
    }
}
