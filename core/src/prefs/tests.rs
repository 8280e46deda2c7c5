mod common {
    use crate::types::{SearchTerm, Slug};

    pub(super) fn term(s: &str) -> SearchTerm {
        SearchTerm::try_new(s).unwrap()
    }

    pub(super) fn slug(s: &str) -> Slug {
        Slug::try_new(s).unwrap()
    }

    pub(super) fn terms(entries: &[SearchTerm]) -> Vec<&str> {
        entries.iter().map(|t| t.as_str()).collect()
    }
}

mod history {
    use super::common::{term, terms};
    use crate::prefs::{HistoryStore, RECENT_SEARCHES_KEY};
    use crate::storage::{LocalStorage, MemoryStorage};

    #[test]
    fn test_load_empty() {
        let history = HistoryStore::load(MemoryStorage::new(), 5).unwrap();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_record_prepends() {
        let mut history = HistoryStore::load(MemoryStorage::new(), 5).unwrap();

        history.record_search(term("naruto")).unwrap();
        history.record_search(term("bleach")).unwrap();

        assert_eq!(terms(history.entries()), vec!["bleach", "naruto"]);
    }

    #[test]
    fn test_record_twice_keeps_single_entry_at_front() {
        let mut history = HistoryStore::load(MemoryStorage::new(), 5).unwrap();

        history.record_search(term("naruto")).unwrap();
        history.record_search(term("naruto")).unwrap();

        assert_eq!(terms(history.entries()), vec!["naruto"]);
    }

    #[test]
    fn test_record_existing_moves_to_front() {
        let mut history = HistoryStore::load(MemoryStorage::new(), 5).unwrap();

        history.record_search(term("a1")).unwrap();
        history.record_search(term("b2")).unwrap();
        history.record_search(term("c3")).unwrap();
        history.record_search(term("a1")).unwrap();

        assert_eq!(terms(history.entries()), vec!["a1", "c3", "b2"]);
    }

    #[test]
    fn test_sixth_term_drops_oldest() {
        let mut history = HistoryStore::load(MemoryStorage::new(), 5).unwrap();

        for t in ["t1", "t2", "t3", "t4", "t5", "t6"] {
            history.record_search(term(t)).unwrap();
        }

        assert_eq!(terms(history.entries()), vec!["t6", "t5", "t4", "t3", "t2"]);
    }

    #[test]
    fn test_every_mutation_persists() {
        let storage = MemoryStorage::new();
        let mut history = HistoryStore::load(storage.clone(), 5).unwrap();

        history.record_search(term("naruto")).unwrap();
        assert_eq!(
            storage.get_item(RECENT_SEARCHES_KEY).unwrap().as_deref(),
            Some("[\"naruto\"]")
        );

        history.remove("naruto").unwrap();
        assert_eq!(
            storage.get_item(RECENT_SEARCHES_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_remove_reports_whether_present() {
        let mut history = HistoryStore::load(MemoryStorage::new(), 5).unwrap();
        history.record_search(term("naruto")).unwrap();
        history.record_search(term("bleach")).unwrap();

        assert!(history.remove("naruto").unwrap());
        assert!(!history.remove("naruto").unwrap());
        assert_eq!(terms(history.entries()), vec!["bleach"]);
    }

    #[test]
    fn test_remove_ignores_surrounding_whitespace() {
        let storage = MemoryStorage::new();
        let mut history = HistoryStore::load(storage.clone(), 5).unwrap();
        history.record_search(term("naruto")).unwrap();
        history.record_search(term("one piece")).unwrap();

        assert!(history.remove("  naruto ").unwrap());
        assert!(history.remove("one piece\t").unwrap());
        assert!(history.entries().is_empty());
        assert_eq!(
            storage.get_item(RECENT_SEARCHES_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryStore::load(MemoryStorage::new(), 5).unwrap();
        history.record_search(term("naruto")).unwrap();

        history.clear().unwrap();

        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_reload_sees_persisted_entries() {
        let storage = MemoryStorage::new();
        let mut history = HistoryStore::load(storage.clone(), 5).unwrap();
        history.record_search(term("one piece")).unwrap();
        history.record_search(term("bleach")).unwrap();

        let reloaded = HistoryStore::load(storage, 5).unwrap();

        assert_eq!(terms(reloaded.entries()), vec!["bleach", "one piece"]);
    }

    #[test]
    fn test_load_sanitizes_stored_entries() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                RECENT_SEARCHES_KEY,
                r#"["a1", "  ", "b2", "a1", "c3", "d4", "e5", "f6"]"#,
            )
            .unwrap();

        let history = HistoryStore::load(storage, 5).unwrap();

        assert_eq!(terms(history.entries()), vec!["a1", "b2", "c3", "d4", "e5"]);
    }

    #[test]
    fn test_corrupt_entry_resets_to_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(RECENT_SEARCHES_KEY, "{not json").unwrap();

        let mut history = HistoryStore::load(storage.clone(), 5).unwrap();
        assert!(history.entries().is_empty());

        history.record_search(term("naruto")).unwrap();
        assert_eq!(
            storage.get_item(RECENT_SEARCHES_KEY).unwrap().as_deref(),
            Some("[\"naruto\"]")
        );
    }
}

mod reading {
    use super::common::slug;
    use crate::prefs::{LastRead, LastReadStore, READ_COUNT_KEY, ReadCounter};
    use crate::storage::{LocalStorage, MemoryStorage};

    #[test]
    fn test_last_read_roundtrip() {
        let store = LastReadStore::new(MemoryStorage::new());
        assert_eq!(store.get().unwrap(), None);

        let last = LastRead {
            title: "Naruto".to_string(),
            slug: slug("naruto"),
            chapter: slug("chuong-12"),
        };
        store.set(&last).unwrap();

        assert_eq!(store.get().unwrap(), Some(last));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_read_counter_increments() {
        let counter = ReadCounter::new(MemoryStorage::new(), 7);

        assert_eq!(counter.count().unwrap(), 0);
        assert_eq!(counter.record_open().unwrap().count, 1);
        assert_eq!(counter.record_open().unwrap().count, 2);
        assert_eq!(counter.count().unwrap(), 2);
    }

    #[test]
    fn test_interstitial_due_every_interval() {
        let counter = ReadCounter::new(MemoryStorage::new(), 3);

        let due: Vec<bool> = (0..7)
            .map(|_| counter.record_open().unwrap().interstitial_due)
            .collect();

        assert_eq!(due, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn test_unreadable_counter_restarts() {
        let storage = MemoryStorage::new();
        storage.set_item(READ_COUNT_KEY, "NaN").unwrap();

        let counter = ReadCounter::new(storage, 7);

        assert_eq!(counter.record_open().unwrap().count, 1);
    }
}

mod profile {
    use crate::prefs::{Interaction, ProfileStore, USER_PROFILE_KEY, UserProfile};
    use crate::storage::{LocalStorage, MemoryStorage};

    #[test]
    fn test_default_profile_for_new_reader() {
        let store = ProfileStore::load(MemoryStorage::new()).unwrap();

        assert_eq!(store.profile(), &UserProfile::default());
        assert_eq!(store.profile().tag_affinity("Action"), 5);
        assert_eq!(store.profile().tag_affinity("Romance"), 0);
    }

    #[test]
    fn test_learn_accumulates_weights() {
        let mut store = ProfileStore::load(MemoryStorage::new()).unwrap();

        store.learn(7, Interaction::View).unwrap();
        store.learn(7, Interaction::Hover).unwrap();
        store.learn(7, Interaction::Click).unwrap();

        assert_eq!(store.profile().interaction_score.get(&7), Some(&6.5));
    }

    #[test]
    fn test_click_records_view_once() {
        let mut store = ProfileStore::load(MemoryStorage::new()).unwrap();

        store.learn(7, Interaction::Click).unwrap();
        store.learn(7, Interaction::Click).unwrap();
        store.learn(8, Interaction::View).unwrap();

        assert_eq!(store.profile().viewed_comics, vec![7]);
    }

    #[test]
    fn test_profile_persists() {
        let storage = MemoryStorage::new();
        let mut store = ProfileStore::load(storage.clone()).unwrap();
        store.like_tag("Romance").unwrap();
        store.learn(3, Interaction::Click).unwrap();

        let reloaded = ProfileStore::load(storage).unwrap();

        assert_eq!(reloaded.profile().tag_affinity("Romance"), 1);
        assert_eq!(reloaded.profile().viewed_comics, vec![3]);
    }

    #[test]
    fn test_reads_camel_case_payload() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                USER_PROFILE_KEY,
                r#"{"favoriteTags":{"Comedy":2},"viewedComics":[1],"interactionScore":{"1":5}}"#,
            )
            .unwrap();

        let store = ProfileStore::load(storage).unwrap();

        assert_eq!(store.profile().tag_affinity("Comedy"), 2);
        assert_eq!(store.profile().interaction_score.get(&1), Some(&5.0));
    }

    #[test]
    fn test_profile_shares_key_with_existing_browser_data() {
        let storage = MemoryStorage::new();
        storage
            .set_item("magic_user_profile", r#"{"favoriteTags":{"Horror":9}}"#)
            .unwrap();

        let mut store = ProfileStore::load(storage.clone()).unwrap();
        store.like_tag("Horror").unwrap();

        assert_eq!(store.profile().tag_affinity("Horror"), 10);
        assert!(storage.get_item("user_profile").unwrap().is_none());
    }
}
