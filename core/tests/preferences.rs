use komi_core::prefs::{HistoryStore, Interaction, LastRead, LastReadStore, ProfileStore, ReadCounter};
use komi_core::storage::RedbStorage;
use komi_core::types::{SearchTerm, Slug};
use tempfile::TempDir;

fn term(s: &str) -> SearchTerm {
    SearchTerm::try_new(s).unwrap()
}

#[test]
fn test_stores_share_one_database() {
    let temp = TempDir::new().unwrap();
    let storage = RedbStorage::open(temp.path()).unwrap();

    let mut history = HistoryStore::load(storage.clone(), 5).unwrap();
    let last_read = LastReadStore::new(storage.clone());
    let counter = ReadCounter::new(storage.clone(), 7);
    let mut profile = ProfileStore::load(storage).unwrap();

    history.record_search(term("naruto")).unwrap();
    last_read
        .set(&LastRead {
            title: "Naruto".to_string(),
            slug: Slug::try_new("naruto").unwrap(),
            chapter: Slug::try_new("chuong-700").unwrap(),
        })
        .unwrap();
    counter.record_open().unwrap();
    profile.learn(1, Interaction::Click).unwrap();

    assert_eq!(history.entries(), &[term("naruto")]);
    assert_eq!(last_read.get().unwrap().map(|l| l.title), Some("Naruto".to_string()));
    assert_eq!(counter.count().unwrap(), 1);
    assert_eq!(profile.profile().viewed_comics, vec![1]);
}

#[test]
fn test_history_survives_restart() {
    let temp = TempDir::new().unwrap();
    {
        let storage = RedbStorage::open(temp.path()).unwrap();
        let mut history = HistoryStore::load(storage, 5).unwrap();
        for t in ["t1", "t2", "t3", "t4", "t5", "t6", "t3"] {
            history.record_search(term(t)).unwrap();
        }
    }

    let storage = RedbStorage::open(temp.path()).unwrap();
    let history = HistoryStore::load(storage, 5).unwrap();

    let entries: Vec<&str> = history.entries().iter().map(|t| t.as_str()).collect();
    assert_eq!(entries, vec!["t3", "t6", "t5", "t4", "t2"]);
}
