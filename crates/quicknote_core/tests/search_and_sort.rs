mod common;

use common::SharedMemoryStore;
use chrono::{TimeZone, Utc};
use quicknote_core::{filter_notes, sort_for_display, Note, NoteId, NotePatch, NoteStore};

fn fixture_note(id: &str, title: &str, content: &str, minute: u32) -> Note {
    let mut note = Note::new(Utc.with_ymd_and_hms(2026, 8, 7, 12, minute, 0).unwrap());
    note.id = NoteId::from(id);
    note.title = title.to_string();
    note.content = content.to_string();
    note
}

#[test]
fn blank_search_returns_the_unfiltered_collection() {
    let mut store = NoteStore::open(SharedMemoryStore::default());
    let first = store.create();
    let second = store.create();
    store.edit(
        &first,
        NotePatch {
            title: Some("Groceries".to_string()),
            content: Some("milk".to_string()),
        },
    );
    store.flush();

    for query in ["", "   "] {
        let hits = store.search(query);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, second);
        assert_eq!(hits[1].id, first);
    }
}

#[test]
fn search_matches_title_and_content_independently_ignoring_case() {
    let mut store = NoteStore::open(SharedMemoryStore::default());
    let by_title = store.create();
    let by_content = store.create();
    let neither = store.create();
    store.edit(
        &by_title,
        NotePatch {
            title: Some("Groceries".to_string()),
            ..NotePatch::default()
        },
    );
    store.edit(
        &by_content,
        NotePatch {
            content: Some("remember the GROCERIES run".to_string()),
            ..NotePatch::default()
        },
    );
    store.flush();

    let hits = store.search("gRoCeRiEs");
    let ids: Vec<&NoteId> = hits.iter().map(|n| &n.id).collect();
    assert!(ids.contains(&&by_title));
    assert!(ids.contains(&&by_content));
    assert!(!ids.contains(&&neither));
}

#[test]
fn search_does_not_mutate_or_reorder_the_collection() {
    let mut store = NoteStore::open(SharedMemoryStore::default());
    let first = store.create();
    let second = store.create();

    let _ = store.search("untitled");

    assert_eq!(store.notes()[0].id, second);
    assert_eq!(store.notes()[1].id, first);
}

#[test]
fn sorted_listing_of_search_results_keeps_subsequence_semantics() {
    let mut starred_old = fixture_note("a", "Starred plan", "milk", 1);
    starred_old.starred = true;
    let fresh = fixture_note("b", "Fresh plan", "eggs", 30);
    let unrelated = fixture_note("c", "Other", "nothing", 45);
    let notes = vec![unrelated, fresh, starred_old];

    let sorted = sort_for_display(filter_notes(&notes, "plan"));

    let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn sorted_listing_is_stable_for_equal_keys() {
    let tie_one = fixture_note("a", "Tie", "", 5);
    let tie_two = fixture_note("b", "Tie", "", 5);
    let notes = vec![tie_one, tie_two];

    let sorted = sort_for_display(notes.iter().collect());
    assert_eq!(sorted[0].id.as_str(), "a");
    assert_eq!(sorted[1].id.as_str(), "b");
}

#[test]
fn store_listing_sorts_starred_before_recency() {
    let mut store = NoteStore::open(SharedMemoryStore::default());
    let starred = store.create();
    let updated_later = store.create();
    store.toggle_star(&starred);
    store.edit(
        &updated_later,
        NotePatch {
            content: Some("newest edit".to_string()),
            ..NotePatch::default()
        },
    );
    store.flush();

    let sorted = store.list_sorted();
    assert_eq!(sorted[0].id, starred);
    assert_eq!(sorted[1].id, updated_later);
}
