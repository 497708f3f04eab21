use crate::entry::{EntryCell, Level};
use crate::id::ThreadId;
use crate::store::{DEFAULT_STATUS, EntryStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn cell(thread_id: &ThreadId, level: Level, message: &str) -> Arc<EntryCell> {
    Arc::new(EntryCell::new(
        thread_id.clone(),
        level,
        message.to_string(),
        None,
    ))
}

#[test]
fn drain_returns_entries_in_insert_order() {
    // Arrange
    let store = EntryStore::new();
    let id = ThreadId::from("1");
    store.insert(&id, cell(&id, Level::Info, "One."));
    store.insert(&id, cell(&id, Level::Error, "Two."));

    // Act
    let drained = store.drain(&id);

    // Assert
    let messages: Vec<_> = drained.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["One.", "Two."]);
    assert_eq!(store.open_threads(), 0);
}

#[test]
fn drain_of_unknown_thread_is_empty() {
    let store = EntryStore::new();

    assert!(store.drain(&ThreadId::from("missing")).is_empty());
}

#[test]
fn second_drain_starts_a_fresh_sequence() {
    let store = EntryStore::new();
    let id = ThreadId::from("1");
    store.insert(&id, cell(&id, Level::Info, "Before."));

    assert_eq!(store.drain(&id).len(), 1);
    store.insert(&id, cell(&id, Level::Info, "After."));

    let drained = store.drain(&id);
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].message, "After.");
}

#[test]
fn threads_are_isolated() {
    let store = EntryStore::new();
    let a = ThreadId::from("a");
    let b = ThreadId::from("b");
    store.insert(&a, cell(&a, Level::Info, "A."));
    store.insert(&b, cell(&b, Level::Info, "B."));

    assert_eq!(store.drain(&a).len(), 1);
    assert_eq!(store.snapshot(&b).len(), 1);
    assert_eq!(store.open_threads(), 1);
}

#[test]
fn snapshot_and_seen_error_do_not_drain() {
    let store = EntryStore::new();
    let id = ThreadId::from("1");
    store.insert(&id, cell(&id, Level::Info, "Fine."));
    assert!(!store.seen_error(&id));

    store.insert(&id, cell(&id, Level::Error, "Broken."));

    assert!(store.seen_error(&id));
    assert_eq!(store.snapshot(&id).len(), 2);
    assert_eq!(store.drain(&id).len(), 2);
    assert!(!store.seen_error(&id));
}

#[test]
fn concurrent_inserts_to_one_thread_are_not_lost() {
    // Arrange
    let store = EntryStore::new();
    let id = ThreadId::from("shared");
    let workers = 8;
    let per_worker = 500;

    // Act
    thread::scope(|s| {
        for w in 0..workers {
            let store = &store;
            let id = &id;
            s.spawn(move || {
                for i in 0..per_worker {
                    store.insert(id, cell(id, Level::Info, &format!("{w}-{i}")));
                }
            });
        }
    });

    // Assert
    let drained = store.drain(&id);
    let unique: HashSet<_> = drained.iter().map(|e| e.message.clone()).collect();
    assert_eq!(drained.len(), workers * per_worker);
    assert_eq!(unique.len(), workers * per_worker);
}

#[test]
fn status_defaults_and_last_write_wins() {
    let store = EntryStore::new();
    let id = ThreadId::from("req");

    assert_eq!(store.status(&id), DEFAULT_STATUS);

    store.set_status(&id, 404);
    store.set_status(&id, 301);

    assert_eq!(store.status(&id), 301);
}

#[test]
fn take_status_prunes_the_side_table() {
    let store = EntryStore::new();
    let id = ThreadId::from("req");
    store.set_status(&id, 500);

    assert_eq!(store.take_status(&id), 500);
    assert_eq!(store.pending_statuses(), 0);
    assert_eq!(store.take_status(&id), DEFAULT_STATUS);
}

#[test]
fn statuses_do_not_collide_with_entries() {
    let store = EntryStore::new();
    let id = ThreadId::from("req");
    store.set_status(&id, 418);

    assert!(store.drain(&id).is_empty());
    assert_eq!(store.status(&id), 418);
}
