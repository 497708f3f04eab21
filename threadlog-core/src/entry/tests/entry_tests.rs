use crate::entry::{EntryCell, EntryHandle, Level, Value, normalize_message};
use crate::id::ThreadId;
use std::io;
use std::sync::Arc;

fn live(message: &str) -> EntryHandle {
    EntryHandle::Live(Arc::new(EntryCell::new(
        ThreadId::from("7"),
        Level::Info,
        message.to_string(),
        None,
    )))
}

#[test]
fn normalize_adds_period_and_capitalizes() {
    assert_eq!(normalize_message("failed".into()), "Failed.");
}

#[test]
fn normalize_does_not_duplicate_period() {
    assert_eq!(normalize_message("already done.".into()), "Already done.");
}

#[test]
fn normalize_handles_empty_and_non_ascii() {
    assert_eq!(normalize_message(String::new()), ".");
    assert_eq!(normalize_message("élan vital".into()), "Élan vital.");
    assert_eq!(normalize_message("42 rows".into()), "42 rows.");
}

#[test]
fn normalize_only_touches_first_line_start() {
    assert_eq!(
        normalize_message("first line\nsecond line".into()),
        "First line\nsecond line."
    );
}

#[test]
fn data_appends_in_order() {
    // Arrange
    let handle = live("Saved.");

    // Act
    handle
        .data("user", "ada")
        .data("attempts", 3)
        .data("cached", false);

    // Assert
    let entry = handle.snapshot().unwrap();
    let keys: Vec<_> = entry.key_vals.iter().map(|kv| kv.key.as_str()).collect();
    assert_eq!(keys, vec!["user", "attempts", "cached"]);
    assert_eq!(entry.get("attempts"), Some(&Value::Int(3)));
}

#[test]
fn data_multi_appends_every_pair() {
    let handle = live("Saved.");

    handle.data_multi([("a", 1), ("b", 2)]);

    let entry = handle.snapshot().unwrap();
    assert_eq!(entry.key_vals.len(), 2);
    assert_eq!(entry.get("b"), Some(&Value::Int(2)));
}

#[test]
fn void_handle_swallows_annotations() {
    let handle = EntryHandle::Void;

    handle.data("key", "value").data_multi([("x", 1u8)]);

    assert!(handle.is_void());
    assert!(handle.snapshot().is_none());
}

#[test]
fn value_quoting_follows_variant() {
    let err = io::Error::new(io::ErrorKind::NotFound, "missing file");

    assert!(Value::from("text").is_quoted());
    assert!(Value::error(&err).is_quoted());
    assert!(!Value::from(12u16).is_quoted());
    assert!(!Value::from(1.5).is_quoted());
    assert!(!Value::from(true).is_quoted());
    assert!(!Value::display(ThreadId::from("9")).is_quoted());
    assert_eq!(Value::error(&err).to_string(), "missing file");
}
