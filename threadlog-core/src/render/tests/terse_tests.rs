use super::{entry, request, session, with_kv, with_site};
use crate::entry::Level;
use crate::render::{RenderMode, format_terse, render};
use pretty_assertions::assert_eq;

#[test]
fn request_header_and_entries() {
    // Arrange
    let record = request(vec![
        with_kv(
            with_kv(entry(Level::Info, "Loading profile."), "user", "ada"),
            "attempt",
            2,
        ),
        entry(Level::Error, "Cache miss."),
    ]);

    // Act
    let out = format_terse(&record);

    // Assert
    assert_eq!(
        out,
        "3:04PM 200 12ms /profile\n\
         [Info] Loading profile. \"user\"=\"ada\" \"attempt\"=\"2\"\n\
         [Error] Cache miss.\n"
    );
}

#[test]
fn session_header() {
    let record = session("reindex", vec![entry(Level::Info, "Started.")]);

    assert_eq!(
        format_terse(&record),
        "3:04PM Session: reindex\n[Info] Started.\n"
    );
}

#[test]
fn call_sites_never_appear() {
    let record = request(vec![with_site(
        entry(Level::Info, "Loaded."),
        "profile",
        "/home/dev/app/src/api/profile.rs",
        42,
    )]);

    let out = format_terse(&record);

    assert!(!out.contains("profile.rs"));
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn raw_mode_is_one_json_line() {
    let record = request(vec![entry(Level::Info, "Loaded.")]);

    let out = render(&record, RenderMode::Raw, "/src/");

    assert!(out.ends_with('\n'));
    assert_eq!(out.lines().count(), 1);
    let parsed: crate::record::ThreadRecord = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(parsed.entries[0].message, "Loaded.");
    assert_eq!(parsed.status, Some(200));
}

#[test]
fn raw_mode_renders_non_finite_values() {
    let record = request(vec![with_kv(entry(Level::Info, "Measured."), "ratio", f64::NAN)]);

    let out = render(&record, RenderMode::Raw, "/src/");

    assert!(out.ends_with('\n'));
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("\"Measured.\""));
}
