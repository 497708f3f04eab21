use crate::entry::{Entry, Value};
use crate::record::{ThreadKind, ThreadRecord};
use crate::render::TIME_FORMAT;
use std::fmt::Write;

const DURATION_WIDTH: usize = 10;
const ADDRESS_WIDTH: usize = 15;

/// Tree layout of a record:
///
/// ```text
///
/// 3:04PM 200       12ms        10.0.0.1 GET /profile
///  │
///  ├─ [Info] Loading profile.
///  │     user = "ada"
///  │  api/profile.rs:42 (profile)
///  │
///  └─ [Error] Cache miss.
/// ```
///
/// File paths lose everything up to and including the first `path_marker`.
pub fn format_pretty(record: &ThreadRecord, path_marker: &str) -> String {
    let time = record.date.format(TIME_FORMAT);

    let mut out = match record.kind {
        ThreadKind::Request => {
            let duration = format!("{}ms", record.duration.as_millis());
            format!(
                "\n{} {} {:>dw$} {:>aw$} {} {}\n",
                time,
                record.status.unwrap_or_default(),
                duration,
                record.address,
                record.method,
                record.route,
                dw = DURATION_WIDTH,
                aw = ADDRESS_WIDTH,
            )
        }
        ThreadKind::Session => format!("\n{} Session: {}\n", time, record.route),
    };

    let last = record.entries.len().saturating_sub(1);
    for (i, entry) in record.entries.iter().enumerate() {
        write_entry(&mut out, entry, i == last, path_marker);
    }

    out
}

fn write_entry(out: &mut String, entry: &Entry, is_last: bool, path_marker: &str) {
    let (branch, stem) = if is_last {
        ("└─", "  ")
    } else {
        ("├─", "│ ")
    };

    // Continuation lines sit under the message, past the branch.
    let message = entry
        .message
        .split('\n')
        .collect::<Vec<_>>()
        .join(&format!("\n {stem}    "));

    out.push_str(" │\n");
    let _ = writeln!(out, " {branch} [{}] {message}", entry.level);

    for kv in &entry.key_vals {
        let _ = writeln!(out, " {stem}    {} = {}", kv.key, quote(&kv.value));
    }

    if let Some(site) = entry.site() {
        let file = trim_path(&site.file, path_marker);
        if site.function.is_empty() {
            let _ = writeln!(out, " {stem} {file}:{}", site.line);
        } else {
            let _ = writeln!(out, " {stem} {file}:{} ({})", site.line, site.function);
        }
    }
}

fn quote(value: &Value) -> String {
    if value.is_quoted() {
        format!("{:?}", value.to_string())
    } else {
        value.to_string()
    }
}

pub(crate) fn trim_path<'a>(file: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return file;
    }
    match file.find(marker) {
        Some(idx) => &file[idx + marker.len()..],
        None => file,
    }
}
