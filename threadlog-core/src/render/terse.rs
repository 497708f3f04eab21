use crate::entry::Entry;
use crate::record::{ThreadKind, ThreadRecord};
use crate::render::TIME_FORMAT;
use std::fmt::Write;

/// `<time> <status> <n>ms <route>` (or `<time> Session: <name>`), then
/// `[<level>] <message> "<key>"="<value>" ...` per entry.
pub fn format_terse(record: &ThreadRecord) -> String {
    let time = record.date.format(TIME_FORMAT);

    let mut out = match record.kind {
        ThreadKind::Request => format!(
            "{} {} {}ms {}\n",
            time,
            record.status.unwrap_or_default(),
            record.duration.as_millis(),
            record.route
        ),
        ThreadKind::Session => format!("{} Session: {}\n", time, record.route),
    };

    for entry in &record.entries {
        write_entry(&mut out, entry);
    }

    out
}

fn write_entry(out: &mut String, entry: &Entry) {
    let _ = write!(out, "[{}] {}", entry.level, entry.message);

    for kv in &entry.key_vals {
        let _ = write!(out, " {:?}={:?}", kv.key, kv.value.to_string());
    }

    out.push('\n');
}
