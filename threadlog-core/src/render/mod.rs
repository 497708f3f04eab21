//! Text rendering of finished thread records.
//!
//! Two layouts are available:
//! - **Terse**: a header line, then one line per entry, for log streams
//! - **Pretty**: a tree per record with annotations and call sites on their
//!   own lines, for terminals
//!
//! Both are pure functions of the record. `Raw` is the record as a JSON line.

mod pretty;
mod terse;

pub use pretty::format_pretty;
pub use terse::format_terse;

use crate::record::ThreadRecord;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Marker cut from the front of file paths in pretty output, unless
/// configured otherwise.
pub const DEFAULT_PATH_MARKER: &str = "/src/";

/// 12-hour wall clock, e.g. `3:04PM`.
pub(crate) const TIME_FORMAT: &str = "%-I:%M%p";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Terse,
    #[default]
    Pretty,
    Raw,
}

/// Render `record` in `mode`. A raw record that fails to serialize renders
/// as nothing and is reported through `tracing`.
pub fn render(record: &ThreadRecord, mode: RenderMode, path_marker: &str) -> String {
    match mode {
        RenderMode::Terse => format_terse(record),
        RenderMode::Pretty => format_pretty(record, path_marker),
        RenderMode::Raw => match serde_json::to_string(record) {
            Ok(line) => line + "\n",
            Err(err) => {
                warn!(thread_id = %record.id, error = %err, "record serialization failed");
                String::new()
            }
        },
    }
}

impl ThreadRecord {
    pub fn format_terse(&self) -> String {
        format_terse(self)
    }

    pub fn format_pretty(&self) -> String {
        format_pretty(self, DEFAULT_PATH_MARKER)
    }
}
