//! Record rendering from a stream.
//!
//! Observers that ship records as JSON lines (raw mode) can be piped through
//! `threadlog render` to read them as terse or pretty text. Lines that are
//! not records pass through untouched.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use threadlog_core::render::render;
use threadlog_core::{RenderMode, ThreadRecord};

pub fn run_render(mode: RenderMode, path_marker: &str) -> Result<()> {
    let stdin = io::stdin();
    let reader = stdin.lock();
    let mut stdout = io::stdout().lock();

    for line in reader.lines() {
        let line = line?;

        if matches!(mode, RenderMode::Raw) {
            writeln!(stdout, "{line}")?;
            continue;
        }

        let Ok(record) = serde_json::from_str::<ThreadRecord>(&line) else {
            // Preserve non-record lines as-is for troubleshooting.
            writeln!(stdout, "{line}")?;
            continue;
        };

        write!(stdout, "{}", render(&record, mode, path_marker))?;
    }

    Ok(())
}
