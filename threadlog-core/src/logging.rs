use crate::render::RenderMode;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostic logging with JSON formatting and environment-based filtering.
///
/// This only covers the engine's own `tracing` output (finalization, id
/// fallbacks). Aggregated thread records go to the observers registered on a
/// [`crate::Logger`], never through here.
///
/// - Uses `RUST_LOG` for filtering (defaults to "info" if not set)
/// - Flattens event fields for cleaner log output
pub fn init_logging() {
    fmt()
        .with_env_filter(default_filter())
        .json()
        .flatten_event(true)
        .with_writer(io::stderr)
        .init();
}

/// Human readable variant of [`init_logging`], for interactive use.
pub fn init_pretty_logging() {
    fmt()
        .with_env_filter(default_filter())
        .with_writer(io::stderr)
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn default_render_mode() -> RenderMode {
    if io::stdout().is_terminal() {
        RenderMode::Pretty
    } else {
        RenderMode::Terse
    }
}
