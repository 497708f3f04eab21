pub mod config;
pub mod entry;
pub mod id;
pub mod logger;
pub mod logging;
pub mod record;
pub mod render;
pub mod session;
pub mod store;

pub use config::{ConfigError, EngineConfig};
pub use entry::{CallSite, Entry, EntryHandle, KeyVal, Level, Value};
pub use id::{CounterIdSource, IdError, IdSource, ThreadId, UuidIdSource};
pub use logger::{
    LogTarget, Logger, LoggerBuilder, MacroSite, StatusSink, ThreadRef, global, install_global,
};
pub use record::{ThreadKind, ThreadRecord};
pub use render::{RenderMode, format_pretty, format_terse};
pub use session::Session;
pub use store::EntryStore;

#[cfg(test)]
pub(crate) mod test_helpers;
