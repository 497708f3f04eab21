//! The logging engine.
//!
//! A [`Logger`] buffers entries per thread id in its [`EntryStore`] and turns
//! them into one [`ThreadRecord`] when the thread is finalized, either through
//! [`Logger::end`] for requests or [`crate::Session::end`] for sessions.
//!
//! ```
//! use std::time::Duration;
//! use threadlog_core::Logger;
//!
//! let logger = Logger::builder()
//!     .on_log(|record| println!("{}", record.format_terse()))
//!     .build();
//!
//! let id = logger.new_id();
//! logger.info(&id, "loading profile").data("user", "ada");
//! logger.end(&id, "10.0.0.1", "GET", "/profile", Duration::from_millis(12));
//! ```
//!
//! Observers run synchronously on the thread that finalizes. A panicking
//! observer unwinds into that caller.

mod aggregator;
mod factory;
mod macros;
mod oneshot;
mod status;
mod target;

pub use status::StatusSink;
pub use target::{LogTarget, MacroSite, ThreadRef};
pub(crate) use target::Site;

use crate::config::EngineConfig;
use crate::id::{CounterIdSource, IdError, IdSource, ThreadId};
use crate::record::ThreadRecord;
use crate::store::EntryStore;
use arc_swap::ArcSwapOption;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

struct Observer(Box<dyn Fn(ThreadRecord) + Send + Sync>);

impl Observer {
    fn new<F>(f: F) -> Self
    where
        F: Fn(ThreadRecord) + Send + Sync + 'static,
    {
        Observer(Box::new(f))
    }
}

pub struct Logger {
    store: EntryStore,
    ids: CounterIdSource,
    id_source: Option<Box<dyn IdSource>>,
    debug: AtomicBool,
    runtime: AtomicBool,
    on_log: ArcSwapOption<Observer>,
    on_error: ArcSwapOption<Observer>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("store", &self.store)
            .field("ids", &self.ids)
            .field("custom_id_source", &self.id_source.is_some())
            .field("debug", &self.debug_enabled())
            .field("runtime", &self.runtime_enabled())
            .field("on_log", &self.on_log.load().is_some())
            .field("on_error", &self.on_error.load().is_some())
            .finish()
    }
}

impl Logger {
    /// Engine with debug entries and call-site capture off and no observers.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }
}

/// Runtime toggles. They only affect entries created after the call.
impl Logger {
    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    pub fn set_runtime(&self, enabled: bool) {
        self.runtime.store(enabled, Ordering::Relaxed);
    }

    pub fn runtime_enabled(&self) -> bool {
        self.runtime.load(Ordering::Relaxed)
    }
}

/// Observer registration
impl Logger {
    pub fn set_on_log<F>(&self, f: F)
    where
        F: Fn(ThreadRecord) + Send + Sync + 'static,
    {
        self.on_log.store(Some(Arc::new(Observer::new(f))));
    }

    pub fn clear_on_log(&self) {
        self.on_log.store(None);
    }

    pub fn set_on_error<F>(&self, f: F)
    where
        F: Fn(ThreadRecord) + Send + Sync + 'static,
    {
        self.on_error.store(Some(Arc::new(Observer::new(f))));
    }

    pub fn clear_on_error(&self) {
        self.on_error.store(None);
    }
}

/// Id generation
impl Logger {
    /// Allocate a thread id for a new request or session.
    ///
    /// With a custom [`IdSource`] installed, a failing source falls back to
    /// the built-in counter and the failure is reported as a one-entry
    /// session so observers see it.
    pub fn new_id(&self) -> ThreadId {
        let Some(source) = &self.id_source else {
            return self.ids.next();
        };

        let result = source.next_id().and_then(|id| {
            if id.as_str().is_empty() {
                Err(IdError::Empty)
            } else {
                Ok(id)
            }
        });

        match result {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "id source failed, using counter id");
                self.report_id_failure(&err);
                self.ids.next()
            }
        }
    }
}

#[derive(Default)]
pub struct LoggerBuilder {
    debug: bool,
    runtime: bool,
    id_source: Option<Box<dyn IdSource>>,
    on_log: Option<Observer>,
    on_error: Option<Observer>,
}

impl LoggerBuilder {
    pub fn config(mut self, config: &EngineConfig) -> Self {
        self.debug = config.debug;
        self.runtime = config.runtime;
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn runtime(mut self, enabled: bool) -> Self {
        self.runtime = enabled;
        self
    }

    pub fn id_source(mut self, source: impl IdSource + 'static) -> Self {
        self.id_source = Some(Box::new(source));
        self
    }

    pub fn on_log<F>(mut self, f: F) -> Self
    where
        F: Fn(ThreadRecord) + Send + Sync + 'static,
    {
        self.on_log = Some(Observer::new(f));
        self
    }

    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(ThreadRecord) + Send + Sync + 'static,
    {
        self.on_error = Some(Observer::new(f));
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            store: EntryStore::new(),
            ids: CounterIdSource::new(),
            id_source: self.id_source,
            debug: AtomicBool::new(self.debug),
            runtime: AtomicBool::new(self.runtime),
            on_log: ArcSwapOption::new(self.on_log.map(Arc::new)),
            on_error: ArcSwapOption::new(self.on_error.map(Arc::new)),
        }
    }
}

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Install the process-wide logger returned by [`global`].
///
/// Fails, handing the logger back, once the global has been installed or
/// already used.
pub fn install_global(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// Process-wide logger, built with defaults on first use unless
/// [`install_global`] ran first.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}
