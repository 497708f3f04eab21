use crate::entry::{CallSite, EntryHandle, Level};
use crate::id::ThreadId;
use crate::logger::Logger;
use std::fmt;
use std::panic::Location;

/// Where an entry is being created from, resolved only when call-site
/// capture is on.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Site {
    /// Caller of a `#[track_caller]` public method.
    Caller(&'static Location<'static>),
    /// Expansion site of one of the logging macros.
    Macro(MacroSite),
    /// Raised by the engine itself; no user call site to report.
    Internal,
}

impl Site {
    #[track_caller]
    pub(crate) fn caller() -> Self {
        Site::Caller(Location::caller())
    }

    pub(crate) fn resolve(self) -> Option<CallSite> {
        match self {
            Site::Caller(location) => Some(CallSite::new("", location.file(), location.line())),
            Site::Macro(site) => Some(CallSite::new(site.function(), site.file, site.line)),
            Site::Internal => None,
        }
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub struct MacroSite {
    marker: &'static str,
    file: &'static str,
    line: u32,
}

impl MacroSite {
    /// `marker` is the type name of a function item declared inside the
    /// calling function, e.g. `app::orders::checkout::marker`.
    pub fn new(marker: &'static str, file: &'static str, line: u32) -> Self {
        Self { marker, file, line }
    }

    /// Name of the function that expanded the macro. Closures report the
    /// function they are defined in.
    fn function(&self) -> &'static str {
        let mut path = self
            .marker
            .rsplit_once("::")
            .map_or(self.marker, |(parent, _)| parent);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        path.rsplit("::").next().unwrap_or(path)
    }
}

/// Something the `log_*!` macros can write to: a [`ThreadRef`] or a
/// [`crate::Session`].
pub trait LogTarget {
    #[doc(hidden)]
    fn log_at(&self, level: Level, args: fmt::Arguments<'_>, site: MacroSite) -> EntryHandle;
}

/// A logger bound to one thread id.
#[derive(Debug, Clone, Copy)]
pub struct ThreadRef<'a> {
    logger: &'a Logger,
    thread_id: &'a ThreadId,
}

impl<'a> ThreadRef<'a> {
    pub(crate) fn new(logger: &'a Logger, thread_id: &'a ThreadId) -> Self {
        Self { logger, thread_id }
    }

    pub fn id(&self) -> &ThreadId {
        self.thread_id
    }
}

impl LogTarget for ThreadRef<'_> {
    fn log_at(&self, level: Level, args: fmt::Arguments<'_>, site: MacroSite) -> EntryHandle {
        self.logger
            .log_entry(level, self.thread_id, args.to_string(), Site::Macro(site))
    }
}

impl<T: LogTarget + ?Sized> LogTarget for &T {
    fn log_at(&self, level: Level, args: fmt::Arguments<'_>, site: MacroSite) -> EntryHandle {
        (**self).log_at(level, args, site)
    }
}
