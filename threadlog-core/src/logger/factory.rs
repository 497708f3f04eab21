use crate::entry::{EntryCell, EntryHandle, Level, normalize_message};
use crate::id::ThreadId;
use crate::logger::{Logger, Site, ThreadRef};
use std::fmt;
use std::sync::Arc;

/// Entry creation
impl Logger {
    #[track_caller]
    pub fn info(&self, thread_id: &ThreadId, message: impl Into<String>) -> EntryHandle {
        self.log_entry(Level::Info, thread_id, message.into(), Site::caller())
    }

    #[track_caller]
    pub fn error(&self, thread_id: &ThreadId, message: impl Into<String>) -> EntryHandle {
        self.log_entry(Level::Error, thread_id, message.into(), Site::caller())
    }

    /// Dropped without touching the store while debug entries are disabled.
    #[track_caller]
    pub fn debug(&self, thread_id: &ThreadId, message: impl Into<String>) -> EntryHandle {
        self.log_entry(Level::Debug, thread_id, message.into(), Site::caller())
    }

    /// One Error entry summarizing a batch of failures.
    ///
    /// Errors are grouped by their text; each distinct text becomes a
    /// `key = "(N instances) <text>"` annotation, in order of first
    /// appearance. Absent errors are filtered by the caller, e.g. with
    /// `.flatten()` over `Option`s or `.filter_map(Result::err)`.
    #[track_caller]
    pub fn error_multi<I, E>(
        &self,
        thread_id: &ThreadId,
        message: impl Into<String>,
        key: &str,
        errors: I,
    ) -> EntryHandle
    where
        I: IntoIterator<Item = E>,
        E: fmt::Display,
    {
        let site = Site::caller();

        let mut counts: Vec<(String, usize)> = Vec::new();
        for err in errors {
            let text = err.to_string();
            match counts.iter_mut().find(|(seen, _)| *seen == text) {
                Some((_, n)) => *n += 1,
                None => counts.push((text, 1)),
            }
        }

        let entry = self.log_entry(Level::Error, thread_id, message.into(), site);
        for (text, n) in counts {
            entry.data(key, format!("({n} instances) {text}"));
        }
        entry
    }

    /// Bind `thread_id` for use with the `log_*!` macros.
    pub fn thread<'a>(&'a self, thread_id: &'a ThreadId) -> ThreadRef<'a> {
        ThreadRef::new(self, thread_id)
    }

    pub(crate) fn log_entry(
        &self,
        level: Level,
        thread_id: &ThreadId,
        message: String,
        site: Site,
    ) -> EntryHandle {
        if level == Level::Debug && !self.debug_enabled() {
            return EntryHandle::Void;
        }

        let message = normalize_message(message);
        let call_site = if self.runtime_enabled() {
            site.resolve()
        } else {
            None
        };

        let cell = Arc::new(EntryCell::new(thread_id.clone(), level, message, call_site));
        self.store.insert(thread_id, Arc::clone(&cell));

        EntryHandle::Live(cell)
    }
}
