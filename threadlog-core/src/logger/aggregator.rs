use crate::id::ThreadId;
use crate::logger::Logger;
use crate::record::{ThreadKind, ThreadRecord};
use chrono::Local;
use std::time::Duration;
use tracing::{debug, trace};

/// Finalization
impl Logger {
    /// Finish a request: drain its entries and hand the record to observers.
    ///
    /// Must be called at most once per id. A second call finds nothing
    /// buffered and reports an empty request with the default status.
    pub fn end(
        &self,
        thread_id: &ThreadId,
        address: &str,
        method: &str,
        route: &str,
        duration: Duration,
    ) {
        self.finalize(
            ThreadKind::Request,
            thread_id,
            address,
            method,
            route,
            duration,
        );
    }

    pub(crate) fn finalize(
        &self,
        kind: ThreadKind,
        thread_id: &ThreadId,
        address: &str,
        method: &str,
        route: &str,
        duration: Duration,
    ) {
        let entries = self.store.drain(thread_id);

        // A session has no status or duration of its own, so without
        // entries there is nothing to report.
        if kind == ThreadKind::Session && entries.is_empty() {
            trace!(thread_id = %thread_id, "empty session suppressed");
            return;
        }

        let status = match kind {
            ThreadKind::Request => Some(self.store.take_status(thread_id)),
            ThreadKind::Session => None,
        };

        let record = ThreadRecord {
            date: Local::now(),
            kind,
            id: thread_id.clone(),
            address: address.to_string(),
            method: method.to_string(),
            route: route.to_string(),
            status,
            duration,
            entries,
        };

        debug!(
            thread_id = %thread_id,
            kind = %kind,
            entries = record.entries.len(),
            errors = record.errors().count(),
            "thread finalized"
        );

        if record.has_errors() {
            if let Some(on_error) = self.on_error.load_full() {
                (on_error.0)(record.errors_only());
            }
        }

        if let Some(on_log) = self.on_log.load_full() {
            (on_log.0)(record);
        }
    }
}
