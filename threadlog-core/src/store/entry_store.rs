use crate::entry::{Entry, EntryCell, Level};
use crate::id::ThreadId;
use dashmap::DashMap;
use std::sync::Arc;

/// Status reported for a request that never set one.
pub const DEFAULT_STATUS: u16 = 200;

/// Concurrent buffer of entries keyed by thread id, plus the status side table.
///
/// Appends and drains for the same thread id serialize on the map's shard
/// lock, so an append is never lost between a read and a write-back. An
/// append racing with a drain lands either in the drained sequence or in a
/// fresh one, never in both.
#[derive(Debug, Default)]
pub struct EntryStore {
    threads: DashMap<ThreadId, Vec<Arc<EntryCell>>>,
    statuses: DashMap<ThreadId, u16>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self {
            threads: DashMap::new(),
            statuses: DashMap::new(),
        }
    }

    pub(crate) fn insert(&self, thread_id: &ThreadId, entry: Arc<EntryCell>) {
        self.threads
            .entry(thread_id.clone())
            .or_default()
            .push(entry);
    }

    /// Remove and return everything buffered for `thread_id`.
    pub fn drain(&self, thread_id: &ThreadId) -> Vec<Entry> {
        // Freeze outside the shard lock; the cells are ours once removed.
        let Some((_, cells)) = self.threads.remove(thread_id) else {
            return Vec::new();
        };

        cells.iter().map(|cell| cell.freeze()).collect()
    }

    /// Non-destructive copy of what is buffered for `thread_id`.
    pub fn snapshot(&self, thread_id: &ThreadId) -> Vec<Entry> {
        self.threads
            .get(thread_id)
            .map(|cells| cells.iter().map(|cell| cell.freeze()).collect())
            .unwrap_or_default()
    }

    pub fn seen_error(&self, thread_id: &ThreadId) -> bool {
        self.threads
            .get(thread_id)
            .map(|cells| cells.iter().any(|cell| cell.level() == Level::Error))
            .unwrap_or(false)
    }

    pub fn set_status(&self, request_id: &ThreadId, code: u16) {
        self.statuses.insert(request_id.clone(), code);
    }

    pub fn status(&self, request_id: &ThreadId) -> u16 {
        self.statuses
            .get(request_id)
            .map(|code| *code)
            .unwrap_or(DEFAULT_STATUS)
    }

    /// Read the status for a finishing request and forget it.
    pub(crate) fn take_status(&self, request_id: &ThreadId) -> u16 {
        self.statuses
            .remove(request_id)
            .map(|(_, code)| code)
            .unwrap_or(DEFAULT_STATUS)
    }

    /// Number of thread ids with buffered entries.
    pub fn open_threads(&self) -> usize {
        self.threads.len()
    }

    /// Number of statuses recorded for requests that have not finished.
    pub fn pending_statuses(&self) -> usize {
        self.statuses.len()
    }
}
