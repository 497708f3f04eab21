use crate::entry::{CallSite, Entry, KeyVal, Level, Value};
use crate::id::ThreadId;
use std::sync::{Arc, Mutex, PoisonError};

/// A buffered entry. Everything but the annotations is fixed at creation.
#[derive(Debug)]
pub struct EntryCell {
    thread_id: ThreadId,
    level: Level,
    message: String,
    call_site: Option<CallSite>,
    key_vals: Mutex<Vec<KeyVal>>,
}

impl EntryCell {
    pub(crate) fn new(
        thread_id: ThreadId,
        level: Level,
        message: String,
        call_site: Option<CallSite>,
    ) -> Self {
        Self {
            thread_id,
            level,
            message,
            call_site,
            key_vals: Mutex::new(Vec::new()),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    fn push(&self, kv: KeyVal) {
        self.key_vals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(kv);
    }

    /// Copy the entry out with the annotations appended so far.
    pub(crate) fn freeze(&self) -> Entry {
        let key_vals = self
            .key_vals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        Entry {
            thread_id: self.thread_id.clone(),
            level: self.level,
            message: self.message.clone(),
            call_site: self.call_site.clone(),
            key_vals,
        }
    }
}

/// What the logging methods hand back to the caller.
///
/// `Void` stands in when nothing was recorded (suppressed debug entries,
/// sessions that already ended) so that annotation chains stay harmless.
/// The handle is deliberately not `Clone`: only the code that created an
/// entry gets to annotate it.
#[derive(Debug)]
pub enum EntryHandle {
    Live(Arc<EntryCell>),
    Void,
}

impl EntryHandle {
    pub fn data(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        if let EntryHandle::Live(cell) = self {
            cell.push(KeyVal {
                key: key.into(),
                value: value.into(),
            });
        }
        self
    }

    pub fn data_multi<I, K, V>(&self, pairs: I) -> &Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            self.data(key, value);
        }
        self
    }

    pub fn is_void(&self) -> bool {
        matches!(self, EntryHandle::Void)
    }

    /// Current state of the entry, `None` for a void handle.
    pub fn snapshot(&self) -> Option<Entry> {
        match self {
            EntryHandle::Live(cell) => Some(cell.freeze()),
            EntryHandle::Void => None,
        }
    }
}
