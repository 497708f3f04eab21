use crate::id::{IdError, ThreadId};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces thread ids. Implementations must be safe to call concurrently and
/// must never hand out the same id twice.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Result<ThreadId, IdError>;
}

impl<F> IdSource for F
where
    F: Fn() -> Result<ThreadId, IdError> + Send + Sync,
{
    fn next_id(&self) -> Result<ThreadId, IdError> {
        self()
    }
}

/// Monotonic decimal ids, starting from 1.
#[derive(Debug, Default)]
pub struct CounterIdSource {
    count: AtomicU64,
}

impl CounterIdSource {
    pub fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    /// Infallible form of [`IdSource::next_id`].
    pub fn next(&self) -> ThreadId {
        // fetch_add returns the previous value, so the first id is 1.
        let n = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        ThreadId(n.to_string())
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

impl IdSource for CounterIdSource {
    fn next_id(&self) -> Result<ThreadId, IdError> {
        Ok(self.next())
    }
}

/// Random v4 UUID ids, for processes that merge records from several engines.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> Result<ThreadId, IdError> {
        Ok(ThreadId(Uuid::new_v4().to_string()))
    }
}
