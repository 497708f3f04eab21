use std::sync::{Arc, Mutex};
use threadlog_core::{Logger, LoggerBuilder, ThreadRecord};

/// Shared sink for the records an observer receives.
#[derive(Clone, Default)]
pub struct Recorder {
    records: Arc<Mutex<Vec<ThreadRecord>>>,
}

impl Recorder {
    pub fn push(&self, record: ThreadRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn take(&self) -> Vec<ThreadRecord> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Recorded {
    pub logger: Logger,
    pub logs: Recorder,
    pub errors: Recorder,
}

pub fn recorded(builder: LoggerBuilder) -> Recorded {
    let logs = Recorder::default();
    let errors = Recorder::default();

    let on_log = logs.clone();
    let on_error = errors.clone();

    Recorded {
        logger: builder
            .on_log(move |record| on_log.push(record))
            .on_error(move |record| on_error.push(record))
            .build(),
        logs,
        errors,
    }
}
