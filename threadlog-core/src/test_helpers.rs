use crate::logger::{Logger, LoggerBuilder, StatusSink};
use crate::record::ThreadRecord;
use std::sync::{Arc, Mutex};

/// Collects every record an observer receives.
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
}

/// Logger wired to a pair of recorders: (logger, on_log, on_error).
pub fn recorded(builder: LoggerBuilder) -> (Logger, Recorder, Recorder) {
    let logs = Recorder::default();
    let errors = Recorder::default();

    let on_log = logs.clone();
    let on_error = errors.clone();
    let logger = builder
        .on_log(move |record| on_log.push(record))
        .on_error(move |record| on_error.push(record))
        .build();

    (logger, logs, errors)
}

#[derive(Debug, Default)]
pub struct FakeResponse {
    pub codes: Vec<u16>,
}

impl StatusSink for FakeResponse {
    fn set_status(&mut self, code: u16) {
        self.codes.push(code);
    }
}
