use crate::entry::Level;
use crate::id::IdError;
use crate::logger::{Logger, Site};
use crate::record::ThreadKind;
use std::fmt;
use std::time::Duration;

/// Single-entry sessions
impl Logger {
    /// Log one Info message as its own unnamed session.
    #[track_caller]
    pub fn once(&self, message: impl Into<String>) {
        let site = Site::caller();
        let id = self.new_id();
        self.log_entry(Level::Info, &id, message.into(), site);
        self.finalize(ThreadKind::Session, &id, "", "", "", Duration::ZERO);
    }

    #[track_caller]
    pub fn once_fmt(&self, args: fmt::Arguments<'_>) {
        self.once(args.to_string());
    }

    /// Log `err` as its own session, flush it to the observers, then exit
    /// the process with status 1.
    #[track_caller]
    pub fn fatal(&self, err: impl fmt::Display) -> ! {
        let site = Site::caller();
        let id = self.new_id();
        self.log_entry(Level::Error, &id, err.to_string(), site);
        self.finalize(ThreadKind::Session, &id, "", "", "", Duration::ZERO);
        std::process::exit(1)
    }

    pub(crate) fn report_id_failure(&self, err: &IdError) {
        let id = self.ids.next();
        self.log_entry(
            Level::Error,
            &id,
            format!("id generation failed: {err}"),
            Site::Internal,
        );
        self.finalize(ThreadKind::Session, &id, "", "", "", Duration::ZERO);
    }
}
