use crate::entry::{EntryHandle, Level};
use crate::id::ThreadId;
use crate::logger::{LogTarget, Logger, MacroSite, Site};
use crate::record::ThreadKind;
use std::fmt;
use std::time::Duration;


/// A named unit of background work, logged under its own thread id.
///
/// Logging after [`Session::end`] is a silent no-op that returns a void
/// entry handle.
#[derive(Debug)]
pub struct Session<'a> {
    logger: &'a Logger,
    name: String,
    id: ThreadId,
    ended: bool,
}

impl Logger {
    pub fn session(&self, name: impl Into<String>) -> Session<'_> {
        Session {
            logger: self,
            name: name.into(),
            id: self.new_id(),
            ended: false,
        }
    }
}

impl Session<'_> {
    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Whether an Error entry is buffered right now. Does not drain.
    pub fn seen_error(&self) -> bool {
        self.logger.store().seen_error(&self.id)
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) -> EntryHandle {
        self.log(Level::Info, message.into(), Site::caller())
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> EntryHandle {
        self.log(Level::Error, message.into(), Site::caller())
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) -> EntryHandle {
        self.log(Level::Debug, message.into(), Site::caller())
    }

    /// Finalize the session. Only the first call has any effect.
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        self.logger.finalize(
            ThreadKind::Session,
            &self.id,
            "",
            "",
            &self.name,
            Duration::ZERO,
        );
    }

    fn log(&self, level: Level, message: String, site: Site) -> EntryHandle {
        if self.ended {
            return EntryHandle::Void;
        }
        self.logger.log_entry(level, &self.id, message, site)
    }
}

impl LogTarget for Session<'_> {
    fn log_at(&self, level: Level, args: fmt::Arguments<'_>, site: MacroSite) -> EntryHandle {
        self.log(level, args.to_string(), Site::Macro(site))
    }
}
