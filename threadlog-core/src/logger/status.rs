use crate::entry::{EntryHandle, Level};
use crate::id::ThreadId;
use crate::logger::{Logger, Site};

/// Minimal response writer: the only thing the engine ever asks of it is to
/// set the status code.
pub trait StatusSink {
    fn set_status(&mut self, code: u16);
}

/// Status helpers. Each writes the sink and remembers the code so the
/// request's record can report it when it ends.
impl Logger {
    pub fn http_status(&self, request_id: &ThreadId, sink: &mut dyn StatusSink, code: u16) {
        sink.set_status(code);
        self.store.set_status(request_id, code);
    }

    /// Record a redirect status. The redirect itself writes the response.
    pub fn redirect(&self, request_id: &ThreadId, code: u16) {
        self.store.set_status(request_id, code);
    }

    #[track_caller]
    pub fn bad_request(
        &self,
        request_id: &ThreadId,
        sink: &mut dyn StatusSink,
        message: impl Into<String>,
    ) -> EntryHandle {
        let site = Site::caller();
        self.http_status(request_id, sink, 400);
        self.log_entry(Level::Error, request_id, message.into(), site)
    }

    pub fn unauthorised(&self, request_id: &ThreadId, sink: &mut dyn StatusSink) {
        self.http_status(request_id, sink, 401);
    }

    pub fn not_found(&self, request_id: &ThreadId, sink: &mut dyn StatusSink) {
        self.http_status(request_id, sink, 404);
    }
}
