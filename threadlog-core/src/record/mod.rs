use crate::entry::{Entry, Level};
use crate::id::ThreadId;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadKind {
    Request,
    Session,
}

impl ThreadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadKind::Request => "request",
            ThreadKind::Session => "session",
        }
    }
}

impl fmt::Display for ThreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finished request or session, handed to observers by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub date: DateTime<Local>,
    pub kind: ThreadKind,
    pub id: ThreadId,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub method: String,

    /// Request route, or the session name.
    #[serde(default)]
    pub route: String,

    /// HTTP status, requests only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(default)]
    pub duration: Duration,

    pub entries: Vec<Entry>,
}

impl ThreadRecord {
    pub fn errors(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.level == Level::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Copy of this record holding only its Error entries.
    pub fn errors_only(&self) -> ThreadRecord {
        ThreadRecord {
            date: self.date,
            kind: self.kind,
            id: self.id.clone(),
            address: self.address.clone(),
            method: self.method.clone(),
            route: self.route.clone(),
            status: self.status,
            duration: self.duration,
            entries: self.errors().cloned().collect(),
        }
    }
}
