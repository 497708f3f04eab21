use crate::entry::{Level, Value};
use crate::id::ThreadId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyVal {
    pub key: String,
    pub value: Value,
}

/// Where an entry was logged from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Name of the calling function without its module path, empty when
    /// unknown.
    #[serde(default)]
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }
}

/// A finalized log entry, as observers see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub thread_id: ThreadId,
    pub level: Level,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_site: Option<CallSite>,
    #[serde(default)]
    pub key_vals: Vec<KeyVal>,
}

impl Entry {
    /// Call site with a usable file path, if any.
    pub fn site(&self) -> Option<&CallSite> {
        self.call_site.as_ref().filter(|site| !site.file.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.key_vals
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| &kv.value)
    }
}
