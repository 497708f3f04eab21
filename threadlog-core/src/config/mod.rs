mod error;

pub use error::ConfigError;

use crate::render::{DEFAULT_PATH_MARKER, RenderMode};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Engine settings, read from an HCL file:
///
/// ```text
/// debug       = true
/// runtime     = true
/// path_marker = "/myservice/"
/// render      = "terse"
/// ```
///
/// Every attribute is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Keep Debug entries instead of dropping them at creation.
    pub debug: bool,

    /// Capture the call site of every entry.
    pub runtime: bool,

    /// Prefix cut from file paths in pretty output.
    pub path_marker: String,

    pub render: RenderMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debug: false,
            runtime: false,
            path_marker: DEFAULT_PATH_MARKER.to_string(),
            render: RenderMode::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config: EngineConfig = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path_marker.contains('\n') {
            return Err(ConfigError::InvalidValue {
                field: "path_marker",
                reason: "must be a single line".to_string(),
            });
        }
        Ok(())
    }
}
