use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdError {
    #[error("id source failed: {0}")]
    Source(String),

    #[error("id source produced an empty id")]
    Empty,
}

impl IdError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }
}
