pub mod recorder;
pub mod tracing;
