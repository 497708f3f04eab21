mod error;
mod source;
mod thread_id;

pub use error::*;
pub use source::*;
pub use thread_id::*;
