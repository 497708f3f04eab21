mod handle;
mod level;
mod model;
mod normalize;
mod value;

pub use handle::*;
pub use level::*;
pub use model::*;
pub(crate) use normalize::normalize_message;
pub use value::*;
