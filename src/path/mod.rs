mod error;
mod split;

pub use error::PathError;
pub use split::{DEFAULT_DIVIDERS, PathSplitter};
