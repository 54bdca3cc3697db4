mod error;
mod insert;
mod node;
mod resolve;

pub use error::TrieError;
pub use node::{NodeKind, SegmentNode};
