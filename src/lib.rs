//! Segment-trie path router: literal, `:param`, optional (`?`) and
//! single-segment wildcard (`*`) patterns, with per-HTTP-method dispatch.

pub mod method;
pub mod path;
pub mod router;
pub mod trie;
pub mod types;

mod method_router;

pub use method::HttpMethod;
pub use method_router::MethodRouter;
pub use path::{PathError, PathSplitter};
pub use router::{Router, RouterError, RouterResult};
pub use trie::TrieError;
pub use types::{RouteMatch, RouteParams};
