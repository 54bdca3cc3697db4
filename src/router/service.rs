use smallvec::SmallVec;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use super::RouterResult;
use crate::path::PathSplitter;
use crate::trie::SegmentNode;
use crate::types::RouteMatch;

/// A single route table: one segment trie plus the splitter that feeds it.
///
/// Registration (`on`, `group`) takes `&mut self`; resolution (`find`) never
/// mutates, so a fully registered table can be shared across readers.
#[derive(Debug)]
pub struct Router<H> {
    root: SegmentNode<H>,
    splitter: PathSplitter,
    group_prefix: Vec<String>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    /// Creates a table splitting on the default dividers (`/` and `-`).
    pub fn new() -> Self {
        Self {
            root: SegmentNode::root(),
            splitter: PathSplitter::default(),
            group_prefix: Vec::new(),
        }
    }

    /// Creates a table with a custom divider set. Fails with a configuration
    /// error if a divider carries route syntax (`:` or `?`).
    pub fn with_dividers(dividers: &[char]) -> RouterResult<Self> {
        Ok(Self {
            root: SegmentNode::root(),
            splitter: PathSplitter::new(dividers)?,
            group_prefix: Vec::new(),
        })
    }

    /// Resolves `path` to its most specific handler and bound parameters.
    ///
    /// Any query-string suffix is ignored. An unmatched path is `None`,
    /// never an error.
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        tracing::event!(tracing::Level::TRACE, operation = "find", path = %path);

        let url_path = PathSplitter::strip_query(path);
        let segments = self.splitter.split(url_path);

        self.root
            .resolve(&segments)
            .map(|(handler, params)| RouteMatch { handler, params })
    }
}

impl<H: Clone> Router<H> {
    /// Registers `handler` under `path`, prefixed by any active group scope.
    pub fn on(&mut self, path: &str, handler: H) -> RouterResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "on", path = %path);

        let segments = self.splitter.split(path);
        let mut full: SmallVec<[&str; 8]> =
            self.group_prefix.iter().map(String::as_str).collect();
        full.extend(segments);

        self.root.add(&full, handler, path)?;
        Ok(())
    }

    /// Registers a batch of routes under a shared prefix. Nestable; the
    /// prefix is restored on every exit path, including unwinds.
    pub fn group<F>(&mut self, prefix: &str, setup: F) -> RouterResult<()>
    where
        F: FnOnce(&mut Self) -> RouterResult<()>,
    {
        let restore_to = self.group_prefix.len();
        let prefix_segments: Vec<String> = self
            .splitter
            .split(prefix)
            .into_iter()
            .map(String::from)
            .collect();
        self.group_prefix.extend(prefix_segments);

        let outcome = catch_unwind(AssertUnwindSafe(|| setup(self)));
        self.group_prefix.truncate(restore_to);

        match outcome {
            Ok(result) => result,
            Err(panic) => resume_unwind(panic),
        }
    }
}

impl<H> fmt::Display for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.render(f, "", true)
    }
}
