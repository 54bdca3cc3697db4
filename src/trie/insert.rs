use smallvec::SmallVec;

use super::TrieError;
use super::node::{NodeKind, SegmentNode, WILDCARD, child_key, is_optional, param_name};

impl<H: Clone> SegmentNode<H> {
    /// Inserts `handler` at the terminal implied by `segments`, creating
    /// children lazily along the way. `pattern` is carried for error context
    /// only.
    pub(crate) fn add(
        &mut self,
        segments: &[&str],
        handler: H,
        pattern: &str,
    ) -> Result<(), TrieError> {
        self.add_at(segments, handler, 0, SmallVec::new(), pattern)
    }

    fn add_at(
        &mut self,
        segments: &[&str],
        handler: H,
        index: usize,
        params: SmallVec<[Box<str>; 4]>,
        pattern: &str,
    ) -> Result<(), TrieError> {
        if index >= segments.len() {
            self.set_handler(handler, pattern)?;
            self.param_names = params;
            return Ok(());
        }

        let next = segments[index];
        let key = child_key(next);

        // An optional next segment makes the current node a terminal too:
        // the shorter path binds the same handler without the optional name.
        if is_optional(next) {
            self.set_handler(handler.clone(), pattern)?;
            self.param_names = params.clone();
        }

        let mut next_params = params;
        if key == WILDCARD && next != WILDCARD {
            next_params.push(Box::from(param_name(next)));
        }

        let child = self
            .children
            .entry(key.to_owned().into_boxed_str())
            .or_insert_with(|| SegmentNode::new(key));

        if key == WILDCARD && next != WILDCARD {
            child.kind = NodeKind::Parametrized;
        }
        if next == WILDCARD {
            child.kind = NodeKind::Wildcard;
        }

        child.add_at(segments, handler, index + 1, next_params, pattern)
    }
}
