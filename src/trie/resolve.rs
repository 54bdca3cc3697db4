use smallvec::SmallVec;

use super::node::{NodeKind, SegmentNode, WILDCARD};
use crate::types::RouteParams;

type ParamValues<'p> = SmallVec<[&'p str; 4]>;

/// Deferred wildcard alternative recorded when a literal child is preferred
/// at an ambiguous step. A single slot suffices: the grammar has no
/// multi-segment wildcards, so at most one pending alternative matters.
struct Potential<'n, 'p, H> {
    node: &'n SegmentNode<H>,
    params: ParamValues<'p>,
    index: usize,
}

impl<H> SegmentNode<H> {
    /// Walks the trie along `segments`; literal children win over wildcard
    /// siblings at every step, with a single-point backtrack when the
    /// literal-preferring path dead-ends without a handler.
    pub(crate) fn resolve<'n>(&'n self, segments: &[&str]) -> Option<(&'n H, RouteParams)> {
        self.resolve_at(segments, SmallVec::new(), 0, None)
    }

    fn resolve_at<'n, 'p>(
        &'n self,
        segments: &[&'p str],
        params: ParamValues<'p>,
        index: usize,
        mut potential: Option<Potential<'n, 'p, H>>,
    ) -> Option<(&'n H, RouteParams)> {
        let mut values = params;
        if self.kind == NodeKind::Parametrized {
            // bind the segment that led into this node
            values.push(segments[index - 1]);
        }

        if index == segments.len() {
            return match &self.handler {
                Some(handler) => {
                    let bound: RouteParams = self
                        .param_names
                        .iter()
                        .zip(values.iter())
                        .map(|(name, value)| (name.to_string(), (*value).to_string()))
                        .collect();
                    Some((handler, bound))
                }
                None => match potential {
                    Some(p) => p.node.resolve_at(segments, p.params, p.index + 1, None),
                    None => None,
                },
            };
        }

        let current = segments[index];
        let mut child = self.children.get(current);
        let wildcard_child = self.children.get(WILDCARD);

        // With at least two segments left, a wildcard sibling of a matching
        // literal becomes the backtrack point; the nearest ambiguity wins.
        if let Some(wildcard) = wildcard_child
            && index + 1 < segments.len()
        {
            if child.is_none() {
                child = Some(wildcard);
            } else if potential.is_none() {
                potential = Some(Potential {
                    node: wildcard,
                    params: values.clone(),
                    index,
                });
            }
        }

        let child = match child {
            Some(child) => child,
            None => match wildcard_child {
                Some(wildcard) => wildcard,
                None => {
                    return match potential {
                        Some(p) => p.node.resolve_at(segments, p.params, p.index + 1, None),
                        None => None,
                    };
                }
            },
        };

        child.resolve_at(segments, values, index + 1, potential)
    }
}
