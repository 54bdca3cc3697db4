use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::fmt;

use super::TrieError;

/// Normalized child key shared by parametrized and anonymous-wildcard
/// segments at a given depth.
pub(crate) const WILDCARD: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    #[default]
    Literal,
    Parametrized,
    Wildcard,
}

impl NodeKind {
    fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Literal => "literal",
            NodeKind::Parametrized => "parametrized",
            NodeKind::Wildcard => "wildcard",
        }
    }
}

/// One trie node per distinct segment name at a given depth.
///
/// A terminal node carries the handler and the parameter names collected
/// along the insertion path that ends at it.
#[derive(Debug)]
pub struct SegmentNode<H> {
    pub(super) name: Box<str>,
    pub(super) kind: NodeKind,
    pub(super) children: FastHashMap<Box<str>, SegmentNode<H>>,
    pub(super) param_names: SmallVec<[Box<str>; 4]>,
    pub(super) handler: Option<H>,
}

impl<H> SegmentNode<H> {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: Box::from(name),
            kind: NodeKind::default(),
            children: FastHashMap::new(),
            param_names: SmallVec::new(),
            handler: None,
        }
    }

    pub(crate) fn root() -> Self {
        Self::new("root")
    }

    /// Write-once handler installation; a second write is a structural
    /// conflict between two registered patterns.
    pub(super) fn set_handler(&mut self, handler: H, pattern: &str) -> Result<(), TrieError> {
        if self.handler.is_some() {
            return Err(TrieError::HandlerAlreadyDefined {
                pattern: pattern.to_string(),
            });
        }
        self.handler = Some(handler);
        Ok(())
    }

    /// Renders this subtree with box-drawing branches, for diagnostics.
    pub(crate) fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        indentation: &str,
        last_child: bool,
    ) -> fmt::Result {
        writeln!(
            f,
            "{indentation}{} {} [kind: {}, params: [{}]]",
            if last_child { "└─" } else { "├─" },
            self.name,
            self.kind.as_str(),
            self.param_names.join(", "),
        )?;

        // map order is arbitrary; sort for a stable rendering
        let mut keys: Vec<&str> = self.children.keys().map(|k| k.as_ref()).collect();
        keys.sort_unstable();

        let child_indentation = format!("{indentation}{}", if last_child { "   " } else { "│  " });
        for (i, key) in keys.iter().enumerate() {
            if let Some(child) = self.children.get(*key) {
                child.render(f, &child_indentation, i == keys.len() - 1)?;
            }
        }
        Ok(())
    }
}

pub(super) fn is_parametrized(segment: &str) -> bool {
    segment.starts_with(':')
}

pub(super) fn is_optional(segment: &str) -> bool {
    segment.ends_with('?')
}

/// Display name: the optional marker is stripped first, then the parameter
/// marker, so `":id?"`, `":id"` and `"id?"` all name `"id"`.
pub(super) fn param_name(segment: &str) -> &str {
    let trimmed = segment.strip_suffix('?').unwrap_or(segment);
    trimmed.strip_prefix(':').unwrap_or(trimmed)
}

/// Trie-key normalization: parametrized and bare-wildcard segments share one
/// child slot under the wildcard sentinel; literal segments key on their text
/// with any trailing optional marker stripped.
pub(super) fn child_key(segment: &str) -> &str {
    if is_parametrized(segment) || segment == WILDCARD {
        WILDCARD
    } else {
        param_name(segment)
    }
}
