use memchr::memchr;
use regex::Regex;

use super::PathError;

/// Dividers used when none are configured explicitly.
pub const DEFAULT_DIVIDERS: [char; 2] = ['/', '-'];

// reserved for optional-marker and parameter-marker syntax
const FORBIDDEN_DIVIDERS: [char; 2] = [':', '?'];

/// Splits raw paths into non-empty segments on a configurable divider set.
///
/// The divider set compiles to a single character-class regex; empty segments
/// are discarded, so duplicate and trailing dividers are absorbed.
#[derive(Debug, Clone)]
pub struct PathSplitter {
    divider_class: Option<Regex>,
}

impl Default for PathSplitter {
    fn default() -> Self {
        Self::new(&DEFAULT_DIVIDERS).expect("default dividers are not forbidden")
    }
}

impl PathSplitter {
    pub fn new(dividers: &[char]) -> Result<Self, PathError> {
        for &divider in dividers {
            if FORBIDDEN_DIVIDERS.contains(&divider) {
                return Err(PathError::ForbiddenDivider { divider });
            }
        }

        // An empty class is not a valid regex; no dividers means no splitting.
        let divider_class = if dividers.is_empty() {
            None
        } else {
            let mut class = String::with_capacity(dividers.len() * 4 + 2);
            class.push('[');
            for &divider in dividers {
                let mut buf = [0u8; 4];
                class.push_str(&regex::escape(divider.encode_utf8(&mut buf)));
            }
            class.push(']');
            Some(Regex::new(&class).expect("escaped character class is a valid regex"))
        };

        Ok(Self { divider_class })
    }

    /// Splits `path` into its non-empty segments.
    pub fn split<'p>(&self, path: &'p str) -> Vec<&'p str> {
        match &self.divider_class {
            Some(class) => class.split(path).filter(|s| !s.is_empty()).collect(),
            None if path.is_empty() => Vec::new(),
            None => vec![path],
        }
    }

    /// Truncates `path` at the first `?`, dropping any query-string suffix.
    pub fn strip_query(path: &str) -> &str {
        match memchr(b'?', path.as_bytes()) {
            Some(at) => &path[..at],
            None => path,
        }
    }
}
