//! Namespace-qualified names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// A possibly namespace-qualified name, as written in source.
///
/// `\Foo\Bar\BAZ` parses to a *fully qualified* name; `Bar\BAZ` and `BAZ`
/// parse to relative names that resolution may interpret against the
/// enclosing namespace. The `Display` form joins segments with `\` and
/// carries no leading separator — this is the string form constant
/// registries are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    segments: Vec<String>,
    fully_qualified: bool,
}

impl Name {
    /// Builds a name from pre-validated segments.
    ///
    /// Intended for parsers that have already tokenized the name; use
    /// [`Name::parse`] for raw source text.
    pub fn new(segments: Vec<String>, fully_qualified: bool) -> Self {
        Self {
            segments,
            fully_qualified,
        }
    }

    /// Builds an unqualified single-segment name.
    pub fn unqualified(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
            fully_qualified: false,
        }
    }

    /// Parses a name from its source form.
    ///
    /// A leading `\` marks the name fully qualified. Every segment must be a
    /// valid identifier.
    pub fn parse(text: &str) -> Result<Self, NameError> {
        let (fully_qualified, rest) = match text.strip_prefix('\\') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if rest.is_empty() {
            return Err(NameError::Empty);
        }

        let mut segments = Vec::new();
        for segment in rest.split('\\') {
            if segment.is_empty() {
                return Err(NameError::EmptySegment {
                    name: text.to_string(),
                });
            }
            if !is_valid_segment(segment) {
                return Err(NameError::InvalidSegment {
                    name: text.to_string(),
                    segment: segment.to_string(),
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self {
            segments,
            fully_qualified,
        })
    }

    /// Whether the name was written with a leading namespace separator.
    pub fn is_fully_qualified(&self) -> bool {
        self.fully_qualified
    }

    /// The name's segments, outermost namespace first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The bare identifier, for single-segment unqualified names only.
    pub fn as_unqualified(&self) -> Option<&str> {
        if !self.fully_qualified && self.segments.len() == 1 {
            Some(&self.segments[0])
        } else {
            None
        }
    }

    /// The last segment of the name.
    pub fn last_segment(&self) -> &str {
        // `parse` and `unqualified` never produce zero segments.
        self.segments.last().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("\\"))
    }
}

/// Checks one identifier segment: a letter, underscore or non-ASCII byte,
/// followed by any mix of those plus digits.
fn is_valid_segment(segment: &str) -> bool {
    let mut bytes = segment.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' || first >= 0x80 => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80)
}
