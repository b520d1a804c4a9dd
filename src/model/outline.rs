//! Outline result types.
//!
//! Field order and key names on these types are part of the output
//! contract for downstream consumers; do not reorder them.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Heading depth, rendered as an ordinal tag ("H1", "H2", ...).
///
/// Larger number means deeper nesting. There is no upper bound on depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(pub u8);

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl Visitor<'_> for LevelVisitor {
            type Value = HeadingLevel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a heading level tag like \"H2\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<HeadingLevel, E> {
                let digits = v
                    .strip_prefix('H')
                    .ok_or_else(|| E::custom(format!("invalid heading level: {v:?}")))?;
                let n: u8 = digits
                    .parse()
                    .map_err(|_| E::custom(format!("invalid heading level: {v:?}")))?;
                Ok(HeadingLevel(n))
            }
        }

        deserializer.deserialize_str(LevelVisitor)
    }
}

/// One accepted outline node.
///
/// The vertical position used for ordering is not part of the persisted
/// entry; it is stripped at assembly time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading depth
    pub level: HeadingLevel,
    /// Display text; may carry a trailing space (output compatibility)
    pub text: String,
    /// Originating page (1-based)
    pub page: u32,
}

/// The final title + ordered heading list, one per input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Document title; empty when the document has no usable page-1
    /// candidate and no headings at all
    pub title: String,
    /// Headings ordered by (page, vertical position)
    pub outline: Vec<HeadingEntry>,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the outline carries neither a title nor headings.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }

    /// Number of headings.
    pub fn heading_count(&self) -> usize {
        self.outline.len()
    }
}
