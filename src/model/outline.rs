//! Outline types: inferred title and heading hierarchy.

use serde::{Deserialize, Serialize};

/// Inferred heading level, capped at H3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Map a numbering depth (count of dot separators in the numeric
    /// prefix) to a level: 0 dots is H1, 1 dot H2, everything deeper H3.
    pub fn from_depth(dots: usize) -> Self {
        match dots {
            0 => HeadingLevel::H1,
            1 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }

    /// The serialized label ("H1", "H2", "H3").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading candidate accepted by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Inferred nesting level
    pub level: HeadingLevel,
    /// Heading text
    pub text: String,
    /// 1-indexed page number
    pub page: u32,
    /// Detected language code, or "unknown"
    pub language: String,
}

/// A document's inferred structure: title plus headings in reading order.
///
/// Heading texts are unique within one outline; the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Inferred document title
    pub title: String,
    /// Headings in document order
    pub outline: Vec<Heading>,
}
