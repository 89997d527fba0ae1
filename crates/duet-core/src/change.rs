//! Line representation for diff operations

use serde::{Deserialize, Serialize};

/// The kind of a line in an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Line is present in both texts
    Equal,
    /// Line exists only in the old text
    Delete,
    /// Line exists only in the new text
    Insert,
}

/// A single line of an edit script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// How the line moves from old to new
    pub kind: LineKind,
    /// The text content, without its line terminator
    pub content: String,
}

impl Line {
    pub fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn equal(content: impl Into<String>) -> Self {
        Self::new(LineKind::Equal, content)
    }

    pub fn delete(content: impl Into<String>) -> Self {
        Self::new(LineKind::Delete, content)
    }

    pub fn insert(content: impl Into<String>) -> Self {
        Self::new(LineKind::Insert, content)
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(&self) -> bool {
        self.kind != LineKind::Equal
    }
}
