//! Duet Core - line diffs with token-level highlighting
//!
//! The pipeline runs in stages:
//!
//! 1. [`myers`] computes a minimal line edit script
//! 2. [`hunk`] groups changes with surrounding context
//! 3. [`pair`] matches removed lines with similar added lines, using
//!    [`token`] and [`align`] to find which tokens changed
//! 4. [`row`] and [`render`] lay the hunks out inline or side by side
//!
//! [`DiffEngine`] wires the stages together.

pub mod align;
pub mod change;
pub mod diff;
pub mod hunk;
pub mod myers;
pub mod pair;
pub mod palette;
pub mod render;
pub mod row;
pub mod token;

pub use align::{align, AlignOp, AlignedToken, Alignment};
pub use change::{Line, LineKind};
pub use diff::{DiffEngine, DiffError, Layout, ParseOptionError, MAX_CONTEXT};
pub use hunk::{compute_hunks, Hunk};
pub use pair::{annotate_hunks, AnnotatedHunk, LinePair};
pub use palette::{AnsiStyles, ColorMode};
pub use render::{PlainStyles, Styles};
pub use token::{tokenize, Token};

/// Diff two strings with the default settings
pub fn diff(old: &str, new: &str) -> String {
    DiffEngine::new().diff_strings(old, new)
}
