//! Diff engine: configuration and the end-to-end pipeline

use crate::hunk::{compute_hunks, Hunk};
use crate::myers::diff_lines;
use crate::pair::{annotate_hunks, AnnotatedHunk};
use crate::palette::{AnsiStyles, ColorMode};
use crate::render::{
    measure_side_by_side, render_inline, render_side_by_side, PlainStyles, Styles,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Largest accepted number of context lines
pub const MAX_CONTEXT: usize = 100_000;

const DEFAULT_CONTEXT: usize = 3;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An option value that names no known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// How hunks are laid out on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// One column, removed lines above added ones
    #[default]
    Inline,
    /// Old text on the left, new text on the right
    SideBySide,
    /// Side-by-side when it fits the width, inline otherwise
    PreferSideBySide,
}

impl Layout {
    fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::SideBySide => "side-by-side",
            Self::PreferSideBySide => "prefer-side-by-side",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(Self::Inline),
            "side-by-side" => Ok(Self::SideBySide),
            "prefer-side-by-side" => Ok(Self::PreferSideBySide),
            _ => Err(ParseOptionError {
                kind: "layout",
                value: s.to_owned(),
                expected: "inline, side-by-side, prefer-side-by-side",
            }),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

impl FromStr for ColorMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ParseOptionError {
                kind: "color mode",
                value: s.to_owned(),
                expected: "auto, always, never",
            }),
        }
    }
}

/// The main diff engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffEngine {
    /// Unchanged lines kept around each change
    context: usize,
    layout: Layout,
    color: ColorMode,
    /// Target width in columns, 0 for unknown
    width: usize,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
            layout: Layout::default(),
            color: ColorMode::default(),
            width: 0,
        }
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of context lines, clamped to [`MAX_CONTEXT`]
    pub fn with_context(mut self, lines: usize) -> Self {
        self.context = lines.min(MAX_CONTEXT);
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Set the target width. 0 asks the terminal when rendering side by
    /// side, and means no ceiling when it cannot be found.
    pub fn with_width(mut self, columns: usize) -> Self {
        self.width = columns;
        self
    }

    pub fn context(&self) -> usize {
        self.context
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn color(&self) -> ColorMode {
        self.color
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Compute hunks between two strings without rendering them
    pub fn hunks(&self, old: &str, new: &str) -> Vec<Hunk> {
        if old == new {
            return Vec::new();
        }
        let lines = diff_lines(old, new);
        tracing::debug!(script = lines.len(), "computed edit script");
        compute_hunks(lines, self.context)
    }

    /// Render the diff of two strings with the given styles.
    ///
    /// Nothing here looks at the environment: the configured width is used
    /// as is, and 0 means no ceiling.
    pub fn render_with(&self, old: &str, new: &str, styles: &dyn Styles) -> String {
        if old == new {
            return String::new();
        }
        let hunks = self.hunks(old, new);
        self.render_annotated(&annotate_hunks(&hunks), styles, self.width)
    }

    /// Render the diff of two strings for the terminal, resolving the color
    /// mode and width from the environment.
    pub fn diff_strings(&self, old: &str, new: &str) -> String {
        if old == new {
            return String::new();
        }
        let width = self.resolve_width();
        let hunks = self.hunks(old, new);
        let annotated = annotate_hunks(&hunks);

        if self.color.enabled() {
            self.render_annotated(&annotated, &AnsiStyles, width)
        } else {
            self.render_annotated(&annotated, &PlainStyles, width)
        }
    }

    /// Read and diff two files
    pub fn diff_files(&self, old_path: &Path, new_path: &Path) -> Result<String, DiffError> {
        let old_content = read(old_path)?;
        let new_content = read(new_path)?;
        Ok(self.diff_strings(&old_content, &new_content))
    }

    /// Render already annotated hunks at `width` columns
    pub fn render_annotated(
        &self,
        hunks: &[AnnotatedHunk<'_>],
        styles: &dyn Styles,
        width: usize,
    ) -> String {
        let layout = self.choose_layout(hunks, styles, width);
        tracing::debug!(%layout, width, hunks = hunks.len(), "rendering");
        match layout {
            Layout::SideBySide => render_side_by_side(hunks, styles, width),
            Layout::Inline | Layout::PreferSideBySide => render_inline(hunks, styles),
        }
    }

    /// Settle `PreferSideBySide` into a concrete layout
    fn choose_layout(
        &self,
        hunks: &[AnnotatedHunk<'_>],
        styles: &dyn Styles,
        width: usize,
    ) -> Layout {
        match self.layout {
            Layout::PreferSideBySide => {
                let needed = measure_side_by_side(hunks, styles);
                if width == 0 || needed <= width {
                    Layout::SideBySide
                } else {
                    tracing::debug!(needed, width, "side-by-side does not fit");
                    Layout::Inline
                }
            }
            layout => layout,
        }
    }

    fn resolve_width(&self) -> usize {
        if self.width > 0 || self.layout == Layout::Inline {
            return self.width;
        }
        terminal_width().unwrap_or(0)
    }
}

fn read(path: &Path) -> Result<String, DiffError> {
    std::fs::read_to_string(path).map_err(|source| DiffError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn terminal_width() -> Option<usize> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    match crossterm::terminal::size() {
        Ok((columns, _)) => Some(usize::from(columns)),
        Err(err) => {
            tracing::debug!(%err, "terminal size unavailable");
            None
        }
    }
}
