//! Grouping of an edit script into hunks

use crate::change::{Line, LineKind};
use serde::{Deserialize, Serialize};

/// A hunk is a contiguous run of changes with the context around them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hunk {
    /// 1-based line number of the first line in the old text
    pub old_start: usize,
    /// 1-based line number of the first line in the new text
    pub new_start: usize,
    /// The lines in this hunk (context and changes), in order
    pub lines: Vec<Line>,
    /// Number of lines elided between the previous hunk and this one
    pub skipped: usize,
}

impl Hunk {
    /// Get the number of lines in this hunk
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if hunk is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of deleted lines in this hunk
    pub fn deletions(&self) -> usize {
        self.count(LineKind::Delete)
    }

    /// Number of inserted lines in this hunk
    pub fn insertions(&self) -> usize {
        self.count(LineKind::Insert)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}

/// Half-open range of script indices shown by one hunk
#[derive(Debug, Clone, Copy)]
struct Window {
    start: usize,
    end: usize,
}

/// Group an edit script into hunks with `context` lines around each change.
///
/// Windows that overlap or touch are merged, so the result never shows the
/// same line twice. A script without changes yields no hunks.
pub fn compute_hunks(lines: Vec<Line>, context: usize) -> Vec<Hunk> {
    let windows = change_windows(&lines, context);
    if windows.is_empty() {
        return Vec::new();
    }

    let mut hunks: Vec<Hunk> = Vec::with_capacity(windows.len());
    let mut old_line = 1usize;
    let mut new_line = 1usize;
    let mut current = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let kind = line.kind;

        if let Some(window) = windows.get(current) {
            if idx == window.start {
                let prev_end = current.checked_sub(1).map_or(0, |p| windows[p].end);
                hunks.push(Hunk {
                    old_start: old_line,
                    new_start: new_line,
                    lines: Vec::with_capacity(window.end - window.start),
                    skipped: window.start - prev_end,
                });
            }
            if idx >= window.start && idx < window.end {
                if let Some(hunk) = hunks.last_mut() {
                    hunk.lines.push(line);
                }
            }
            if idx + 1 == window.end {
                current += 1;
            }
        }

        match kind {
            LineKind::Equal => {
                old_line += 1;
                new_line += 1;
            }
            LineKind::Delete => old_line += 1,
            LineKind::Insert => new_line += 1,
        }
    }

    tracing::debug!(hunks = hunks.len(), context, "computed hunks");
    hunks
}

fn change_windows(lines: &[Line], context: usize) -> Vec<Window> {
    let mut windows: Vec<Window> = Vec::new();

    for (idx, _) in lines.iter().enumerate().filter(|(_, l)| l.is_change()) {
        let start = idx.saturating_sub(context);
        let end = idx.saturating_add(context).saturating_add(1).min(lines.len());

        match windows.last_mut() {
            Some(last) if start <= last.end => last.end = last.end.max(end),
            _ => windows.push(Window { start, end }),
        }
    }

    windows
}
