//! Side-by-side layout
//!
//! Panels are sized in two passes. The first renders every panel, cut only
//! against a ceiling derived from the target width, and records the widest
//! panel on each side. The second pads left panels to that width and joins
//! them to their right panel.

use super::{
    blank, center, format_line_number, render_annotated_line, skipped_label, truncate_to_width,
    visible_width, GutterWidths, Styles,
};
use crate::pair::AnnotatedHunk;
use crate::row::{walk_hunk, Row};

/// Joins the left and right panel of a row
pub const PANEL_SEPARATOR: &str = " │ ";

/// Panels are never cut narrower than this
const MIN_PANEL_WIDTH: usize = 10;

const ELLIPSIS: char = '…';

enum PanelLine {
    Row { left: String, right: String },
    Separator(String),
    Blank,
}

/// Materialized first pass
struct Panels {
    lines: Vec<PanelLine>,
    left_width: usize,
    right_width: usize,
}

impl Panels {
    fn build(hunks: &[AnnotatedHunk<'_>], styles: &dyn Styles, width: Option<usize>) -> Self {
        let widths = GutterWidths::for_hunks(hunks);
        let mut lines = Vec::new();

        for (i, annotated) in hunks.iter().enumerate() {
            if i > 0 {
                lines.push(PanelLine::Blank);
            }
            if annotated.hunk.skipped > 0 {
                let label = styles.separator(&skipped_label(annotated.hunk.skipped));
                lines.push(PanelLine::Separator(label));
                lines.push(PanelLine::Blank);
            }

            let mut old_num = annotated.hunk.old_start;
            let mut new_num = annotated.hunk.new_start;

            for row in walk_hunk(annotated) {
                let (left, right) = match row {
                    Row::Context { old, new } => {
                        let left = styles.plain(&format!("  {}", old.content));
                        let right = styles.plain(&format!("  {}", new.content));
                        let left = panel(old_num, widths.old, &left, styles);
                        let right = panel(new_num, widths.new, &right, styles);
                        old_num += 1;
                        new_num += 1;
                        (left, right)
                    }
                    Row::Paired { pair, .. } => {
                        let removed = render_annotated_line(
                            &pair.alignment.old,
                            |s| styles.removed(s),
                            |s| styles.removed_emphasis(s),
                        );
                        let added = render_annotated_line(
                            &pair.alignment.new,
                            |s| styles.added(s),
                            |s| styles.added_emphasis(s),
                        );
                        let left = styles.removed("- ") + &removed;
                        let right = styles.added("+ ") + &added;
                        let left = panel(old_num, widths.old, &left, styles);
                        let right = panel(new_num, widths.new, &right, styles);
                        old_num += 1;
                        new_num += 1;
                        (left, right)
                    }
                    Row::DeleteOnly(line) => {
                        let content = styles.removed(&format!("- {}", line.content));
                        let left = panel(old_num, widths.old, &content, styles);
                        old_num += 1;
                        (left, placeholder(widths.new, styles))
                    }
                    Row::InsertOnly(line) => {
                        let content = styles.added(&format!("+ {}", line.content));
                        let right = panel(new_num, widths.new, &content, styles);
                        new_num += 1;
                        (placeholder(widths.old, styles), right)
                    }
                };
                lines.push(PanelLine::Row { left, right });
            }
        }

        let usable = width.map(|w| w.saturating_sub(visible_width(PANEL_SEPARATOR)));

        let left_ceiling = usable.map(|u| (u / 2).max(MIN_PANEL_WIDTH));
        let mut left_width = 0;
        for line in &mut lines {
            if let PanelLine::Row { left, .. } = line {
                fit(left, left_ceiling);
                left_width = left_width.max(visible_width(left));
            }
        }

        // The right side may use whatever the left panels left over
        let right_ceiling = usable.map(|u| u.saturating_sub(left_width).max(MIN_PANEL_WIDTH));
        let mut right_width = 0;
        for line in &mut lines {
            if let PanelLine::Row { right, .. } = line {
                fit(right, right_ceiling);
                right_width = right_width.max(visible_width(right));
            }
        }

        Self {
            lines,
            left_width,
            right_width,
        }
    }

    fn total_width(&self) -> usize {
        self.left_width + visible_width(PANEL_SEPARATOR) + self.right_width
    }
}

/// `NN content`
fn panel(number: usize, number_width: usize, content: &str, styles: &dyn Styles) -> String {
    format!(
        "{} {}",
        styles.line_number(&format_line_number(number, number_width)),
        content
    )
}

/// Stand-in for the side a row has no line on: a dimmed `~`
fn placeholder(number_width: usize, styles: &dyn Styles) -> String {
    format!("{} {}", blank(number_width), styles.separator("~"))
}

/// Cut a panel to `ceiling` columns, marking the cut with an ellipsis
fn fit(panel: &mut String, ceiling: Option<usize>) {
    let Some(limit) = ceiling else {
        return;
    };
    if visible_width(panel) <= limit {
        return;
    }
    let mut cut = truncate_to_width(panel, limit.saturating_sub(1));
    cut.push(ELLIPSIS);
    *panel = cut;
}

/// Render hunks as two panels, old text on the left and new on the right.
///
/// `width` is the number of columns available; 0 means no ceiling, so no
/// panel is ever cut.
pub fn render_side_by_side(
    hunks: &[AnnotatedHunk<'_>],
    styles: &dyn Styles,
    width: usize,
) -> String {
    if hunks.is_empty() {
        return String::new();
    }

    let ceiling = (width > 0).then_some(width);
    let panels = Panels::build(hunks, styles, ceiling);
    let total = panels.total_width();

    let mut out = String::new();
    for line in &panels.lines {
        match line {
            PanelLine::Row { left, right } => {
                out.push_str(left);
                out.push_str(&blank(panels.left_width - visible_width(left)));
                out.push_str(PANEL_SEPARATOR);
                out.push_str(right);
            }
            PanelLine::Separator(label) => {
                let label = match ceiling {
                    Some(limit) => truncate_to_width(label, limit),
                    None => label.clone(),
                };
                out.push_str(&center(&label, total));
            }
            PanelLine::Blank => {}
        }
        out.push('\n');
    }

    tracing::debug!(
        left = panels.left_width,
        right = panels.right_width,
        width,
        "rendered side-by-side"
    );
    out
}

/// Columns an uncut side-by-side rendering of `hunks` would need.
///
/// Callers compare this against the terminal width to decide whether the
/// side-by-side layout fits. Returns 0 when there is nothing to render.
pub fn measure_side_by_side(hunks: &[AnnotatedHunk<'_>], styles: &dyn Styles) -> usize {
    if hunks.is_empty() {
        return 0;
    }

    let panels = Panels::build(hunks, styles, None);
    let labels = panels
        .lines
        .iter()
        .filter_map(|line| match line {
            PanelLine::Separator(label) => Some(visible_width(label)),
            _ => None,
        })
        .max()
        .unwrap_or(0);
    panels.total_width().max(labels)
}
