//! Inline (unified) layout

use super::{
    blank, center, format_line_number, render_annotated_line, skipped_label, visible_width,
    GutterWidths, Styles,
};
use crate::pair::AnnotatedHunk;
use crate::row::{walk_hunk, Row};

enum OutputLine {
    Text(String),
    /// Skipped-lines label, centered once every row is known
    Separator(String),
}

/// Render hunks as one column: removed lines marked `- `, added lines
/// marked `+ `, context indented by two spaces. Each line starts with a
/// gutter holding the old and new line numbers.
pub fn render_inline(hunks: &[AnnotatedHunk<'_>], styles: &dyn Styles) -> String {
    if hunks.is_empty() {
        return String::new();
    }

    let widths = GutterWidths::for_hunks(hunks);
    let mut lines: Vec<OutputLine> = Vec::new();

    for (i, annotated) in hunks.iter().enumerate() {
        if i > 0 {
            lines.push(OutputLine::Text(String::new()));
        }
        if annotated.hunk.skipped > 0 {
            lines.push(OutputLine::Separator(skipped_label(annotated.hunk.skipped)));
            lines.push(OutputLine::Text(String::new()));
        }

        let mut old_num = annotated.hunk.old_start;
        let mut new_num = annotated.hunk.new_start;

        for row in walk_hunk(annotated) {
            match row {
                Row::Context { old, .. } => {
                    let gutter = gutter(Some(old_num), Some(new_num), widths, styles);
                    let content = styles.plain(&format!("  {}", old.content));
                    lines.push(OutputLine::Text(gutter + &content));
                    old_num += 1;
                    new_num += 1;
                }
                Row::Paired { pair, .. } => {
                    let removed = render_annotated_line(
                        &pair.alignment.old,
                        |s| styles.removed(s),
                        |s| styles.removed_emphasis(s),
                    );
                    lines.push(OutputLine::Text(format!(
                        "{}{}{}",
                        gutter(Some(old_num), None, widths, styles),
                        styles.removed("- "),
                        removed
                    )));

                    let added = render_annotated_line(
                        &pair.alignment.new,
                        |s| styles.added(s),
                        |s| styles.added_emphasis(s),
                    );
                    lines.push(OutputLine::Text(format!(
                        "{}{}{}",
                        gutter(None, Some(new_num), widths, styles),
                        styles.added("+ "),
                        added
                    )));

                    old_num += 1;
                    new_num += 1;
                }
                Row::DeleteOnly(line) => {
                    let gutter = gutter(Some(old_num), None, widths, styles);
                    let content = styles.removed(&format!("- {}", line.content));
                    lines.push(OutputLine::Text(gutter + &content));
                    old_num += 1;
                }
                Row::InsertOnly(line) => {
                    let gutter = gutter(None, Some(new_num), widths, styles);
                    let content = styles.added(&format!("+ {}", line.content));
                    lines.push(OutputLine::Text(gutter + &content));
                    new_num += 1;
                }
            }
        }
    }

    let row_width = lines
        .iter()
        .filter_map(|line| match line {
            OutputLine::Text(text) => Some(visible_width(text)),
            OutputLine::Separator(_) => None,
        })
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for line in lines {
        match line {
            OutputLine::Text(text) => out.push_str(&text),
            OutputLine::Separator(label) => {
                out.push_str(&center(&styles.separator(&label), row_width))
            }
        }
        out.push('\n');
    }
    out
}

/// Dual line-number gutter: `old new │ `, blank on the side a line lacks
fn gutter(
    old: Option<usize>,
    new: Option<usize>,
    widths: GutterWidths,
    styles: &dyn Styles,
) -> String {
    let number = |n: Option<usize>, width: usize| match n {
        Some(n) => styles.line_number(&format_line_number(n, width)),
        None => blank(width),
    };
    format!(
        "{} {} {} ",
        number(old, widths.old),
        number(new, widths.new),
        styles.line_number("│")
    )
}
