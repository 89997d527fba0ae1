//! Turning annotated hunks into text

mod ansi;
mod inline;
mod side_by_side;
mod style;

pub use ansi::{char_width, truncate_to_width, visible_width, AnsiState, HYPERLINK_CLOSE, RESET};
pub use inline::render_inline;
pub use side_by_side::{measure_side_by_side, render_side_by_side};
pub use style::{PlainStyles, Styles};

#[cfg(test)]
pub(crate) use style::testing;

use crate::align::{AlignOp, AlignedToken};
use crate::change::LineKind;
use crate::pair::AnnotatedHunk;

/// Right-justify a line number in `width` columns
fn format_line_number(number: usize, width: usize) -> String {
    format!("{number:>width$}")
}

fn blank(width: usize) -> String {
    " ".repeat(width)
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Gutter widths fitting the largest old and new line numbers shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GutterWidths {
    old: usize,
    new: usize,
}

impl GutterWidths {
    fn for_hunks(hunks: &[AnnotatedHunk<'_>]) -> Self {
        let mut max_old = 0;
        let mut max_new = 0;
        for annotated in hunks {
            let mut old_num = annotated.hunk.old_start;
            let mut new_num = annotated.hunk.new_start;
            for line in &annotated.hunk.lines {
                match line.kind {
                    LineKind::Equal => {
                        max_old = max_old.max(old_num);
                        max_new = max_new.max(new_num);
                        old_num += 1;
                        new_num += 1;
                    }
                    LineKind::Delete => {
                        max_old = max_old.max(old_num);
                        old_num += 1;
                    }
                    LineKind::Insert => {
                        max_new = max_new.max(new_num);
                        new_num += 1;
                    }
                }
            }
        }
        Self {
            old: digit_count(max_old),
            new: digit_count(max_new),
        }
    }
}

/// Rebuild a line from aligned tokens, emphasizing the ones that changed.
///
/// Neighbouring tokens with the same treatment are styled as one run to
/// keep escape overhead down.
pub fn render_annotated_line(
    tokens: &[AlignedToken<'_>],
    base: impl Fn(&str) -> String,
    emphasis: impl Fn(&str) -> String,
) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut run_emphasized = false;

    for aligned in tokens {
        let emphasized = aligned.op != AlignOp::Match;
        if emphasized != run_emphasized && !run.is_empty() {
            out.push_str(&style_run(&run, run_emphasized, &base, &emphasis));
            run.clear();
        }
        run_emphasized = emphasized;
        run.push_str(aligned.token.text);
    }
    if !run.is_empty() {
        out.push_str(&style_run(&run, run_emphasized, &base, &emphasis));
    }

    out
}

fn style_run(
    run: &str,
    emphasized: bool,
    base: &impl Fn(&str) -> String,
    emphasis: &impl Fn(&str) -> String,
) -> String {
    if emphasized {
        emphasis(run)
    } else {
        base(run)
    }
}

/// Text of the separator printed before a hunk that skips lines
fn skipped_label(skipped: usize) -> String {
    let noun = if skipped == 1 { "line" } else { "lines" };
    format!("~~~ {skipped} {noun} skipped ~~~")
}

/// Prefix `text` with spaces so it sits in the middle of `width` columns
fn center(text: &str, width: usize) -> String {
    let text_width = visible_width(text);
    if text_width >= width {
        return text.to_owned();
    }
    format!("{}{}", blank((width - text_width) / 2), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use crate::change::Line;
    use crate::hunk::Hunk;
    use crate::pair::annotate_hunks;
    use crate::token::tokenize;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(12345), 5);
    }

    #[test]
    fn test_format_line_number() {
        assert_eq!(format_line_number(7, 3), "  7");
        assert_eq!(format_line_number(123, 2), "123");
    }

    #[test]
    fn test_gutter_widths_span_all_hunks() {
        let hunks = vec![
            Hunk {
                old_start: 1,
                new_start: 1,
                lines: vec![Line::delete("a")],
                skipped: 0,
            },
            Hunk {
                old_start: 98,
                new_start: 97,
                lines: vec![Line::equal("x"), Line::delete("y"), Line::insert("z")],
                skipped: 96,
            },
        ];
        let annotated = annotate_hunks(&hunks);
        // Old side reaches 99, new side stops at 98
        assert_eq!(
            GutterWidths::for_hunks(&annotated),
            GutterWidths { old: 2, new: 2 }
        );
    }

    #[test]
    fn test_render_annotated_line_groups_runs() {
        let old = tokenize("foo bar baz");
        let new = tokenize("foo qux baz");
        let alignment = align(&old, &new);

        let rendered = render_annotated_line(
            &alignment.old,
            |s| format!("<{s}>"),
            |s| format!("[{s}]"),
        );
        assert_eq!(rendered, "<foo >[bar]< baz>");
    }

    #[test]
    fn test_render_annotated_line_empty() {
        assert_eq!(
            render_annotated_line(&[], |s| s.to_owned(), |s| s.to_owned()),
            ""
        );
    }

    #[test]
    fn test_skipped_label() {
        assert_eq!(skipped_label(1), "~~~ 1 line skipped ~~~");
        assert_eq!(skipped_label(5), "~~~ 5 lines skipped ~~~");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abc", 2), "abc");
        assert_eq!(center("\x1b[2mab\x1b[0m", 4), " \x1b[2mab\x1b[0m");
    }
}
