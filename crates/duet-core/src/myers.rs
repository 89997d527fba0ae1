//! Line-level edit scripts
//!
//! Implements the O(ND) shortest edit script search from Myers' "An O(ND)
//! Difference Algorithm and Its Variations". For every edit distance `d`
//! the furthest reaching x on each diagonal `k = x - y` is kept in a
//! frontier; a copy of the frontier is saved before each step so the path
//! can be replayed backwards once the end point is reached.

use crate::change::Line;

/// Compute the line-level edit script turning `old` into `new`.
///
/// Returns an empty script when both texts are identical.
pub fn diff_lines(old: &str, new: &str) -> Vec<Line> {
    if old == new {
        return Vec::new();
    }

    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    shortest_edit_script(&old_lines, &new_lines)
}

/// Split text on `\n`. Empty text has zero lines, not one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Run the search over two line slices and return the flat script.
pub fn shortest_edit_script(old: &[&str], new: &[&str]) -> Vec<Line> {
    let n = old.len();
    let m = new.len();

    if n == 0 {
        return new.iter().map(|l| Line::insert(*l)).collect();
    }
    if m == 0 {
        return old.iter().map(|l| Line::delete(*l)).collect();
    }

    let max = (n + m) as isize;
    let at = |k: isize| (k + max) as usize;
    let (n, m) = (n as isize, m as isize);

    let mut v = vec![0isize; 2 * max as usize + 1];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max {
        trace.push(v.clone());

        let mut k = -d;
        while k <= d {
            let mut x = if k == -d || (k != d && v[at(k - 1)] < v[at(k + 1)]) {
                v[at(k + 1)]
            } else {
                v[at(k - 1)] + 1
            };
            let mut y = x - k;

            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }

            v[at(k)] = x;

            if x >= n && y >= m {
                break 'search;
            }
            k += 2;
        }
    }

    tracing::trace!(steps = trace.len(), "edit script search finished");
    backtrack(&trace, old, new, max)
}

fn backtrack(trace: &[Vec<isize>], old: &[&str], new: &[&str], max: isize) -> Vec<Line> {
    let at = |k: isize| (k + max) as usize;
    let mut x = old.len() as isize;
    let mut y = new.len() as isize;
    let mut edits = Vec::new();

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;

        // Prefer the insert edge when the k+1 frontier got further
        let prev_k = if k == -d || (k != d && v[at(k - 1)] < v[at(k + 1)]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[at(prev_k)];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            edits.push(Line::equal(old[x as usize]));
        }

        if d > 0 {
            if x == prev_x {
                y -= 1;
                edits.push(Line::insert(new[y as usize]));
            } else {
                x -= 1;
                edits.push(Line::delete(old[x as usize]));
            }
        }
    }

    edits.reverse();
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::LineKind;

    fn kinds(lines: &[Line]) -> Vec<LineKind> {
        lines.iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_identical_is_empty() {
        assert!(diff_lines("foo\nbar", "foo\nbar").is_empty());
        assert!(diff_lines("", "").is_empty());
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn test_all_inserted() {
        let lines = diff_lines("", "a\nb\nc");
        assert_eq!(
            lines,
            vec![Line::insert("a"), Line::insert("b"), Line::insert("c")]
        );
    }

    #[test]
    fn test_all_deleted() {
        let lines = diff_lines("a\nb", "");
        assert_eq!(lines, vec![Line::delete("a"), Line::delete("b")]);
    }

    #[test]
    fn test_substitution_is_delete_then_insert() {
        let lines = diff_lines("a\nb\nc", "a\nB\nc");
        assert_eq!(
            lines,
            vec![
                Line::equal("a"),
                Line::delete("b"),
                Line::insert("B"),
                Line::equal("c"),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_is_a_change() {
        let lines = diff_lines("hello\n", "hello");
        assert_eq!(lines, vec![Line::equal("hello"), Line::delete("")]);
    }

    #[test]
    fn test_insert_in_middle() {
        let lines = diff_lines("a\nc", "a\nb\nc");
        assert_eq!(
            kinds(&lines),
            vec![LineKind::Equal, LineKind::Insert, LineKind::Equal]
        );
        assert_eq!(lines[1].content, "b");
    }

    #[test]
    fn test_delete_in_middle() {
        let lines = diff_lines("a\nb\nc", "a\nc");
        assert_eq!(
            kinds(&lines),
            vec![LineKind::Equal, LineKind::Delete, LineKind::Equal]
        );
        assert_eq!(lines[1].content, "b");
    }

    #[test]
    fn test_script_reconstructs_both_sides() {
        let old = "one\ntwo\nthree\nfour\nfive";
        let new = "zero\none\nthree\nfour\n4.5\nfive";
        let lines = diff_lines(old, new);

        let rebuilt_old: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind != LineKind::Insert)
            .map(|l| l.content.as_str())
            .collect();
        let rebuilt_new: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind != LineKind::Delete)
            .map(|l| l.content.as_str())
            .collect();

        assert_eq!(rebuilt_old.join("\n"), old);
        assert_eq!(rebuilt_new.join("\n"), new);
        assert_eq!(lines.iter().filter(|l| l.is_change()).count(), 3);
    }
}
