//! Flattening annotated hunks into display rows

use crate::change::{Line, LineKind};
use crate::pair::{AnnotatedHunk, LinePair};
use std::collections::{HashMap, HashSet};

/// One display row of a hunk
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row<'h> {
    /// Unchanged line, shown on both sides
    Context { old: &'h Line, new: &'h Line },
    /// A removed line and the added line it became
    Paired {
        old: &'h Line,
        new: &'h Line,
        pair: &'h LinePair<'h>,
    },
    /// Removed line with no counterpart
    DeleteOnly(&'h Line),
    /// Added line with no counterpart
    InsertOnly(&'h Line),
}

/// Walk a hunk in line order, yielding one row per logical change unit.
///
/// The added side of a pair is emitted together with its removed line and
/// skipped when reached on its own.
pub fn walk_hunk<'h>(annotated: &'h AnnotatedHunk<'_>) -> Vec<Row<'h>> {
    let lines = &annotated.hunk.lines;
    let old_pairs: HashMap<usize, &LinePair<'_>> = annotated
        .pairs
        .iter()
        .map(|pair| (pair.old_index, pair))
        .collect();
    let new_paired: HashSet<usize> = annotated.pairs.iter().map(|p| p.new_index).collect();

    let mut rows = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        match line.kind {
            LineKind::Equal => rows.push(Row::Context {
                old: line,
                new: line,
            }),
            LineKind::Delete => match old_pairs.get(&idx) {
                Some(&pair) => rows.push(Row::Paired {
                    old: line,
                    new: &lines[pair.new_index],
                    pair,
                }),
                None => rows.push(Row::DeleteOnly(line)),
            },
            LineKind::Insert => {
                if !new_paired.contains(&idx) {
                    rows.push(Row::InsertOnly(line));
                }
            }
        }
    }
    rows
}
