//! Global token alignment
//!
//! Levenshtein-style dynamic programming over token texts: a match costs
//! nothing, while a substitution, an insertion or a deletion costs one.

use crate::token::Token;
use serde::Serialize;

/// How a token takes part in an alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignOp {
    /// Token is unchanged
    Match,
    /// Token exists only in the old line
    Delete,
    /// Token exists only in the new line
    Insert,
}

/// A token tagged with its alignment operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignedToken<'a> {
    pub op: AlignOp,
    pub token: Token<'a>,
}

/// The result of aligning two token sequences
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Alignment<'a> {
    /// Old tokens in order, each `Match` or `Delete`
    pub old: Vec<AlignedToken<'a>>,
    /// New tokens in order, each `Match` or `Insert`
    pub new: Vec<AlignedToken<'a>>,
    /// Normalized edit distance in `[0, 1]`
    pub distance: f64,
}

impl Alignment<'_> {
    /// Number of tokens matched on both sides
    pub fn matches(&self) -> usize {
        self.old.iter().filter(|t| t.op == AlignOp::Match).count()
    }
}

/// Align two token sequences.
///
/// The distance is `(deletions + insertions) / (2 * matches + deletions +
/// insertions)`, so identical sequences score 0 and disjoint ones score 1.
pub fn align<'a>(old: &[Token<'a>], new: &[Token<'a>]) -> Alignment<'a> {
    let n = old.len();
    let m = new.len();

    if n == 0 && m == 0 {
        return Alignment::default();
    }
    if n == 0 {
        return Alignment {
            old: Vec::new(),
            new: tagged(new, AlignOp::Insert),
            distance: 1.0,
        };
    }
    if m == 0 {
        return Alignment {
            old: tagged(old, AlignOp::Delete),
            new: Vec::new(),
            distance: 1.0,
        };
    }

    let table = CostTable::build(old, new);

    let mut old_aligned = Vec::with_capacity(n);
    let mut new_aligned = Vec::with_capacity(m);
    let (mut matches, mut deletions, mut insertions) = (0usize, 0usize, 0usize);
    let (mut i, mut j) = (n, m);

    // Gaps are tried before matches so that, inside a run of identical
    // tokens next to a change, the change lands on the later position.
    while i > 0 || j > 0 {
        let here = table.get(i, j);
        if i > 0 && here == table.get(i - 1, j) + 1 {
            old_aligned.push(AlignedToken {
                op: AlignOp::Delete,
                token: old[i - 1],
            });
            deletions += 1;
            i -= 1;
        } else if j > 0 && here == table.get(i, j - 1) + 1 {
            new_aligned.push(AlignedToken {
                op: AlignOp::Insert,
                token: new[j - 1],
            });
            insertions += 1;
            j -= 1;
        } else if i > 0
            && j > 0
            && old[i - 1].text == new[j - 1].text
            && here == table.get(i - 1, j - 1)
        {
            old_aligned.push(AlignedToken {
                op: AlignOp::Match,
                token: old[i - 1],
            });
            new_aligned.push(AlignedToken {
                op: AlignOp::Match,
                token: new[j - 1],
            });
            matches += 1;
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && here == table.get(i - 1, j - 1) + 1 {
            old_aligned.push(AlignedToken {
                op: AlignOp::Delete,
                token: old[i - 1],
            });
            new_aligned.push(AlignedToken {
                op: AlignOp::Insert,
                token: new[j - 1],
            });
            deletions += 1;
            insertions += 1;
            i -= 1;
            j -= 1;
        } else {
            // Boundary row and column make every i == 0 or j == 0 cell
            // take one of the gap branches above, so j > 0 here.
            new_aligned.push(AlignedToken {
                op: AlignOp::Insert,
                token: new[j - 1],
            });
            insertions += 1;
            j -= 1;
        }
    }

    old_aligned.reverse();
    new_aligned.reverse();

    let changed = deletions + insertions;
    let total = 2 * matches + changed;
    let distance = if total > 0 {
        changed as f64 / total as f64
    } else {
        0.0
    };

    Alignment {
        old: old_aligned,
        new: new_aligned,
        distance,
    }
}

fn tagged<'a>(tokens: &[Token<'a>], op: AlignOp) -> Vec<AlignedToken<'a>> {
    tokens
        .iter()
        .map(|&token| AlignedToken { op, token })
        .collect()
}

/// Row-major `(n + 1) x (m + 1)` edit cost table
struct CostTable {
    cols: usize,
    cells: Vec<usize>,
}

impl CostTable {
    fn build(old: &[Token<'_>], new: &[Token<'_>]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut table = Self {
            cols,
            cells: vec![0; rows * cols],
        };

        for i in 1..rows {
            table.set(i, 0, i);
        }
        for j in 1..cols {
            table.set(0, j, j);
        }
        for i in 1..rows {
            for j in 1..cols {
                let cost = usize::from(old[i - 1].text != new[j - 1].text);
                let del = table.get(i - 1, j) + 1;
                let ins = table.get(i, j - 1) + 1;
                let sub = table.get(i - 1, j - 1) + cost;
                table.set(i, j, del.min(ins).min(sub));
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }
}
