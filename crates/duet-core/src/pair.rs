//! Pairing of removed and added lines inside a hunk

use crate::align::{align, Alignment};
use crate::change::LineKind;
use crate::hunk::Hunk;
use crate::token::{tokenize, Token};
use serde::Serialize;

/// Maximum normalized distance (exclusive) for two lines to pair.
///
/// Low enough that fully rewritten lines stay unpaired, high enough to
/// catch edits touching one or a few tokens.
pub const DISTANCE_THRESHOLD: f64 = 0.6;

/// Lines with more tokens than this are never aligned. The cost table is
/// quadratic in token count, which minified content would blow up.
pub const MAX_ALIGN_TOKENS: usize = 500;

/// A removed line and an added line that are the same line, modified
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePair<'a> {
    /// Index into the hunk's lines of the removed line
    pub old_index: usize,
    /// Index into the hunk's lines of the added line
    pub new_index: usize,
    /// Token-level alignment of the two lines
    pub alignment: Alignment<'a>,
}

/// A hunk together with the line pairs found in it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedHunk<'a> {
    #[serde(flatten)]
    pub hunk: &'a Hunk,
    /// Pairs in the order of their removed line
    pub pairs: Vec<LinePair<'a>>,
}

/// Pair lines in every hunk.
pub fn annotate_hunks(hunks: &[Hunk]) -> Vec<AnnotatedHunk<'_>> {
    hunks.iter().map(annotate_hunk).collect()
}

/// Greedily pair each removed line with the first later added line that is
/// close enough, never looking past a context line.
pub fn annotate_hunk(hunk: &Hunk) -> AnnotatedHunk<'_> {
    let tokens: Vec<Option<Vec<Token<'_>>>> = hunk
        .lines
        .iter()
        .map(|line| {
            if !line.is_change() {
                return None;
            }
            let tokens = tokenize(&line.content);
            if tokens.len() > MAX_ALIGN_TOKENS {
                tracing::trace!(tokens = tokens.len(), "line too long to align");
                return None;
            }
            Some(tokens)
        })
        .collect();

    let mut paired = vec![false; hunk.lines.len()];
    let mut pairs = Vec::new();

    for (i, line) in hunk.lines.iter().enumerate() {
        if line.kind != LineKind::Delete {
            continue;
        }
        let Some(old_tokens) = &tokens[i] else {
            continue;
        };

        for j in i + 1..hunk.lines.len() {
            match hunk.lines[j].kind {
                LineKind::Equal => break,
                LineKind::Delete => continue,
                LineKind::Insert => {}
            }
            if paired[j] {
                continue;
            }
            let Some(new_tokens) = &tokens[j] else {
                continue;
            };

            let alignment = align(old_tokens, new_tokens);
            if alignment.distance < DISTANCE_THRESHOLD {
                pairs.push(LinePair {
                    old_index: i,
                    new_index: j,
                    alignment,
                });
                paired[j] = true;
                break;
            }
        }
    }

    tracing::trace!(
        old_start = hunk.old_start,
        pairs = pairs.len(),
        "annotated hunk"
    );
    AnnotatedHunk { hunk, pairs }
}
