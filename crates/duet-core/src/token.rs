//! Tokenization for word-level alignment

use serde::Serialize;

/// A contiguous slice of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The token text, borrowed from the line
    pub text: &'a str,
    /// Byte offset of the first byte in the line
    pub start: usize,
    /// Byte offset one past the last byte in the line
    pub end: usize,
}

/// Letters, decimal digits and underscore. Superscripts, fractions and
/// other numeric symbols stand alone.
fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_ascii_digit() || ch == '_'
}

/// Split a line into tokens for word-level diffing.
///
/// Runs of letters, digits and underscores form one token. Every other
/// character, whitespace included, is a token of its own so that runs of
/// spaces differing by a single column still align. Joining the token
/// texts in order gives back `line` exactly.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (pos, ch) in line.char_indices() {
        if is_word_char(ch) {
            word_start.get_or_insert(pos);
            continue;
        }
        if let Some(start) = word_start.take() {
            tokens.push(Token {
                text: &line[start..pos],
                start,
                end: pos,
            });
        }
        let end = pos + ch.len_utf8();
        tokens.push(Token {
            text: &line[pos..end],
            start: pos,
            end,
        });
    }
    if let Some(start) = word_start {
        tokens.push(Token {
            text: &line[start..],
            start,
            end: line.len(),
        });
    }

    tokens
}
