//! Escape-aware width measurement and truncation
//!
//! Terminal escape sequences take no columns, so both measuring and
//! cutting text walk it through a small state machine:
//!
//! - `ESC [` starts a CSI sequence, ended by a final byte in `0x40..=0x7E`
//! - `ESC ]` starts an OSC sequence, ended by BEL or ST (`ESC \`)
//! - `ESC P`, `ESC _`, `ESC ^` and `ESC X` start DCS/APC/PM/SOS strings,
//!   ended by ST
//! - any other character after ESC is a single-character escape

use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Resets every SGR attribute
pub const RESET: &str = "\x1b[0m";

/// Ends an OSC 8 hyperlink
pub const HYPERLINK_CLOSE: &str = "\x1b]8;;\x1b\\";

/// Position of the scanner relative to escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiState {
    /// Visible text
    Plain,
    /// Saw ESC, waiting for the introducer
    Escape,
    /// Inside `ESC [`, waiting for the final byte
    Csi,
    /// Inside `ESC ]`, waiting for BEL or ST
    Osc,
    /// Inside DCS/APC/PM/SOS, waiting for ST
    Str,
    /// Inside an OSC or string sequence right after ESC
    StrEscape,
}

impl AnsiState {
    /// Transition on one character.
    pub fn next(self, ch: char) -> Self {
        match self {
            Self::Plain if ch == ESC => Self::Escape,
            Self::Plain => Self::Plain,
            Self::Escape => match ch {
                '[' => Self::Csi,
                ']' => Self::Osc,
                'P' | '_' | '^' | 'X' => Self::Str,
                _ => Self::Plain,
            },
            Self::Csi if ('\x40'..='\x7e').contains(&ch) => Self::Plain,
            Self::Csi => Self::Csi,
            Self::Osc if ch == BEL => Self::Plain,
            Self::Osc | Self::Str if ch == ESC => Self::StrEscape,
            Self::Osc => Self::Osc,
            Self::Str => Self::Str,
            Self::StrEscape if ch == '\\' => Self::Plain,
            // A stray ESC inside a string starts a new escape rather than
            // falling back to visible text.
            Self::StrEscape => Self::Escape.next(ch),
        }
    }

    pub fn is_plain(self) -> bool {
        self == Self::Plain
    }
}

/// Columns taken by one visible character
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// On-screen width of `text`, skipping escape sequences and counting wide
/// characters as two columns.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut state = AnsiState::Plain;
    for ch in text.chars() {
        let prev = state;
        state = state.next(ch);
        if state.is_plain() && prev.is_plain() {
            width += char_width(ch);
        }
    }
    width
}

/// URI of an OSC 8 payload (`8;params;uri`), empty for the closing form
fn hyperlink_target(payload: &str) -> Option<&str> {
    let rest = payload.strip_prefix("8;")?;
    rest.split_once(';').map(|(_, uri)| uri)
}

/// Cut `text` to at most `max_width` visible columns.
///
/// Escape sequences before the cut are kept verbatim. A wide character that
/// would straddle the limit becomes a single space. When text is dropped
/// from a string that carried escapes, a reset is appended so the styling
/// that the dropped tail would have closed does not bleed past the result.
/// A hyperlink left open at the cut is closed the same way.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut width = 0;
    let mut state = AnsiState::Plain;
    let mut saw_escape = false;
    let mut osc: Option<String> = None;
    let mut link_open = false;

    for ch in text.chars() {
        let prev = state;
        state = state.next(ch);

        if !state.is_plain() || !prev.is_plain() {
            saw_escape = true;
            out.push(ch);
            match state {
                AnsiState::Osc if prev == AnsiState::Osc => {
                    if let Some(payload) = osc.as_mut() {
                        payload.push(ch);
                    }
                }
                AnsiState::Osc => osc = Some(String::new()),
                AnsiState::StrEscape => {}
                AnsiState::Plain => {
                    if let Some(target) = osc.take().as_deref().and_then(hyperlink_target) {
                        link_open = !target.is_empty();
                    }
                }
                _ => osc = None,
            }
            continue;
        }

        let w = char_width(ch);
        if width + w > max_width {
            if width < max_width {
                out.push(' ');
            }
            if link_open {
                out.push_str(HYPERLINK_CLOSE);
            }
            if saw_escape {
                out.push_str(RESET);
            }
            return out;
        }
        out.push(ch);
        width += w;
    }

    out
}
