//! Terminal palette and color resolution

use crate::render::Styles;
use crossterm::style::{Colored, StyledContent, Stylize};
use std::io::IsTerminal;

/// When to emit escape sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Color when stdout is a terminal, unless the environment says otherwise
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide whether to color output, consulting the environment for `Auto`.
    ///
    /// `FORCE_COLOR` wins over `NO_COLOR`, and both win over terminal
    /// detection.
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => resolve_auto(
                env_flag("FORCE_COLOR"),
                env_flag("NO_COLOR"),
                std::io::stdout().is_terminal(),
            ),
        }
    }
}

/// A variable counts once it is set, even to an empty value
fn env_flag(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

fn resolve_auto(force: bool, no_color: bool, is_tty: bool) -> bool {
    if force {
        return true;
    }
    if no_color {
        return false;
    }
    is_tty
}

/// ANSI palette for terminals.
///
/// Choosing this palette means color was already resolved on, so it
/// always emits color codes regardless of `NO_COLOR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyles;

/// Render styled content with crossterm's own `NO_COLOR` check switched off
fn paint(content: StyledContent<&str>) -> String {
    Colored::set_ansi_color_disabled(false);
    content.to_string()
}

impl Styles for AnsiStyles {
    fn removed(&self, text: &str) -> String {
        paint(text.dark_red())
    }

    fn added(&self, text: &str) -> String {
        paint(text.dark_green())
    }

    fn removed_emphasis(&self, text: &str) -> String {
        paint(text.dark_red().reverse())
    }

    fn added_emphasis(&self, text: &str) -> String {
        paint(text.dark_green().reverse())
    }

    fn line_number(&self, text: &str) -> String {
        paint(text.dim())
    }

    fn separator(&self, text: &str) -> String {
        paint(text.dim())
    }
}
