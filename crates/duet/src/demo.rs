//! Built-in sample shown by `duet --demo`

use duet_core::{DiffEngine, Layout};

const OLD: &str = r#"{
  "name": "Alice",
  "age": 30,
  "email": "alice@example.com",
  "hobbies": ["reading", "hiking"],
  "address": {
    "street": "123 Main St",
    "city": "Springfield",
    "state": "IL"
  }
}"#;

const NEW: &str = r#"{
  "name": "Bob",
  "age": 31,
  "email": "bob@example.com",
  "hobbies": ["reading", "cycling", "cooking"],
  "address": {
    "street": "456 Oak Ave",
    "city": "Springfield",
    "zip": "62704"
  }
}"#;

/// Render the sample in every layout, keeping the context and color
/// settings of `engine`.
pub fn render(engine: DiffEngine) -> String {
    let sections = [
        ("Inline", engine.with_layout(Layout::Inline)),
        (
            "Side-by-side, 100 columns",
            engine.with_layout(Layout::SideBySide).with_width(100),
        ),
        (
            "Side-by-side, full width",
            engine.with_layout(Layout::SideBySide).with_width(0),
        ),
        (
            "Prefer side-by-side",
            engine.with_layout(Layout::PreferSideBySide),
        ),
    ];

    let mut out = String::new();
    for (title, engine) in sections {
        out.push_str(&format!("=== {title} ===\n\n"));
        out.push_str(&engine.diff_strings(OLD, NEW));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_core::ColorMode;

    #[test]
    fn test_every_layout_is_shown() {
        let out = render(DiffEngine::new().with_color(ColorMode::Never));

        assert_eq!(out.matches("=== ").count(), 4);
        assert!(out.contains("=== Inline ===\n\n"));
        assert!(out.contains("=== Prefer side-by-side ===\n\n"));
    }

    #[test]
    fn test_inline_section_pairs_edits() {
        let out = render(DiffEngine::new().with_color(ColorMode::Never));
        let inline = out
            .split("=== Side-by-side, 100 columns ===")
            .next()
            .unwrap_or_default();

        assert!(inline.contains(r#"-   "age": 30,"#), "{inline}");
        assert!(inline.contains(r#"+   "age": 31,"#), "{inline}");
    }

    #[test]
    fn test_fixed_width_section_fits() {
        let out = render(DiffEngine::new().with_color(ColorMode::Never));
        let section = out
            .split("=== Side-by-side, 100 columns ===")
            .nth(1)
            .and_then(|rest| rest.split("=== Side-by-side, full width ===").next())
            .unwrap_or_default();

        assert!(section.contains(" │ "));
        for line in section.lines() {
            assert!(line.chars().count() <= 100, "{line}");
        }
    }
}
