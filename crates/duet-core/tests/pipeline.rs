//! End-to-end rendering through `DiffEngine`

use duet_core::render::visible_width;
use duet_core::{AnsiStyles, DiffEngine, Layout, PlainStyles};
use pretty_assertions::assert_eq;
use regex::Regex;

/// Replace SGR sequences with `«params»` so colored output is readable
fn ansi_to_markers(text: &str) -> String {
    let sgr = Regex::new(r"\x1b\[([0-9;]*)m").unwrap();
    sgr.replace_all(text, "«$1»").into_owned()
}

fn strip_ansi(text: &str) -> String {
    let sgr = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    sgr.replace_all(text, "").into_owned()
}

fn plain(old: &str, new: &str) -> String {
    DiffEngine::new().render_with(old, new, &PlainStyles)
}

#[test]
fn test_single_substitution() {
    assert_eq!(
        plain("a\nb\nc", "a\nB\nc"),
        "1 1 │   a\n2   │ - b\n  2 │ + B\n3 3 │   c\n"
    );
}

#[test]
fn test_all_added() {
    let result = plain("", "a\nb\nc");
    assert_eq!(result, "  1 │ + a\n  2 │ + b\n  3 │ + c\n");
    assert!(!result.contains("- "));
}

#[test]
fn test_all_removed() {
    assert_eq!(plain("a\nb", ""), "1   │ - a\n2   │ - b\n");
}

#[test]
fn test_trailing_newline_is_a_change() {
    assert_eq!(plain("hello\n", "hello"), "1 1 │   hello\n2   │ - \n");
}

#[test]
fn test_identical_texts() {
    assert_eq!(plain("same\ntext", "same\ntext"), "");
    assert_eq!(plain("", ""), "");
    assert_eq!(duet_core::diff("x", "x"), "");
}

#[test]
fn test_side_by_side_single_row() {
    let engine = DiffEngine::new()
        .with_layout(Layout::SideBySide)
        .with_width(80);
    let result = engine.render_with("hello world", "hello earth", &PlainStyles);

    assert_eq!(result, "1 - hello world │ 1 + hello earth\n");
    assert_eq!(result.matches(" │ ").count(), 1);
}

#[test]
fn test_long_line_with_trailing_change() {
    let old = format!("{}a", "x ".repeat(300));
    let new = format!("{}b", "x ".repeat(300));
    let result = plain(&old, &new);

    assert!(result.contains(&format!("- {old}")));
    assert!(result.contains(&format!("+ {new}")));
}

#[test]
fn test_long_single_word_line() {
    let old = "a".repeat(600);
    let new = format!("{}b", "a".repeat(599));
    let result = plain(&old, &new);

    assert!(result.contains(&old));
    assert!(result.contains(&new));
}

#[test]
fn test_multiple_hunks() {
    let engine = DiffEngine::new().with_context(1);
    let result = engine.render_with(
        "a\nb\nc\nd\ne\nf\ng\nh\ni\nj\nk\nl",
        "a\nB\nc\nd\ne\nf\ng\nh\ni\nj\nK\nl",
        &PlainStyles,
    );

    assert_eq!(
        result,
        concat!(
            " 1  1 │   a\n",
            " 2    │ - b\n",
            "    2 │ + B\n",
            " 3  3 │   c\n",
            "\n",
            "~~~ 6 lines skipped ~~~\n",
            "\n",
            "10 10 │   j\n",
            "11    │ - k\n",
            "   11 │ + K\n",
            "12 12 │   l\n",
        )
    );
}

#[test]
fn test_context_zero() {
    let engine = DiffEngine::new().with_context(0);
    let result = engine.render_with("a\nb\nc\nd\ne", "a\nB\nc\nD\ne", &PlainStyles);

    assert_eq!(
        result,
        concat!(
            "~~~ 1 line skipped ~~~\n",
            "\n",
            "2   │ - b\n",
            "  2 │ + B\n",
            "\n",
            "~~~ 1 line skipped ~~~\n",
            "\n",
            "4   │ - d\n",
            "  4 │ + D\n",
        )
    );
}

#[test]
fn test_paired_json_line() {
    let engine = DiffEngine::new();
    let result = engine.render_with(
        r#"{"name": "Alice", "age": 30, "city": "NYC"}"#,
        r#"{"name": "Alice", "age": 31, "city": "NYC"}"#,
        &AnsiStyles,
    );
    assert_eq!(
        strip_ansi(&result),
        concat!(
            r#"1   │ - {"name": "Alice", "age": 30, "city": "NYC"}"#,
            "\n",
            r#"  1 │ + {"name": "Alice", "age": 31, "city": "NYC"}"#,
            "\n",
        )
    );
    // Only the changed number is reversed
    let markers = ansi_to_markers(&result);
    assert_eq!(markers.matches("«7»").count(), 2, "{markers}");
}

#[test]
fn test_colored_side_by_side_closes_styles() {
    let old = r#"{
  "name": "Alice",
  "hobbies": ["reading", "hiking"],
  "address": {
    "city": "Springfield",
  }
}"#;
    let new = r#"{
  "name": "Bob",
  "hobbies": ["reading", "cycling", "cooking", "gaming"],
  "address": {
    "city": "Springfield",
  }
}"#;
    let engine = DiffEngine::new()
        .with_layout(Layout::SideBySide)
        .with_width(72);
    let colored = engine.render_with(old, new, &AnsiStyles);
    let uncolored = engine.render_with(old, new, &PlainStyles);

    assert_eq!(strip_ansi(&colored), uncolored);

    let sgr = Regex::new(r"\x1b\[([0-9;]*)m").unwrap();
    for line in colored.lines() {
        assert!(visible_width(line) <= 72, "{}", ansi_to_markers(line));
        if let Some(last) = sgr.captures_iter(line).last() {
            assert_eq!(&last[1], "0", "{}", ansi_to_markers(line));
        }
    }
    assert!(uncolored.contains('…'), "{uncolored}");
}

#[test]
fn test_prefer_side_by_side() {
    let engine = DiffEngine::new().with_layout(Layout::PreferSideBySide);

    let fits = engine
        .with_width(200)
        .render_with("hello world", "hello earth", &PlainStyles);
    assert_eq!(fits, "1 - hello world │ 1 + hello earth\n");

    let old = "hello world with some extra content here";
    let new = "hello earth with some extra content here";
    let narrow = engine.with_width(40).render_with(old, new, &PlainStyles);
    assert_eq!(narrow, format!("1   │ - {old}\n  1 │ + {new}\n"));
}

#[test]
fn test_side_by_side_matches_inline_content() {
    let old = "fn main() {\n    println!(\"hi\");\n}\n";
    let new = "fn main() {\n    println!(\"hello\");\n    return;\n}\n";
    let engine = DiffEngine::new().with_layout(Layout::SideBySide);
    let result = engine.render_with(old, new, &PlainStyles);

    assert_eq!(
        result,
        concat!(
            "1   fn main() {         │ 1   fn main() {\n",
            "2 -     println!(\"hi\"); │ 2 +     println!(\"hello\");\n",
            "  ~                     │ 3 +     return;\n",
            "3   }                   │ 4   }\n",
            "4                       │ 5   \n",
        )
    );
}

#[test]
fn test_json_output_shape() {
    let engine = DiffEngine::new();
    let hunks = engine.hunks("a\nold line\nc", "a\nnew line\nc");
    let annotated = duet_core::annotate_hunks(&hunks);
    let json: serde_json::Value = serde_json::to_value(&annotated).unwrap();

    assert_eq!(json[0]["old_start"], 1);
    assert_eq!(json[0]["skipped"], 0);
    assert_eq!(json[0]["lines"][1]["kind"], "delete");
    assert_eq!(json[0]["pairs"][0]["old_index"], 1);
    assert_eq!(json[0]["pairs"][0]["new_index"], 2);
    assert_eq!(json[0]["pairs"][0]["alignment"]["old"][0]["op"], "delete");
}
