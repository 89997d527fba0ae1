//! Formatting hooks used by the renderers

/// Formatting functions for each visual element of a diff.
///
/// Every method defaults to the identity, so an implementation only needs
/// to override the elements it wants to decorate. Renderers never decide
/// whether color is on; they call whatever they are handed.
pub trait Styles {
    /// Removed line text
    fn removed(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Added line text
    fn added(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Changed tokens inside a removed line
    fn removed_emphasis(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Changed tokens inside an added line
    fn added_emphasis(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Line numbers and gutter rules
    fn line_number(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Hunk separators and placeholders
    fn separator(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Context and other unchanged text
    fn plain(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Styles that leave all text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyles;

impl Styles for PlainStyles {}

#[cfg(test)]
pub(crate) mod testing {
    use super::Styles;

    /// Wraps each element in a readable marker, e.g. `[R:text]`
    pub struct MarkerStyles;

    impl Styles for MarkerStyles {
        fn removed(&self, text: &str) -> String {
            format!("[R:{text}]")
        }

        fn added(&self, text: &str) -> String {
            format!("[A:{text}]")
        }

        fn removed_emphasis(&self, text: &str) -> String {
            format!("[RE:{text}]")
        }

        fn added_emphasis(&self, text: &str) -> String {
            format!("[AE:{text}]")
        }

        fn line_number(&self, text: &str) -> String {
            format!("[N:{text}]")
        }

        fn separator(&self, text: &str) -> String {
            format!("[S:{text}]")
        }
    }
}
