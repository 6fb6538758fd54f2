//! Token patterns
//!
//!     All categories are compiled into one alternation of named groups. The regex engine
//!     searches for the leftmost position where any category matches, and at that position
//!     takes the first alternative that matches (leftmost-first semantics). The order of
//!     [`CATEGORIES`] is therefore the priority order:
//!
//!         comment, datetime, date, identity, string, percentage, number,
//!         newline, space, symbol, open, close, comma, arrow
//!
//!     Each category's own pattern decides how much it consumes; categories never compete
//!     on length.
//!
//!     Strings come in three flavours, one group per quote character, since the engine has
//!     no backreferences to match the closing quote against the opening one.

use crate::mindmark::ast::QuoteMarker;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Signed number with `_` separators, optional fraction and exponent
macro_rules! number {
    () => {
        r"[+-]?(?:[0-9][0-9_]*\.[0-9][0-9_]*|[0-9][0-9_]*\.|\.[0-9][0-9_]*|[0-9][0-9_]*)(?:[eE][+-]?[0-9][0-9_]*)?"
    };
}

/// Category a match belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Comment,
    DateTime,
    Date,
    Identity,
    String(QuoteMarker),
    Percentage,
    Number,
    Newline,
    Space,
    Symbol,
    Open,
    Close,
    Comma,
    Arrow,
}

impl Category {
    /// Whitespace categories don't swallow a preceding run of unscannable characters
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Category::Newline | Category::Space)
    }

    /// The category whose group participated in a match
    pub fn of(captures: &Captures<'_>) -> Option<Category> {
        CATEGORIES
            .iter()
            .find(|(group, _, _)| captures.name(group).is_some())
            .map(|(_, category, _)| *category)
    }
}

/// Group name, category and pattern, in priority order
pub const CATEGORIES: [(&str, Category, &str); 16] = [
    ("comment", Category::Comment, r"[ \t]*//[^\n]*"),
    (
        "datetime",
        Category::DateTime,
        r"[0-9]{4}-[0-9]{1,2}-[0-9]{1,2} [0-9]{1,2}:[0-9]{1,2}(?::[0-9]{1,2}(?:\.[0-9]{1,3})?)?",
    ),
    ("date", Category::Date, r"[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}"),
    ("identity", Category::Identity, r"[A-Za-z_][A-Za-z0-9_]*"),
    ("double", Category::String(QuoteMarker::Double), r#""(?:\\.|[^\\"])*""#),
    ("single", Category::String(QuoteMarker::Single), r"'(?:\\.|[^\\'])*'"),
    ("backtick", Category::String(QuoteMarker::Backtick), r"`(?:\\.|[^\\`])*`"),
    // Ahead of number: tried the other way round, `50%` would lex as INTEGER then `%`
    ("percentage", Category::Percentage, concat!("(?:", number!(), ")?%")),
    ("number", Category::Number, number!()),
    ("newline", Category::Newline, r"\n+"),
    ("space", Category::Space, r"[ \t]+"),
    ("symbol", Category::Symbol, r"[!@#$^&~?.\\]+"),
    ("open", Category::Open, r"[(\[{]"),
    ("close", Category::Close, r"[)\]}]"),
    ("comma", Category::Comma, ","),
    ("arrow", Category::Arrow, "->"),
];

/// The combined token pattern
pub static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = CATEGORIES
        .iter()
        .map(|(group, _, pattern)| format!("(?P<{}>{})", group, pattern))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("token pattern is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    fn first_category(text: &str) -> Option<(Category, &str)> {
        let captures = TOKEN_PATTERN.captures(text)?;
        let matched = captures.get(0)?.as_str();
        Some((Category::of(&captures)?, matched))
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            first_category("2024-01-02 10:30 rest"),
            Some((Category::DateTime, "2024-01-02 10:30"))
        );
        assert_eq!(first_category("2024-01-02"), Some((Category::Date, "2024-01-02")));
        assert_eq!(first_category("12.5% off"), Some((Category::Percentage, "12.5%")));
        assert_eq!(first_category("1_000e3"), Some((Category::Number, "1_000e3")));
        assert_eq!(first_category("  // note"), Some((Category::Comment, "  // note")));
        assert_eq!(first_category("  x"), Some((Category::Space, "  ")));
        assert_eq!(first_category("->"), Some((Category::Arrow, "->")));
    }

    #[test]
    fn test_strings_close_on_their_own_quote() {
        assert_eq!(
            first_category(r#""it's" tail"#),
            Some((Category::String(QuoteMarker::Double), r#""it's""#))
        );
        assert_eq!(
            first_category(r"'a\'b'"),
            Some((Category::String(QuoteMarker::Single), r"'a\'b'"))
        );
    }

    #[test]
    fn test_leftmost_match_skips_unknown_characters() {
        let captures = TOKEN_PATTERN.captures("|1").expect("matches");
        assert_eq!(captures.get(0).map(|m| m.start()), Some(1));
        assert_eq!(Category::of(&captures), Some(Category::Number));
    }
}
