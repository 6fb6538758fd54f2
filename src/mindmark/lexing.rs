//! Lexer
//!
//!     Converts source text into a lossless, position-tracked token sequence. The lexer
//!     never fails: characters that match no category are covered by ERROR tokens, so the
//!     concatenated token texts always reproduce the input (after CRLF is normalized to LF).
//!
//! Token Categories
//!
//!     Tried in priority order at each position (see [patterns]):
//!
//!         COMMENT      `// ...` to end of line, including leading spaces or tabs
//!         DATETIME     `2024-01-31 09:30`, optional `:SS` and `.mmm`
//!         DATE         `2024-01-31`
//!         IDENTITY     `[A-Za-z_][A-Za-z0-9_]*`
//!         STRING       quoted with `"`, `'` or `` ` ``, backslash escapes, may span lines
//!         PERCENTAGE   an optional number directly followed by `%`
//!         INTEGER      digits with optional sign and `_` separators
//!         FLOAT        as INTEGER, with a decimal point and/or exponent
//!         LINEBREAK    a run of `\n`
//!         SPACE        a run of spaces and tabs
//!         SYMBOL       a run of `! @ # $ ^ & ~ ? . \`
//!         PARENTHESIS  `( [ {` open, `) ] }` close
//!         COMMA        `,`
//!         ARROW        `->`
//!
//!     The sequence is lazy and forward-only: [`tokenize`] returns an iterator, and a second
//!     pass needs a fresh call.

pub mod lexer;
pub mod literals;
pub mod patterns;

pub use lexer::{normalize_line_endings, tokenize, Lexer};
