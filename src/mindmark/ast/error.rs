//! In-band error reasons
//!
//!     Malformed input never aborts lexing or building. Problems are recorded as ERROR
//!     tokens at the place they occur, each tagged with one of the reasons below. Callers
//!     detect problems by looking for ERROR nodes in the output.

use std::fmt;

/// Why an ERROR token was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    /// Unscannable characters, or an opening parenthesis with no identity to call
    UnexpectedToken,
    /// A closing parenthesis or comma outside of any call
    UnexpectedTokenInStatement,
    /// A call that was still open when its line or the input ended
    MissingClosingParenthesis,
}

impl ErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::UnexpectedToken => "Unexpected token",
            ErrorReason::UnexpectedTokenInStatement => "Unexpected token in statement",
            ErrorReason::MissingClosingParenthesis => "Missing closing parenthesis",
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
