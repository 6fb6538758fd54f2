//! The scanning lexer
//!
//!     [`Lexer`] is a pull-based iterator over [`Token`]s. Each call to `next` searches the
//!     token pattern from the end of the previous token and emits at most one token; a match
//!     that had to wait behind an error is kept in a one-slot queue.
//!
//! Gaps
//!
//!     When the next match does not start where the previous token ended, the characters in
//!     between matched nothing. What happens to them depends on the match that follows:
//!
//!         - whitespace or newline: one ERROR for the gap alone, then the whitespace token.
//!         - anything else: one ERROR covering the gap and the match together. The match is
//!           not emitted on its own, so `|1` is a single ERROR rather than ERROR + INTEGER.
//!
//!     Characters after the last match become a final ERROR. Every character of the input
//!     ends up in exactly one token, and concatenating the token texts reproduces the
//!     (LF-normalized) source.
//!
//! Position Tracking
//!
//!     The lexer keeps the current row and the byte offset where that row starts. Columns
//!     are computed by counting characters from the row start. Only tokens whose text
//!     contains line breaks (newline runs, multi-line strings, errors swallowing either)
//!     move the row forward.

use super::literals;
use super::patterns::{Category, TOKEN_PATTERN};
use crate::mindmark::ast::{ErrorReason, Position, Range, Token, TokenKind};

/// Replace CRLF with LF so column arithmetic only deals with one line terminator
pub fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n")
}

/// Lazily tokenize `source`
pub fn tokenize(source: &str) -> Lexer {
    Lexer::new(source)
}

pub struct Lexer {
    source: String,
    /// Byte offset where the last emitted token ended
    pos: usize,
    row: usize,
    /// Byte offset of the first character of `row`
    row_start: usize,
    queued: Option<(Category, usize, usize)>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: normalize_line_endings(source),
            pos: 0,
            row: 1,
            row_start: 0,
            queued: None,
        }
    }

    /// The normalized source being scanned
    pub fn source(&self) -> &str {
        &self.source
    }

    fn column_at(&self, offset: usize) -> usize {
        self.source[self.row_start..offset].chars().count() + 1
    }

    /// Range of `start..end`, advancing row tracking past any line breaks inside it
    fn advance(&mut self, start: usize, end: usize) -> Range {
        let start_pos = Position::new(self.row, self.column_at(start));
        let text = &self.source[start..end];
        if let Some(last_break) = text.rfind('\n') {
            self.row += text.matches('\n').count();
            self.row_start = start + last_break + 1;
        }
        let end_pos = Position::new(self.row, self.column_at(end));
        self.pos = end;
        Range::new(start_pos, end_pos)
    }

    fn error(&mut self, start: usize, end: usize) -> Token {
        let range = self.advance(start, end);
        Token::error(range, &self.source[start..end], ErrorReason::UnexpectedToken)
    }

    fn emit(&mut self, category: Category, start: usize, end: usize) -> Token {
        let range = self.advance(start, end);
        let text = &self.source[start..end];
        let kind = match category {
            Category::Comment => TokenKind::Comment,
            Category::DateTime => literals::datetime(text),
            Category::Date => literals::date(text),
            Category::Identity => TokenKind::Identity,
            Category::String(quote) => TokenKind::String { quote },
            Category::Percentage => literals::percentage(text),
            Category::Number => literals::number(text),
            Category::Newline => TokenKind::LineBreak { count: text.len() },
            Category::Space => TokenKind::Space {
                size: text.chars().count(),
            },
            Category::Symbol => TokenKind::Symbol,
            Category::Open => TokenKind::ParenthesisOpen,
            Category::Close => TokenKind::ParenthesisClose,
            Category::Comma => TokenKind::Comma,
            Category::Arrow => TokenKind::Arrow,
        };
        Token::new(kind, range, text)
    }

    /// Next match at or after the current position, as (category, start, end)
    fn find_next(&self) -> Option<(Category, usize, usize)> {
        let captures = TOKEN_PATTERN.captures_at(&self.source, self.pos)?;
        let matched = captures.get(0)?;
        let category = Category::of(&captures)?;
        Some((category, matched.start(), matched.end()))
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some((category, start, end)) = self.queued.take() {
            return Some(self.emit(category, start, end));
        }
        if self.pos >= self.source.len() {
            return None;
        }

        let gap_start = self.pos;
        match self.find_next() {
            None => Some(self.error(gap_start, self.source.len())),
            Some((category, start, end)) if start == gap_start => {
                Some(self.emit(category, start, end))
            }
            Some((category, start, end)) if category.is_whitespace() => {
                self.queued = Some((category, start, end));
                Some(self.error(gap_start, start))
            }
            Some((_, _, end)) => Some(self.error(gap_start, end)),
        }
    }
}
