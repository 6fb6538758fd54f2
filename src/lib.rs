//! # mindmark
//!
//! Lexer and statement builder for mindmark, an indentation-based outline notation.
//!
//! A source is split into position-tracked tokens, then assembled into a forest of
//! statements: one per line, nested by indentation, with `name(arg, ...)` calls parsed
//! inside each line. Nothing is ever rejected; malformed input yields ERROR nodes in
//! place, and the token texts always add up to the source.
//!
//! ## Testing
//!
//! Shared assertion helpers live in the [testing module](mindmark::testing).

pub mod mindmark;
