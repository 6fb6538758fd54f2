//! Testing utilities
//!
//!     Shared by the unit tests and the integration tests under `tests/`.
//!
//! Fluent Assertions
//!
//!     [`assert_forest`] walks a forest with closures, one level per closure, instead of
//!     nested `match`es and index juggling:
//!
//!         assert_forest(&parse("name\n    task(1)"))
//!             .statement_count(1)
//!             .statement(0, |s| {
//!                 s.indent(0).child(0, |c| {
//!                     c.element(0, |e| e.function("task").parameter_count(1));
//!                 });
//!             });
//!
//! Invariants
//!
//!     [`invariants`] holds checks that hold for every input, whatever its shape: lossless
//!     token text, contiguous ranges, full coverage of the source by the forest, strictly
//!     increasing indentation and well-formed calls. Property tests run them over random
//!     input.

mod assertions;
pub mod invariants;

pub use assertions::{
    assert_forest, ForestAssertion, FunctionAssertion, NodeAssertion, StatementAssertion,
};

use crate::mindmark::ast::{NodeKind, Token};
use crate::mindmark::lexing::tokenize;

/// Kinds of the tokens of `source`, in order
pub fn token_kinds(source: &str) -> Vec<NodeKind> {
    tokenize(source).map(|t| t.node_kind()).collect()
}

/// Concatenated text of a token run
pub fn joined_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
