//! Flat token listing, one token per line

use crate::mindmark::ast::Token;

pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
