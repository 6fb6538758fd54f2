//! Statement building
//!
//!     Turns the token stream into a forest of statements. Indentation decides nesting: a
//!     line indented deeper than the line above it becomes a child of that line's
//!     statement. Within a line, an identity directly followed by `(` opens a call whose
//!     parameters run to the matching `)`.
//!
//!     The work is done by [`StatementBuilder`], a push-driven state machine, so callers
//!     can feed it from any token source. [`parse`] and [`build`] wrap the common cases.
//!
//!         let forest = parse("name\n    task(1, 2)\n");
//!         assert_eq!(forest[0].children.len(), 1);
//!
//!     Malformed input still produces a forest; problems show up as ERROR tokens.

pub mod builder;

pub use builder::{build, StatementBuilder};

use crate::mindmark::ast::{ErrorReason, Node, Statement, Token};
use crate::mindmark::lexing::tokenize;

/// Tokenize and build `source`
pub fn parse(source: &str) -> Vec<Statement> {
    build(tokenize(source))
}

/// A parsed source: the flat token stream and the forest built from it
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub tokens: Vec<Token>,
    /// Line breaks and comments before the first statement
    pub preamble: Vec<Token>,
    pub statements: Vec<Statement>,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let tokens: Vec<Token> = tokenize(source).collect();
        let mut builder = StatementBuilder::new();
        for token in &tokens {
            builder.push(token.clone());
        }
        let preamble = builder.preamble().to_vec();
        let statements = builder.finish();
        Self {
            tokens,
            preamble,
            statements,
        }
    }

    /// Every ERROR in the document, in source order
    ///
    /// Raw token lists hold the lexer's errors and the ones the builder substituted for
    /// misplaced punctuation. Unterminated calls only exist in the structural view.
    pub fn errors(&self) -> Vec<&Token> {
        fn unterminated<'a>(nodes: &'a [Node], found: &mut Vec<&'a Token>) {
            for node in nodes {
                match node {
                    Node::Token(token)
                        if token.error_reason() == Some(ErrorReason::MissingClosingParenthesis) =>
                    {
                        found.push(token)
                    }
                    Node::Function(function) => unterminated(&function.parameters, found),
                    Node::Statement(statement) => unterminated(&statement.elements, found),
                    _ => {}
                }
            }
        }
        fn walk<'a>(statement: &'a Statement, found: &mut Vec<&'a Token>) {
            unterminated(&statement.elements, found);
            for child in &statement.children {
                walk(child, found);
            }
        }

        let mut found = Vec::new();
        for statement in &self.statements {
            found.extend(statement.nodes.iter().filter(|t| t.error_reason().is_some()));
            walk(statement, &mut found);
        }
        found.sort_by_key(|t| t.range.start);
        found
    }

    /// Number of statements at every depth
    pub fn statement_count(&self) -> usize {
        fn count(statements: &[Statement]) -> usize {
            statements.iter().map(|s| 1 + count(&s.children)).sum()
        }
        count(&self.statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_counts() {
        let doc = Document::parse("a\n  b\n  c |\nd");
        assert_eq!(doc.statement_count(), 4);
        assert_eq!(doc.statements.len(), 2);
        assert_eq!(doc.errors().len(), 1);
    }

    #[test]
    fn test_errors_include_builder_recovery() {
        let doc = Document::parse("f(a\n1 )");
        let reasons: Vec<ErrorReason> = doc
            .errors()
            .iter()
            .filter_map(|t| t.error_reason())
            .collect();
        assert_eq!(
            reasons,
            vec![
                ErrorReason::MissingClosingParenthesis,
                ErrorReason::UnexpectedTokenInStatement,
            ]
        );
    }

    #[test]
    fn test_preamble() {
        let doc = Document::parse("\n  // lead\nx\n");
        assert_eq!(doc.preamble.len(), 3);
        assert_eq!(doc.statements[0].text, "x\n");
    }

    #[test]
    fn test_parse_matches_document() {
        let source = "x(1)\n  y\n";
        assert_eq!(parse(source), Document::parse(source).statements);
    }
}
