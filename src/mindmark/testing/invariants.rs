//! Checks that hold for every source
//!
//! Each check panics with a description of the first violation it finds.

use super::joined_text;
use crate::mindmark::ast::{Node, Position, Statement, Token, TokenKind};
use crate::mindmark::lexing::normalize_line_endings;
use crate::mindmark::parsing::Document;

/// Token texts concatenate back to the (LF-normalized) source
pub fn assert_lossless(source: &str, tokens: &[Token]) {
    assert_eq!(
        joined_text(tokens),
        normalize_line_endings(source),
        "token texts do not reproduce the source"
    );
}

/// The first token starts at 1:1 and every token starts where the previous one ended
pub fn assert_contiguous(tokens: &[Token]) {
    let mut expected = Position::new(1, 1);
    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(
            token.range.start, expected,
            "token {} ({}) does not start where the previous one ended",
            i, token
        );
        expected = token.range.end;
    }
}

/// The preamble plus the raw tokens of the top-level statements give back the whole
/// token stream. Every composite's text is the text of its raw tokens, and each child
/// lies inside its parent.
pub fn assert_coverage(doc: &Document) {
    assert!(
        doc.preamble
            .iter()
            .all(|t| matches!(t.kind, TokenKind::LineBreak { .. } | TokenKind::Comment)),
        "preamble holds more than line breaks and comments"
    );
    let mut covered = joined_text(&doc.preamble);
    for statement in &doc.statements {
        check_statement_span(statement);
        covered.push_str(&statement.text);
    }
    assert_eq!(covered, joined_text(&doc.tokens), "forest does not cover the token stream");
}

fn check_statement_span(statement: &Statement) {
    assert_eq!(
        statement.text,
        joined_text(&statement.nodes),
        "statement text differs from its raw tokens"
    );
    if let (Some(first), Some(last)) = (statement.nodes.first(), statement.nodes.last()) {
        assert_eq!(statement.range, first.range.to(&last.range));
    }
    for element in &statement.elements {
        check_node_span(element, statement);
    }
    for child in &statement.children {
        assert!(
            statement.range.encloses(&child.range),
            "child {} outside parent {}",
            child.range,
            statement.range
        );
        check_statement_span(child);
    }
}

fn check_node_span(node: &Node, statement: &Statement) {
    if let Node::Function(function) = node {
        assert_eq!(function.text, joined_text(&function.nodes));
        for parameter in &function.parameters {
            check_node_span(parameter, statement);
        }
    }
    assert!(
        statement.range.encloses(node.range()),
        "element {} outside statement {}",
        node.range(),
        statement.range
    );
}

/// Every child is indented strictly deeper than its parent
pub fn assert_indentation(forest: &[Statement]) {
    for statement in forest {
        for child in &statement.children {
            assert!(
                child.indent > statement.indent,
                "child indent {} not deeper than parent indent {} at {}",
                child.indent,
                statement.indent,
                child.range
            );
        }
        assert_indentation(&statement.children);
    }
}

/// Every FUNCTION starts with its name and an opening parenthesis and ends with the
/// matching closing one. Unterminated calls never survive as FUNCTION nodes.
pub fn assert_functions_well_formed(forest: &[Statement]) {
    fn check(nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Function(function) => {
                    let first = function.nodes.first().map(|t| t.text.as_str());
                    assert_eq!(first, Some(function.name.text.as_str()));
                    assert!(function
                        .nodes
                        .iter()
                        .any(|t| t.kind == TokenKind::ParenthesisOpen));
                    assert_eq!(
                        function.nodes.last().map(|t| &t.kind),
                        Some(&TokenKind::ParenthesisClose),
                        "call {} is not closed",
                        function.text
                    );
                    check(&function.parameters);
                }
                Node::Statement(statement) => check(&statement.elements),
                Node::Token(_) => {}
            }
        }
    }
    for statement in forest {
        check(&statement.elements);
        assert_functions_well_formed(&statement.children);
    }
}

/// Run every check on `source`
pub fn assert_all(source: &str) {
    let doc = Document::parse(source);

    assert_lossless(source, &doc.tokens);
    assert_contiguous(&doc.tokens);
    assert_coverage(&doc);
    assert_indentation(&doc.statements);
    assert_functions_well_formed(&doc.statements);
}
