//! Statement builder
//!
//!     A small state machine that consumes tokens one at a time and assembles the
//!     statement forest. It holds three pieces of transient state:
//!
//!         - the statement stack: open statements from outermost to innermost
//!         - the function stack: open calls from outermost to innermost
//!         - the pending slot: an identity that may turn out to name a call
//!
//!     All of it is owned by the builder and dropped when [`StatementBuilder::finish`]
//!     returns, so finished nodes only ever own their children.
//!
//! States
//!
//!     NEWLINE     At the start of a line. Line breaks and comments are recorded against
//!                 the open statements. Leading whitespace sets the indentation: open
//!                 statements at the same or deeper indentation are closed and a new one
//!                 is opened under the nearest shallower ancestor. Any other token closes
//!                 every open statement and opens a new top-level one.
//!     STATEMENT   Inside a line. Tokens become elements of the innermost statement.
//!     FUNCTION    Inside a call. Tokens become parameters of the innermost call; a
//!                 closing parenthesis closes it.
//!
//! Pending Identity
//!
//!     An identity is held back until the next significant token shows whether it is
//!     followed by `(`. Whitespace and comments seen in the meantime are held with it, so
//!     that raw tokens are recorded in source order once the identity is committed.
//!
//! Raw Tokens
//!
//!     Each token is recorded in the raw `nodes` of the innermost open composite only. When
//!     a composite closes, its raw tokens are appended to its parent's. A parent never
//!     receives tokens of its own while a child is open, so every parent ends up with the
//!     complete, ordered token list of its span.
//!
//! Recovery
//!
//!     - `(` with nothing pending is an ERROR element ("Unexpected token").
//!     - `)` or `,` outside any call is recorded as an ERROR in the raw tokens
//!       ("Unexpected token in statement"); it does not become an element.
//!     - Calls still open when their line or the input ends become ERROR nodes
//!       ("Missing closing parenthesis"), innermost first, each in the slot its call
//!       occupied. A pending identity is not part of the failed call: it becomes a
//!       trailing element of the statement.

use crate::mindmark::ast::{ErrorReason, Function, Node, Statement, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Newline,
    Statement,
    Function,
}

/// An identity waiting for its next significant token, with the trivia seen after it
#[derive(Debug)]
struct Pending {
    identity: Token,
    trailing: Vec<Token>,
}

#[derive(Debug)]
pub struct StatementBuilder {
    forest: Vec<Statement>,
    statements: Vec<Statement>,
    functions: Vec<Function>,
    pending: Option<Pending>,
    /// Line breaks and comments before the first statement
    preamble: Vec<Token>,
    state: State,
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self {
            forest: Vec::new(),
            statements: Vec::new(),
            functions: Vec::new(),
            pending: None,
            preamble: Vec::new(),
            state: State::Newline,
        }
    }

    /// Feed the next token
    pub fn push(&mut self, token: Token) {
        match self.state {
            State::Newline => self.line_start(token),
            State::Statement => self.statement_token(token),
            State::Function => self.function_token(token),
        }
    }

    /// Close everything still open and return the top-level statements
    pub fn finish(mut self) -> Vec<Statement> {
        self.abandon_functions();
        self.flush_pending();
        self.close_statements_while(|_| true);
        self.forest
    }

    /// Raw tokens seen before any statement opened
    pub fn preamble(&self) -> &[Token] {
        &self.preamble
    }

    fn line_start(&mut self, token: Token) {
        match token.kind {
            TokenKind::LineBreak { .. } | TokenKind::Comment => self.record(token),
            TokenKind::Space { size } => {
                self.close_statements_while(|open| open.indent >= size);
                self.statements.push(Statement::open(size));
                self.record(token);
                self.state = State::Statement;
            }
            _ => {
                self.close_statements_while(|_| true);
                self.statements.push(Statement::open(0));
                self.state = State::Statement;
                self.statement_token(token);
            }
        }
    }

    fn statement_token(&mut self, token: Token) {
        match token.kind {
            TokenKind::LineBreak { .. } => {
                self.flush_pending();
                self.record(token);
                self.state = State::Newline;
            }
            TokenKind::ParenthesisClose | TokenKind::Comma => {
                self.flush_pending();
                self.record(token.into_error(ErrorReason::UnexpectedTokenInStatement));
            }
            _ => self.content_token(token),
        }
    }

    fn function_token(&mut self, token: Token) {
        match token.kind {
            TokenKind::LineBreak { .. } => {
                self.abandon_functions();
                self.flush_pending();
                self.record(token);
                self.state = State::Newline;
            }
            TokenKind::ParenthesisClose => self.close_function(token),
            TokenKind::Comma => {
                self.flush_pending();
                self.record(token);
            }
            _ => self.content_token(token),
        }
    }

    /// Tokens handled alike in statements and calls; the target is whichever is innermost
    fn content_token(&mut self, token: Token) {
        match token.kind {
            TokenKind::Space { .. } | TokenKind::Comment => match self.pending.as_mut() {
                Some(pending) => pending.trailing.push(token),
                None => self.record(token),
            },
            TokenKind::Identity => {
                self.flush_pending();
                self.pending = Some(Pending {
                    identity: token,
                    trailing: Vec::new(),
                });
            }
            TokenKind::ParenthesisOpen => match self.pending.take() {
                Some(pending) => self.open_function(pending, token),
                None => self.commit(token.into_error(ErrorReason::UnexpectedToken)),
            },
            _ => {
                self.flush_pending();
                self.commit(token);
            }
        }
    }

    /// Record a raw token in the innermost open composite
    fn record(&mut self, token: Token) {
        if let Some(function) = self.functions.last_mut() {
            function.nodes.push(token);
        } else if let Some(statement) = self.statements.last_mut() {
            statement.nodes.push(token);
        } else {
            self.preamble.push(token);
        }
    }

    /// Place a node in the innermost container, appending its raw tokens there too
    fn place(&mut self, node: Node, raw: &[Token]) {
        if let Some(function) = self.functions.last_mut() {
            function.nodes.extend_from_slice(raw);
            function.parameters.push(node);
        } else if let Some(statement) = self.statements.last_mut() {
            statement.nodes.extend_from_slice(raw);
            statement.elements.push(node);
        }
    }

    /// Record a token and add it as an element or parameter
    fn commit(&mut self, token: Token) {
        let raw = [token.clone()];
        self.place(Node::Token(token), &raw);
    }

    fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.commit(pending.identity);
            for trivia in pending.trailing {
                self.record(trivia);
            }
        }
    }

    fn open_function(&mut self, pending: Pending, paren: Token) {
        let mut function = Function::open(pending.identity.clone());
        function.nodes.push(pending.identity);
        function.nodes.extend(pending.trailing);
        function.nodes.push(paren);
        self.functions.push(function);
        self.state = State::Function;
    }

    fn close_function(&mut self, paren: Token) {
        self.flush_pending();
        self.record(paren);
        if let Some(mut function) = self.functions.pop() {
            function.seal();
            let raw = function.nodes.clone();
            self.place(Node::Function(function), &raw);
        }
        if self.functions.is_empty() {
            self.state = State::Statement;
        }
    }

    /// Turn every open call into an ERROR, innermost first. The pending identity stays
    /// pending, now at statement level.
    fn abandon_functions(&mut self) {
        while let Some(mut function) = self.functions.pop() {
            function.seal();
            let error = Token::error(
                function.range,
                function.text,
                ErrorReason::MissingClosingParenthesis,
            );
            self.place(Node::Token(error), &function.nodes);
        }
        if self.state == State::Function {
            self.state = State::Statement;
        }
    }

    fn close_statements_while(&mut self, should_close: impl Fn(&Statement) -> bool) {
        while self.statements.last().is_some_and(&should_close) {
            if !self.functions.is_empty() {
                self.abandon_functions();
            }
            self.flush_pending();
            let Some(mut statement) = self.statements.pop() else {
                break;
            };
            statement.seal();
            match self.statements.last_mut() {
                Some(parent) => {
                    parent.nodes.extend_from_slice(&statement.nodes);
                    parent.children.push(statement);
                }
                None => self.forest.push(statement),
            }
        }
    }
}

/// Build the forest from a token sequence
pub fn build<I: IntoIterator<Item = Token>>(tokens: I) -> Vec<Statement> {
    let mut builder = StatementBuilder::new();
    for token in tokens {
        builder.push(token);
    }
    builder.finish()
}
