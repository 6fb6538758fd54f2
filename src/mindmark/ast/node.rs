//! Node model
//!
//!     The node set is closed: terminals produced by the lexer ([`Token`]) and two
//!     composites produced by the builder ([`Statement`] and [`Function`]). [`Node`] is the
//!     sum of the three, used wherever a container may hold either kind (statement
//!     elements, function parameters).
//!
//! Raw Tokens
//!
//!     Composites keep two views of their content. The structural view (`elements`,
//!     `children`, `parameters`, `name`) is what consumers walk. The raw view, `nodes`, is the
//!     exhaustive ordered list of every token inside the composite's lexical span,
//!     descendants included. Concatenating the text of `nodes` gives back the exact source
//!     slice, which is also the composite's `text`.
//!
//! Canonical Rendering
//!
//!     `Display` on every node produces the debug format downstream snapshot tests rely on:
//!
//!         IDENTITY[name]@(2:1)-(2:5)
//!         SPACE[size=4]@(3:1)-(3:5)
//!         INTEGER[123]@(1:1)-(1:4)
//!         ERROR[|1]@(1:1)-(1:3):Unexpected token
//!
//!     Statements and functions render over several lines, nesting their blocks by four
//!     spaces:
//!
//!         STATEMENT[indent=0]@(1:1)-(1:10)
//!         ELEMENTS:
//!             FUNCTION[func]@(1:1)-(1:10)
//!             PARAMETERS:
//!                 IDENTITY[arg]@(1:6)-(1:9)

use super::error::ErrorReason;
use super::literals::{CalendarDate, CalendarDateTime};
use super::range::Range;
use std::fmt;

const NESTING: &str = "    ";

/// Quote character that delimits a STRING token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteMarker {
    Double,
    Single,
    Backtick,
}

impl QuoteMarker {
    pub fn as_char(&self) -> char {
        match self {
            QuoteMarker::Double => '"',
            QuoteMarker::Single => '\'',
            QuoteMarker::Backtick => '`',
        }
    }
}

/// Tag of every node kind, terminal or composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    Comment,
    Space,
    LineBreak,
    ParenthesisOpen,
    ParenthesisClose,
    Comma,
    Symbol,
    Identity,
    String,
    Integer,
    Float,
    Percentage,
    Date,
    DateTime,
    Arrow,
    Error,
    Statement,
    Function,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Comment => "COMMENT",
            NodeKind::Space => "SPACE",
            NodeKind::LineBreak => "LINEBREAK",
            NodeKind::ParenthesisOpen => "PARENTHESIS_OPEN",
            NodeKind::ParenthesisClose => "PARENTHESIS_CLOSE",
            NodeKind::Comma => "COMMA",
            NodeKind::Symbol => "SYMBOL",
            NodeKind::Identity => "IDENTITY",
            NodeKind::String => "STRING",
            NodeKind::Integer => "INTEGER",
            NodeKind::Float => "FLOAT",
            NodeKind::Percentage => "PERCENTAGE",
            NodeKind::Date => "DATE",
            NodeKind::DateTime => "DATETIME",
            NodeKind::Arrow => "ARROW",
            NodeKind::Error => "ERROR",
            NodeKind::Statement => "STATEMENT",
            NodeKind::Function => "FUNCTION",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind and payload of a terminal
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Comment,
    Space { size: usize },
    LineBreak { count: usize },
    ParenthesisOpen,
    ParenthesisClose,
    Comma,
    Symbol,
    Identity,
    String { quote: QuoteMarker },
    Integer { value: i64 },
    Float { value: f64 },
    /// `value` is the fraction, so `50%` holds 0.5; the written form stays in the token text
    Percentage { value: f64 },
    Date { value: CalendarDate },
    DateTime { value: CalendarDateTime },
    Arrow,
    Error { reason: ErrorReason },
}

impl TokenKind {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            TokenKind::Comment => NodeKind::Comment,
            TokenKind::Space { .. } => NodeKind::Space,
            TokenKind::LineBreak { .. } => NodeKind::LineBreak,
            TokenKind::ParenthesisOpen => NodeKind::ParenthesisOpen,
            TokenKind::ParenthesisClose => NodeKind::ParenthesisClose,
            TokenKind::Comma => NodeKind::Comma,
            TokenKind::Symbol => NodeKind::Symbol,
            TokenKind::Identity => NodeKind::Identity,
            TokenKind::String { .. } => NodeKind::String,
            TokenKind::Integer { .. } => NodeKind::Integer,
            TokenKind::Float { .. } => NodeKind::Float,
            TokenKind::Percentage { .. } => NodeKind::Percentage,
            TokenKind::Date { .. } => NodeKind::Date,
            TokenKind::DateTime { .. } => NodeKind::DateTime,
            TokenKind::Arrow => NodeKind::Arrow,
            TokenKind::Error { .. } => NodeKind::Error,
        }
    }
}

/// A terminal node: one contiguous slice of the source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, range: Range, text: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            text: text.into(),
        }
    }

    pub fn error(range: Range, text: impl Into<String>, reason: ErrorReason) -> Self {
        Self::new(TokenKind::Error { reason }, range, text)
    }

    /// The same span re-tagged as an ERROR
    pub fn into_error(self, reason: ErrorReason) -> Self {
        Self::error(self.range, self.text, reason)
    }

    pub fn node_kind(&self) -> NodeKind {
        self.kind.node_kind()
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.node_kind() == kind
    }

    pub fn error_reason(&self) -> Option<ErrorReason> {
        match self.kind {
            TokenKind::Error { reason } => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.node_kind();
        match &self.kind {
            TokenKind::Space { size } => write!(f, "{}[size={}]@{}", kind, size, self.range),
            TokenKind::LineBreak { count } => write!(f, "{}[count={}]@{}", kind, count, self.range),
            TokenKind::Integer { value } => write!(f, "{}[{}]@{}", kind, value, self.range),
            TokenKind::Float { value } => {
                write!(f, "{}[{}]@{}", kind, FloatText(*value), self.range)
            }
            TokenKind::Error { reason } => {
                write!(f, "{}[{}]@{}:{}", kind, self.text, self.range, reason)
            }
            _ => write!(f, "{}[{}]@{}", kind, self.text, self.range),
        }
    }
}

/// Float rendering with `Infinity`, `-Infinity` and `NaN` for non-finite values
pub(crate) struct FloatText(pub f64);

impl fmt::Display for FloatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            write!(f, "{}", value)
        }
    }
}

/// Range and text of a composite, derived from its raw tokens
fn derive_span(nodes: &[Token]) -> (Range, String) {
    match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) => (
            first.range.to(&last.range),
            nodes.iter().map(|t| t.text.as_str()).collect(),
        ),
        _ => (Range::default(), String::new()),
    }
}

/// An indentation-scoped line of content and the statements nested under it
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Width of the line's leading whitespace
    pub indent: usize,
    pub range: Range,
    pub text: String,
    pub elements: Vec<Node>,
    pub children: Vec<Statement>,
    /// Every raw token in the statement's span, descendants included
    pub nodes: Vec<Token>,
}

impl Statement {
    /// An open statement: empty contents, range and text not yet derived
    pub fn open(indent: usize) -> Self {
        Self {
            indent,
            range: Range::default(),
            text: String::new(),
            elements: Vec::new(),
            children: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Compute range and text from the raw tokens. Called once, when the statement closes.
    pub(crate) fn seal(&mut self) {
        let (range, text) = derive_span(&self.nodes);
        self.range = range;
        self.text = text;
    }

    pub(crate) fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        write!(
            f,
            "{}{}[indent={}]@{}",
            indent,
            NodeKind::Statement,
            self.indent,
            self.range
        )?;
        let nested = format!("{}{}", indent, NESTING);
        if !self.elements.is_empty() {
            write!(f, "\n{}ELEMENTS:", indent)?;
            for element in &self.elements {
                writeln!(f)?;
                element.write_indented(f, &nested)?;
            }
        }
        if !self.children.is_empty() {
            write!(f, "\n{}CHILDREN:", indent)?;
            for child in &self.children {
                writeln!(f)?;
                child.write_indented(f, &nested)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, "")
    }
}

/// A call expression: an identity followed by a parenthesized parameter list
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Token,
    pub parameters: Vec<Node>,
    pub range: Range,
    pub text: String,
    pub nodes: Vec<Token>,
}

impl Function {
    pub fn open(name: Token) -> Self {
        Self {
            name,
            parameters: Vec::new(),
            range: Range::default(),
            text: String::new(),
            nodes: Vec::new(),
        }
    }

    pub(crate) fn seal(&mut self) {
        let (range, text) = derive_span(&self.nodes);
        self.range = range;
        self.text = text;
    }

    pub(crate) fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        write!(
            f,
            "{}{}[{}]@{}",
            indent,
            NodeKind::Function,
            self.name.text,
            self.range
        )?;
        if !self.parameters.is_empty() {
            let nested = format!("{}{}", indent, NESTING);
            write!(f, "\n{}PARAMETERS:", indent)?;
            for parameter in &self.parameters {
                writeln!(f)?;
                parameter.write_indented(f, &nested)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, "")
    }
}

/// Any node: the closed union of terminals and composites
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Token(Token),
    Statement(Statement),
    Function(Function),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Token(token) => token.node_kind(),
            Node::Statement(_) => NodeKind::Statement,
            Node::Function(_) => NodeKind::Function,
        }
    }

    pub fn range(&self) -> &Range {
        match self {
            Node::Token(token) => &token.range,
            Node::Statement(statement) => &statement.range,
            Node::Function(function) => &function.range,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Node::Token(token) => &token.text,
            Node::Statement(statement) => &statement.text,
            Node::Function(function) => &function.text,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Node::Function(function) => Some(function),
            _ => None,
        }
    }

    pub(crate) fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        match self {
            Node::Token(token) => write!(f, "{}{}", indent, token),
            Node::Statement(statement) => statement.write_indented(f, indent),
            Node::Function(function) => function.write_indented(f, indent),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, "")
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::Token(token)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Node::Statement(statement)
    }
}

impl From<Function> for Node {
    fn from(function: Function) -> Self {
        Node::Function(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, text: &str, start: usize) -> Token {
        let end = start + text.chars().count();
        Token::new(kind, Range::from_coords(1, start, 1, end), text)
    }

    #[test]
    fn test_terminal_rendering() {
        assert_eq!(
            token(TokenKind::Identity, "name", 1).to_string(),
            "IDENTITY[name]@(1:1)-(1:5)"
        );
        assert_eq!(
            token(TokenKind::Space { size: 4 }, "    ", 1).to_string(),
            "SPACE[size=4]@(1:1)-(1:5)"
        );
        assert_eq!(
            token(TokenKind::Integer { value: 123 }, "1_2_3", 1).to_string(),
            "INTEGER[123]@(1:1)-(1:6)"
        );
        assert_eq!(
            token(TokenKind::Float { value: 123.456 }, "123.456", 1).to_string(),
            "FLOAT[123.456]@(1:1)-(1:8)"
        );
        assert_eq!(
            token(TokenKind::Float { value: f64::INFINITY }, "1e400", 1).to_string(),
            "FLOAT[Infinity]@(1:1)-(1:6)"
        );
        assert_eq!(
            token(TokenKind::Float { value: f64::NEG_INFINITY }, "-1e400", 1).to_string(),
            "FLOAT[-Infinity]@(1:1)-(1:7)"
        );
        assert_eq!(
            token(TokenKind::Error { reason: ErrorReason::UnexpectedToken }, "|1", 1).to_string(),
            "ERROR[|1]@(1:1)-(1:3):Unexpected token"
        );
    }

    #[test]
    fn test_linebreak_rendering() {
        let linebreak = Token::new(
            TokenKind::LineBreak { count: 2 },
            Range::from_coords(1, 5, 3, 1),
            "\n\n",
        );
        assert_eq!(linebreak.to_string(), "LINEBREAK[count=2]@(1:5)-(3:1)");
    }

    #[test]
    fn test_seal_derives_span_from_raw_tokens() {
        let mut statement = Statement::open(0);
        statement.nodes.push(token(TokenKind::Identity, "a", 1));
        statement.nodes.push(token(TokenKind::Space { size: 1 }, " ", 2));
        statement.nodes.push(token(TokenKind::Identity, "b", 3));
        statement.seal();

        assert_eq!(statement.range, Range::from_coords(1, 1, 1, 4));
        assert_eq!(statement.text, "a b");
    }

    #[test]
    fn test_statement_rendering_nests_blocks() {
        let name = token(TokenKind::Identity, "f", 1);
        let mut function = Function::open(name.clone());
        function.nodes.push(name);
        function.nodes.push(token(TokenKind::ParenthesisOpen, "(", 2));
        function.nodes.push(token(TokenKind::ParenthesisClose, ")", 3));
        function.seal();

        let mut statement = Statement::open(0);
        statement.nodes.extend(function.nodes.iter().cloned());
        statement.elements.push(function.into());
        statement.seal();

        assert_eq!(
            statement.to_string(),
            "STATEMENT[indent=0]@(1:1)-(1:4)\nELEMENTS:\n    FUNCTION[f]@(1:1)-(1:4)"
        );
    }

    #[test]
    fn test_quote_markers() {
        assert_eq!(QuoteMarker::Single.as_char(), '\'');
        assert_eq!(QuoteMarker::Backtick.as_char(), '`');
    }
}
