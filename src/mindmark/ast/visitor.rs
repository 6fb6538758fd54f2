//! Traversal protocol
//!
//!     Consumers walk a forest either directly, through the public structural fields
//!     (`elements`, `children`, `parameters`, `name`), or by implementing [`Visitor`] and
//!     calling `accept` on a node. `accept` dispatches on the node kind to the matching
//!     `visit_*` handler.
//!
//!     Every terminal handler defaults to [`Visitor::visit_terminal`], which defaults to
//!     [`Visitor::default_result`]. Composite handlers default to visiting the structural
//!     view (a statement's elements then children, a function's name then parameters) and
//!     folding the results with [`Visitor::aggregate`]. Raw `nodes` lists are not walked,
//!     so no token is visited twice.
//!
//! # Example
//!
//! ```ignore
//! struct TextCollector;
//!
//! impl Visitor for TextCollector {
//!     type Output = String;
//!     fn default_result(&mut self) -> String { String::new() }
//!     fn visit_terminal(&mut self, token: &Token) -> String { token.text.clone() }
//!     fn aggregate(&mut self, results: Vec<String>) -> String { results.concat() }
//! }
//!
//! let text = statement.accept(&mut TextCollector);
//! ```

use super::node::{Function, Node, Statement, Token, TokenKind};

pub trait Visitor {
    type Output;

    fn default_result(&mut self) -> Self::Output;

    fn aggregate(&mut self, _results: Vec<Self::Output>) -> Self::Output {
        self.default_result()
    }

    fn visit_terminal(&mut self, _token: &Token) -> Self::Output {
        self.default_result()
    }

    fn visit_comment(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_space(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_linebreak(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_parenthesis_open(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_parenthesis_close(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_comma(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_symbol(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_identity(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_string(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_integer(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_float(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_percentage(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_date(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_datetime(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_arrow(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }
    fn visit_error(&mut self, token: &Token) -> Self::Output {
        self.visit_terminal(token)
    }

    fn visit_statement(&mut self, statement: &Statement) -> Self::Output {
        let mut results: Vec<Self::Output> = statement
            .elements
            .iter()
            .map(|element| element.accept(self))
            .collect();
        results.extend(statement.children.iter().map(|child| child.accept(self)));
        self.aggregate(results)
    }

    fn visit_function(&mut self, function: &Function) -> Self::Output {
        let mut results = vec![function.name.accept(self)];
        results.extend(function.parameters.iter().map(|param| param.accept(self)));
        self.aggregate(results)
    }
}

impl Token {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self.kind {
            TokenKind::Comment => visitor.visit_comment(self),
            TokenKind::Space { .. } => visitor.visit_space(self),
            TokenKind::LineBreak { .. } => visitor.visit_linebreak(self),
            TokenKind::ParenthesisOpen => visitor.visit_parenthesis_open(self),
            TokenKind::ParenthesisClose => visitor.visit_parenthesis_close(self),
            TokenKind::Comma => visitor.visit_comma(self),
            TokenKind::Symbol => visitor.visit_symbol(self),
            TokenKind::Identity => visitor.visit_identity(self),
            TokenKind::String { .. } => visitor.visit_string(self),
            TokenKind::Integer { .. } => visitor.visit_integer(self),
            TokenKind::Float { .. } => visitor.visit_float(self),
            TokenKind::Percentage { .. } => visitor.visit_percentage(self),
            TokenKind::Date { .. } => visitor.visit_date(self),
            TokenKind::DateTime { .. } => visitor.visit_datetime(self),
            TokenKind::Arrow => visitor.visit_arrow(self),
            TokenKind::Error { .. } => visitor.visit_error(self),
        }
    }
}

impl Statement {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_statement(self)
    }
}

impl Function {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function(self)
    }
}

impl Node {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Token(token) => token.accept(visitor),
            Node::Statement(statement) => statement.accept(visitor),
            Node::Function(function) => function.accept(visitor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mindmark::ast::NodeKind;
    use crate::mindmark::parsing::parse;
    use std::collections::BTreeMap;

    struct TextCollector;

    impl Visitor for TextCollector {
        type Output = String;

        fn default_result(&mut self) -> String {
            String::new()
        }

        fn visit_terminal(&mut self, token: &Token) -> String {
            token.text.clone()
        }

        fn aggregate(&mut self, results: Vec<String>) -> String {
            results.concat()
        }
    }

    #[derive(Default)]
    struct KindCounter;

    impl Visitor for KindCounter {
        type Output = BTreeMap<NodeKind, usize>;

        fn default_result(&mut self) -> Self::Output {
            BTreeMap::new()
        }

        fn visit_terminal(&mut self, token: &Token) -> Self::Output {
            BTreeMap::from([(token.node_kind(), 1)])
        }

        fn aggregate(&mut self, results: Vec<Self::Output>) -> Self::Output {
            let mut merged = BTreeMap::new();
            for result in results {
                for (kind, count) in result {
                    *merged.entry(kind).or_insert(0) += count;
                }
            }
            merged
        }

        fn visit_statement(&mut self, statement: &Statement) -> Self::Output {
            let mut results = vec![BTreeMap::from([(NodeKind::Statement, 1)])];
            results.extend(statement.elements.iter().map(|e| e.accept(self)));
            results.extend(statement.children.iter().map(|c| c.accept(self)));
            self.aggregate(results)
        }

        fn visit_function(&mut self, function: &Function) -> Self::Output {
            let mut results = vec![BTreeMap::from([(NodeKind::Function, 1)])];
            results.push(function.name.accept(self));
            results.extend(function.parameters.iter().map(|p| p.accept(self)));
            self.aggregate(results)
        }
    }

    #[test]
    fn test_text_collector_walks_structure_only() {
        let forest = parse("calculate(price, 8.5%)");
        let text = forest[0].accept(&mut TextCollector);
        assert_eq!(text, "calculateprice8.5%");
    }

    #[test]
    fn test_kind_counter_over_statements() {
        let forest = parse("main\n        task1 func(a, b, 50%)");
        let counts = forest[0].accept(&mut KindCounter);

        assert_eq!(counts[&NodeKind::Statement], 2);
        assert_eq!(counts[&NodeKind::Function], 1);
        assert_eq!(counts[&NodeKind::Identity], 5);
        assert_eq!(counts[&NodeKind::Percentage], 1);
        assert!(!counts.contains_key(&NodeKind::Space));
    }

    #[test]
    fn test_default_visitor_returns_default_result() {
        struct Unit;
        impl Visitor for Unit {
            type Output = u8;
            fn default_result(&mut self) -> u8 {
                7
            }
        }

        let forest = parse("a(b)");
        assert_eq!(forest[0].accept(&mut Unit), 7);
    }
}
