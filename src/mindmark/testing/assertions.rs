//! Fluent assertion API for statement forests

use crate::mindmark::ast::{ErrorReason, Function, Node, NodeKind, Range, Statement};

pub fn assert_forest(forest: &[Statement]) -> ForestAssertion<'_> {
    ForestAssertion { forest }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| format!("{}[{}]", n.kind(), n.text().escape_debug()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct ForestAssertion<'a> {
    forest: &'a [Statement],
}

impl<'a> ForestAssertion<'a> {
    pub fn statement_count(self, expected: usize) -> Self {
        assert_eq!(
            self.forest.len(),
            expected,
            "Expected {} top-level statements, found {}",
            expected,
            self.forest.len()
        );
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        assert!(
            index < self.forest.len(),
            "Statement index {} out of bounds (forest has {} statements)",
            index,
            self.forest.len()
        );
        assertion(StatementAssertion {
            statement: &self.forest[index],
            context: format!("forest[{}]", index),
        });
        self
    }
}

pub struct StatementAssertion<'a> {
    statement: &'a Statement,
    context: String,
}

impl<'a> StatementAssertion<'a> {
    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(
            self.statement.indent, expected,
            "{}: expected indent {}, found {}",
            self.context, expected, self.statement.indent
        );
        self
    }

    pub fn range(self, expected: Range) -> Self {
        assert_eq!(
            self.statement.range, expected,
            "{}: expected range {}, found {}",
            self.context, expected, self.statement.range
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.statement.text, expected, "{}: text mismatch", self.context);
        self
    }

    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.statement.elements.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} elements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.statement.elements)
        );
        self
    }

    /// Assert element kinds and texts in one go
    pub fn elements(self, expected: &[(NodeKind, &str)]) -> Self {
        let actual: Vec<(NodeKind, &str)> = self
            .statement
            .elements
            .iter()
            .map(|e| (e.kind(), e.text()))
            .collect();
        assert_eq!(actual, expected, "{}: elements mismatch", self.context);
        self
    }

    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let elements = &self.statement.elements;
        assert!(
            index < elements.len(),
            "{}: element index {} out of bounds ({} elements: [{}])",
            self.context,
            index,
            elements.len(),
            summarize(elements)
        );
        assertion(NodeAssertion {
            node: &elements[index],
            context: format!("{}.elements[{}]", self.context, index),
        });
        self
    }

    /// Every ERROR among the raw tokens, nested calls included, by reason and range
    pub fn raw_errors(self, expected: &[(ErrorReason, Range)]) -> Self {
        let actual: Vec<(ErrorReason, Range)> = self
            .statement
            .nodes
            .iter()
            .filter_map(|t| t.error_reason().map(|reason| (reason, t.range)))
            .collect();
        assert_eq!(actual, expected, "{}: raw errors mismatch", self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.statement.children.len(),
            expected,
            "{}: expected {} children, found {}",
            self.context,
            expected,
            self.statement.children.len()
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        let children = &self.statement.children;
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(StatementAssertion {
            statement: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(self.node.kind(), expected, "{}: kind mismatch", self.context);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.node.text(), expected, "{}: text mismatch", self.context);
        self
    }

    pub fn range(self, expected: Range) -> Self {
        assert_eq!(*self.node.range(), expected, "{}: range mismatch", self.context);
        self
    }

    pub fn error(self, expected: ErrorReason) -> Self {
        let reason = self.node.as_token().and_then(|t| t.error_reason());
        assert_eq!(
            reason,
            Some(expected),
            "{}: expected ERROR({}), found {}[{}]",
            self.context,
            expected,
            self.node.kind(),
            self.node.text()
        );
        self
    }

    /// Assert this node is a call to `name` and continue with function assertions
    pub fn function(self, name: &str) -> FunctionAssertion<'a> {
        let function = match self.node.as_function() {
            Some(function) => function,
            None => panic!(
                "{}: expected FUNCTION[{}], found {}[{}]",
                self.context,
                name,
                self.node.kind(),
                self.node.text()
            ),
        };
        assert_eq!(function.name.text, name, "{}: call name mismatch", self.context);
        FunctionAssertion {
            function,
            context: self.context,
        }
    }
}

pub struct FunctionAssertion<'a> {
    function: &'a Function,
    context: String,
}

impl<'a> FunctionAssertion<'a> {
    pub fn parameter_count(self, expected: usize) -> Self {
        let actual = self.function.parameters.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} parameters, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.function.parameters)
        );
        self
    }

    pub fn parameters(self, expected: &[(NodeKind, &str)]) -> Self {
        let actual: Vec<(NodeKind, &str)> = self
            .function
            .parameters
            .iter()
            .map(|p| (p.kind(), p.text()))
            .collect();
        assert_eq!(actual, expected, "{}: parameters mismatch", self.context);
        self
    }

    pub fn parameter<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let parameters = &self.function.parameters;
        assert!(
            index < parameters.len(),
            "{}: parameter index {} out of bounds ({} parameters)",
            self.context,
            index,
            parameters.len()
        );
        assertion(NodeAssertion {
            node: &parameters[index],
            context: format!("{}.parameters[{}]", self.context, index),
        });
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.function.text, expected, "{}: text mismatch", self.context);
        self
    }

    pub fn range(self, expected: Range) -> Self {
        assert_eq!(self.function.range, expected, "{}: range mismatch", self.context);
        self
    }
}
