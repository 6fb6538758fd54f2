//! Node snapshots - a normalized, serializable view of a forest
//!
//!     Serializers (JSON, YAML, treeviz) all want the same thing: the node type, a short
//!     label, a handful of attributes and the structural children. [`NodeSnapshot`] is that
//!     shape, and [`SnapshotBuilder`] produces it through the [`Visitor`] protocol so no
//!     serializer re-implements the traversal.
//!
//!     Snapshots follow the structural view only. Raw `nodes` lists are not included;
//!     whitespace, line breaks and comments only show up in the flat token output.

use super::node::{FloatText, Function, Statement, Token, TokenKind};
use super::range::Range;
use super::visitor::Visitor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Node kind, e.g. "STATEMENT", "IDENTITY"
    pub node_type: String,

    /// Source text for terminals, the call name for functions, first element for statements
    pub label: String,

    pub range: Range,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>, range: Range) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            range,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<NodeSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Builds a [`NodeSnapshot`] for any node it is accepted by
pub struct SnapshotBuilder;

impl Visitor for SnapshotBuilder {
    type Output = Vec<NodeSnapshot>;

    fn default_result(&mut self) -> Self::Output {
        Vec::new()
    }

    fn aggregate(&mut self, results: Vec<Self::Output>) -> Self::Output {
        results.into_iter().flatten().collect()
    }

    fn visit_terminal(&mut self, token: &Token) -> Self::Output {
        let snapshot = NodeSnapshot::new(token.node_kind().as_str(), token.text.clone(), token.range);
        let snapshot = match &token.kind {
            TokenKind::Space { size } => snapshot.with_attribute("size", size),
            TokenKind::LineBreak { count } => snapshot.with_attribute("count", count),
            TokenKind::String { quote } => snapshot.with_attribute("quote", quote.as_char()),
            TokenKind::Integer { value } => snapshot.with_attribute("value", value),
            TokenKind::Float { value } => snapshot.with_attribute("value", FloatText(*value)),
            TokenKind::Percentage { value } => snapshot.with_attribute("value", FloatText(*value)),
            TokenKind::Date { value } => snapshot.with_attribute("value", value),
            TokenKind::DateTime { value } => snapshot.with_attribute("value", value),
            TokenKind::Error { reason } => snapshot.with_attribute("reason", reason),
            _ => snapshot,
        };
        vec![snapshot]
    }

    fn visit_statement(&mut self, statement: &Statement) -> Self::Output {
        let label = statement
            .elements
            .first()
            .map(|element| match element.as_function() {
                Some(function) => function.name.text.clone(),
                None => element.text().to_string(),
            })
            .unwrap_or_default();
        let mut children: Vec<NodeSnapshot> = statement
            .elements
            .iter()
            .flat_map(|element| element.accept(self))
            .collect();
        children.extend(statement.children.iter().flat_map(|child| child.accept(self)));

        vec![NodeSnapshot::new("STATEMENT", label, statement.range)
            .with_attribute("indent", statement.indent)
            .with_children(children)]
    }

    fn visit_function(&mut self, function: &Function) -> Self::Output {
        let parameters: Vec<NodeSnapshot> = function
            .parameters
            .iter()
            .flat_map(|param| param.accept(self))
            .collect();
        vec![
            NodeSnapshot::new("FUNCTION", function.name.text.clone(), function.range)
                .with_children(parameters),
        ]
    }
}

/// Snapshot every statement of a forest
pub fn snapshot_forest(forest: &[Statement]) -> Vec<NodeSnapshot> {
    forest
        .iter()
        .flat_map(|statement| statement.accept(&mut SnapshotBuilder))
        .collect()
}
