//! Output formats for parsed documents
//!
//! This module contains the ways a [`Document`] can be written out:
//! - debug: the canonical one-node-per-line rendering of the forest
//! - tokens: the flat token stream in the same notation
//! - treeviz: a compact tree with icons, one line per node (`treeviz-linum` adds rows)
//! - json / yaml: the snapshot tree through serde
//!
//! The set is closed. [`Format`] names each one and [`Format::from_name`] resolves the
//! names the CLI and the loader accept.

pub mod debug;
pub mod serialized;
pub mod tokens;
pub mod treeviz;

pub use debug::render_forest;
pub use serialized::{to_json, to_yaml};
pub use tokens::render_tokens;
pub use treeviz::render_treeviz;

use crate::mindmark::parsing::Document;
use std::fmt;
use std::str::FromStr;

/// Error raised while choosing or producing an output format
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format answers to this name
    UnknownFormat(String),
    /// serde could not write the snapshot tree
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "unknown format '{}'", name),
            FormatError::SerializationError(msg) => write!(f, "cannot serialize: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Debug,
    Tokens,
    Treeviz,
    TreevizLinum,
    Json,
    Yaml,
}

impl Format {
    /// Every format, in the order `--list-formats` prints them
    pub const ALL: [Format; 6] = [
        Format::Debug,
        Format::Tokens,
        Format::Treeviz,
        Format::TreevizLinum,
        Format::Json,
        Format::Yaml,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::Debug => "debug",
            Format::Tokens => "tokens",
            Format::Treeviz => "treeviz",
            Format::TreevizLinum => "treeviz-linum",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Format::Debug => "Canonical node-per-line rendering of the statement forest",
            Format::Tokens => "Lexer output, one token per line",
            Format::Treeviz => "Icon tree, one line per node",
            Format::TreevizLinum => "Icon tree prefixed with each node's starting row",
            Format::Json => "Snapshot tree as pretty-printed JSON",
            Format::Yaml => "Snapshot tree as YAML",
        }
    }

    pub fn from_name(name: &str) -> Result<Format, FormatError> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))
    }

    pub fn render(self, doc: &Document) -> Result<String, FormatError> {
        match self {
            Format::Debug => Ok(render_forest(&doc.statements)),
            Format::Tokens => Ok(render_tokens(&doc.tokens)),
            Format::Treeviz => Ok(render_treeviz(&doc.statements, false)),
            Format::TreevizLinum => Ok(render_treeviz(&doc.statements, true)),
            Format::Json => to_json(&doc.statements),
            Format::Yaml => to_yaml(&doc.statements),
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_name(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
