//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file, a reader or a string and runs the
//! pipeline stages on it. The CLI and the integration tests both go through it.
//!
//! # Example
//!
//! ```rust
//! use mindmark::mindmark::loader::DocumentLoader;
//!
//! let doc = DocumentLoader::from_path("outline.mm").unwrap().parse();
//!
//! let loader = DocumentLoader::from_string("name\n    task\n");
//! let tree = loader.render("treeviz").unwrap();
//! ```

use crate::mindmark::ast::Token;
use crate::mindmark::formats::{Format, FormatError};
use crate::mindmark::lexing::tokenize;
use crate::mindmark::parsing::Document;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Error that can occur when loading or rendering documents
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    /// IO error when reading the source
    IoError(String),
    /// Unknown format or serialization failure
    FormatError(FormatError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::FormatError(err) => write!(f, "Format error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<FormatError> for LoaderError {
    fn from(err: FormatError) -> Self {
        LoaderError::FormatError(err)
    }
}

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Read the whole of `reader`, e.g. stdin
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// The raw source, line endings untouched
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokenize(&self) -> Vec<Token> {
        tokenize(&self.source).collect()
    }

    pub fn parse(&self) -> Document {
        Document::parse(&self.source)
    }

    /// Parse and write out in the format called `format`
    pub fn render(&self, format: &str) -> Result<String, LoaderError> {
        let format = Format::from_name(format)?;
        Ok(format.render(&self.parse())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("Hello world\n");
        assert_eq!(loader.source(), "Hello world\n");
        assert_eq!(loader.tokenize().len(), 4);
        assert_eq!(loader.parse().statements.len(), 1);
    }

    #[test]
    fn test_from_reader() {
        let loader = DocumentLoader::from_reader("a\r\nb".as_bytes()).unwrap();
        assert_eq!(loader.source(), "a\r\nb");
        assert_eq!(loader.parse().statements.len(), 2);
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = DocumentLoader::from_path("nonexistent.mm");
        assert!(matches!(result, Err(LoaderError::IoError(_))));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join("mindmark-loader-test.mm");
        fs::write(&path, "root\n  leaf(1)\n").unwrap();

        let doc = DocumentLoader::from_path(&path).unwrap().parse();
        fs::remove_file(&path).unwrap();
        assert_eq!(doc.statements[0].children.len(), 1);
    }

    #[test]
    fn test_render_unknown_format() {
        let loader = DocumentLoader::from_string("x");
        let err = loader.render("html").unwrap_err();
        assert_eq!(
            err,
            LoaderError::FormatError(FormatError::UnknownFormat("html".to_string()))
        );
        assert_eq!(err.to_string(), "Format error: unknown format 'html'");
    }

    #[test]
    fn test_render_debug() {
        let loader = DocumentLoader::from_string("x");
        assert_eq!(
            loader.render("debug").unwrap(),
            "STATEMENT[indent=0]@(1:1)-(1:2)\nELEMENTS:\n    IDENTITY[x]@(1:1)-(1:2)"
        );
    }
}
