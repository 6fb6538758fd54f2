//! Canonical debug rendering
//!
//!     One node per line, in the notation of the nodes' `Display` impls. Top-level
//!     statements are separated by a single newline; there is no trailing newline.

use crate::mindmark::ast::Statement;

pub fn render_forest(forest: &[Statement]) -> String {
    forest
        .iter()
        .map(|statement| statement.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mindmark::parsing::parse;

    #[test]
    fn test_render_call() {
        let rendered = render_forest(&parse("func(arg)"));
        assert_eq!(
            rendered,
            "STATEMENT[indent=0]@(1:1)-(1:10)\n\
             ELEMENTS:\n    \
             FUNCTION[func]@(1:1)-(1:10)\n    \
             PARAMETERS:\n        \
             IDENTITY[arg]@(1:6)-(1:9)"
        );
    }

    #[test]
    fn test_render_siblings_without_trailing_newline() {
        let rendered = render_forest(&parse("a\nb"));
        assert_eq!(
            rendered,
            "STATEMENT[indent=0]@(1:1)-(2:1)\n\
             ELEMENTS:\n    \
             IDENTITY[a]@(1:1)-(1:2)\n\
             STATEMENT[indent=0]@(2:1)-(2:2)\n\
             ELEMENTS:\n    \
             IDENTITY[b]@(2:1)-(2:2)"
        );
    }

    #[test]
    fn test_render_empty_forest() {
        assert_eq!(render_forest(&[]), "");
    }
}
