//! Property-based tests: every source, well-formed or not, keeps the lossless,
//! contiguity, coverage, indentation and call invariants

use mindmark::mindmark::parse;
use mindmark::mindmark::testing::invariants::{
    assert_all, assert_contiguous, assert_lossless, assert_indentation,
};
use mindmark::mindmark::tokenize;
use proptest::prelude::*;

/// Fragments that appear on a typical outline line
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,6}",
        "[0-9]{1,3}(\\.[0-9]{1,2})?%?",
        "@[a-z]{1,5}",
        "&[0-9]d",
        "\"[a-z ]{0,5}\"",
        "2024-0[1-9]-[12][0-9]( 1[0-9]:[0-5][0-9])?",
        Just("(".to_string()),
        Just(")".to_string()),
        Just(", ".to_string()),
        Just("->".to_string()),
        Just(" // note".to_string()),
        "[a-z]{1,4}\\([a-z0-9, ]{0,8}\\)?",
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof!["", "  ", "    ", "\t", "        "],
        prop::collection::vec(fragment_strategy(), 0..6),
    )
        .prop_map(|(indent, fragments)| format!("{}{}", indent, fragments.join(" ")))
}

fn outline_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(line_strategy(), 0..12),
        prop_oneof!["\n", "\r\n"],
    )
        .prop_map(|(lines, ending)| lines.join(&ending))
}

proptest! {
    #[test]
    fn test_outline_invariants(source in outline_strategy()) {
        assert_all(&source);
    }

    #[test]
    fn test_arbitrary_text_invariants(source in "\\PC{0,60}") {
        assert_all(&source);
    }

    #[test]
    fn test_lexer_is_lossless_on_any_bytes(source in any::<String>()) {
        let tokens: Vec<_> = tokenize(&source).collect();
        assert_lossless(&source, &tokens);
        assert_contiguous(&tokens);
    }

    #[test]
    fn test_children_are_deeper(source in outline_strategy()) {
        assert_indentation(&parse(&source));
    }
}
