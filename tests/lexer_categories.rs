//! One case per token category: the source must lex to exactly one token of that kind

use mindmark::mindmark::ast::{CalendarDate, CalendarDateTime, NodeKind, QuoteMarker, Token, TokenKind};
use mindmark::mindmark::tokenize;
use rstest::rstest;

fn single(source: &str) -> Token {
    let tokens: Vec<Token> = tokenize(source).collect();
    assert_eq!(tokens.len(), 1, "{:?} lexed as {:?}", source, tokens);
    tokens.into_iter().next().unwrap()
}

#[rstest]
#[case("// note", NodeKind::Comment)]
#[case("  // indented note", NodeKind::Comment)]
#[case("2024-3-7 9:05", NodeKind::DateTime)]
#[case("2024-03-07 09:05:30.25", NodeKind::DateTime)]
#[case("2024-03-07", NodeKind::Date)]
#[case("name_1", NodeKind::Identity)]
#[case("_private", NodeKind::Identity)]
#[case("\"double quoted\"", NodeKind::String)]
#[case("'single'", NodeKind::String)]
#[case("`back\ntick`", NodeKind::String)]
#[case("12.5%", NodeKind::Percentage)]
#[case("%", NodeKind::Percentage)]
#[case("-3", NodeKind::Integer)]
#[case("1_000", NodeKind::Integer)]
#[case("3.14", NodeKind::Float)]
#[case("6e2", NodeKind::Float)]
#[case(".5", NodeKind::Float)]
#[case("\n\n", NodeKind::LineBreak)]
#[case(" \t ", NodeKind::Space)]
#[case("@", NodeKind::Symbol)]
#[case("#!", NodeKind::Symbol)]
#[case("...", NodeKind::Symbol)]
#[case("(", NodeKind::ParenthesisOpen)]
#[case("[", NodeKind::ParenthesisOpen)]
#[case("}", NodeKind::ParenthesisClose)]
#[case(",", NodeKind::Comma)]
#[case("->", NodeKind::Arrow)]
#[case("|", NodeKind::Error)]
fn test_single_token_category(#[case] source: &str, #[case] expected: NodeKind) {
    let token = single(source);
    assert_eq!(token.node_kind(), expected);
    assert_eq!(token.text, source);
}

#[rstest]
#[case("42", TokenKind::Integer { value: 42 })]
#[case("-1_5", TokenKind::Integer { value: -15 })]
#[case("2.5", TokenKind::Float { value: 2.5 })]
#[case("1e3", TokenKind::Float { value: 1000.0 })]
#[case("50%", TokenKind::Percentage { value: 0.5 })]
#[case("  ", TokenKind::Space { size: 2 })]
#[case("\n\n\n", TokenKind::LineBreak { count: 3 })]
#[case("'q'", TokenKind::String { quote: QuoteMarker::Single })]
#[case("`q`", TokenKind::String { quote: QuoteMarker::Backtick })]
#[case("2023-11-05", TokenKind::Date { value: CalendarDate::new(2023, 11, 5) })]
fn test_token_payload(#[case] source: &str, #[case] expected: TokenKind) {
    assert_eq!(single(source).kind, expected);
}

#[test]
fn test_datetime_payload() {
    let expected = CalendarDateTime::new(CalendarDate::new(2024, 3, 7), 9, 5)
        .with_second(30)
        .with_millisecond(250);
    assert_eq!(
        single("2024-03-07 09:05:30.25").kind,
        TokenKind::DateTime { value: expected }
    );
}

#[rstest]
#[case("a|b", &["a", "|b"])]
#[case("x |y z", &["x", " ", "|y", " ", "z"])]
#[case("| \n", &["|", " ", "\n"])]
#[case("a;", &["a", ";"])]
fn test_error_gap_merging(#[case] source: &str, #[case] texts: &[&str]) {
    let actual: Vec<String> = tokenize(source).map(|t| t.text).collect();
    assert_eq!(actual, texts);
}
