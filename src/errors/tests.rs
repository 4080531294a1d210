//! Unit tests for diagnostics over invalid tokens.
//!
//! This module contains tests for error classification, positions,
//! names, tips and message rendering.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::tokenizer::profile::LanguageProfile;
use crate::tokenizer::token::{Token, TokenType};
use crate::tokenizer::tokenizer::Tokenizer;

fn first_error(input: &str) -> Error {
    let mut tokenizer = Tokenizer::default();
    tokenizer.tokenize(input);

    tokenizer
        .tokens()
        .iter()
        .find_map(|token| Error::from_token(token, tokenizer.profile()))
        .expect("input should produce an invalid token")
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedSequence {
            lexeme: "@".to_string(),
        },
        1,
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedSequence");
    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), 10);
}

#[test]
fn test_valid_tokens_produce_no_error() {
    let profile = LanguageProfile::default();

    for token in [
        Token::new(1, 1, TokenType::Integer, "42"),
        Token::new(1, 1, TokenType::Identifier, "abc"),
        Token::new(1, 1, TokenType::Operator, "++"),
        Token::new(1, 1, TokenType::String, "\"s\""),
    ] {
        assert!(Error::from_token(&token, &profile).is_none());
    }
}

#[test]
fn test_unterminated_string_classification() {
    let error = first_error("\"oops");

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_trailing_escape_classification() {
    let error = first_error("\"oops\\");

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_unknown_escape_classification() {
    let error = first_error(r#""a\qb""#);

    assert_eq!(error.get_error_name(), "UnknownEscape");
    assert_eq!(
        error.message(),
        r#"unknown escape sequence in string literal: "\"a\\qb\"""#
    );
}

#[test]
fn test_unrecognised_operator_classification() {
    let error = first_error("**/");

    assert_eq!(error.get_error_name(), "UnrecognisedOperator");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`**/` is not a known operator"),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_malformed_number_classification() {
    let error = first_error("3var");

    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(error.message(), "malformed numeric literal: \"3var\"");
}

#[test]
fn test_unrecognised_sequence_classification() {
    let error = first_error(";x");

    assert_eq!(error.get_error_name(), "UnrecognisedSequence");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position_matches_the_token() {
    let error = first_error("abc **/ def");

    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), 4);
}

#[test]
fn test_error_tip_display() {
    assert_eq!(format!("{}", ErrorTip::None), "");
    assert_eq!(
        format!("{}", ErrorTip::Suggestion(String::from("try this"))),
        "try this"
    );
}
