//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::tokenize_all;
use crate::Position;
use std::rc::Rc;

fn first_error(source: &str) -> Error {
    tokenize_all(source)
        .iter()
        .find_map(|token| Error::from_token(token, source, Rc::new("test.c".to_string())))
        .expect("source should produce an error token")
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter,
        Position {
            line: 3,
            offset: 10,
            file: Rc::new("test.c".to_string()),
        },
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().offset, 10);
}

#[test]
fn test_messages_round_trip() {
    for error in ErrorImpl::ALL {
        assert_eq!(error.to_string(), error.message());
        assert_eq!(ErrorImpl::from_message(error.message()), Some(error));
    }

    assert_eq!(ErrorImpl::from_message("Unexpected"), None);
}

#[test]
fn test_from_token_ignores_success_tokens() {
    let source = "x";
    let tokens = tokenize_all(source);

    assert!(Error::from_token(&tokens[0], source, Rc::new("test.c".to_string())).is_none());
    assert!(Error::from_token(&tokens[1], source, Rc::new("test.c".to_string())).is_none());
}

#[test]
fn test_unexpected_character_error() {
    let error = first_error("int a;\nint b = #;");

    assert_eq!(error.get_error(), ErrorImpl::UnexpectedCharacter);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().offset, 15);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`#`")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_unterminated_string_error() {
    let error = first_error("char *s = \"abc");

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().offset, 10);
}

#[test]
fn test_multi_line_string_error() {
    let error = first_error("\"ab\ncd\"");

    assert_eq!(error.get_error_name(), "MultiLineString");
    assert_eq!(error.get_position().line, 1);
}

#[test]
fn test_character_errors() {
    assert_eq!(first_error("'a").get_error_name(), "UnterminatedCharacter");
    assert_eq!(first_error("'a\n'").get_error_name(), "MultiLineCharacter");
}

#[test]
fn test_malformed_number_error() {
    let error = first_error("x = 1.2.3;");

    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(error.get_position().offset, 4);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter, Position::null());

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = first_error("\n\n'x");

    assert_eq!(error.to_string(), "test.c:3: Unterminated character.");
}

#[test]
fn test_error_source() {
    let error = first_error("@");
    let source = std::error::Error::source(&error).expect("error should have a source");

    assert_eq!(source.to_string(), "Unexpected character.");
}
