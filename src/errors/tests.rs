//! Unit tests for error handling.
//!
//! This module contains tests for error kinds, rendering and the
//! diagnostics collector.

use crate::errors::errors::{Diagnostics, Error, ErrorImpl};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn expected_identifier() -> Error {
    Error::new(
        ErrorImpl::ExpectedToken {
            construct: "let statement",
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment,
            value: "=".to_string(),
        },
        Position(4, Rc::new("test.lang".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = expected_identifier();

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_expected_token_message() {
    let error = expected_identifier();

    assert_eq!(
        error.to_string(),
        "let statement: expected Identifier, found Assignment (\"=\") at test.lang:4"
    );
}

#[test]
fn test_no_prefix_parse_fn_error() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
            value: ";".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(
        error.to_string(),
        "no prefix parse function for Semicolon (\";\") at test.lang:0"
    );
}

#[test]
fn test_integer_parse_error() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        Position(8, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer at test.lang:8"
    );
}

#[test]
fn test_diagnostics_preserve_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.is_empty());

    diagnostics.push(expected_identifier());
    diagnostics.push(Error::new(
        ErrorImpl::IntegerParseError {
            literal: "1".to_string(),
        },
        Position::null(),
    ));

    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.len(), 2);

    let names: Vec<&str> = diagnostics.iter().map(|error| error.get_error_name()).collect();
    assert_eq!(names, ["ExpectedToken", "IntegerParseError"]);
}

#[test]
fn test_diagnostics_messages_are_a_snapshot() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(expected_identifier());

    let mut messages = diagnostics.messages();
    messages.clear();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.messages().len(), 1);
}
