//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, EXPRESSION_START};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_syntax_error_message() {
    let error = Error::syntax(")", Position(3, Rc::new("test.expr".to_string())));

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(
        error.to_string(),
        "Found ), expected !, (, +, -, [, false, identifier, null, number, string, true, {"
    );
}

#[test]
fn test_syntax_error_expected_list_is_fixed() {
    let error = Error::syntax("]", Position::null());

    match error.get_internal_error() {
        ErrorImpl::SyntaxError { token, expected } => {
            assert_eq!(token, "]");
            assert_eq!(*expected, &EXPRESSION_START[..]);
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_invalid_pattern_error() {
    let error = Error::new(
        ErrorImpl::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "InvalidPattern");
    assert!(error.get_message().contains("unclosed group"));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::syntax("EOF", Position::null());

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.starts_with("Found EOF")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
