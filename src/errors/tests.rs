//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(offset: u32, line: u32, column: u32) -> Position {
    Position::new(offset, line, column, Rc::new("test.lox".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10, 1, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        position(42, 3, 7),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(ErrorImpl::SelfOutsideClass, position(0, 2, 5));

    assert_eq!(
        error.to_string(),
        "test.lox:2:5: cannot use 'self' outside of a class"
    );
}

#[test]
fn test_variable_already_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        position(0, 1, 1),
    );

    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
    assert_eq!(
        error.get_internal_error().to_string(),
        "variable \"x\" already declared in this scope"
    );
}

#[test]
fn test_read_in_own_initializer_error() {
    let error = Error::new(
        ErrorImpl::ReadInOwnInitializer {
            variable: "a".to_string(),
        },
        position(0, 1, 1),
    );

    assert_eq!(error.get_error_name(), "ReadInOwnInitializer");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`a`")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_super_errors_have_distinct_messages() {
    let outside = Error::new(ErrorImpl::SuperOutsideClass, position(0, 1, 1));
    let no_superclass = Error::new(ErrorImpl::SuperWithoutSuperclass, position(0, 1, 1));

    assert_ne!(outside.get_error_name(), no_superclass.get_error_name());
    assert_ne!(
        outside.get_internal_error().to_string(),
        no_superclass.get_internal_error().to_string()
    );
}

#[test]
fn test_control_flow_error_names() {
    let cases = [
        (ErrorImpl::BreakOutsideLoop, "BreakOutsideLoop"),
        (ErrorImpl::ContinueOutsideLoop, "ContinueOutsideLoop"),
        (ErrorImpl::ReturnOutsideFunction, "ReturnOutsideFunction"),
        (ErrorImpl::ReturnValueFromInitializer, "ReturnValueFromInitializer"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, position(0, 1, 1)).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0, 1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        position(0, 1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
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
