use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Creates an error located at the start of `token`.
    pub fn at(error_impl: ErrorImpl, token: &Token) -> Self {
        Error::new(error_impl, token.span.start.clone())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::ReadInOwnInitializer { .. } => "ReadInOwnInitializer",
            ErrorImpl::SelfOutsideClass => "SelfOutsideClass",
            ErrorImpl::SuperOutsideClass => "SuperOutsideClass",
            ErrorImpl::SuperWithoutSuperclass => "SuperWithoutSuperclass",
            ErrorImpl::BreakOutsideLoop => "BreakOutsideLoop",
            ErrorImpl::ContinueOutsideLoop => "ContinueOutsideLoop",
            ErrorImpl::ReturnOutsideFunction => "ReturnOutsideFunction",
            ErrorImpl::ReturnValueFromInitializer => "ReturnValueFromInitializer",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only variables and properties can be assigned to",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Blocks and expressions may nest at most {} levels deep",
                limit
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared in this scope",
                variable
            )),
            ErrorImpl::ReadInOwnInitializer { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is read inside its own initializer",
                variable
            )),
            ErrorImpl::SelfOutsideClass => {
                ErrorTip::Suggestion(String::from("`self` is only valid inside a method"))
            }
            ErrorImpl::SuperOutsideClass => {
                ErrorTip::Suggestion(String::from("`super` is only valid inside a method"))
            }
            ErrorImpl::SuperWithoutSuperclass => ErrorTip::Suggestion(String::from(
                "Declare a superclass with `class Name < Base` to use `super`",
            )),
            ErrorImpl::BreakOutsideLoop => ErrorTip::Suggestion(String::from(
                "`break` is only valid inside loops and switch cases",
            )),
            ErrorImpl::ContinueOutsideLoop => ErrorTip::Suggestion(String::from(
                "`continue` is only valid inside loops and switch cases",
            )),
            ErrorImpl::ReturnOutsideFunction => ErrorTip::Suggestion(String::from(
                "`return` is only valid inside a function or method",
            )),
            ErrorImpl::ReturnValueFromInitializer => ErrorTip::Suggestion(String::from(
                "Initializers always return the new instance, use a bare `return;`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.position.file, self.position.line, self.position.column, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexer
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string")]
    UnterminatedString,

    // Parser
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },

    // Resolver
    #[error("variable {variable:?} already declared in this scope")]
    VariableAlreadyDeclared { variable: String },
    #[error("cannot read local variable {variable:?} in its own initializer")]
    ReadInOwnInitializer { variable: String },
    #[error("cannot use 'self' outside of a class")]
    SelfOutsideClass,
    #[error("cannot use 'super' outside of a class")]
    SuperOutsideClass,
    #[error("cannot use 'super' in a class with no superclass")]
    SuperWithoutSuperclass,
    #[error("'break' can only be used inside loops and switch cases")]
    BreakOutsideLoop,
    #[error("'continue' can only be used inside loops and switch cases")]
    ContinueOutsideLoop,
    #[error("cannot return from top-level code")]
    ReturnOutsideFunction,
    #[error("cannot return a value from an initializer")]
    ReturnValueFromInitializer,
}
