use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Token kinds accepted at the start of an expression.
///
/// Every syntax error reports this list, whatever the grammar position.
pub const EXPRESSION_START: [&str; 12] = [
    "!", "(", "+", "-", "[", "false", "identifier", "null", "number", "string", "true", "{",
];

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
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

    /// Syntax error for `token` found where an expression was expected.
    pub fn syntax(token: &str, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                token: token.to_string(),
                expected: &EXPRESSION_START,
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::SyntaxError { .. } => ErrorTip::Suggestion(self.get_message()),
            ErrorImpl::InvalidPattern { pattern, .. } => {
                ErrorTip::Suggestion(format!("Ignore pattern `{}` is not a valid regex", pattern))
            }
        }
    }
}

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
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("Found {token}, expected {}", .expected.join(", "))]
    SyntaxError {
        token: String,
        expected: &'static [&'static str],
    },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}
