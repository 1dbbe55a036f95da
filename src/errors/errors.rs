use std::fmt::Display;

use thiserror::Error;

use crate::{tokens::tokens::TokenKind, Position};

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

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { kind, .. } if *kind == TokenKind::EOF => {
                ErrorTip::Suggestion(String::from(
                    "Input ended where an expression was expected",
                ))
            }
            ErrorImpl::UnexpectedToken { token, .. } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, an expression cannot start here",
                token
            )),
            ErrorImpl::ExpectedToken {
                expected, found, ..
            } => ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found)),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at token {}", self.internal_error, self.position.0)
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
    #[error("unexpected token: {token:?} ({kind})")]
    UnexpectedToken { token: String, kind: TokenKind },
    #[error("expected token {expected}, found {found} ({token:?})")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        token: String,
    },
}
