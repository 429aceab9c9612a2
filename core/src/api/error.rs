//! Public error type for the engine.
//!
//! Layer errors convert into [`Error`] at the API boundary. Callers that need
//! more than the message read the structured accessors: [`Error::kind`],
//! [`Error::position`], [`Error::function_name`] and [`Error::arity`].

use core::fmt;

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::stdlib::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Parse(ParseError::Lex(err))
    }
}

/// Flat tag for every failure the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedCharacter,
    UnterminatedString,
    InvalidTokenPlacement,
    MissingExpectedToken,
    TrailingCharacters,
    InvalidFunctionTarget,
    MaxDepthExceeded,
    UnknownFunction,
    InvalidArgumentCount,
    InvalidArgumentType,
    InvalidConditionType,
    DivisionByZero,
    UnsupportedOperation,
    InvalidDateFormat,
    DuplicateFunctionName,
}

impl ErrorKind {
    /// Stable machine-readable tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedCharacter => "UNEXPECTED_CHARACTER",
            ErrorKind::UnterminatedString => "UNTERMINATED_STRING",
            ErrorKind::InvalidTokenPlacement => "INVALID_TOKEN_PLACEMENT",
            ErrorKind::MissingExpectedToken => "MISSING_EXPECTED_TOKEN",
            ErrorKind::TrailingCharacters => "TRAILING_CHARACTERS",
            ErrorKind::InvalidFunctionTarget => "INVALID_FUNCTION_TARGET",
            ErrorKind::MaxDepthExceeded => "MAX_DEPTH_EXCEEDED",
            ErrorKind::UnknownFunction => "UNKNOWN_FUNCTION",
            ErrorKind::InvalidArgumentCount => "INVALID_ARGUMENT_COUNT",
            ErrorKind::InvalidArgumentType => "INVALID_ARGUMENT_TYPE",
            ErrorKind::InvalidConditionType => "INVALID_CONDITION_TYPE",
            ErrorKind::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorKind::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            ErrorKind::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ErrorKind::DuplicateFunctionName => "DUPLICATE_FUNCTION_NAME",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(err) => match err {
                ParseError::Lex(LexError::UnexpectedCharacter { .. }) => {
                    ErrorKind::UnexpectedCharacter
                }
                ParseError::Lex(LexError::UnterminatedString { .. }) => {
                    ErrorKind::UnterminatedString
                }
                ParseError::InvalidTokenPlacement { .. } => ErrorKind::InvalidTokenPlacement,
                ParseError::MissingExpectedToken { .. } => ErrorKind::MissingExpectedToken,
                ParseError::TrailingCharacters { .. } => ErrorKind::TrailingCharacters,
                ParseError::InvalidFunctionTarget { .. } => ErrorKind::InvalidFunctionTarget,
                ParseError::MaxDepthExceeded { .. } => ErrorKind::MaxDepthExceeded,
            },
            Error::Eval(err) => match err {
                EvalError::UnknownFunction { .. } => ErrorKind::UnknownFunction,
                EvalError::InvalidArgumentCount { .. } => ErrorKind::InvalidArgumentCount,
                EvalError::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
                EvalError::InvalidConditionType { .. } => ErrorKind::InvalidConditionType,
                EvalError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
                EvalError::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
                EvalError::InvalidDateFormat { .. } => ErrorKind::InvalidDateFormat,
                EvalError::MaxDepthExceeded { .. } => ErrorKind::MaxDepthExceeded,
            },
            Error::Registry(RegistryError::DuplicateFunctionName { .. }) => {
                ErrorKind::DuplicateFunctionName
            }
        }
    }

    /// Byte offset into the expression source, where one applies.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Parse(err) => Some(err.position()),
            Error::Eval(err) => err.position(),
            Error::Registry(_) => None,
        }
    }

    /// The function a failure concerns, if any.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Error::Eval(err) => err.function_name(),
            Error::Registry(RegistryError::DuplicateFunctionName { name, .. }) => Some(name),
            Error::Parse(_) => None,
        }
    }

    /// `(expected, actual)` argument counts of an arity failure.
    pub fn arity(&self) -> Option<(usize, usize)> {
        match self {
            Error::Eval(EvalError::InvalidArgumentCount {
                expected, actual, ..
            }) => Some((*expected, *actual)),
            _ => None,
        }
    }
}
