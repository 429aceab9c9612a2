//! Runtime evaluation errors.
//!
//! Every failure is deterministic for a given expression and set of
//! bindings, so none of them is worth retrying.

use thiserror::Error;

use crate::parser::BinaryOp;
use crate::values::DataType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String, position: usize },

    #[error("Function '{function}' requires {expected} argument(s) but received {actual}")]
    InvalidArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid argument for function '{function}': {message}")]
    InvalidArgumentType { function: String, message: String },

    #[error(
        "Conditional expression must evaluate to a boolean, found {found}. \
         Use functions like equals(...) to produce a boolean result."
    )]
    InvalidConditionType { found: DataType, position: usize },

    #[error("Division by zero")]
    DivisionByZero { position: usize },

    #[error("Operator '{operator}' is not supported for {left} and {right} operands")]
    UnsupportedOperation {
        operator: BinaryOp,
        left: DataType,
        right: DataType,
        position: usize,
    },

    #[error("Invalid date format or value: format='{pattern}' value='{value}'. {reason}")]
    InvalidDateFormat {
        pattern: String,
        value: String,
        reason: String,
    },

    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize },
}

impl EvalError {
    /// Byte offset of the offending node, where one is known.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::UnknownFunction { position, .. }
            | EvalError::InvalidConditionType { position, .. }
            | EvalError::DivisionByZero { position }
            | EvalError::UnsupportedOperation { position, .. } => Some(*position),
            EvalError::InvalidArgumentCount { .. }
            | EvalError::InvalidArgumentType { .. }
            | EvalError::InvalidDateFormat { .. }
            | EvalError::MaxDepthExceeded { .. } => None,
        }
    }

    pub fn function_name(&self) -> Option<&str> {
        match self {
            EvalError::UnknownFunction { name, .. } => Some(name),
            EvalError::InvalidArgumentCount { function, .. }
            | EvalError::InvalidArgumentType { function, .. } => Some(function),
            EvalError::InvalidDateFormat { .. } => Some("date"),
            _ => None,
        }
    }
}
