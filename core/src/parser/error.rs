use thiserror::Error;

use crate::lexer::{LexError, Token, TokenKind};

/// Syntax errors, each carrying the byte offset it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("{message}")]
    InvalidTokenPlacement { message: String, position: usize },

    #[error("Expected {expected} but found {found}")]
    MissingExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
    },

    #[error("Unexpected extra characters at the end of expression")]
    TrailingCharacters { position: usize },

    #[error("Expected a function name before '('.")]
    InvalidFunctionTarget { position: usize },

    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize, position: usize },
}

impl ParseError {
    /// `token` has no prefix rule, so it cannot start an expression.
    pub fn invalid_placement(token: &Token<'_>) -> Self {
        ParseError::InvalidTokenPlacement {
            message: format!(
                "Could not parse \"{}\". It cannot be used in this position.",
                token.describe()
            ),
            position: token.position,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::InvalidTokenPlacement { position, .. }
            | ParseError::MissingExpectedToken { position, .. }
            | ParseError::TrailingCharacters { position }
            | ParseError::InvalidFunctionTarget { position }
            | ParseError::MaxDepthExceeded { position, .. } => *position,
        }
    }
}
