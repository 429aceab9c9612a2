use crate::lexer::{Token, TokenKind};

use super::ParseError;

/// Cursor over a token vector with one token of lookahead.
///
/// Reading past the end yields an `Eof` token positioned just after the last
/// real token, or at 0 for an empty stream, so "missing token" errors point
/// at the end of the input.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    cursor: usize,
    eof: Token<'a>,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        let eof = Token::eof(tokens.last().map_or(0, Token::end));
        Self {
            tokens,
            cursor: 0,
            eof,
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    pub fn peek(&self) -> Token<'a> {
        self.tokens.get(self.cursor).copied().unwrap_or(self.eof)
    }

    /// True when the next token is of `kind`. Never true at the end.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.cursor)
            .is_some_and(|token| token.kind == kind)
    }

    pub fn consume(&mut self) -> Token<'a> {
        let token = self.peek();
        if self.has_more() {
            self.cursor += 1;
        }
        token
    }

    /// Consume the next token if it is of `kind`.
    pub fn consume_if(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail at the position of whatever is there.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        let token = self.peek();
        if token.kind != kind {
            return Err(ParseError::MissingExpectedToken {
                expected: kind,
                found: token.kind,
                position: token.position,
            });
        }
        Ok(self.consume())
    }
}
