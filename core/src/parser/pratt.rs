use once_cell::sync::Lazy;
use tracing::trace;

use crate::lexer::{Lexer, Token, TokenKind};

use super::{Expr, Grammar, Literal, ParseError, Precedence, TokenStream};

/// Default bound on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

static DEFAULT_LEXER: Lazy<Lexer> = Lazy::new(Lexer::default);
static DEFAULT_GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::default);

/// Parse `source` with the standard lexer and grammar.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with(&DEFAULT_LEXER, &DEFAULT_GRAMMAR, source, DEFAULT_MAX_DEPTH)
}

/// Parse `source` with a specific lexer, grammar and nesting bound.
///
/// Blank input parses to an empty string literal without being lexed.
pub fn parse_with(
    lexer: &Lexer,
    grammar: &Grammar,
    source: &str,
    max_depth: usize,
) -> Result<Expr, ParseError> {
    if source.trim().is_empty() {
        return Ok(Expr::Literal {
            value: Literal::Str(String::new()),
            position: 0,
        });
    }

    let tokens = lexer.tokenize(source)?;
    let mut parser = Parser::new(grammar, TokenStream::new(tokens), max_depth);
    let expr = parser.parse_expression(Precedence::Assignment)?;
    parser.finish()?;
    trace!(%expr, "parsed expression");
    Ok(expr)
}

/// Precedence-climbing driver handed to every [`ParseRule`](super::ParseRule).
pub struct Parser<'g, 'a> {
    grammar: &'g Grammar,
    stream: TokenStream<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'g, 'a> Parser<'g, 'a> {
    pub fn new(grammar: &'g Grammar, stream: TokenStream<'a>, max_depth: usize) -> Self {
        Self {
            grammar,
            stream,
            depth: 0,
            max_depth,
        }
    }

    pub fn stream(&mut self) -> &mut TokenStream<'a> {
        &mut self.stream
    }

    /// Parse one expression whose infix operators all bind tighter than
    /// `min_precedence`.
    pub fn parse_expression(&mut self, min_precedence: Precedence) -> Result<Expr, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::MaxDepthExceeded {
                max_depth: self.max_depth,
                position: self.stream.peek().position,
            });
        }
        self.depth += 1;
        let result = self.parse_expression_inner(min_precedence);
        self.depth -= 1;
        result
    }

    fn parse_expression_inner(&mut self, min_precedence: Precedence) -> Result<Expr, ParseError> {
        let grammar = self.grammar;
        let token = self.stream.consume();
        let Some(prefix) = grammar.rule(token.kind) else {
            return Err(ParseError::invalid_placement(&token));
        };
        let mut left = prefix.parse_prefix(self, token)?;

        while self.stream.has_more() {
            let next = self.stream.peek();
            if min_precedence >= grammar.precedence(next.kind) {
                break;
            }
            let Some(infix) = grammar.rule(next.kind) else {
                break;
            };
            self.stream.consume();
            left = infix.parse_infix(self, left, next)?;
        }
        Ok(left)
    }

    /// Arguments of a call whose `(` was just consumed. Only a bare
    /// identifier names a function.
    pub fn parse_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let Expr::Identifier { name, position } = callee else {
            return Err(ParseError::InvalidFunctionTarget {
                position: self.stream.peek().position,
            });
        };

        let mut args = Vec::new();
        if !self.stream.check(TokenKind::RightParen) {
            loop {
                args.push(self.parse_expression(Precedence::Assignment)?);
                if !self.stream.consume_if(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.stream.expect(TokenKind::RightParen)?;
        Ok(Expr::Call {
            name,
            position,
            args,
        })
    }

    /// Fail if tokens remain after the top-level expression.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.stream.has_more() {
            let Token { position, .. } = self.stream.peek();
            return Err(ParseError::TrailingCharacters { position });
        }
        Ok(())
    }
}
