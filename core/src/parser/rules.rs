//! The standard grammar rule units, one per literal or operator family.

use crate::lexer::{Token, TokenKind};
use crate::values::number;

use super::{BinaryOp, Expr, Literal, ParseError, ParseRule, Parser, Precedence, unescape};

/// `'text'`, with escapes resolved.
pub struct StringLiteralRule;

impl ParseRule for StringLiteralRule {
    fn parse_prefix(&self, _parser: &mut Parser<'_, '_>, token: Token<'_>) -> Result<Expr, ParseError> {
        Ok(Expr::Literal {
            value: Literal::Str(unescape(strip_quotes(token.lexeme))),
            position: token.position,
        })
    }
}

/// Integer and decimal literals, both exact.
pub struct NumberLiteralRule;

impl ParseRule for NumberLiteralRule {
    fn parse_prefix(&self, _parser: &mut Parser<'_, '_>, token: Token<'_>) -> Result<Expr, ParseError> {
        let value = number::parse(token.lexeme).ok_or_else(|| ParseError::invalid_placement(&token))?;
        Ok(Expr::Literal {
            value: Literal::Number(value),
            position: token.position,
        })
    }
}

/// A variable reference, or the first key of a map literal when followed
/// by `:`.
pub struct IdentifierRule;

impl ParseRule for IdentifierRule {
    fn parse_prefix(&self, parser: &mut Parser<'_, '_>, token: Token<'_>) -> Result<Expr, ParseError> {
        if parser.stream().check(TokenKind::Colon) {
            return parse_map_literal(parser, token);
        }
        Ok(Expr::Identifier {
            name: token.lexeme.to_string(),
            position: token.position,
        })
    }
}

/// `key: value, key: value`. Values are static text: a quoted string, or the
/// lexeme of an identifier or number. A repeated key keeps its first slot
/// and takes the last value.
fn parse_map_literal(parser: &mut Parser<'_, '_>, first_key: Token<'_>) -> Result<Expr, ParseError> {
    let mut entries: Vec<(String, String)> = Vec::new();
    let mut key = first_key.lexeme.to_string();

    loop {
        parser.stream().expect(TokenKind::Colon)?;
        let value_token = parser.stream().consume();
        let value = map_value(&value_token)?;

        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }

        if !parser.stream().consume_if(TokenKind::Comma) {
            break;
        }
        let next_key = parser.stream().consume();
        if next_key.kind != TokenKind::Identifier {
            return Err(ParseError::InvalidTokenPlacement {
                message: "Expected identifier for map key".to_string(),
                position: next_key.position,
            });
        }
        key = next_key.lexeme.to_string();
    }

    Ok(Expr::Map {
        entries,
        position: first_key.position,
    })
}

fn map_value(token: &Token<'_>) -> Result<String, ParseError> {
    match token.kind {
        TokenKind::Str => Ok(unescape(strip_quotes(token.lexeme))),
        TokenKind::Identifier | TokenKind::Integer | TokenKind::Decimal => {
            Ok(token.lexeme.to_string())
        }
        _ => Err(ParseError::InvalidTokenPlacement {
            message: "Invalid map value".to_string(),
            position: token.position,
        }),
    }
}

/// `(` groups as a prefix and calls as an infix.
pub struct GroupRule;

impl ParseRule for GroupRule {
    fn precedence(&self) -> Precedence {
        Precedence::Call
    }

    fn parse_prefix(&self, parser: &mut Parser<'_, '_>, _token: Token<'_>) -> Result<Expr, ParseError> {
        let inner = parser.parse_expression(Precedence::Assignment)?;
        parser.stream().expect(TokenKind::RightParen)?;
        Ok(inner)
    }

    fn parse_infix(
        &self,
        parser: &mut Parser<'_, '_>,
        left: Expr,
        _token: Token<'_>,
    ) -> Result<Expr, ParseError> {
        parser.parse_call(left)
    }
}

/// `condition ? then : else`. Both branches parse one level below ternary
/// precedence, so nested conditionals chain to the right.
pub struct TernaryRule;

impl ParseRule for TernaryRule {
    fn precedence(&self) -> Precedence {
        Precedence::Ternary
    }

    fn parse_infix(
        &self,
        parser: &mut Parser<'_, '_>,
        left: Expr,
        _token: Token<'_>,
    ) -> Result<Expr, ParseError> {
        let branch_precedence = self.precedence().lower();
        let then_branch = parser.parse_expression(branch_precedence)?;
        parser.stream().expect(TokenKind::Colon)?;
        let else_branch = parser.parse_expression(branch_precedence)?;
        Ok(Expr::Conditional {
            condition: Box::new(left),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }
}

/// A left-associative binary operator.
pub struct BinaryOperatorRule {
    op: BinaryOp,
    precedence: Precedence,
}

impl BinaryOperatorRule {
    pub fn new(op: BinaryOp, precedence: Precedence) -> Self {
        Self { op, precedence }
    }
}

impl ParseRule for BinaryOperatorRule {
    fn precedence(&self) -> Precedence {
        self.precedence
    }

    fn parse_infix(
        &self,
        parser: &mut Parser<'_, '_>,
        left: Expr,
        token: Token<'_>,
    ) -> Result<Expr, ParseError> {
        let right = parser.parse_expression(self.precedence)?;
        Ok(Expr::Binary {
            op: self.op,
            left: Box::new(left),
            right: Box::new(right),
            position: token.position,
        })
    }
}

fn strip_quotes(lexeme: &str) -> &str {
    lexeme
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(lexeme)
}
