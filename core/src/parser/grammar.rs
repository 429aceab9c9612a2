use hashbrown::HashMap;

use crate::lexer::{Token, TokenKind};

use super::rules::{
    BinaryOperatorRule, GroupRule, IdentifierRule, NumberLiteralRule, StringLiteralRule,
    TernaryRule,
};
use super::{BinaryOp, Expr, ParseError, Parser, Precedence};

/// Parse behavior attached to one token kind.
///
/// A rule may start an expression (prefix), extend one (infix), or both.
/// Missing behaviors fall back to `InvalidTokenPlacement`. Rules hold no
/// mutable state, so one grammar can serve any number of parses at once.
pub trait ParseRule: Send + Sync {
    /// Binding power when used as an infix operator.
    fn precedence(&self) -> Precedence {
        Precedence::Assignment
    }

    fn parse_prefix(&self, parser: &mut Parser<'_, '_>, token: Token<'_>) -> Result<Expr, ParseError> {
        let _ = parser;
        Err(ParseError::invalid_placement(&token))
    }

    fn parse_infix(
        &self,
        parser: &mut Parser<'_, '_>,
        left: Expr,
        token: Token<'_>,
    ) -> Result<Expr, ParseError> {
        let _ = (parser, left);
        Err(ParseError::invalid_placement(&token))
    }
}

/// Immutable token kind to rule table.
pub struct Grammar {
    rules: HashMap<TokenKind, Box<dyn ParseRule>>,
}

impl Grammar {
    /// An empty builder.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder {
            rules: HashMap::new(),
        }
    }

    /// A builder preloaded with every standard rule, to extend or override.
    pub fn standard_builder() -> GrammarBuilder {
        let mut builder = Self::builder()
            .rule(TokenKind::Str, StringLiteralRule)
            .rule(TokenKind::Integer, NumberLiteralRule)
            .rule(TokenKind::Decimal, NumberLiteralRule)
            .rule(TokenKind::Identifier, IdentifierRule)
            .rule(TokenKind::LeftParen, GroupRule)
            .rule(TokenKind::Question, TernaryRule);

        let operators = [
            (TokenKind::Plus, Precedence::Sum),
            (TokenKind::Minus, Precedence::Sum),
            (TokenKind::Ampersand, Precedence::Sum),
            (TokenKind::Star, Precedence::Product),
            (TokenKind::Slash, Precedence::Product),
            (TokenKind::Less, Precedence::Comparison),
            (TokenKind::Greater, Precedence::Comparison),
            (TokenKind::Equal, Precedence::Comparison),
            (TokenKind::LessEqual, Precedence::Comparison),
            (TokenKind::GreaterEqual, Precedence::Comparison),
            (TokenKind::NotEqual, Precedence::Comparison),
        ];
        for (kind, precedence) in operators {
            if let Some(op) = BinaryOp::from_token(kind) {
                builder = builder.rule(kind, BinaryOperatorRule::new(op, precedence));
            }
        }
        builder
    }

    pub fn rule(&self, kind: TokenKind) -> Option<&dyn ParseRule> {
        self.rules.get(&kind).map(|rule| rule.as_ref())
    }

    /// Infix precedence of `kind`; kinds without a rule never bind.
    pub fn precedence(&self, kind: TokenKind) -> Precedence {
        self.rule(kind)
            .map_or(Precedence::Assignment, |rule| rule.precedence())
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::standard_builder().build()
    }
}

impl core::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut kinds: Vec<_> = self.rules.keys().map(|k| format!("{:?}", k)).collect();
        kinds.sort();
        f.debug_struct("Grammar").field("rules", &kinds).finish()
    }
}

pub struct GrammarBuilder {
    rules: HashMap<TokenKind, Box<dyn ParseRule>>,
}

impl GrammarBuilder {
    /// Register `rule` for `kind`, replacing any earlier registration.
    pub fn rule(mut self, kind: TokenKind, rule: impl ParseRule + 'static) -> Self {
        self.rules.insert(kind, Box::new(rule));
        self
    }

    pub fn build(self) -> Grammar {
        Grammar { rules: self.rules }
    }
}
