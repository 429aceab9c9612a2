//! Pratt parser over an extensible grammar.
//!
//! Each token kind maps to a [`ParseRule`] unit carrying its prefix and infix
//! behavior and its binding [`Precedence`]. The parser consumes a token,
//! runs its prefix rule, then keeps extending the left-hand expression while
//! the next token binds tighter than the caller's minimum precedence.

mod ast;
mod error;
mod escape;
mod grammar;
mod pratt;
mod precedence;
mod rules;
mod stream;

pub use ast::{BinaryOp, Expr, Literal};
pub use error::ParseError;
pub use escape::unescape;
pub use grammar::{Grammar, GrammarBuilder, ParseRule};
pub use pratt::{DEFAULT_MAX_DEPTH, Parser, parse, parse_with};
pub use precedence::Precedence;
pub use rules::{
    BinaryOperatorRule, GroupRule, IdentifierRule, NumberLiteralRule, StringLiteralRule,
    TernaryRule,
};
pub use stream::TokenStream;


#[cfg(test)]
mod precedence_test;
