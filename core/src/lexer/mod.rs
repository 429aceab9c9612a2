//! Tokenization of expression source text.
//!
//! The lexer is driven by an ordered table of [`TokenRule`]s. At every byte
//! offset the rules are tried in declaration order and the first one that
//! matches at that exact offset wins, so longer or more specific patterns
//! (decimals before integers, `<=` before `<`) must be listed first.
//! Whitespace is matched like any other token and then dropped.

mod error;
mod token;
mod tokenizer;

pub use error::LexError;
pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, TokenRule};
