use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::{LexError, Token, TokenKind};

/// Standard rule order. Patterns are tried top to bottom.
const DEFAULT_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::Decimal, r"[0-9]+\.[0-9]+"),
    (TokenKind::Integer, r"[0-9]+"),
    (TokenKind::Str, r"'[^']*'"),
    (TokenKind::Identifier, r"[a-zA-Z_][a-zA-Z0-9_]*"),
    (TokenKind::LeftParen, r"\("),
    (TokenKind::RightParen, r"\)"),
    (TokenKind::Comma, r","),
    (TokenKind::Plus, r"\+"),
    (TokenKind::Minus, r"-"),
    (TokenKind::Star, r"\*"),
    (TokenKind::Slash, r"/"),
    (TokenKind::Ampersand, r"&"),
    (TokenKind::Question, r"\?"),
    (TokenKind::Colon, r":"),
    (TokenKind::LessEqual, r"<="),
    (TokenKind::GreaterEqual, r">="),
    (TokenKind::NotEqual, r"!="),
    (TokenKind::Less, r"<"),
    (TokenKind::Greater, r">"),
    (TokenKind::Equal, r"="),
    (TokenKind::Whitespace, r"\s+"),
];

static DEFAULT_RULES: Lazy<Vec<TokenRule>> = Lazy::new(|| {
    DEFAULT_PATTERNS
        .iter()
        .map(|(kind, pattern)| {
            TokenRule::new(*kind, pattern).expect("built-in token patterns are valid regexes")
        })
        .collect()
});

/// A token kind paired with the pattern that recognizes it.
#[derive(Debug, Clone)]
pub struct TokenRule {
    kind: TokenKind,
    regex: Regex,
}

impl TokenRule {
    /// Compile `pattern` so that it only matches at the start of the input.
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\A(?:{})", pattern))?;
        Ok(Self { kind, regex })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Length of the match at the start of `input`, if any. Empty matches
    /// never count, otherwise the lexer could not make progress.
    fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }
}

/// Ordered-rule lexer.
#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Vec<TokenRule>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.clone())
    }
}

impl Lexer {
    pub fn new(rules: Vec<TokenRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    /// Split `source` into tokens, dropping whitespace.
    ///
    /// Fails at the first byte offset where no rule matches. An opening quote
    /// with no closing quote is reported as [`LexError::UnterminatedString`].
    pub fn tokenize<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < source.len() {
            let rest = &source[position..];
            let matched = self
                .rules
                .iter()
                .find_map(|rule| rule.match_len(rest).map(|len| (rule.kind, len)));

            let Some((kind, len)) = matched else {
                return Err(Self::unmatched(rest, position));
            };

            if kind != TokenKind::Whitespace {
                tokens.push(Token::new(kind, &rest[..len], position));
            }
            position += len;
        }

        trace!(count = tokens.len(), "tokenized expression");
        Ok(tokens)
    }

    fn unmatched(rest: &str, position: usize) -> LexError {
        match rest.chars().next() {
            Some('\'') | None => LexError::UnterminatedString { position },
            Some(character) => LexError::UnexpectedCharacter {
                character,
                position,
            },
        }
    }
}
