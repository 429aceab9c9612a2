use core::fmt;

/// Every kind of token the default rule table can produce.
///
/// `Whitespace` is recognized but never emitted. `Eof` is never produced by
/// the lexer; the parser's token stream synthesizes it past the last token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Decimal,
    Integer,
    Str,
    Identifier,
    LeftParen,
    RightParen,
    Comma,
    Plus,
    Minus,
    Star,
    Slash,
    Ampersand,
    Question,
    Colon,
    LessEqual,
    GreaterEqual,
    NotEqual,
    Less,
    Greater,
    Equal,
    Whitespace,
    Eof,
}

impl TokenKind {
    /// The fixed source text of punctuation and operator kinds.
    pub fn symbol(self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Ampersand => "&",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Equal => "=",
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Decimal => f.write_str("decimal literal"),
            TokenKind::Integer => f.write_str("integer literal"),
            TokenKind::Str => f.write_str("string literal"),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Whitespace => f.write_str("whitespace"),
            TokenKind::Eof => f.write_str("end of input"),
            other => write!(f, "'{}'", other.symbol().unwrap_or_default()),
        }
    }
}

/// A lexeme borrowed from the source, tagged with its kind and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, position: usize) -> Self {
        Self {
            kind,
            lexeme,
            position,
        }
    }

    /// End-of-input sentinel at `position`.
    pub fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }

    /// Byte offset just past this token.
    pub fn end(&self) -> usize {
        self.position + self.lexeme.len()
    }

    /// Text used when reporting this token in a diagnostic.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => TokenKind::Eof.to_string(),
            _ => self.lexeme.to_string(),
        }
    }
}
