//! Tokens produced by the [lexer](crate::lexer).

use std::fmt;

/// The closed set of token kinds recognized by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    DoubleColon,

    // Type keywords
    Bool,
    Str,
    Num,
    Fl,
    Ml,
    Class,
    List,

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,

    // Literals
    String,
    MultilineString,
    Integer,
    Float,
    Boolean,

    // Trivia
    Comment,
    Newline,

    Eof,
}

impl TokenKind {
    /// Returns `true` for the seven reserved type keywords.
    #[inline]
    #[must_use]
    pub const fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Bool
                | TokenKind::Str
                | TokenKind::Num
                | TokenKind::Fl
                | TokenKind::Ml
                | TokenKind::Class
                | TokenKind::List
        )
    }

    /// Returns `true` for tokens the parser skips.
    #[inline]
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Newline)
    }

    /// The name used for this kind in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::DoubleColon => "::",
            TokenKind::Bool => "bool",
            TokenKind::Str => "str",
            TokenKind::Num => "num",
            TokenKind::Fl => "fl",
            TokenKind::Ml => "ml",
            TokenKind::Class => "class",
            TokenKind::List => "list",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::String => "STRING",
            TokenKind::MultilineString => "MULTILINE_STRING",
            TokenKind::Integer => "NUMBER",
            TokenKind::Float => "FLOAT",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Comment => "COMMENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decoded content carried by a token.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// End of input carries nothing.
    None,
    /// Raw text for identifiers, keywords, punctuation and comments, or the
    /// decoded text of a string literal.
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// A lexical token with its 1-based source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub payload: Payload,
    pub line: usize,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, payload: Payload, line: usize, column: usize) -> Self {
        Token {
            kind,
            payload,
            line,
            column,
        }
    }

    /// The text payload, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }
}
