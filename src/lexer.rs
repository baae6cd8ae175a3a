//! SCL lexical analysis.
//!
//! The [`Lexer`] makes a single eager pass over the whole input and produces every
//! [`Token`], trivia included. Newlines are emitted as tokens rather than skipped so
//! that line tracking stays exact; the parser filters them out.
//!
//! ```rust
//! use serde_scl::{tokenize, TokenKind};
//!
//! let tokens = tokenize("port :: num { 8080 }").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::DoubleColon,
//!         TokenKind::Num,
//!         TokenKind::LBrace,
//!         TokenKind::Integer,
//!         TokenKind::RBrace,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use crate::token::{Payload, Token, TokenKind};
use crate::{Error, Result};
use tracing::{debug, trace};

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("bool", TokenKind::Bool),
    ("str", TokenKind::Str),
    ("num", TokenKind::Num),
    ("fl", TokenKind::Fl),
    ("ml", TokenKind::Ml),
    ("class", TokenKind::Class),
    ("list", TokenKind::List),
];

const BOOLEAN_LITERALS: &[(&str, bool)] = &[
    ("true", true),
    ("yes", true),
    ("false", false),
    ("no", false),
];

/// Looks up a reserved type keyword.
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(text, _)| *text == word)
        .map(|(_, kind)| *kind)
}

/// Looks up a boolean literal spelling (`true`, `yes`, `false`, `no`).
#[must_use]
pub fn boolean_literal(word: &str) -> Option<bool> {
    BOOLEAN_LITERALS
        .iter()
        .find(|(text, _)| *text == word)
        .map(|(_, value)| *value)
}

#[inline]
fn is_word_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

/// Converts SCL text into a token sequence.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole input, ending with a single [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        trace!(target: "serde_scl::lexer", bytes = self.input.len(), "tokenizing input");

        loop {
            self.skip_whitespace();
            let ch = match self.peek_char() {
                Some(ch) => ch,
                None => break,
            };

            let token = match ch {
                '[' => self.read_comment()?,
                '\n' => {
                    let (line, column) = (self.line, self.column);
                    self.next_char();
                    Token::new(TokenKind::Newline, text("\n"), line, column)
                }
                ':' if self.peek_nth(1) == Some(':') => {
                    let (line, column) = (self.line, self.column);
                    self.next_char();
                    self.next_char();
                    Token::new(TokenKind::DoubleColon, text("::"), line, column)
                }
                '{' | '}' | '(' | ')' | ',' => {
                    let (line, column) = (self.line, self.column);
                    self.next_char();
                    let kind = match ch {
                        '{' => TokenKind::LBrace,
                        '}' => TokenKind::RBrace,
                        '(' => TokenKind::LParen,
                        ')' => TokenKind::RParen,
                        _ => TokenKind::Comma,
                    };
                    Token::new(kind, Payload::Text(ch.to_string()), line, column)
                }
                '"' => self.read_string()?,
                '\'' => self.read_multiline_string()?,
                '-' if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                    self.read_number()?
                }
                c if c.is_ascii_digit() => {
                    if self.digits_run_into_word() {
                        self.read_word()
                    } else {
                        self.read_number()?
                    }
                }
                c if is_word_start(c) => self.read_word(),
                c => {
                    return Err(Error::UnexpectedCharacter {
                        line: self.line,
                        col: self.column,
                        found: c,
                    })
                }
            };
            self.tokens.push(token);
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, Payload::None, self.line, self.column));
        debug!(target: "serde_scl::lexer", tokens = self.tokens.len(), "tokenized input");
        Ok(self.tokens)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.position..].chars().nth(n)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t') = self.peek_char() {
            self.next_char();
        }
    }

    /// A run of digits directly followed by a letter or underscore is a key such as
    /// `2fast`, not a number.
    fn digits_run_into_word(&self) -> bool {
        let rest = self.input[self.position..].trim_start_matches(|c: char| c.is_ascii_digit());
        rest.chars().next().is_some_and(is_word_start)
    }

    fn read_comment(&mut self) -> Result<Token> {
        let (line, col) = (self.line, self.column);
        self.next_char();
        let mut comment = String::new();
        loop {
            match self.next_char() {
                Some(']') => break,
                Some(ch) => comment.push(ch),
                None => return Err(Error::UnterminatedComment { line, col }),
            }
        }
        Ok(Token::new(
            TokenKind::Comment,
            Payload::Text(comment.trim().to_string()),
            line,
            col,
        ))
    }

    fn read_string(&mut self) -> Result<Token> {
        let (line, col) = (self.line, self.column);
        self.next_char();
        let mut result = String::new();
        loop {
            match self.next_char() {
                Some('"') => break,
                Some('\\') => {
                    let (escape_line, escape_col) = (self.line, self.column - 1);
                    match self.next_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        // `\"`, `\\` and any unknown escape yield the character itself
                        Some(other) => result.push(other),
                        None => {
                            return Err(Error::UnterminatedEscape {
                                line: escape_line,
                                col: escape_col,
                            })
                        }
                    }
                }
                Some(ch) => result.push(ch),
                None => return Err(Error::UnterminatedString { line, col }),
            }
        }
        Ok(Token::new(TokenKind::String, Payload::Text(result), line, col))
    }

    fn read_multiline_string(&mut self) -> Result<Token> {
        let (line, col) = (self.line, self.column);
        self.next_char();
        let start = self.position;
        loop {
            match self.peek_char() {
                Some('\'') => break,
                Some(_) => {
                    self.next_char();
                }
                None => return Err(Error::UnterminatedMultilineString { line, col }),
            }
        }
        let content = self.input[start..self.position].to_string();
        self.next_char();
        Ok(Token::new(
            TokenKind::MultilineString,
            Payload::Text(content),
            line,
            col,
        ))
    }

    fn read_number(&mut self) -> Result<Token> {
        let (line, col) = (self.line, self.column);
        let start = self.position;

        if self.peek_char() == Some('-') {
            self.next_char();
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return Err(Error::invalid_number(line, col, "expected digit after '-'"));
            }
        }

        let mut has_dot = false;
        let mut has_digits = false;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                has_digits = true;
            } else if ch == '.' && !has_dot {
                has_dot = true;
            } else {
                break;
            }
            self.next_char();
        }

        if !has_digits {
            return Err(Error::invalid_number(line, col, "no digits in literal"));
        }

        let literal = &self.input[start..self.position];
        let token = if has_dot {
            let value = literal
                .parse::<f64>()
                .map_err(|e| Error::invalid_number(line, col, &e.to_string()))?;
            Token::new(TokenKind::Float, Payload::Float(value), line, col)
        } else {
            let value = literal
                .parse::<i64>()
                .map_err(|e| Error::invalid_number(line, col, &e.to_string()))?;
            Token::new(TokenKind::Integer, Payload::Integer(value), line, col)
        };
        Ok(token)
    }

    fn read_word(&mut self) -> Token {
        let (line, col) = (self.line, self.column);
        let start = self.position;
        while self.peek_char().is_some_and(is_word_char) {
            self.next_char();
        }
        let word = &self.input[start..self.position];

        if let Some(kind) = keyword(word) {
            Token::new(kind, text(word), line, col)
        } else if let Some(value) = boolean_literal(word) {
            Token::new(TokenKind::Boolean, Payload::Bool(value), line, col)
        } else {
            Token::new(TokenKind::Identifier, text(word), line, col)
        }
    }
}

fn text(s: &str) -> Payload {
    Payload::Text(s.to_string())
}

/// Tokenizes a complete SCL document.
///
/// # Errors
///
/// Returns a lexical error (see [`Error::is_lexical`]) on malformed input.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
