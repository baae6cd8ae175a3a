//! SCL recursive-descent parser.
//!
//! The [`Parser`] consumes the lexer's tokens with trivia removed and builds an
//! [`SclMap`]. There is one method per grammar production and a single forward cursor
//! with one token of lookahead:
//!
//! ```text
//! document    := parameter* EOF
//! parameter   := key '::' typed_value
//! key         := IDENTIFIER | type keyword | NUMBER | STRING
//! typed_value := 'bool' '{' BOOLEAN '}'
//!              | 'str'  '{' STRING '}'
//!              | 'num'  '{' NUMBER '}'
//!              | 'fl'   '{' (FLOAT | NUMBER) '}'
//!              | 'ml'   '{' MULTILINE_STRING '}'
//!              | 'class' '{' parameter* '}'
//!              | 'list' '(' elem_type ')' '{' (element (',' element)*)? '}'
//! elem_type   := 'num' | 'fl' | 'bool' | 'str'
//! ```
//!
//! Every consumption point goes through [`Parser::eat`], so every grammar violation
//! surfaces as [`Error::UnexpectedToken`] at the offending token.

use crate::token::{Payload, Token, TokenKind};
use crate::value::ElementType;
use crate::{Error, Result, SclMap, Value};
use tracing::{debug, trace};

/// Builds a configuration tree from a token sequence.
pub struct Parser<'t> {
    tokens: Vec<&'t Token>,
    eof: Token,
    position: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser over `tokens`, dropping comments and newlines.
    ///
    /// Parsing stops at the first end-of-input token. A sequence without one is
    /// treated as if it ended right after its last token.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        let (line, column) = tokens
            .last()
            .map_or((1, 1), |token| (token.line, token.column));
        Parser {
            tokens: tokens.iter().filter(|t| !t.kind.is_trivia()).collect(),
            eof: Token::new(TokenKind::Eof, Payload::None, line, column),
            position: 0,
        }
    }

    /// Parses the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedToken`] on the first grammar violation.
    pub fn parse(mut self) -> Result<SclMap> {
        let mut config = SclMap::new();
        while self.current().kind != TokenKind::Eof {
            let (name, value) = self.parse_parameter()?;
            config.insert(name, value);
        }
        debug!(target: "serde_scl::parser", keys = config.len(), "parsed document");
        Ok(config)
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.position).copied().unwrap_or(&self.eof)
    }

    fn error(&self, expected: &str) -> Error {
        let token = self.current();
        Error::unexpected_token(token.line, token.column, expected, token.kind.as_str())
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current().kind != kind {
            return Err(self.error(kind.as_str()));
        }
        Ok(self.advance())
    }

    fn parse_parameter(&mut self) -> Result<(String, Value)> {
        let name = self.parse_key()?;
        self.eat(TokenKind::DoubleColon)?;

        let value = match self.current().kind {
            TokenKind::Bool => {
                self.advance();
                self.parse_braced(Self::parse_bool)?
            }
            TokenKind::Str => {
                self.advance();
                self.parse_braced(Self::parse_string)?
            }
            TokenKind::Num => {
                self.advance();
                self.parse_braced(Self::parse_integer)?
            }
            TokenKind::Fl => {
                self.advance();
                self.parse_braced(Self::parse_float)?
            }
            TokenKind::Ml => {
                self.advance();
                self.parse_braced(|p| p.parse_text(TokenKind::MultilineString))?
            }
            TokenKind::Class => {
                self.advance();
                self.parse_class()?
            }
            TokenKind::List => {
                self.advance();
                self.parse_list()?
            }
            _ => return Err(self.error("type keyword")),
        };

        trace!(target: "serde_scl::parser", key = %name, kind = value.type_name(), "parsed parameter");
        Ok((name, value))
    }

    fn parse_key(&mut self) -> Result<String> {
        let token = self.current();
        let name = match (&token.kind, &token.payload) {
            (TokenKind::Identifier | TokenKind::String, Payload::Text(text)) => text.clone(),
            (kind, Payload::Text(text)) if kind.is_type_keyword() => text.clone(),
            (TokenKind::Integer, Payload::Integer(n)) => n.to_string(),
            _ => return Err(self.error("identifier or keyword")),
        };
        self.advance();
        Ok(name)
    }

    fn parse_braced<F>(&mut self, inner: F) -> Result<Value>
    where
        F: FnOnce(&mut Self) -> Result<Value>,
    {
        self.eat(TokenKind::LBrace)?;
        let value = inner(self)?;
        self.eat(TokenKind::RBrace)?;
        Ok(value)
    }

    // Literal rules check kind and payload before advancing.
    fn parse_bool(&mut self) -> Result<Value> {
        let value = match (&self.current().kind, &self.current().payload) {
            (TokenKind::Boolean, Payload::Bool(b)) => Value::Bool(*b),
            _ => return Err(self.error(TokenKind::Boolean.as_str())),
        };
        self.advance();
        Ok(value)
    }

    fn parse_integer(&mut self) -> Result<Value> {
        let value = match (&self.current().kind, &self.current().payload) {
            (TokenKind::Integer, Payload::Integer(n)) => Value::Integer(*n),
            _ => return Err(self.error(TokenKind::Integer.as_str())),
        };
        self.advance();
        Ok(value)
    }

    /// Accepts a float literal or an integer literal coerced to float.
    fn parse_float(&mut self) -> Result<Value> {
        let value = match (&self.current().kind, &self.current().payload) {
            (TokenKind::Float, Payload::Float(f)) => *f,
            (TokenKind::Integer, Payload::Integer(n)) => *n as f64,
            _ => return Err(self.error("FLOAT or NUMBER")),
        };
        self.advance();
        Ok(Value::Float(value))
    }

    fn parse_string(&mut self) -> Result<Value> {
        self.parse_text(TokenKind::String)
    }

    fn parse_text(&mut self, kind: TokenKind) -> Result<Value> {
        let value = match (&self.current().kind, &self.current().payload) {
            (found, Payload::Text(s)) if *found == kind => Value::String(s.clone()),
            _ => return Err(self.error(kind.as_str())),
        };
        self.advance();
        Ok(value)
    }

    fn parse_class(&mut self) -> Result<Value> {
        self.eat(TokenKind::LBrace)?;
        let mut body = SclMap::new();
        while self.current().kind != TokenKind::RBrace {
            let (name, value) = self.parse_parameter()?;
            body.insert(name, value);
        }
        self.eat(TokenKind::RBrace)?;
        Ok(Value::Class(body))
    }

    fn parse_element_type(&mut self) -> Result<ElementType> {
        let element_type = match self.current().kind {
            TokenKind::Num => ElementType::Num,
            TokenKind::Fl => ElementType::Fl,
            TokenKind::Bool => ElementType::Bool,
            TokenKind::Str => ElementType::Str,
            _ => return Err(self.error("list element type")),
        };
        self.advance();
        Ok(element_type)
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.eat(TokenKind::LParen)?;
        let element_type = self.parse_element_type()?;
        self.eat(TokenKind::RParen)?;
        self.eat(TokenKind::LBrace)?;

        let parse_element: fn(&mut Self) -> Result<Value> = match element_type {
            ElementType::Num => Self::parse_integer,
            ElementType::Fl => Self::parse_float,
            ElementType::Bool => Self::parse_bool,
            ElementType::Str => Self::parse_string,
        };

        let mut elements = Vec::new();
        if self.current().kind != TokenKind::RBrace {
            loop {
                elements.push(parse_element(self)?);
                match self.current().kind {
                    TokenKind::Comma => {
                        self.advance();
                    }
                    TokenKind::RBrace => break,
                    _ => return Err(self.error("',' or '}'")),
                }
            }
        }
        self.eat(TokenKind::RBrace)?;
        Ok(Value::List(elements))
    }
}

/// Parses a token sequence into a configuration tree.
///
/// Comment and newline tokens are ignored.
///
/// # Errors
///
/// Returns [`Error::UnexpectedToken`] on the first grammar violation.
pub fn parse(tokens: &[Token]) -> Result<SclMap> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_str(input: &str) -> Result<SclMap> {
        parse(&tokenize(input)?)
    }

    #[test]
    fn test_scalars() {
        let tree = parse_str(
            "a :: bool { yes }\nb :: str { \"hi\" }\nc :: num { -42 }\nd :: fl { -1.5 }",
        )
        .unwrap();
        assert_eq!(tree.get("a"), Some(&Value::Bool(true)));
        assert_eq!(tree.get("b"), Some(&Value::String("hi".to_string())));
        assert_eq!(tree.get("c"), Some(&Value::Integer(-42)));
        assert_eq!(tree.get("d"), Some(&Value::Float(-1.5)));
    }

    #[test]
    fn test_float_accepts_integer() {
        let tree = parse_str("f :: fl { 5 }").unwrap();
        assert_eq!(tree.get("f"), Some(&Value::Float(5.0)));
    }

    #[test]
    fn test_multiline() {
        let tree = parse_str("desc :: ml {\n    'hello\n    world'\n}").unwrap();
        assert_eq!(
            tree.get("desc"),
            Some(&Value::String("hello\n    world".to_string()))
        );
    }

    #[test]
    fn test_keys_may_be_keywords_numbers_and_strings() {
        let tree = parse_str(
            "class :: num { 1 }\n42 :: num { 2 }\n\"my key\" :: num { 3 }\n2fast :: num { 4 }",
        )
        .unwrap();
        let keys: Vec<_> = tree.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["class", "42", "my key", "2fast"]);
    }

    #[test]
    fn test_last_assignment_wins() {
        let tree = parse_str("a :: num { 1 }\nb :: num { 0 }\na :: num { 2 }").unwrap();
        assert_eq!(tree.get("a"), Some(&Value::Integer(2)));
        assert_eq!(tree.keys().next().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_nested_class() {
        let tree = parse_str("o :: class { a :: bool { true } inner :: class { } }").unwrap();
        let o = tree.get("o").and_then(Value::as_class).unwrap();
        assert_eq!(o.get("a"), Some(&Value::Bool(true)));
        assert_eq!(o.get("inner"), Some(&Value::Class(SclMap::new())));
    }

    #[test]
    fn test_lists() {
        let tree = parse_str(
            "n :: list(num) { 1, 2, 3 }\nf :: list(fl) { 1.5, 2 }\ns :: list(str) { }\nb :: list(bool) { no }",
        )
        .unwrap();
        assert_eq!(
            tree.get("n"),
            Some(&Value::List(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3)
            ]))
        );
        assert_eq!(
            tree.get("f"),
            Some(&Value::List(vec![Value::Float(1.5), Value::Float(2.0)]))
        );
        assert_eq!(tree.get("s"), Some(&Value::List(vec![])));
        assert_eq!(tree.get("b"), Some(&Value::List(vec![Value::Bool(false)])));
    }

    #[test]
    fn test_comments_are_ignored() {
        let tree = parse_str("[ header ]\na :: [inline] num { 1 }").unwrap();
        assert_eq!(tree.get("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_empty_braces_for_number() {
        assert_eq!(
            parse_str("x :: num { }").unwrap_err(),
            Error::unexpected_token(1, 12, "NUMBER", "}")
        );
    }

    #[test]
    fn test_list_rejects_mixed_elements() {
        assert_eq!(
            parse_str("l :: list(num) { 1, \"x\" }").unwrap_err(),
            Error::unexpected_token(1, 21, "NUMBER", "STRING")
        );
    }

    #[test]
    fn test_list_rejects_trailing_comma() {
        let err = parse_str("l :: list(num) { 1, 2, }").unwrap_err();
        assert_eq!(err, Error::unexpected_token(1, 24, "NUMBER", "}"));
    }

    #[test]
    fn test_list_requires_separator() {
        let err = parse_str("l :: list(num) { 1 2 }").unwrap_err();
        assert_eq!(err, Error::unexpected_token(1, 20, "',' or '}'", "NUMBER"));
    }

    #[test]
    fn test_unsupported_list_element_type() {
        let err = parse_str("l :: list(class) { }").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { ref found, .. } if found == "class"));
    }

    #[test]
    fn test_unknown_type() {
        let err = parse_str("a :: widget { 1 }").unwrap_err();
        assert_eq!(err, Error::unexpected_token(1, 6, "type keyword", "IDENTIFIER"));
    }

    #[test]
    fn test_boolean_is_not_a_key() {
        let err = parse_str("yes :: num { 1 }").unwrap_err();
        assert_eq!(
            err,
            Error::unexpected_token(1, 1, "identifier or keyword", "BOOLEAN")
        );
    }

    #[test]
    fn test_unclosed_class_reports_eof() {
        let err = parse_str("o :: class {\n a :: num { 1 }\n").unwrap_err();
        assert_eq!(err, Error::unexpected_token(3, 1, "identifier or keyword", "EOF"));
    }

    #[test]
    fn test_tokens_without_eof() {
        let tokens = tokenize("a :: num { 1 }").unwrap();
        let tree = parse(&tokens[..tokens.len() - 1]).unwrap();
        assert_eq!(tree.get("a"), Some(&Value::Integer(1)));
        assert!(parse(&[]).unwrap().is_empty());
    }

    fn literal_entry(type_kind: TokenKind, literal: Token) -> Vec<Token> {
        vec![
            Token::new(TokenKind::Identifier, Payload::Text("x".into()), 1, 1),
            Token::new(TokenKind::DoubleColon, Payload::Text("::".into()), 1, 3),
            Token::new(type_kind, Payload::Text(type_kind.as_str().into()), 1, 6),
            Token::new(TokenKind::LBrace, Payload::Text("{".into()), 1, 11),
            literal,
            Token::new(TokenKind::RBrace, Payload::Text("}".into()), 1, 17),
            Token::new(TokenKind::Eof, Payload::None, 1, 18),
        ]
    }

    #[test]
    fn test_mismatched_payload_reports_the_literal() {
        let cases = [
            (TokenKind::Bool, TokenKind::Boolean, Payload::Text("yes".into())),
            (TokenKind::Num, TokenKind::Integer, Payload::Float(1.5)),
            (TokenKind::Str, TokenKind::String, Payload::Integer(7)),
            (TokenKind::Ml, TokenKind::MultilineString, Payload::Bool(true)),
        ];
        for (type_kind, literal_kind, payload) in cases {
            let literal = Token::new(literal_kind, payload, 1, 13);
            let err = parse(&literal_entry(type_kind, literal)).unwrap_err();
            assert_eq!(
                err,
                Error::unexpected_token(1, 13, literal_kind.as_str(), literal_kind.as_str())
            );
        }
    }
}
