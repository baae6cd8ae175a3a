//! Error types for SCL lexing, parsing and serialization.
//!
//! Every fallible operation in this crate returns [`Result`], and every failure is
//! terminal to the operation that raised it: there is no partial result and no recovery.
//!
//! ## Error Categories
//!
//! - **Lexical errors**: unterminated comments, strings, escapes and multiline strings,
//!   malformed numbers and stray characters. Each carries the 1-based line and column of
//!   the offending position.
//! - **Syntax errors**: a token of the wrong kind where the grammar expected another
//!   one ([`Error::UnexpectedToken`]), also positioned.
//! - **Serialization errors**: a configuration tree that cannot be rendered, such as a
//!   list with mixed element shapes. These name the offending key instead of a source
//!   position, since an in-memory tree has no source coordinates.
//! - **Serde errors**: Rust values with no SCL representation, I/O failures and
//!   messages raised by `Serialize`/`Deserialize` implementations.
//!
//! ## Examples
//!
//! ```rust
//! use serde_scl::{loads, Error};
//!
//! let err = loads("x :: num { }").unwrap_err();
//! assert!(err.is_syntax());
//! assert_eq!(err.position(), Some((1, 12)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading or writing SCL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A `[` comment was never closed by `]`.
    #[error("Syntax error at line {line}, column {col}: unterminated comment")]
    UnterminatedComment { line: usize, col: usize },

    /// A `"` string reached end of input before its closing quote.
    #[error("Syntax error at line {line}, column {col}: unterminated string")]
    UnterminatedString { line: usize, col: usize },

    /// Input ended immediately after a backslash inside a string.
    #[error("Syntax error at line {line}, column {col}: unexpected end of input after backslash")]
    UnterminatedEscape { line: usize, col: usize },

    /// A `'` multiline string reached end of input before its closing apostrophe.
    #[error("Syntax error at line {line}, column {col}: unterminated multiline string")]
    UnterminatedMultilineString { line: usize, col: usize },

    /// A numeric literal that is malformed or does not fit its type.
    #[error("Syntax error at line {line}, column {col}: invalid number: {msg}")]
    InvalidNumber { line: usize, col: usize, msg: String },

    /// A character that cannot start any token.
    #[error("Syntax error at line {line}, column {col}: unexpected character {found:?}")]
    UnexpectedCharacter { line: usize, col: usize, found: char },

    /// The parser found a token of the wrong kind.
    #[error("Syntax error at line {line}, column {col}: expected {expected}, got {found}")]
    UnexpectedToken {
        line: usize,
        col: usize,
        expected: String,
        found: String,
    },

    /// A list whose elements do not all share the type inferred from its first element.
    #[error("Mixed types in list for key '{key}': expected all {expected}")]
    InconsistentListType { key: String, expected: String },

    /// A value in the tree that has no SCL rendering.
    #[error("Unsupported value for key '{key}': {msg}")]
    UnsupportedValue { key: String, msg: String },

    /// A Rust type that cannot be represented as an SCL value.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected-token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_scl::Error;
    ///
    /// let err = Error::unexpected_token(3, 7, "{", "}");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Syntax error at line 3, column 7: expected {, got }"
    /// );
    /// ```
    pub fn unexpected_token(line: usize, col: usize, expected: &str, found: &str) -> Self {
        Error::UnexpectedToken {
            line,
            col,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an invalid-number error.
    pub fn invalid_number(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidNumber {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a mixed-list error naming the offending key.
    pub fn inconsistent_list_type(key: &str, expected: &str) -> Self {
        Error::InconsistentListType {
            key: key.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates an unsupported-value error naming the offending key.
    pub fn unsupported_value(key: &str, msg: &str) -> Self {
        Error::UnsupportedValue {
            key: key.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported type error for Rust types that have no SCL form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_scl::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised by the lexer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedComment { .. }
                | Error::UnterminatedString { .. }
                | Error::UnterminatedEscape { .. }
                | Error::UnterminatedMultilineString { .. }
                | Error::InvalidNumber { .. }
                | Error::UnexpectedCharacter { .. }
        )
    }

    /// Returns `true` for grammar errors raised by the parser.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Error::UnexpectedToken { .. })
    }

    /// Returns `true` for errors raised while rendering a tree to text.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(
            self,
            Error::InconsistentListType { .. } | Error::UnsupportedValue { .. }
        )
    }

    /// Returns the 1-based `(line, column)` of positioned errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_scl::Error;
    ///
    /// assert_eq!(Error::UnterminatedString { line: 3, col: 5 }.position(), Some((3, 5)));
    /// assert_eq!(Error::custom("x").position(), None);
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnterminatedComment { line, col }
            | Error::UnterminatedString { line, col }
            | Error::UnterminatedEscape { line, col }
            | Error::UnterminatedMultilineString { line, col }
            | Error::InvalidNumber { line, col, .. }
            | Error::UnexpectedCharacter { line, col, .. }
            | Error::UnexpectedToken { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let lexical = Error::UnexpectedCharacter {
            line: 1,
            col: 1,
            found: '@',
        };
        assert!(lexical.is_lexical());
        assert!(!lexical.is_syntax());

        let syntax = Error::unexpected_token(2, 4, "::", "IDENTIFIER");
        assert!(syntax.is_syntax());
        assert!(!syntax.is_lexical());
        assert_eq!(syntax.position(), Some((2, 4)));

        let ser = Error::inconsistent_list_type("ports", "num");
        assert!(ser.is_serialization());
        assert_eq!(ser.position(), None);
        assert!(ser.to_string().contains("'ports'"));
    }

    #[test]
    fn test_display_includes_position() {
        let err = Error::UnterminatedMultilineString { line: 7, col: 12 };
        assert_eq!(
            err.to_string(),
            "Syntax error at line 7, column 12: unterminated multiline string"
        );
    }
}
