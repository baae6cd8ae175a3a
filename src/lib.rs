//! # serde_scl
//!
//! A parser and serializer for SCL, a small typed configuration language, with a Serde
//! layer on top.
//!
//! ## What is SCL?
//!
//! Every SCL entry names its type explicitly:
//!
//! ```text
//! [ service settings ]
//! name :: str { "gateway" }
//! port :: num { 8080 }
//! ratio :: fl { 0.75 }
//! tls :: bool { yes }
//! hosts :: list(str) { "a.local", "b.local" }
//! limits :: class {
//!     burst :: num { 20 }
//! }
//! motd :: ml {
//!     'Welcome.
//! Be nice.'
//! }
//! ```
//!
//! Text is turned into a configuration tree ([`SclMap`]) by [`loads`] and written
//! back by [`dumps`]. Both are deterministic: keys keep their source order and the
//! output layout depends only on the tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_scl::{dumps, loads, Value};
//!
//! let tree = loads("port :: num { 8080 }\ntls :: bool { yes }").unwrap();
//! assert_eq!(tree.get("tls"), Some(&Value::Bool(true)));
//!
//! let text = dumps(&tree).unwrap();
//! assert_eq!(text, "port :: num { 8080 }\ntls :: bool { true }\n");
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_scl::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//!     tags: Vec<String>,
//! }
//!
//! let server = Server {
//!     host: "localhost".to_string(),
//!     port: 8080,
//!     tags: vec!["edge".to_string()],
//! };
//!
//! let text = to_string(&server).unwrap();
//! assert_eq!(
//!     text,
//!     "host :: str { \"localhost\" }\nport :: num { 8080 }\ntags :: list(str) { \"edge\" }\n"
//! );
//!
//! let back: Server = from_str(&text).unwrap();
//! assert_eq!(server, back);
//! ```
//!
//! ### Dynamic Values with the scl! Macro
//!
//! ```rust
//! use serde_scl::{scl, Value};
//!
//! let data = scl!({
//!     "name": "Alice",
//!     "tags": ["rust", "config"]
//! });
//!
//! if let Value::Class(class) = data {
//!     assert_eq!(class.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Logging
//!
//! The lexer, parser and serializer emit `tracing` events under the targets
//! `serde_scl::lexer`, `serde_scl::parser` and `serde_scl::ser`. Nothing is printed
//! unless the application installs a subscriber.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the grammar.
//!
//! ## Demos
//!
//! The `demos/` directory holds runnable programs (`simple.rs`, `macro.rs`,
//! `dynamic_values.rs`). Run one with `cargo run --example <name>`.

pub mod de;
pub mod error;
pub mod format;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod token;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use lexer::{tokenize, Lexer};
pub use map::SclMap;
pub use options::SclOptions;
pub use parser::{parse, Parser};
pub use ser::{Serializer, ValueSerializer};
pub use token::{Payload, Token, TokenKind};
pub use value::{ElementType, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses SCL text into a configuration tree.
///
/// # Examples
///
/// ```rust
/// use serde_scl::{loads, Value};
///
/// let tree = loads("x :: fl { 5 }").unwrap();
/// assert_eq!(tree.get("x"), Some(&Value::Float(5.0)));
/// ```
///
/// # Errors
///
/// Returns a lexical error for malformed characters, literals or comments, and a
/// syntax error (with the offending token's position) for malformed structure.
pub fn loads(text: &str) -> Result<SclMap> {
    let tokens = tokenize(text)?;
    parse(&tokens)
}

/// Renders a configuration tree as SCL text with the default 4-space indent.
///
/// # Examples
///
/// ```rust
/// use serde_scl::{dumps, loads};
///
/// let tree = loads("ports :: list(num) { 80, 443 }").unwrap();
/// assert_eq!(dumps(&tree).unwrap(), "ports :: list(num) { 80, 443 }\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::InconsistentListType`] when a list mixes element types and
/// [`Error::UnsupportedValue`] for values with no SCL form.
pub fn dumps(tree: &SclMap) -> Result<String> {
    dumps_with_options(tree, SclOptions::default())
}

/// Renders a configuration tree as SCL text with custom options.
///
/// # Errors
///
/// Same as [`dumps`].
pub fn dumps_with_options(tree: &SclMap, options: SclOptions) -> Result<String> {
    let mut serializer = Serializer::new(options);
    serializer.serialize_document(tree)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to an SCL string.
///
/// `T` must serialize as a map or struct, since an SCL document is a class.
///
/// # Errors
///
/// Returns an error if the value has no SCL form (unit, `None`, a top-level scalar,
/// a mixed list).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, SclOptions::default())
}

/// Serialize any `T: Serialize` to an SCL string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_scl::{to_string_with_options, SclOptions};
///
/// #[derive(Serialize)]
/// struct Outer { inner: Inner }
/// #[derive(Serialize)]
/// struct Inner { on: bool }
///
/// let text = to_string_with_options(
///     &Outer { inner: Inner { on: true } },
///     SclOptions::new().with_indent(2),
/// )
/// .unwrap();
/// assert_eq!(text, "inner :: class {\n  on :: bool { true }\n}\n");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: SclOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        Value::Class(tree) => dumps_with_options(&tree, options),
        other => Err(Error::unsupported_type(&format!(
            "top-level value must be a class, found {}",
            other.type_name()
        ))),
    }
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_scl::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.get("y"), Some(&Value::Integer(2)));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer in SCL format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, SclOptions::default())
}

/// Serialize any `T: Serialize` to a writer in SCL format with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: SclOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from SCL text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_scl::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x :: num { 1 }\ny :: num { 2 }").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid SCL or does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::from_str(s)?)
}

/// Deserialize an instance of type `T` from an I/O stream of SCL.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_scl::from_reader;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(b"x :: num { 1 }\ny :: num { 2 }");
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid SCL, or the data does
/// not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of SCL text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid SCL, or do not
/// match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_scl::{from_value, scl};
///
/// let ports: Vec<u16> = from_value(scl!([80, 443])).unwrap();
/// assert_eq!(ports, vec![80, 443]);
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(value))
}
