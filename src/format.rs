//! SCL Format Reference
//!
//! This module documents the SCL configuration language as implemented by this
//! library. It contains no code.
//!
//! # Overview
//!
//! An SCL document is a sequence of entries. Each entry names a key, a type keyword
//! and a braced value:
//!
//! ```text
//! key :: type { value }
//! ```
//!
//! Whitespace (spaces, tabs, newlines) is insignificant between tokens. Entries can
//! share a line or span several.
//!
//! # Lexical Structure
//!
//! | Token | Form | Notes |
//! |-------|------|-------|
//! | Comment | `[ any text ]` | Discarded by the parser. Cannot contain `]`. |
//! | Separator | `::` | A lone `:` is an error. |
//! | Punctuation | `{` `}` `(` `)` `,` | |
//! | String | `"text"` | Escapes `\n`, `\t`, `\"`, `\\`; any other escaped character is kept as is. |
//! | Multiline string | `'text'` | Raw, may contain newlines, no escapes. |
//! | Integer | `42`, `-7` | 64-bit signed. |
//! | Float | `1.5`, `-0.25` | A literal is a float exactly when it has a `.`. |
//! | Boolean | `true`, `yes`, `false`, `no` | |
//! | Identifier | `name`, `_x`, `max-conn`, `2fast` | Letters, digits, `_` and `-`. |
//!
//! A run of digits directly followed by a letter or `_` is an identifier, so `2fast`
//! is a key while `42` is a number.
//!
//! The type keywords are `bool`, `str`, `num`, `fl`, `ml`, `class` and `list`.
//!
//! # Grammar
//!
//! ```text
//! document    := parameter* EOF
//! parameter   := key '::' typed_value
//! key         := IDENTIFIER | type keyword | NUMBER | STRING
//! typed_value := 'bool'  '{' BOOLEAN '}'
//!              | 'str'   '{' STRING '}'
//!              | 'num'   '{' NUMBER '}'
//!              | 'fl'    '{' (FLOAT | NUMBER) '}'
//!              | 'ml'    '{' MULTILINE_STRING '}'
//!              | 'class' '{' parameter* '}'
//!              | 'list' '(' elem_type ')' '{' (element (',' element)*)? '}'
//! elem_type   := 'num' | 'fl' | 'bool' | 'str'
//! ```
//!
//! **Rules**:
//! - A type keyword can be used as a key: `class :: str { "A" }`.
//! - An integer key is stored as its decimal text: `1 :: bool { yes }` has key `"1"`.
//! - `fl { 5 }` is accepted and stored as `5.0`.
//! - Lists are homogeneous. Each element must match the declared element type.
//! - A trailing comma in a list is a syntax error.
//! - Empty lists and empty classes are allowed.
//! - A repeated key keeps its first position and takes the last value.
//!
//! # Canonical Output
//!
//! [`dumps`](crate::dumps) writes one entry per line, with `class` bodies indented by
//! [`SclOptions::indent`](crate::SclOptions) spaces per level (4 by default) and a
//! single trailing newline:
//!
//! ```text
//! name :: str { "gateway" }
//! limits :: class {
//!     burst :: num { 20 }
//!     ratio :: fl { 5.0 }
//! }
//! hosts :: list(str) { "a", "b" }
//! motd :: ml {
//!     'line one
//! line two'
//! }
//! ```
//!
//! **Type selection**:
//! - Strings containing a newline use `ml`, unless they also contain `'`. Those use
//!   `str` with `\n` and `\t` escaped.
//! - Other strings use `str`, escaping only `\` and `"`.
//! - Floats always have a decimal point. NaN and infinities cannot be written.
//! - A list takes its element type from its first element. `list(fl)` also admits
//!   integers. An empty list is written `list(str) { }`.
//! - A class is always written as a block, so an empty class is `class {`, a blank
//!   line, then `}`.
//! - Keys that would not lex back as the same identifier, and keys spelled like a
//!   boolean literal, are quoted.
//!
//! Comments are not preserved.
//!
//! # Errors
//!
//! | Kind | Examples | Position |
//! |------|----------|----------|
//! | Lexical | unterminated string, comment or `ml` literal; bad escape at end of input; `-` without digits; stray character | Start of the offending literal or character |
//! | Syntax | `x :: num { }`, `list(num) { 1, "x" }`, trailing comma | The unexpected token |
//! | Serialization | mixed list, nested list, NaN | None; the error names the key |
