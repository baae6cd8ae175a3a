//! SCL serialization.
//!
//! This module provides two serializers:
//!
//! - [`Serializer`] renders a configuration tree ([`SclMap`]) as canonical SCL text,
//!   choosing each type tag from the shape of the value.
//! - [`ValueSerializer`] is a Serde serializer that turns any `T: Serialize` into a
//!   [`Value`], which is how [`to_string`](crate::to_string) works.
//!
//! ## Output Shape
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | bool | `bool { true }` |
//! | integer | `num { -42 }` |
//! | float | `fl { 5.0 }` |
//! | string with a newline | `ml {` / `'raw text'` / `}` |
//! | other string | `str { "escaped" }` |
//! | class | `class {` / children / `}` |
//! | list | `list(num) { 1, 2, 3 }`; empty lists are `list(str) { }` |
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_scl::{scl, SclOptions, Serializer, Value};
//!
//! let tree = match scl!({ "ports": [80, 443] }) {
//!     Value::Class(map) => map,
//!     _ => unreachable!(),
//! };
//!
//! let mut serializer = Serializer::new(SclOptions::new());
//! serializer.serialize_document(&tree).unwrap();
//! assert_eq!(serializer.into_inner(), "ports :: list(num) { 80, 443 }\n");
//! ```

use crate::lexer::boolean_literal;
use crate::value::ElementType;
use crate::{Error, Result, SclMap, SclOptions, Value};
use serde::{ser, Serialize};
use tracing::debug;

/// Formats a float so that it always re-lexes as a float literal.
///
/// # Examples
///
/// ```rust
/// use serde_scl::ser::format_float;
///
/// assert_eq!(format_float(5.0), "5.0");
/// assert_eq!(format_float(-1.25), "-1.25");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Keys that lex back as the same identifier are written bare; anything else is quoted.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-') && boolean_literal(key).is_none()
}

/// Renders configuration trees as SCL text.
pub struct Serializer {
    output: String,
    options: SclOptions,
}

impl Serializer {
    pub fn new(options: SclOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes a whole document: one line per top-level entry and a single trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentListType`] for mixed lists and
    /// [`Error::UnsupportedValue`] for values with no SCL form (non-finite floats,
    /// nested lists or classes inside a list).
    pub fn serialize_document(&mut self, map: &SclMap) -> Result<()> {
        self.write_entries(map, 0)?;
        self.output.push('\n');
        debug!(target: "serde_scl::ser", keys = map.len(), bytes = self.output.len(), "serialized document");
        Ok(())
    }

    fn write_indent(&mut self, level: usize) {
        let width = self.options.indent * level;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    fn write_entries(&mut self, map: &SclMap, level: usize) -> Result<()> {
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.write_entry(key, value, level)?;
        }
        Ok(())
    }

    fn write_key(&mut self, key: &str) {
        if is_bare_key(key) {
            self.output.push_str(key);
        } else {
            self.output.push('"');
            write_escaped(&mut self.output, key, true);
            self.output.push('"');
        }
    }

    fn write_entry(&mut self, key: &str, value: &Value, level: usize) -> Result<()> {
        self.write_indent(level);
        self.write_key(key);
        self.output.push_str(" :: ");

        match value {
            Value::Bool(b) => {
                self.output.push_str(if *b { "bool { true }" } else { "bool { false }" });
            }
            Value::Integer(i) => {
                self.output.push_str(&format!("num {{ {} }}", i));
            }
            Value::Float(f) => {
                let text = float_literal(key, *f)?;
                self.output.push_str(&format!("fl {{ {} }}", text));
            }
            Value::String(s) if s.contains('\n') && !s.contains('\'') => {
                self.output.push_str("ml {\n");
                self.write_indent(level + 1);
                self.output.push('\'');
                self.output.push_str(s);
                self.output.push_str("'\n");
                self.write_indent(level);
                self.output.push('}');
            }
            Value::String(s) => {
                // An apostrophe would end an `ml` literal early, so such text stays in
                // `str` form with its line breaks escaped.
                let escape_controls = s.contains('\n');
                self.output.push_str("str { \"");
                write_escaped(&mut self.output, s, escape_controls);
                self.output.push_str("\" }");
            }
            Value::Class(map) => {
                self.output.push_str("class {\n");
                self.write_entries(map, level + 1)?;
                self.output.push('\n');
                self.write_indent(level);
                self.output.push('}');
            }
            Value::List(elements) => self.write_list(key, elements)?,
        }
        Ok(())
    }

    fn write_list(&mut self, key: &str, elements: &[Value]) -> Result<()> {
        let first = match elements.first() {
            Some(first) => first,
            None => {
                self.output.push_str("list(str) { }");
                return Ok(());
            }
        };

        let nested = |element: &Value| {
            Error::unsupported_value(
                key,
                &format!(
                    "list elements must be bool, num, fl or str, found {}",
                    element.type_name()
                ),
            )
        };
        let element_type = ElementType::of(first).ok_or_else(|| nested(first))?;

        let mut items = Vec::with_capacity(elements.len());
        for element in elements {
            if matches!(element, Value::List(_) | Value::Class(_)) {
                return Err(nested(element));
            }
            if !element_type.accepts(element) {
                return Err(Error::inconsistent_list_type(key, element_type.keyword()));
            }
            let item = match element {
                Value::Bool(b) => b.to_string(),
                Value::Integer(i) if element_type == ElementType::Fl => {
                    float_literal(key, *i as f64)?
                }
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => float_literal(key, *f)?,
                Value::String(s) => {
                    let mut quoted = String::with_capacity(s.len() + 2);
                    quoted.push('"');
                    write_escaped(&mut quoted, s, false);
                    quoted.push('"');
                    quoted
                }
                Value::List(_) | Value::Class(_) => return Err(nested(element)),
            };
            items.push(item);
        }

        self.output.push_str(&format!(
            "list({}) {{ {} }}",
            element_type.keyword(),
            items.join(", ")
        ));
        Ok(())
    }
}

fn float_literal(key: &str, value: f64) -> Result<String> {
    if value.is_finite() {
        Ok(format_float(value))
    } else {
        Err(Error::unsupported_value(
            key,
            &format!("{} has no SCL literal", value),
        ))
    }
}

/// Escapes `\` and `"`, plus newline and tab when `controls` is set.
fn write_escaped(output: &mut String, s: &str, controls: bool) {
    for ch in s.chars() {
        match ch {
            '\\' => output.push_str("\\\\"),
            '"' => output.push_str("\\\""),
            '\n' if controls => output.push_str("\\n"),
            '\t' if controls => output.push_str("\\t"),
            _ => output.push(ch),
        }
    }
}

/// Serde serializer producing a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: SclMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: &'static str,
    map: SclMap,
}

fn single_entry(name: &str, value: Value) -> Value {
    let mut map = SclMap::with_capacity(1);
    map.insert(name.to_string(), value);
    Value::Class(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Integer)
            .map_err(|_| Error::unsupported_type(&format!("u64 value {} exceeds num range", v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(
            v.iter().map(|&b| Value::Integer(i64::from(b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(Error::unsupported_type(
            "none (SCL has no null; skip the field instead)",
        ))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(Error::unsupported_type("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(Error::unsupported_type(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(single_entry(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            map: SclMap::new(),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: SclMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(single_entry(self.name, Value::List(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Integer(i) => i.to_string(),
            other => {
                return Err(Error::custom(format!(
                    "map keys must be strings or integers, found {}",
                    other.type_name()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Class(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Class(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(single_entry(self.name, Value::Class(self.map)))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
