//! JSON text encoding.
//!
//! Two halves live here:
//!
//! - the [`Writer`]: renders a [`Value`] tree as JSON text, one-line or
//!   indented, applying the caller's replacer hook and emitting omission
//!   markers as their reserved literals (see [`crate::marker`])
//! - the [`ValueSerializer`]: a `serde::Serializer` that turns any
//!   `T: Serialize` into a [`Value`] tree, so ordinary Rust types can be
//!   formatted without hand-building values
//!
//! The writer's output deliberately matches the reference JSON encoder
//! byte for byte (escaping, member spacing, pretty layout), so an
//! untruncated rendering is indistinguishable from plain serialization.

use crate::options::{Replacer, ResolvedOptions};
use crate::{marker, Error, Map, Number, Result, Value};
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use serde::{ser, Serialize};
use std::borrow::Cow;

/// ISO-8601 rendering used for [`Value::Date`], millisecond precision with
/// a literal `Z` suffix.
pub(crate) fn date_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Encodes `value` under the resolved options.
///
/// Returns `None` exactly when the top-level value has no encoding (it is
/// undefined, or the replacer turned it into undefined). `pretty` selects
/// the configured indent; with no indent configured both modes are
/// identical.
pub(crate) fn encode(value: &Value, options: &ResolvedOptions, pretty: bool) -> Option<String> {
    let indent = if pretty { options.indent.as_deref() } else { None };
    let mut writer = Writer {
        out: String::with_capacity(256),
        indent,
        depth: 0,
        replacer: options.replacer,
    };
    let root = writer.resolve("", value)?;
    writer.write_value(&root);
    Some(writer.out)
}

/// One-line rendering with markers decoded, independent of any options.
/// Backs `Value`'s `Display`.
pub(crate) fn to_unbounded_string(value: &Value) -> Option<String> {
    let mut writer = Writer {
        out: String::with_capacity(256),
        indent: None,
        depth: 0,
        replacer: None,
    };
    let root = writer.resolve("", value)?;
    writer.write_value(&root);
    Some(marker::decode(&writer.out))
}

struct Writer<'a> {
    out: String,
    indent: Option<&'a str>,
    depth: usize,
    replacer: Option<Replacer>,
}

impl<'a> Writer<'a> {
    /// Applies the interception order of the encoder hook: omission markers
    /// first (the replacer never sees them), then the replacer. `None`
    /// means the member has no encoding.
    fn resolve<'v>(&self, key: &str, value: &'v Value) -> Option<Cow<'v, Value>> {
        if value.is_omitted() {
            return Some(Cow::Borrowed(value));
        }
        let resolved = match self.replacer {
            Some(replace) => Cow::Owned(replace(key, value)),
            None => Cow::Borrowed(value),
        };
        if resolved.is_undefined() {
            None
        } else {
            Some(resolved)
        }
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null | Value::Undefined => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(n),
            Value::String(s) => self.write_string(s),
            Value::Array(items) => self.write_array(items),
            Value::Object(map) => self.write_object(map),
            Value::Date(dt) => {
                let iso = date_string(dt);
                self.write_string(&iso);
            }
            Value::BigInt(bi) => self.out.push_str(&bi.to_string()),
            Value::Omitted(m) => {
                let literal = marker::encode(m);
                self.write_string(&literal);
            }
        }
    }

    fn write_number(&mut self, number: &Number) {
        match number {
            Number::Integer(i) => self.out.push_str(&i.to_string()),
            // Non-finite numbers have no JSON representation.
            Number::Float(f) if !f.is_finite() => self.out.push_str("null"),
            Number::Float(f) => self.out.push_str(&f.to_string()),
            Number::Infinity | Number::NegativeInfinity | Number::NaN => {
                self.out.push_str("null");
            }
        }
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                c if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn write_array(&mut self, items: &[Value]) {
        self.out.push('[');
        self.depth += 1;
        let mut first = true;
        for (index, item) in items.iter().enumerate() {
            if !first {
                self.out.push(',');
            }
            first = false;
            self.newline();
            // An absent element still occupies its slot.
            match self.resolve(&index.to_string(), item) {
                Some(element) => self.write_value(&element),
                None => self.out.push_str("null"),
            }
        }
        self.depth -= 1;
        if !first {
            self.newline();
        }
        self.out.push(']');
    }

    fn write_object(&mut self, map: &Map) {
        self.out.push('{');
        self.depth += 1;
        let mut first = true;
        for (key, value) in map.iter() {
            let Some(member) = self.resolve(key, value) else {
                continue;
            };
            if !first {
                self.out.push(',');
            }
            first = false;
            self.newline();
            self.write_string(key);
            self.out.push(':');
            if self.indent.is_some() {
                self.out.push(' ');
            }
            self.write_value(&member);
        }
        self.depth -= 1;
        if !first {
            self.newline();
        }
        self.out.push('}');
    }

    fn newline(&mut self) {
        if let Some(unit) = self.indent {
            self.out.push('\n');
            for _ in 0..self.depth {
                self.out.push_str(unit);
            }
        }
    }
}

/// A `serde::Serializer` producing [`Value`] trees.
///
/// Used by [`crate::to_value`]. Wide integers stay lossless through
/// [`Value::BigInt`]; enum variants take their externally-tagged JSON
/// shape; map keys must be strings or integers.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTaggedVec {
    tag: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
}

pub struct SerializeTaggedMap {
    tag: &'static str,
    map: Map,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTaggedVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeTaggedMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(small) => Ok(Value::Number(Number::Integer(small))),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::BigInt(BigInt::from(v)))
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(small) => Ok(Value::Number(Number::Integer(small))),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
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
        let mut map = Map::with_capacity(1);
        map.insert(variant.to_string(), to_value_inner(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTaggedVec> {
        Ok(SerializeTaggedVec {
            tag: variant,
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: Map::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: Map::new(),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTaggedMap> {
        Ok(SerializeTaggedMap {
            tag: variant,
            map: Map::new(),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTaggedVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = Map::with_capacity(1);
        map.insert(self.tag.to_string(), Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_string(key)?);
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
        self.map.insert(key, to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeTaggedMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = Map::with_capacity(1);
        outer.insert(self.tag.to_string(), Value::Object(self.map));
        Ok(Value::Object(outer))
    }
}

fn to_value_inner<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Object keys: strings pass through, integers are stringified, anything
/// else has no JSON key form.
fn key_string<T: Serialize + ?Sized>(key: &T) -> Result<String> {
    match key.serialize(ValueSerializer)? {
        Value::String(s) => Ok(s),
        Value::Number(Number::Integer(i)) => Ok(i.to_string()),
        Value::BigInt(bi) => Ok(bi.to_string()),
        other => Err(Error::invalid_key(&format!("{:?}", other))),
    }
}
