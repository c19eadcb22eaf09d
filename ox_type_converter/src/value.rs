use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// A dynamically typed input value.
///
/// Scalars map one-to-one onto Rust primitives. The remaining variants model
/// reference-like values that can be nil (`Seq(None)`, `Map(None)`,
/// `Ref(None)`, an unbound `Func`, an empty `Interface`), which matters for
/// [`crate::is_nil`] and [`crate::is_empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    Seq(Option<Vec<Value>>),
    Map(Option<BTreeMap<String, Value>>),
    /// A struct passed by value, as its named fields in declaration order.
    Struct(Vec<(String, Value)>),
    Ref(Option<Box<Value>>),
    Func { bound: bool },
    Interface(Option<Box<Value>>),
}

impl Value {
    /// Build a sequence from anything convertible into values.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(Some(items.into_iter().map(Into::into).collect()))
    }

    /// Build a struct value from `(field, value)` pairs.
    pub fn record<I, K, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Value::Struct(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Wrap a value behind a (non-nil) pointer.
    pub fn pointer_to(value: Value) -> Self {
        Value::Ref(Some(Box::new(value)))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Int8(_) => ValueKind::Int8,
            Value::Int16(_) => ValueKind::Int16,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Uint8(_) => ValueKind::Uint8,
            Value::Uint16(_) => ValueKind::Uint16,
            Value::Uint32(_) => ValueKind::Uint32,
            Value::Uint64(_) => ValueKind::Uint64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::Bool(_) => ValueKind::Bool,
            Value::Str(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Seq(_) => ValueKind::Slice,
            Value::Map(_) => ValueKind::Map,
            Value::Struct(_) => ValueKind::Struct,
            Value::Ref(_) => ValueKind::Ptr,
            Value::Func { .. } => ValueKind::Func,
            Value::Interface(_) => ValueKind::Interface,
        }
    }
}

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Nil,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Bool,
    String,
    Bytes,
    Slice,
    Map,
    Struct,
    Ptr,
    Func,
    Interface,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Nil => "nil",
            ValueKind::Int8 => "int8",
            ValueKind::Int16 => "int16",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Uint8 => "uint8",
            ValueKind::Uint16 => "uint16",
            ValueKind::Uint32 => "uint32",
            ValueKind::Uint64 => "uint64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Bytes => "bytes",
            ValueKind::Slice => "slice",
            ValueKind::Map => "map",
            ValueKind::Struct => "struct",
            ValueKind::Ptr => "ptr",
            ValueKind::Func => "func",
            ValueKind::Interface => "interface",
        }
    }

    pub fn is_signed_int(&self) -> bool {
        matches!(
            self,
            ValueKind::Int8 | ValueKind::Int16 | ValueKind::Int32 | ValueKind::Int64
        )
    }

    pub fn is_unsigned_int(&self) -> bool {
        matches!(
            self,
            ValueKind::Uint8 | ValueKind::Uint16 | ValueKind::Uint32 | ValueKind::Uint64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ValueKind::Float32 | ValueKind::Float64)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "nil" => ValueKind::Nil,
            "int8" => ValueKind::Int8,
            "int16" => ValueKind::Int16,
            "int32" => ValueKind::Int32,
            "int64" => ValueKind::Int64,
            "uint8" => ValueKind::Uint8,
            "uint16" => ValueKind::Uint16,
            "uint32" => ValueKind::Uint32,
            "uint64" => ValueKind::Uint64,
            "float32" => ValueKind::Float32,
            "float64" => ValueKind::Float64,
            "bool" => ValueKind::Bool,
            "string" => ValueKind::String,
            "bytes" => ValueKind::Bytes,
            "slice" => ValueKind::Slice,
            "map" => ValueKind::Map,
            "struct" => ValueKind::Struct,
            "ptr" => ValueKind::Ptr,
            "func" => ValueKind::Func,
            "interface" => ValueKind::Interface,
            other => return Err(ConvertError::UnknownTarget(other.to_string())),
        };
        Ok(kind)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    bool => Bool,
    String => Str,
    Vec<u8> => Bytes,
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int64(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Uint64(v as u64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Nil)
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::Map(Some(map.into_iter().map(|(k, v)| (k, v.into())).collect()))
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(map: HashMap<String, T>) -> Self {
        Value::Map(Some(map.into_iter().map(|(k, v)| (k, v.into())).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_names() {
        assert_eq!(Value::from(42i32).kind().as_str(), "int32");
        assert_eq!(Value::from("hello").kind().as_str(), "string");
        assert_eq!(Value::from(false).kind(), ValueKind::Bool);
        assert_eq!(Value::Nil.kind().to_string(), "nil");
    }

    #[test]
    fn test_value_kind_from_str() {
        assert_eq!("uint16".parse::<ValueKind>().unwrap(), ValueKind::Uint16);
        assert!("complex128".parse::<ValueKind>().is_err());
    }

    #[test]
    fn test_value_kind_serde_name() {
        let json = serde_json::to_string(&ValueKind::Float64).unwrap();
        assert_eq!(json, "\"float64\"");
        let kind: ValueKind = serde_json::from_str("\"ptr\"").unwrap();
        assert_eq!(kind, ValueKind::Ptr);
    }

    #[test]
    fn test_option_into_value() {
        let none: Option<i64> = None;
        assert_eq!(Value::from(none), Value::Nil);
        assert_eq!(Value::from(Some(3i64)), Value::Int64(3));
    }

    #[test]
    fn test_map_into_value() {
        let mut mp = HashMap::new();
        mp.insert("a".to_string(), "aa");
        match Value::from(mp) {
            Value::Map(Some(m)) => assert_eq!(m.get("a"), Some(&Value::from("aa"))),
            other => panic!("unexpected {:?}", other),
        }
    }
}
