//! Type introspection predicates
//!
//! Kind checks over [`Value`]. The numeric predicates also accept strings
//! whose text is lexically a number of the right shape.

use lazy_static::lazy_static;
use regex::Regex;

use crate::value::Value;

lazy_static! {
    static ref INT_TEXT: Regex = Regex::new(r"^[-+]?[0-9]+$").expect("integer pattern");
    static ref FLOAT_TEXT: Regex = Regex::new(
        r"^[-+]?(?:(?:[0-9]+\.[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?|[0-9]+[eE][-+]?[0-9]+)$"
    )
    .expect("float pattern");
    static ref NUMERIC_TEXT: Regex =
        Regex::new(r"^[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$").expect("numeric pattern");
    static ref HEX_TEXT: Regex = Regex::new(r"^(?:0[xX])?[0-9a-fA-F]+$").expect("hex pattern");
}

/// An integer kind, or text such as `"123"` or `"-45"`.
pub fn is_int(value: &Value) -> bool {
    match value {
        Value::Str(s) => INT_TEXT.is_match(s),
        other => {
            let kind = other.kind();
            kind.is_signed_int() || kind.is_unsigned_int()
        }
    }
}

/// A float kind, or text with a fractional part or exponent such as `"-45.6"`.
pub fn is_float(value: &Value) -> bool {
    match value {
        Value::Str(s) => FLOAT_TEXT.is_match(s),
        other => other.kind().is_float(),
    }
}

/// Any number kind, or text that is a decimal integer or float with at most
/// one leading sign.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Str(s) => NUMERIC_TEXT.is_match(s),
        other => {
            let kind = other.kind();
            kind.is_signed_int() || kind.is_unsigned_int() || kind.is_float()
        }
    }
}

pub fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

pub fn is_byte(value: &Value) -> bool {
    matches!(value, Value::Bytes(_))
}

/// A struct, or a pointer to one.
pub fn is_struct(value: &Value) -> bool {
    match value {
        Value::Struct(_) => true,
        Value::Ref(Some(inner)) | Value::Interface(Some(inner)) => is_struct(inner),
        _ => false,
    }
}

/// An interface slot, or an untyped absent value.
pub fn is_interface(value: &Value) -> bool {
    matches!(value, Value::Interface(_) | Value::Nil)
}

/// True for `Nil` and for the nil state of every reference-like kind.
/// An empty string or empty sequence is not nil.
pub fn is_nil(value: &Value) -> bool {
    match value {
        Value::Nil
        | Value::Seq(None)
        | Value::Map(None)
        | Value::Ref(None)
        | Value::Func { bound: false }
        | Value::Interface(None) => true,
        Value::Interface(Some(inner)) => is_nil(inner),
        _ => false,
    }
}

/// True for nil, zero numbers, `false`, empty text, empty collections and
/// structs whose fields are all empty. A non-nil pointer is never empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Nil => true,
        Value::Int8(v) => *v == 0,
        Value::Int16(v) => *v == 0,
        Value::Int32(v) => *v == 0,
        Value::Int64(v) => *v == 0,
        Value::Uint8(v) => *v == 0,
        Value::Uint16(v) => *v == 0,
        Value::Uint32(v) => *v == 0,
        Value::Uint64(v) => *v == 0,
        Value::Float32(v) => *v == 0.0,
        Value::Float64(v) => *v == 0.0,
        Value::Bool(v) => !*v,
        Value::Str(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::Seq(items) => items.as_ref().map_or(true, Vec::is_empty),
        Value::Map(map) => map.as_ref().map_or(true, |m| m.is_empty()),
        Value::Struct(fields) => fields.iter().all(|(_, v)| is_empty(v)),
        Value::Ref(ptr) => ptr.is_none(),
        Value::Func { bound } => !*bound,
        Value::Interface(inner) => inner.as_deref().map_or(true, is_empty),
    }
}

/// Hex digits with an optional `0x` prefix. Empty text is not hex.
pub fn is_hex(value: &str) -> bool {
    HEX_TEXT.is_match(value)
}

/// Text that looks binary: it holds a NUL or a replacement character left by
/// a lossy UTF-8 decode.
pub fn is_binary_str(content: &str) -> bool {
    content.contains('\0') || content.contains('\u{FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::dec_to_hex;
    use std::collections::BTreeMap;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&Value::Int64(123)));
        assert!(is_numeric(&Value::from("123.456")));
        assert!(is_numeric(&Value::from("-0.56")));
        assert!(is_numeric(&Value::Float64(45.678)));
        assert!(is_numeric(&Value::from("+7")));
        assert!(!is_numeric(&Value::from("")));
        assert!(!is_numeric(&Value::from("--1")));
        assert!(!is_numeric(&Value::from("1.2.3")));
        assert!(!is_numeric(&Value::Seq(None)));
        assert!(!is_numeric(&Value::Bool(true)));
    }

    #[test]
    fn test_is_int() {
        assert!(is_int(&Value::Int64(123)));
        assert!(is_int(&Value::from("123")));
        assert!(is_int(&Value::from("-45")));
        assert!(!is_int(&Value::from("")));
        assert!(!is_int(&Value::from("4.5")));
        assert!(!is_int(&Value::Seq(None)));
    }

    #[test]
    fn test_is_float() {
        assert!(is_float(&Value::Float64(123.0)));
        assert!(is_float(&Value::from("123.4")));
        assert!(is_float(&Value::from("-45.6")));
        assert!(is_float(&Value::from("1e5")));
        assert!(!is_float(&Value::from("")));
        assert!(!is_float(&Value::from("123")));
        assert!(!is_float(&Value::Seq(None)));
    }

    #[test]
    fn test_is_empty() {
        let sli = Value::Seq(None);
        let mp: BTreeMap<String, i64> = BTreeMap::new();
        let val2 = Value::record([("conv", Value::Int64(0)), ("name", Value::from(""))]);

        assert!(is_empty(&Value::Nil));
        assert!(is_empty(&Value::from("")));
        assert!(is_empty(&sli));
        assert!(is_empty(&Value::seq(Vec::<i64>::new())));
        assert!(is_empty(&Value::from(mp)));
        assert!(is_empty(&Value::Bool(false)));
        assert!(is_empty(&Value::Int64(0)));
        assert!(is_empty(&Value::Uint64(0)));
        assert!(is_empty(&Value::Float64(0.0)));
        assert!(!is_empty(&Value::pointer_to(sli)));
        assert!(is_empty(&val2));
        assert!(!is_empty(&Value::record([("name", "x")])));
    }

    #[test]
    fn test_is_nil() {
        assert!(is_nil(&Value::Nil));
        assert!(is_nil(&Value::Seq(None)));
        assert!(is_nil(&Value::Interface(Some(Box::new(Value::Seq(None))))));
        assert!(!is_nil(&Value::from("")));
        assert!(!is_nil(&Value::seq(Vec::<i64>::new())));
    }

    #[test]
    fn test_is_bool() {
        assert!(!is_bool(&Value::Int64(1)));
        assert!(!is_bool(&Value::from("hello")));
        assert!(is_bool(&Value::Bool(false)));
    }

    #[test]
    fn test_is_hex() {
        let num = dec_to_hex(1234);
        assert!(is_hex(&num));
        assert!(is_hex(&format!("0x{}", num)));
        assert!(!is_hex("hello"));
        assert!(!is_hex(""));
        assert!(!is_hex("0x"));
    }

    #[test]
    fn test_is_string_and_byte() {
        assert!(!is_string(&Value::Int64(123)));
        assert!(is_string(&Value::from("hello")));
        assert!(!is_byte(&Value::from("hello")));
        assert!(is_byte(&Value::from(b"hello".to_vec())));
    }

    #[test]
    fn test_is_struct() {
        let sut = Value::record([("test", "T")]);
        assert!(!is_struct(&Value::from("hello")));
        assert!(is_struct(&sut));
        assert!(is_struct(&Value::pointer_to(sut)));
    }

    #[test]
    fn test_is_interface() {
        assert!(!is_interface(&Value::from("hello")));
        assert!(is_interface(&Value::Interface(None)));
        assert!(is_interface(&Value::Nil));
    }

    #[test]
    fn test_is_binary_str() {
        assert!(!is_binary_str("fn main() {}\n"));
        assert!(is_binary_str("PNG\0\0"));
        assert!(is_binary_str(&String::from_utf8_lossy(&[0xff, 0xfe, b'a'])));
    }
}
