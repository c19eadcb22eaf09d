//! Generic conversion functions
//!
//! Loose coercions over a dynamically typed [`Value`]. None of these fail:
//! anything without a sensible mapping becomes the target's zero value.

use crate::value::Value;

/// Render any value as a string.
///
/// Maps become a JSON object with sorted keys. Nil, sequences, structs,
/// pointers and functions render as `""`.
pub fn to_str(value: &Value) -> String {
    match value {
        Value::Int8(v) => v.to_string(),
        Value::Int16(v) => v.to_string(),
        Value::Int32(v) => v.to_string(),
        Value::Int64(v) => v.to_string(),
        Value::Uint8(v) => v.to_string(),
        Value::Uint16(v) => v.to_string(),
        Value::Uint32(v) => v.to_string(),
        Value::Uint64(v) => v.to_string(),
        Value::Float32(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Str(s) => s.clone(),
        Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        Value::Map(Some(_)) => serde_json::to_string(&to_json(value)).unwrap_or_default(),
        Value::Interface(Some(inner)) => to_str(inner),
        _ => String::new(),
    }
}

/// Coerce any value to an `i64`.
///
/// Unsigned values wider than `i64` wrap; floats truncate toward zero.
/// Strings must be a whole decimal integer or a case-insensitive `true`.
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Int8(v) => *v as i64,
        Value::Int16(v) => *v as i64,
        Value::Int32(v) => *v as i64,
        Value::Int64(v) => *v,
        Value::Uint8(v) => *v as i64,
        Value::Uint16(v) => *v as i64,
        Value::Uint32(v) => *v as i64,
        Value::Uint64(v) => *v as i64,
        Value::Float32(v) => *v as i64,
        Value::Float64(v) => *v as i64,
        Value::Bool(v) => *v as i64,
        Value::Str(s) => text_to_int(s),
        Value::Bytes(b) => std::str::from_utf8(b).map(text_to_int).unwrap_or(0),
        Value::Interface(Some(inner)) => to_int(inner),
        _ => 0,
    }
}

/// Coerce any value to an `f64`. Unlike [`to_int`], fractional strings keep
/// their fraction.
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Int8(v) => *v as f64,
        Value::Int16(v) => *v as f64,
        Value::Int32(v) => *v as f64,
        Value::Int64(v) => *v as f64,
        Value::Uint8(v) => *v as f64,
        Value::Uint16(v) => *v as f64,
        Value::Uint32(v) => *v as f64,
        Value::Uint64(v) => *v as f64,
        Value::Float32(v) => f64::from(*v),
        Value::Float64(v) => *v,
        Value::Bool(v) => {
            if *v {
                1.0
            } else {
                0.0
            }
        }
        Value::Str(s) => text_to_float(s),
        Value::Bytes(b) => std::str::from_utf8(b).map(text_to_float).unwrap_or(0.0),
        Value::Interface(Some(inner)) => to_float(inner),
        _ => 0.0,
    }
}

/// Coerce any value to a bool. Numbers are true when non-zero; text is true
/// only for `"1"` and a case-insensitive `"true"`.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Int8(v) => *v != 0,
        Value::Int16(v) => *v != 0,
        Value::Int32(v) => *v != 0,
        Value::Int64(v) => *v != 0,
        Value::Uint8(v) => *v != 0,
        Value::Uint16(v) => *v != 0,
        Value::Uint32(v) => *v != 0,
        Value::Uint64(v) => *v != 0,
        Value::Float32(v) => *v != 0.0,
        Value::Float64(v) => *v != 0.0,
        Value::Bool(v) => *v,
        Value::Str(s) => text_to_bool(s),
        Value::Bytes(b) => std::str::from_utf8(b).map(text_to_bool).unwrap_or(false),
        Value::Interface(Some(inner)) => to_bool(inner),
        _ => false,
    }
}

/// Name of the value's runtime kind, e.g. `"int64"`, `"string"`, `"bool"`.
pub fn get_type(value: &Value) -> &'static str {
    value.kind().as_str()
}

pub(crate) fn text_to_int(s: &str) -> i64 {
    match s.parse::<i64>() {
        Ok(v) => v,
        Err(_) => text_to_bool(s) as i64,
    }
}

pub(crate) fn text_to_float(s: &str) -> f64 {
    match s.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            if s.eq_ignore_ascii_case("true") {
                1.0
            } else {
                0.0
            }
        }
    }
}

pub(crate) fn text_to_bool(s: &str) -> bool {
    s == "1" || s.eq_ignore_ascii_case("true")
}

fn to_json(value: &Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Int8(v) => Json::from(*v),
        Value::Int16(v) => Json::from(*v),
        Value::Int32(v) => Json::from(*v),
        Value::Int64(v) => Json::from(*v),
        Value::Uint8(v) => Json::from(*v),
        Value::Uint16(v) => Json::from(*v),
        Value::Uint32(v) => Json::from(*v),
        Value::Uint64(v) => Json::from(*v),
        Value::Float32(v) => Json::from(f64::from(*v)),
        Value::Float64(v) => Json::from(*v),
        Value::Bool(v) => Json::Bool(*v),
        Value::Str(s) => Json::String(s.clone()),
        Value::Bytes(b) => Json::String(String::from_utf8_lossy(b).into_owned()),
        Value::Seq(Some(items)) => Json::Array(items.iter().map(to_json).collect()),
        Value::Map(Some(map)) => Json::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
        Value::Struct(fields) => Json::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
        Value::Ref(Some(inner)) | Value::Interface(Some(inner)) => to_json(inner),
        _ => Json::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::f64::consts::PI;

    #[test]
    fn test_to_str_scalars() {
        assert_eq!(to_str(&Value::Int64(-1)), "-1");
        assert_eq!(to_str(&Value::Int8(0)), "0");
        assert_eq!(to_str(&Value::Int64(i64::MAX)), "9223372036854775807");
        assert_eq!(to_str(&Value::Uint64(u64::MAX)), "18446744073709551615");
        assert_eq!(to_str(&Value::Float32(PI as f32)), "3.1415927");
        assert_eq!(to_str(&Value::Float64(PI)), "3.141592653589793");
        assert_eq!(to_str(&Value::from("1")), "1");
        assert_eq!(to_str(&Value::Bool(true)), "true");
        assert_eq!(to_str(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_to_str_unsupported_is_empty() {
        assert_eq!(to_str(&Value::Bytes(vec![])), "");
        assert_eq!(to_str(&Value::Nil), "");
        assert_eq!(to_str(&Value::Func { bound: false }), "");
        assert_eq!(to_str(&Value::pointer_to(Value::Func { bound: false })), "");
        assert_eq!(to_str(&Value::record([("name", "x")])), "");
    }

    #[test]
    fn test_to_str_map_is_sorted_json() {
        let mut mp = BTreeMap::new();
        mp.insert("b".to_string(), "bb");
        mp.insert("a".to_string(), "aa");
        assert_eq!(to_str(&Value::from(mp)), r#"{"a":"aa","b":"bb"}"#);
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(&Value::Int64(-1)), -1);
        assert_eq!(to_int(&Value::Int32(2)), 2);
        assert_eq!(to_int(&Value::Float64(2.9)), 2);
        assert_eq!(to_int(&Value::Float32(-2.9)), -2);
        assert_eq!(to_int(&Value::Bytes(vec![])), 0);
        assert_eq!(to_int(&Value::from("1")), 1);
        assert_eq!(to_int(&Value::from("2.1")), 0);
        assert_eq!(to_int(&Value::from("TRUE")), 1);
        assert_eq!(to_int(&Value::Bool(true)), 1);
        assert_eq!(to_int(&Value::Bool(false)), 0);
        assert_eq!(to_int(&Value::Func { bound: false }), 0);
        assert_eq!(to_int(&Value::Uint64(u64::MAX)), -1);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float(&Value::Int64(-1)), -1.0);
        assert_eq!(to_float(&Value::Uint16(0)), 0.0);
        assert_eq!(to_float(&Value::from("1")), 1.0);
        assert_eq!(to_float(&Value::from("2.1")), 2.1);
        assert_eq!(to_float(&Value::from("TRUE")), 1.0);
        assert_eq!(to_float(&Value::Bool(true)), 1.0);
        assert_eq!(to_float(&Value::Func { bound: false }), 0.0);
    }

    #[test]
    fn test_to_bool() {
        assert!(to_bool(&Value::from("TRUE")));
        assert!(to_bool(&Value::from("true")));
        assert!(to_bool(&Value::from("True")));
        assert!(to_bool(&Value::from("1")));
        assert!(to_bool(&Value::Int16(1)));
        assert!(to_bool(&Value::Int64(-3)));
        assert!(!to_bool(&Value::from("2.1")));
        assert!(!to_bool(&Value::from("Hello")));
        assert!(!to_bool(&Value::Int8(0)));
        assert!(!to_bool(&Value::Float64(0.0)));
        assert!(!to_bool(&Value::Bool(false)));
        assert!(!to_bool(&Value::Bytes(vec![])));
        assert!(!to_bool(&Value::Nil));
        assert!(!to_bool(&Value::Func { bound: false }));
    }

    #[test]
    fn test_get_type() {
        assert_eq!(get_type(&Value::Int64(1)), "int64");
        assert_eq!(get_type(&Value::from("hello")), "string");
        assert_eq!(get_type(&Value::Bool(false)), "bool");
    }
}
