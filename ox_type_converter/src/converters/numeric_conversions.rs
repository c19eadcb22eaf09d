//! Numeric conversion functions
//!
//! Kind-restricted renderings: they only accept numbers of the matching
//! family and render everything else as `""`.

use crate::value::Value;

/// Render an integer value in base 10. Non-integers render as `""`.
pub fn int_to_str(value: &Value) -> String {
    match value {
        Value::Int8(v) => v.to_string(),
        Value::Int16(v) => v.to_string(),
        Value::Int32(v) => v.to_string(),
        Value::Int64(v) => v.to_string(),
        Value::Uint8(v) => v.to_string(),
        Value::Uint16(v) => v.to_string(),
        Value::Uint32(v) => v.to_string(),
        Value::Uint64(v) => v.to_string(),
        _ => String::new(),
    }
}

/// Render a float with exactly `decimals` fractional digits. Non-floats
/// render as `""`.
pub fn float_to_str(value: &Value, decimals: usize) -> String {
    match value {
        Value::Float32(v) => format!("{:.*}", decimals, v),
        Value::Float64(v) => format!("{:.*}", decimals, v),
        _ => String::new(),
    }
}
