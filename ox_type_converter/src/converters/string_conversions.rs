//! String conversion functions
//!
//! Conversions that start from text: sized strict parses, their lenient
//! counterparts, and the plain string/byte/rune helpers.

use std::num::ParseIntError;

use log::debug;

use super::generic_conversions::{text_to_bool, text_to_int};
use crate::error::ConvertError;

/// Parse a signed integer of `bit_size` bits (8, 16, 32, 64; 0 means 64).
///
/// Any failure, including a value that overflows the width, is returned when
/// `strict` is set. Otherwise it is logged and the result is `0`.
pub fn str_to_int_strict(value: &str, bit_size: u32, strict: bool) -> Result<i64, ConvertError> {
    lenient_unless(strict, parse_int(value, bit_size))
}

/// Parse an unsigned integer of `bit_size` bits. See [`str_to_int_strict`].
pub fn str_to_uint_strict(value: &str, bit_size: u32, strict: bool) -> Result<u64, ConvertError> {
    lenient_unless(strict, parse_uint(value, bit_size))
}

/// Parse a float of `bit_size` bits (32 or 64; 0 means 64).
///
/// A finite literal that is too large for an `f32` counts as a failure.
pub fn str_to_float_strict(value: &str, bit_size: u32, strict: bool) -> Result<f64, ConvertError> {
    lenient_unless(strict, parse_float(value, bit_size))
}

fn lenient_unless<T: Default>(strict: bool, parsed: Result<T, ConvertError>) -> Result<T, ConvertError> {
    match parsed {
        Ok(v) => Ok(v),
        Err(e) if strict => Err(e),
        Err(e) => {
            debug!("lenient parse defaulted to zero: {}", e);
            Ok(T::default())
        }
    }
}

fn parse_int(value: &str, bit_size: u32) -> Result<i64, ConvertError> {
    let invalid = |source: ParseIntError| ConvertError::InvalidInt {
        input: value.to_string(),
        bit_size,
        source,
    };
    match bit_size {
        8 => value.parse::<i8>().map(i64::from).map_err(invalid),
        16 => value.parse::<i16>().map(i64::from).map_err(invalid),
        32 => value.parse::<i32>().map(i64::from).map_err(invalid),
        0 | 64 => value.parse::<i64>().map_err(invalid),
        other => Err(ConvertError::InvalidBitSize(other)),
    }
}

fn parse_uint(value: &str, bit_size: u32) -> Result<u64, ConvertError> {
    let invalid = |source: ParseIntError| ConvertError::InvalidUint {
        input: value.to_string(),
        bit_size,
        source,
    };
    match bit_size {
        8 => value.parse::<u8>().map(u64::from).map_err(invalid),
        16 => value.parse::<u16>().map(u64::from).map_err(invalid),
        32 => value.parse::<u32>().map(u64::from).map_err(invalid),
        0 | 64 => value.parse::<u64>().map_err(invalid),
        other => Err(ConvertError::InvalidBitSize(other)),
    }
}

fn parse_float(value: &str, bit_size: u32) -> Result<f64, ConvertError> {
    let wide = value.parse::<f64>().map_err(|source| ConvertError::InvalidFloat {
        input: value.to_string(),
        bit_size,
        source,
    })?;
    match bit_size {
        32 => {
            let narrow = wide as f32;
            if narrow.is_infinite() && wide.is_finite() {
                return Err(ConvertError::FloatOutOfRange {
                    input: value.to_string(),
                    bit_size,
                });
            }
            Ok(f64::from(narrow))
        }
        0 | 64 => Ok(wide),
        other => Err(ConvertError::InvalidBitSize(other)),
    }
}

/// Parse text as an `i64`: a decimal integer, or 1 for a case-insensitive
/// `"true"`, otherwise 0. Fractional text such as `"123.45"` is 0.
pub fn str_to_int(value: &str) -> i64 {
    text_to_int(value)
}

pub fn str_to_int8(value: &str) -> i8 {
    value.parse().unwrap_or_default()
}

pub fn str_to_int16(value: &str) -> i16 {
    value.parse().unwrap_or_default()
}

pub fn str_to_int32(value: &str) -> i32 {
    value.parse().unwrap_or_default()
}

pub fn str_to_int64(value: &str) -> i64 {
    value.parse().unwrap_or_default()
}

/// Parse text as a `u64`; negative or malformed text is 0.
pub fn str_to_uint(value: &str) -> u64 {
    value.parse().unwrap_or_default()
}

pub fn str_to_uint8(value: &str) -> u8 {
    value.parse().unwrap_or_default()
}

pub fn str_to_uint16(value: &str) -> u16 {
    value.parse().unwrap_or_default()
}

pub fn str_to_uint32(value: &str) -> u32 {
    value.parse().unwrap_or_default()
}

pub fn str_to_uint64(value: &str) -> u64 {
    value.parse().unwrap_or_default()
}

/// Parse text as an `f32`. Out-of-range literals are 0 rather than infinity.
pub fn str_to_float32(value: &str) -> f32 {
    str_to_float_strict(value, 32, false).unwrap_or_default() as f32
}

pub fn str_to_float64(value: &str) -> f64 {
    value.parse().unwrap_or_default()
}

/// `"1"` or a case-insensitive `"true"`.
pub fn str_to_bool(value: &str) -> bool {
    text_to_bool(value)
}

pub fn str_to_bytes(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Invalid UTF-8 sequences become U+FFFD.
pub fn bytes_to_str(value: &[u8]) -> String {
    String::from_utf8_lossy(value).into_owned()
}

/// UTF-8 encode a sequence of characters.
pub fn runes_to_bytes(runes: &[char]) -> Vec<u8> {
    runes.iter().collect::<String>().into_bytes()
}
