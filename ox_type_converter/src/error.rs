use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Faults reported by the strict conversion family.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The text is not a signed integer that fits the requested width.
    #[error("cannot parse '{input}' as a {bit_size}-bit signed integer")]
    InvalidInt {
        input: String,
        bit_size: u32,
        #[source]
        source: ParseIntError,
    },

    /// The text is not an unsigned integer that fits the requested width.
    #[error("cannot parse '{input}' as a {bit_size}-bit unsigned integer")]
    InvalidUint {
        input: String,
        bit_size: u32,
        #[source]
        source: ParseIntError,
    },

    /// The text is not a float.
    #[error("cannot parse '{input}' as a {bit_size}-bit float")]
    InvalidFloat {
        input: String,
        bit_size: u32,
        #[source]
        source: ParseFloatError,
    },

    /// The float is finite but does not fit the requested width.
    #[error("'{input}' is out of range for a {bit_size}-bit float")]
    FloatOutOfRange { input: String, bit_size: u32 },

    #[error("unsupported bit size {0}")]
    InvalidBitSize(u32),

    #[error("unsupported base {0}, expected 2..=36")]
    InvalidBase(u32),

    /// The text contains characters that are not digits of the declared base.
    #[error("'{input}' is not a valid base-{base} number")]
    InvalidDigits {
        input: String,
        base: u32,
        #[source]
        source: ParseIntError,
    },

    #[error("no conversion registered for target type '{0}'")]
    UnknownTarget(String),
}
