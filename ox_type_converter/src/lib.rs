//! ox_type_converter - value coercion and encoding helpers
//!
//! Two families live here. Loose conversions (`to_str`, `to_int`, the
//! `is_*` predicates, most encoders) never fail and fall back to a zero
//! value. Strict conversions (`*_strict` parses, radix parsing) return a
//! [`ConvertError`] the caller has to look at.

pub mod converters;
pub mod error;
pub mod predicates;
pub mod registry;
pub mod value;

pub use converters::*;
pub use error::ConvertError;
pub use predicates::*;
pub use registry::{ConversionFn, ConversionRegistry, CONVERSION_REGISTRY};
pub use value::{Value, ValueKind};

pub use std::collections::HashMap;
