use crate::converters::*;
use crate::error::ConvertError;
use crate::value::Value;
use crate::HashMap;
use lazy_static::lazy_static;
use std::sync::Mutex;

/// A loose coercion from any value into one target kind.
pub type ConversionFn = fn(&Value) -> Value;

/// Registry of coercions keyed by target type name
pub struct ConversionRegistry {
    conversions: HashMap<String, ConversionFn>,
}

lazy_static! {
    /// The global conversion registry
    pub static ref CONVERSION_REGISTRY: Mutex<ConversionRegistry> = Mutex::new(ConversionRegistry::new());
}

impl ConversionRegistry {
    /// Create a registry holding the built-in targets
    pub fn new() -> Self {
        let mut registry = Self {
            conversions: HashMap::new(),
        };

        registry.register_builtin_conversions();

        registry
    }

    /// Register (or replace) the coercion for a target type
    pub fn register_conversion(&mut self, to_type: &str, converter: ConversionFn) {
        self.conversions.insert(to_type.to_string(), converter);
    }

    pub fn get_converter(&self, to_type: &str) -> Option<&ConversionFn> {
        self.conversions.get(to_type)
    }

    /// Coerce `value` into the named target type
    pub fn convert(&self, value: &Value, to_type: &str) -> Result<Value, ConvertError> {
        self.get_converter(to_type)
            .map(|converter| converter(value))
            .ok_or_else(|| ConvertError::UnknownTarget(to_type.to_string()))
    }

    /// All registered target names, sorted
    pub fn get_available_conversions(&self) -> Vec<String> {
        let mut targets: Vec<String> = self.conversions.keys().cloned().collect();
        targets.sort();
        targets
    }

    pub fn has_conversion(&self, to_type: &str) -> bool {
        self.get_converter(to_type).is_some()
    }

    /// Narrowing targets wrap in two's complement; they never clamp.
    fn register_builtin_conversions(&mut self) {
        self.register_conversion("string", |v| Value::Str(to_str(v)));
        self.register_conversion("bool", |v| Value::Bool(to_bool(v)));
        self.register_conversion("bytes", |v| match v {
            Value::Bytes(b) => Value::Bytes(b.clone()),
            other => Value::Bytes(to_str(other).into_bytes()),
        });

        // Signed integers
        self.register_conversion("int", |v| Value::Int64(to_int(v)));
        self.register_conversion("int8", |v| Value::Int8(to_int(v) as i8));
        self.register_conversion("int16", |v| Value::Int16(to_int(v) as i16));
        self.register_conversion("int32", |v| Value::Int32(to_int(v) as i32));
        self.register_conversion("int64", |v| Value::Int64(to_int(v)));

        // Unsigned integers
        self.register_conversion("uint", |v| Value::Uint64(to_uint(v)));
        self.register_conversion("uint8", |v| Value::Uint8(to_int(v) as u8));
        self.register_conversion("uint16", |v| Value::Uint16(to_int(v) as u16));
        self.register_conversion("uint32", |v| Value::Uint32(to_int(v) as u32));
        self.register_conversion("uint64", |v| Value::Uint64(to_uint(v)));

        // Floats
        self.register_conversion("float", |v| Value::Float64(to_float(v)));
        self.register_conversion("float32", |v| Value::Float32(to_float(v) as f32));
        self.register_conversion("float64", |v| Value::Float64(to_float(v)));
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `u64` coercion that keeps the full unsigned range for unsigned inputs and
/// unsigned text, which a round trip through `i64` would wrap.
fn to_uint(value: &Value) -> u64 {
    match value {
        Value::Uint64(v) => *v,
        Value::Str(s) => s.parse::<u64>().unwrap_or_else(|_| to_int(value) as u64),
        other => to_int(other) as u64,
    }
}
