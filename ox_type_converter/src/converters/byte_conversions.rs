//! Byte-level conversion functions
//!
//! Fixed 8-byte packing of 64-bit numbers and hex text encoding. Floats pack
//! little-endian, integers big-endian. Decoders never fail: short or
//! malformed input decodes to zero or an empty vector.

pub fn float64_to_bytes(value: f64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Reads the first 8 bytes as a little-endian `f64`; fewer than 8 gives 0.
pub fn bytes_to_float64(bytes: &[u8]) -> f64 {
    first_eight(bytes).map(f64::from_le_bytes).unwrap_or(0.0)
}

pub fn int64_to_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Reads the first 8 bytes as a big-endian `i64`; fewer than 8 gives 0.
pub fn bytes_to_int64(bytes: &[u8]) -> i64 {
    first_eight(bytes).map(i64::from_be_bytes).unwrap_or(0)
}

fn first_eight(bytes: &[u8]) -> Option<[u8; 8]> {
    bytes.get(..8).and_then(|head| head.try_into().ok())
}

/// Lowercase hex, two digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn hex_to_bytes(text: &str) -> Vec<u8> {
    hex::decode(text).unwrap_or_default()
}

/// Like [`bytes_to_hex`] but returns the hex digits as raw bytes.
pub fn bytes_to_hexs(bytes: &[u8]) -> Vec<u8> {
    hex::encode(bytes).into_bytes()
}

pub fn hexs_to_bytes(hexs: &[u8]) -> Vec<u8> {
    hex::decode(hexs).unwrap_or_default()
}
