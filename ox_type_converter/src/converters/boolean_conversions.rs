//! Boolean conversion functions

/// `"true"` or `"false"`.
pub fn bool_to_str(value: bool) -> String {
    value.to_string()
}

pub fn bool_to_int(value: bool) -> i64 {
    if value { 1 } else { 0 }
}
