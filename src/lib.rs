//! Helper functions in two namespaces: [`convert`] for value coercion and
//! encodings, [`file`] for filesystem metadata and copies.

pub use ox_file_helper as file;
pub use ox_type_converter as convert;

pub use ox_file_helper::{FileError, OverwritePolicy};
pub use ox_type_converter::{ConvertError, Value};
