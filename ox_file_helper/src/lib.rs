//! ox_file_helper - filesystem metadata and copy helpers
//!
//! Queries never fail and answer `false`/`0`/`""` for paths they cannot
//! reach. The two copy operations report a [`FileError`] instead.

pub mod copy;
pub mod error;
pub mod metadata;
pub mod options;
pub mod sniff;

pub use copy::{copy_file, fast_copy};
pub use error::FileError;
pub use metadata::{abs_path, file_size, get_ext, is_dir, is_exist, is_file, is_readable, is_writable};
pub use options::{InspectOptions, OverwritePolicy};
pub use sniff::{image_format, image_format_with, is_binary, is_binary_with, is_image, ImageFormat};
