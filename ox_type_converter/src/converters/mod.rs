//! Type conversion modules
//!
//! Each file groups the conversions that start from one family of types.
//! Everything is re-exported flat from here and from the crate root.

pub mod base_conversions;
pub mod boolean_conversions;
pub mod byte_conversions;
pub mod generic_conversions;
pub mod network_conversions;
pub mod numeric_conversions;
pub mod string_conversions;

pub use base_conversions::*;
pub use boolean_conversions::*;
pub use byte_conversions::*;
pub use generic_conversions::*;
pub use network_conversions::*;
pub use numeric_conversions::*;
pub use string_conversions::*;
