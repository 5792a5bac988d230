//! Small strongly typed helpers over sequences, numbers and closures.
//!
//! Each module holds one pure function with no shared state:
//!
//! - [`first_element`]: optional access to the head of a slice.
//! - [`floor`]: floor of an `f64`, kept as `f64`.
//! - [`kv`]: key paired with the square of any small numeric type.
//! - [`multiplier`]: closure factory capturing a multiplier by value.

pub mod first_element;
pub mod floor;
pub mod kv;
pub mod multiplier;

pub use first_element::safe_first_element;
pub use floor::floor;
pub use kv::to_kv;
pub use multiplier::make_multiplier;
