//! Codec utilities: stateless byte, hex, numeric and charset conversions.
//!
//! Every other module leans on these for wire encoding and for logging.

pub mod charset;
pub mod convert;
pub mod hex;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use self::charset::*;
pub use self::convert::*;
pub use self::hex::*;
