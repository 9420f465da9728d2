//! Scalar format checks for mapcheck.
//!
//! Decides whether a single value's textual form matches a format:
//! - person names (`First` or `First Last`)
//! - email addresses
//! - numeric literals (integers, decimals, exponents)
//! - unsigned integers
//!
//! Everything here is pure. Per-key orchestration lives in `mapcheck-rules`.

pub mod error;
pub mod legacy;
pub mod scalar;
pub mod tag;
pub mod value;

pub use error::{FormatError, Result};
pub use scalar::{FormatOptions, NamePattern};
pub use tag::TypeTag;
pub use value::Value;
