//! Validate named input values against declarative per-key constraints.
//!
//! mapcheck checks a map of values for presence, format (names, emails,
//! numbers, integers), collection membership and minimum length, and reports
//! the first failure with a templated, human-readable message.
//!
//! # Crate Structure
//!
//! - [`format`] — Pure scalar format checks and the legacy name/email validator
//! - [`rules`] — Constraint sets, message templates and the aggregate validator

/// Re-export format types.
pub mod format {
    pub use mapcheck_format::*;
}

/// Re-export rule types.
pub mod rules {
    pub use mapcheck_rules::*;
}

pub use mapcheck_rules::{
    Constraint, ConstraintSet, ErrorKind, MapValidator, Subject, TemplateSlot, TypeTag,
    ValidationError, ValidatorConfig, Value,
};
