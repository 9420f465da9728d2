//! Declarative per-key constraint validation.
//!
//! A [`MapValidator`] checks a [`Subject`] against an ordered
//! [`ConstraintSet`]: presence first, then the key's type rule (format,
//! collection membership or minimum length). The first failure is returned
//! with a message rendered from the configured [`Templates`].
//!
//! ```
//! use mapcheck_rules::{Constraint, ConstraintSet, MapValidator, Subject, TypeTag};
//!
//! let subject: Subject = [("email", "a@b.com")].into_iter().collect();
//! let constraints: ConstraintSet = [("email", Constraint::of(TypeTag::Email))]
//!     .into_iter()
//!     .collect();
//!
//! assert!(MapValidator::new(subject, constraints).validate().is_ok());
//! ```

pub mod config;
pub mod constraint;
pub mod error;
pub mod subject;
pub mod template;
pub mod validator;

pub use config::ValidatorConfig;
pub use constraint::{Constraint, ConstraintEntry, ConstraintSet, ConstraintType};
pub use error::{ErrorKind, LoadError, Result, ValidationError};
pub use mapcheck_format::{FormatOptions, NamePattern, TypeTag, Value};
pub use subject::Subject;
pub use template::{TemplateSlot, Templates};
pub use validator::MapValidator;
