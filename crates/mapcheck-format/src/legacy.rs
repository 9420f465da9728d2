//! Two-format string validator.
//!
//! Kept for constraint sets written against the earlier name/email-only model.
//! New code should call [`crate::scalar::validate`].

use tracing::debug;

use crate::scalar::{is_email, is_name, NamePattern};
use crate::tag::TypeTag;

/// Check `value` against the `Name` or `Email` format.
///
/// Any other tag is unsupported and returns `false`.
pub fn validate(value: &str, tag: TypeTag) -> bool {
    match tag {
        TypeTag::Name => is_name(value, NamePattern::Strict),
        TypeTag::Email => is_email(value),
        other => {
            debug!(tag = %other, "legacy string validator only supports name and email");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar;
    use crate::value::Value;

    #[test]
    fn matches_scalar_validator_for_supported_tags() {
        let samples = [
            "John Smith",
            "J",
            "john3",
            "John Middle Smith",
            "a@b.com",
            "not-an-email",
        ];
        for tag in [TypeTag::Name, TypeTag::Email] {
            for sample in samples {
                assert_eq!(
                    validate(sample, tag),
                    scalar::validate(&Value::from(sample), tag),
                    "{sample} / {tag}"
                );
            }
        }
    }

    #[test]
    fn unsupported_tags_fail() {
        assert!(!validate("42", TypeTag::Integer));
        assert!(!validate("42", TypeTag::Numeric));
        assert!(!validate("abc", TypeTag::SimpleString));
    }
}
