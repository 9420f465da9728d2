use std::fmt;

/// Errors raised by validation and validator configuration.
///
/// Every variant carries the fully rendered, human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A mandatory subject key is absent.
    #[error("{message}")]
    MissingKey { key: String, message: String },

    /// A present value fails its format, length or membership rule.
    #[error("{message}")]
    InvalidValueFormat { key: String, message: String },

    /// A constraint, or the default, names an unknown type.
    #[error("{message}")]
    InvalidConstraintType {
        key: Option<String>,
        type_name: String,
        message: String,
    },

    /// A constraint omits a property its type requires.
    #[error("{message}")]
    MissingConstraintProperty {
        key: String,
        property: &'static str,
        message: String,
    },

    /// A constraint entry is not an object, or a template lacks `{:key}`.
    #[error("{message}")]
    InvalidTemplateFormat { key: Option<String>, message: String },

    /// A template slot name is not recognized.
    #[error("{message}")]
    UnknownTemplateType { slot: String, message: String },
}

/// Discriminant of [`ValidationError`] for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingKey,
    InvalidValueFormat,
    InvalidConstraintType,
    MissingConstraintProperty,
    InvalidTemplateFormat,
    UnknownTemplateType,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingKey => "missing_key",
            ErrorKind::InvalidValueFormat => "invalid_value_format",
            ErrorKind::InvalidConstraintType => "invalid_constraint_type",
            ErrorKind::MissingConstraintProperty => "missing_constraint_property",
            ErrorKind::InvalidTemplateFormat => "invalid_template_format",
            ErrorKind::UnknownTemplateType => "unknown_template_type",
        }
    }

    /// Returns true if the failure is about the subject data rather than the
    /// constraint set or validator configuration.
    pub fn is_subject_error(self) -> bool {
        matches!(self, ErrorKind::MissingKey | ErrorKind::InvalidValueFormat)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingKey { .. } => ErrorKind::MissingKey,
            ValidationError::InvalidValueFormat { .. } => ErrorKind::InvalidValueFormat,
            ValidationError::InvalidConstraintType { .. } => ErrorKind::InvalidConstraintType,
            ValidationError::MissingConstraintProperty { .. } => {
                ErrorKind::MissingConstraintProperty
            }
            ValidationError::InvalidTemplateFormat { .. } => ErrorKind::InvalidTemplateFormat,
            ValidationError::UnknownTemplateType { .. } => ErrorKind::UnknownTemplateType,
        }
    }

    /// The offending constraint key, when the error is tied to one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ValidationError::MissingKey { key, .. }
            | ValidationError::InvalidValueFormat { key, .. }
            | ValidationError::MissingConstraintProperty { key, .. } => Some(key),
            ValidationError::InvalidConstraintType { key, .. }
            | ValidationError::InvalidTemplateFormat { key, .. } => key.as_deref(),
            ValidationError::UnknownTemplateType { .. } => None,
        }
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::MissingKey { message, .. }
            | ValidationError::InvalidValueFormat { message, .. }
            | ValidationError::InvalidConstraintType { message, .. }
            | ValidationError::MissingConstraintProperty { message, .. }
            | ValidationError::InvalidTemplateFormat { message, .. }
            | ValidationError::UnknownTemplateType { message, .. } => message,
        }
    }

    pub(crate) fn constraint_not_object(key: &str, found: &str) -> Self {
        ValidationError::InvalidTemplateFormat {
            key: Some(key.to_string()),
            message: format!("The '{key}' constraint must be of type object. {found} given."),
        }
    }

    pub(crate) fn unknown_constraint_type(key: &str, type_name: &str) -> Self {
        ValidationError::InvalidConstraintType {
            key: Some(key.to_string()),
            type_name: type_name.to_string(),
            message: format!("The constraint type of the key '{key}' is unknown"),
        }
    }

    pub(crate) fn unknown_default_type(type_name: &str) -> Self {
        ValidationError::InvalidConstraintType {
            key: None,
            type_name: type_name.to_string(),
            message: format!("The constraint type '{type_name}' is unknown"),
        }
    }

    pub(crate) fn missing_collection(key: &str) -> Self {
        ValidationError::MissingConstraintProperty {
            key: key.to_string(),
            property: "collection",
            message: format!(
                "The property 'collection' of {key} constraint is mandatory and must not be empty for a collection type constraint."
            ),
        }
    }

    pub(crate) fn template_without_key() -> Self {
        ValidationError::InvalidTemplateFormat {
            key: None,
            message: "The given template format is invalid. Please check the correct syntax."
                .to_string(),
        }
    }

    pub(crate) fn unknown_template_slot(slot: &str) -> Self {
        ValidationError::UnknownTemplateType {
            slot: slot.to_string(),
            message: format!(
                "The template type '{slot}' is unknown. Use one of: missing_key, invalid_value_format, not_allowed_value, invalid_string_length"
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while loading subjects or constraint sets from JSON.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The subject document could not be decoded.
    #[error("invalid subject: {0}")]
    Subject(#[source] serde_json::Error),

    /// The constraint set document could not be decoded.
    #[error("invalid constraint set: {0}")]
    Constraints(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_kind_key_and_message() {
        let err = ValidationError::MissingKey {
            key: "email".to_string(),
            message: "The key 'Email' is mandatory".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MissingKey);
        assert_eq!(err.key(), Some("email"));
        assert_eq!(err.to_string(), "The key 'Email' is mandatory");
        assert!(err.kind().is_subject_error());
    }

    #[test]
    fn configuration_errors_have_no_key() {
        let err = ValidationError::template_without_key();
        assert_eq!(err.kind(), ErrorKind::InvalidTemplateFormat);
        assert_eq!(err.key(), None);
        assert!(!err.kind().is_subject_error());

        let err = ValidationError::unknown_default_type("Phone TYPE");
        assert_eq!(err.key(), None);
        assert_eq!(err.message(), "The constraint type 'Phone TYPE' is unknown");
    }

    #[test]
    fn constraint_errors_name_the_key() {
        let err = ValidationError::missing_collection("color");
        assert_eq!(err.key(), Some("color"));
        assert!(err.message().contains("'collection' of color"));

        let err = ValidationError::constraint_not_object("age", "string");
        assert_eq!(
            err.message(),
            "The 'age' constraint must be of type object. string given."
        );
    }
}
