use mapcheck_format::{FormatOptions, TypeTag};

use crate::error::{Result, ValidationError};
use crate::template::{TemplateSlot, Templates};

/// Controls message rendering and type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Message templates for each failure slot.
    pub templates: Templates,
    /// Type applied to constraints that do not declare one.
    pub default_type: TypeTag,
    /// Options forwarded to the scalar format validator.
    pub format: FormatOptions,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            templates: Templates::default(),
            default_type: TypeTag::SimpleString,
            format: FormatOptions::default(),
        }
    }
}

impl ValidatorConfig {
    /// Return a copy with `slot` set to `template`.
    pub fn with_template(mut self, slot: TemplateSlot, template: impl Into<String>) -> Result<Self> {
        self.templates.set(slot, template)?;
        Ok(self)
    }

    /// Return a copy with the slot named `slot` set to `template`.
    ///
    /// The template is checked before the slot name.
    pub fn with_template_named(self, slot: &str, template: &str) -> Result<Self> {
        crate::template::check_template_format(template)?;
        let slot: TemplateSlot = slot.parse()?;
        self.with_template(slot, template)
    }

    pub fn with_default_type(mut self, tag: TypeTag) -> Self {
        self.default_type = tag;
        self
    }

    /// Return a copy with the default type named `name`.
    pub fn with_default_type_named(self, name: &str) -> Result<Self> {
        let tag = name
            .parse::<TypeTag>()
            .map_err(|_| ValidationError::unknown_default_type(name))?;
        Ok(self.with_default_type(tag))
    }

    pub fn with_format_options(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use mapcheck_format::NamePattern;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.default_type, TypeTag::SimpleString);
        assert_eq!(config.format.name_pattern, NamePattern::Strict);
        assert_eq!(config.templates, Templates::default());
    }

    #[test]
    fn builder_returns_updated_copy() {
        let base = ValidatorConfig::default();
        let updated = base
            .clone()
            .with_default_type(TypeTag::Email)
            .with_template(TemplateSlot::MissingKey, "missing {:key}")
            .unwrap();

        assert_eq!(base.default_type, TypeTag::SimpleString);
        assert_eq!(updated.default_type, TypeTag::Email);
        assert_eq!(
            updated.templates.get(TemplateSlot::MissingKey),
            "missing {:key}"
        );
    }

    #[test]
    fn named_default_type_accepts_legacy_labels() {
        let config = ValidatorConfig::default()
            .with_default_type_named("Integer type")
            .unwrap();
        assert_eq!(config.default_type, TypeTag::Integer);

        let err = ValidatorConfig::default()
            .with_default_type_named("Phone TYPE")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConstraintType);
    }

    #[test]
    fn named_template_checks_format_before_slot() {
        let err = ValidatorConfig::default()
            .with_template_named("unknown", "no token")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTemplateFormat);

        let err = ValidatorConfig::default()
            .with_template_named("unknown", "{:key}!")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownTemplateType);
    }
}
