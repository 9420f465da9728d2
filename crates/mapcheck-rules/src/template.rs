//! Error message templates.
//!
//! Placeholders are replaced literally: no escaping, no nesting.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// Replaced by the key's display name. Required in every template.
pub const KEY_TOKEN: &str = "{:key}";
/// Replaced by the allowed values joined with `/`.
pub const RANGE_TOKEN: &str = "{:range}";
/// Replaced by the required minimum length.
pub const LENGTH_TOKEN: &str = "{:length}";

pub const DEFAULT_MISSING_KEY: &str = "The key '{:key}' is mandatory";
pub const DEFAULT_INVALID_VALUE_FORMAT: &str =
    "The format of '{:key}' does not meet the requirements.";
pub const DEFAULT_NOT_ALLOWED_VALUE: &str =
    "The value of '{:key}' is not allowed. The allowed values are : {:range}";
pub const DEFAULT_INVALID_STRING_LENGTH: &str =
    "'{:key}' should be at least formed by {:length} characters.";

/// The four configurable message slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSlot {
    MissingKey,
    InvalidValueFormat,
    NotAllowedValue,
    InvalidStringLength,
}

impl TemplateSlot {
    pub const ALL: [TemplateSlot; 4] = [
        TemplateSlot::MissingKey,
        TemplateSlot::InvalidValueFormat,
        TemplateSlot::NotAllowedValue,
        TemplateSlot::InvalidStringLength,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateSlot::MissingKey => "missing_key",
            TemplateSlot::InvalidValueFormat => "invalid_value_format",
            TemplateSlot::NotAllowedValue => "not_allowed_value",
            TemplateSlot::InvalidStringLength => "invalid_string_length",
        }
    }

    /// Built-in template for this slot.
    ///
    /// Older callers identify slots by this text, so [`FromStr`] accepts it too.
    pub fn default_template(self) -> &'static str {
        match self {
            TemplateSlot::MissingKey => DEFAULT_MISSING_KEY,
            TemplateSlot::InvalidValueFormat => DEFAULT_INVALID_VALUE_FORMAT,
            TemplateSlot::NotAllowedValue => DEFAULT_NOT_ALLOWED_VALUE,
            TemplateSlot::InvalidStringLength => DEFAULT_INVALID_STRING_LENGTH,
        }
    }
}

impl fmt::Display for TemplateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s || slot.default_template() == s)
            .ok_or_else(|| ValidationError::unknown_template_slot(s))
    }
}

/// The active template for each slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    missing_key: String,
    invalid_value_format: String,
    not_allowed_value: String,
    invalid_string_length: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            missing_key: DEFAULT_MISSING_KEY.to_string(),
            invalid_value_format: DEFAULT_INVALID_VALUE_FORMAT.to_string(),
            not_allowed_value: DEFAULT_NOT_ALLOWED_VALUE.to_string(),
            invalid_string_length: DEFAULT_INVALID_STRING_LENGTH.to_string(),
        }
    }
}

impl Templates {
    pub fn get(&self, slot: TemplateSlot) -> &str {
        match slot {
            TemplateSlot::MissingKey => &self.missing_key,
            TemplateSlot::InvalidValueFormat => &self.invalid_value_format,
            TemplateSlot::NotAllowedValue => &self.not_allowed_value,
            TemplateSlot::InvalidStringLength => &self.invalid_string_length,
        }
    }

    /// Replace the template for `slot`. It must contain [`KEY_TOKEN`].
    pub fn set(&mut self, slot: TemplateSlot, template: impl Into<String>) -> Result<()> {
        let template = template.into();
        check_template_format(&template)?;
        let target = match slot {
            TemplateSlot::MissingKey => &mut self.missing_key,
            TemplateSlot::InvalidValueFormat => &mut self.invalid_value_format,
            TemplateSlot::NotAllowedValue => &mut self.not_allowed_value,
            TemplateSlot::InvalidStringLength => &mut self.invalid_string_length,
        };
        *target = template;
        Ok(())
    }

    /// Render `slot` with `{:key}` replaced by `key`.
    ///
    /// The key is substituted first, so a display name containing another
    /// token is expanded by later replacements.
    pub fn render(&self, slot: TemplateSlot, key: &str) -> String {
        self.get(slot).replace(KEY_TOKEN, key)
    }
}

pub(crate) fn check_template_format(template: &str) -> Result<()> {
    if template.contains(KEY_TOKEN) {
        Ok(())
    } else {
        Err(ValidationError::template_without_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_render_with_key() {
        let templates = Templates::default();
        assert_eq!(
            templates.render(TemplateSlot::MissingKey, "Email"),
            "The key 'Email' is mandatory"
        );
        assert_eq!(
            templates
                .render(TemplateSlot::InvalidStringLength, "Bio")
                .replace(LENGTH_TOKEN, "5"),
            "'Bio' should be at least formed by 5 characters."
        );
    }

    #[test]
    fn set_requires_key_token_for_every_slot() {
        let mut templates = Templates::default();
        for slot in TemplateSlot::ALL {
            let err = templates.set(slot, "no placeholder here").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidTemplateFormat);
            assert_eq!(templates.get(slot), slot.default_template());
        }
    }

    #[test]
    fn set_replaces_only_target_slot() {
        let mut templates = Templates::default();
        templates
            .set(TemplateSlot::MissingKey, "{:key} is required")
            .unwrap();
        assert_eq!(
            templates.render(TemplateSlot::MissingKey, "name"),
            "name is required"
        );
        assert_eq!(
            templates.get(TemplateSlot::InvalidValueFormat),
            DEFAULT_INVALID_VALUE_FORMAT
        );
    }

    #[test]
    fn slot_parses_from_name_and_default_text() {
        assert_eq!(
            "not_allowed_value".parse::<TemplateSlot>().unwrap(),
            TemplateSlot::NotAllowedValue
        );
        assert_eq!(
            DEFAULT_MISSING_KEY.parse::<TemplateSlot>().unwrap(),
            TemplateSlot::MissingKey
        );
        let err = "wrong_slot".parse::<TemplateSlot>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownTemplateType);
    }
}
