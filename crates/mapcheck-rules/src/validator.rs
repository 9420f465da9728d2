use mapcheck_format::{scalar, TypeTag, Value};
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::constraint::{Constraint, ConstraintEntry, ConstraintSet, ConstraintType};
use crate::error::{Result, ValidationError};
use crate::subject::Subject;
use crate::template::{TemplateSlot, LENGTH_TOKEN, RANGE_TOKEN};

/// Characters stripped before measuring a `SimpleString` value.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Validates a subject against an ordered constraint set.
#[derive(Debug, Clone)]
pub struct MapValidator {
    subject: Subject,
    constraints: ConstraintSet,
    config: ValidatorConfig,
}

impl MapValidator {
    /// Create a validator with default config.
    pub fn new(subject: Subject, constraints: ConstraintSet) -> Self {
        Self::with_config(subject, constraints, ValidatorConfig::default())
    }

    /// Create a validator with explicit config.
    pub fn with_config(
        subject: Subject,
        constraints: ConstraintSet,
        config: ValidatorConfig,
    ) -> Self {
        Self {
            subject,
            constraints,
            config,
        }
    }

    /// Check every constraint in declaration order and return the first
    /// failure.
    ///
    /// A missing key is reported before its constraint's type is looked at.
    pub fn validate(&self) -> Result<()> {
        for (key, entry) in self.constraints.iter() {
            let constraint = match entry {
                ConstraintEntry::Rule(constraint) => constraint,
                ConstraintEntry::NotAnObject(found) => {
                    return Err(ValidationError::constraint_not_object(key, found));
                }
            };
            let display_name = constraint.display_name(key);

            let Some(value) = self.subject.get(key) else {
                debug!(key, "mandatory key is missing");
                return Err(ValidationError::MissingKey {
                    key: key.to_string(),
                    message: self
                        .config
                        .templates
                        .render(TemplateSlot::MissingKey, display_name),
                });
            };

            let tag = self.resolve_type(key, constraint)?;
            debug!(key, type_tag = %tag, "checking key");
            self.check_value(key, display_name, constraint, tag, value)?;
        }

        Ok(())
    }

    /// Set the template for `slot`. It must contain `{:key}`.
    pub fn set_template(&mut self, slot: TemplateSlot, template: &str) -> Result<()> {
        self.config.templates.set(slot, template)
    }

    /// Set a template by slot name.
    pub fn set_template_named(&mut self, slot: &str, template: &str) -> Result<()> {
        self.config = self.config.clone().with_template_named(slot, template)?;
        Ok(())
    }

    /// Set the default type by name (canonical or legacy label).
    pub fn set_default_constraint_type(&mut self, name: &str) -> Result<()> {
        self.config = self.config.clone().with_default_type_named(name)?;
        Ok(())
    }

    pub fn set_default_type(&mut self, tag: TypeTag) {
        self.config.default_type = tag;
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    fn resolve_type(&self, key: &str, constraint: &Constraint) -> Result<TypeTag> {
        match &constraint.kind {
            None => Ok(self.config.default_type),
            Some(ConstraintType::Known(tag)) => Ok(*tag),
            Some(ConstraintType::Unknown(name)) => {
                Err(ValidationError::unknown_constraint_type(key, name))
            }
        }
    }

    fn check_value(
        &self,
        key: &str,
        display_name: &str,
        constraint: &Constraint,
        tag: TypeTag,
        value: &Value,
    ) -> Result<()> {
        let templates = &self.config.templates;
        match tag {
            TypeTag::InCollection => {
                let collection = constraint
                    .collection
                    .as_ref()
                    .filter(|collection| !collection.is_empty())
                    .ok_or_else(|| ValidationError::missing_collection(key))?;
                if !collection.contains(value) {
                    let range = collection
                        .iter()
                        .map(|allowed| allowed.text())
                        .collect::<Vec<_>>()
                        .join("/");
                    return Err(ValidationError::InvalidValueFormat {
                        key: key.to_string(),
                        message: templates
                            .render(TemplateSlot::NotAllowedValue, display_name)
                            .replace(RANGE_TOKEN, &range),
                    });
                }
            }
            TypeTag::SimpleString => {
                if let Some(min_length) = constraint.min_length {
                    let length = value.text().trim_matches(TRIMMED).chars().count();
                    if length < min_length {
                        return Err(ValidationError::InvalidValueFormat {
                            key: key.to_string(),
                            message: templates
                                .render(TemplateSlot::InvalidStringLength, display_name)
                                .replace(LENGTH_TOKEN, &min_length.to_string()),
                        });
                    }
                }
            }
            TypeTag::Name | TypeTag::Email | TypeTag::Numeric | TypeTag::Integer => {
                if !scalar::validate_with(value, tag, &self.config.format) {
                    return Err(ValidationError::InvalidValueFormat {
                        key: key.to_string(),
                        message: templates.render(TemplateSlot::InvalidValueFormat, display_name),
                    });
                }
            }
        }
        Ok(())
    }
}
