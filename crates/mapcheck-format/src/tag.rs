//! Known constraint type tags.
//!
//! Four tags name a textual format checked by [`crate::scalar`]. The other two
//! (`SimpleString`, `InCollection`) are rules evaluated by the aggregate
//! validator itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Closed set of validation rules a constraint can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    Name,
    Email,
    Numeric,
    Integer,
    SimpleString,
    InCollection,
}

impl TypeTag {
    /// Every known tag, in declaration order.
    pub const ALL: [TypeTag; 6] = [
        TypeTag::Name,
        TypeTag::Email,
        TypeTag::Numeric,
        TypeTag::Integer,
        TypeTag::SimpleString,
        TypeTag::InCollection,
    ];

    /// Canonical snake-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Name => "name",
            TypeTag::Email => "email",
            TypeTag::Numeric => "numeric",
            TypeTag::Integer => "integer",
            TypeTag::SimpleString => "simple_string",
            TypeTag::InCollection => "in_collection",
        }
    }

    /// Label used by constraint sets authored for the earlier validator.
    pub fn legacy_label(self) -> &'static str {
        match self {
            TypeTag::Name => "Name TYPE",
            TypeTag::Email => "Email TYPE",
            TypeTag::Numeric => "Numeric Type",
            TypeTag::Integer => "Integer type",
            TypeTag::SimpleString => "Simple string type",
            TypeTag::InCollection => "In Range type",
        }
    }

    /// Returns true if the tag is checked by the scalar format validator.
    pub fn is_format(self) -> bool {
        matches!(
            self,
            TypeTag::Name | TypeTag::Email | TypeTag::Numeric | TypeTag::Integer
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s || tag.legacy_label() == s)
            .ok_or_else(|| FormatError::UnknownTypeTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_legacy_names() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>(), Ok(tag));
            assert_eq!(tag.legacy_label().parse::<TypeTag>(), Ok(tag));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "Phone TYPE".parse::<TypeTag>(),
            Err(FormatError::UnknownTypeTag("Phone TYPE".to_string()))
        );
        assert!("NAME".parse::<TypeTag>().is_err());
    }

    #[test]
    fn only_four_tags_are_formats() {
        let formats: Vec<TypeTag> = TypeTag::ALL.into_iter().filter(|t| t.is_format()).collect();
        assert_eq!(
            formats,
            vec![
                TypeTag::Name,
                TypeTag::Email,
                TypeTag::Numeric,
                TypeTag::Integer
            ]
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&TypeTag::InCollection).unwrap();
        assert_eq!(json, "\"in_collection\"");
        let tag: TypeTag = serde_json::from_str("\"simple_string\"").unwrap();
        assert_eq!(tag, TypeTag::SimpleString);
    }
}
