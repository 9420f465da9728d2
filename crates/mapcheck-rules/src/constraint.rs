use std::collections::HashMap;
use std::fmt;

use mapcheck_format::{TypeTag, Value};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LoadError;

/// A constraint's declared type.
///
/// Names that do not resolve to a [`TypeTag`] are kept so validation can
/// report them against the owning key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConstraintType {
    Known(TypeTag),
    Unknown(String),
}

impl From<String> for ConstraintType {
    fn from(name: String) -> Self {
        match name.parse::<TypeTag>() {
            Ok(tag) => ConstraintType::Known(tag),
            Err(_) => ConstraintType::Unknown(name),
        }
    }
}

impl From<ConstraintType> for String {
    fn from(kind: ConstraintType) -> Self {
        match kind {
            ConstraintType::Known(tag) => tag.as_str().to_string(),
            ConstraintType::Unknown(name) => name,
        }
    }
}

impl From<TypeTag> for ConstraintType {
    fn from(tag: TypeTag) -> Self {
        ConstraintType::Known(tag)
    }
}

/// Rule descriptor for one subject key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Constraint {
    /// Falls back to the validator's default type when absent.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ConstraintType>,
    /// Display name used in messages instead of the raw key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_name: Option<String>,
    /// Allowed values for `InCollection`. Must not be empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Vec<Value>>,
    /// Minimum trimmed character count for `SimpleString`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
}

impl Constraint {
    /// A constraint with no declared type.
    pub fn untyped() -> Self {
        Self::default()
    }

    pub fn of(tag: TypeTag) -> Self {
        Self {
            kind: Some(ConstraintType::Known(tag)),
            ..Self::default()
        }
    }

    /// An `InCollection` constraint over `values`.
    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::of(TypeTag::InCollection).with_collection(values)
    }

    /// A `SimpleString` constraint with a minimum length.
    pub fn min_chars(min_length: usize) -> Self {
        Self::of(TypeTag::SimpleString).with_min_length(min_length)
    }

    /// A constraint whose type is given by name, known or not.
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.kind = Some(ConstraintType::from(name.into()));
        self
    }

    pub fn with_pretty_name(mut self, pretty_name: impl Into<String>) -> Self {
        self.pretty_name = Some(pretty_name.into());
        self
    }

    pub fn with_collection<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.collection = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// The pretty name if set, otherwise `key`.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.pretty_name.as_deref().unwrap_or(key)
    }
}

/// One entry of a [`ConstraintSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintEntry {
    Rule(Constraint),
    /// A decoded entry that was not an object; holds the JSON kind found.
    NotAnObject(String),
}

impl From<Constraint> for ConstraintEntry {
    fn from(constraint: Constraint) -> Self {
        ConstraintEntry::Rule(constraint)
    }
}

/// Constraints keyed by subject key, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    entries: Vec<(String, ConstraintEntry)>,
    index: HashMap<String, usize>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a constraint set from a JSON object, keeping key order.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(LoadError::Constraints)
    }

    /// Add or replace the entry for `key`.
    ///
    /// Replacing keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<ConstraintEntry>) {
        let key = key.into();
        let entry = entry.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = entry,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConstraintEntry> {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConstraintEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, E> FromIterator<(K, E)> for ConstraintSet
where
    K: Into<String>,
    E: Into<ConstraintEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut set = ConstraintSet::new();
        for (key, entry) in iter {
            set.insert(key, entry);
        }
        set
    }
}

impl<'de> Deserialize<'de> for ConstraintSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConstraintSetVisitor;

        impl<'de> Visitor<'de> for ConstraintSetVisitor {
            type Value = ConstraintSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of keys to constraint objects")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = ConstraintSet::new();
                while let Some((key, raw)) = map.next_entry::<String, serde_json::Value>()? {
                    let entry = if raw.is_object() {
                        let constraint = Constraint::deserialize(raw).map_err(|err| {
                            <A::Error as de::Error>::custom(format!("constraint '{key}': {err}"))
                        })?;
                        ConstraintEntry::Rule(constraint)
                    } else {
                        ConstraintEntry::NotAnObject(json_kind(&raw).to_string())
                    };
                    set.insert(key, entry);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ConstraintSetVisitor)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "float",
        serde_json::Value::Number(_) => "integer",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
