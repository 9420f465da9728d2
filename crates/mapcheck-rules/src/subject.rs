use std::collections::HashMap;

use mapcheck_format::Value;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Named input values to validate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject {
    values: HashMap<String, Value>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a subject from a JSON object of scalars.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(LoadError::Subject)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Subject
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_reads_scalars() {
        let subject = Subject::from_json(r#"{"name":"John","age":42,"ok":true}"#).unwrap();
        assert_eq!(subject.len(), 3);
        assert_eq!(subject.get("name"), Some(&Value::from("John")));
        assert_eq!(subject.get("age"), Some(&Value::Integer(42)));
        assert!(!subject.contains_key("missing"));
    }

    #[test]
    fn from_json_rejects_nested_values() {
        assert!(matches!(
            Subject::from_json(r#"{"tags":["a","b"]}"#),
            Err(LoadError::Subject(_))
        ));
        assert!(matches!(
            Subject::from_json("[1,2]"),
            Err(LoadError::Subject(_))
        ));
    }

    #[test]
    fn insert_overwrites() {
        let mut subject = Subject::new();
        assert!(subject.is_empty());
        subject.insert("k", "a");
        assert_eq!(subject.insert("k", 1), Some(Value::from("a")));
        assert_eq!(subject.get("k"), Some(&Value::Integer(1)));
    }
}
