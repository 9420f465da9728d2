use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar subject value.
///
/// Deserializes untagged from JSON scalars. Arrays and objects are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Textual form used by format and length checks.
    ///
    /// `Null` renders as the empty string.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Returns true for integer and float values.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Short name of the value kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_forms() {
        assert_eq!(Value::from("abc").text(), "abc");
        assert_eq!(Value::from(42).text(), "42");
        assert_eq!(Value::from(-7i64).text(), "-7");
        assert_eq!(Value::from(4.5).text(), "4.5");
        assert_eq!(Value::from(4.0).text(), "4");
        assert_eq!(Value::from(true).text(), "true");
        assert_eq!(Value::Null.text(), "");
    }

    #[test]
    fn deserializes_json_scalars() {
        let values: Vec<Value> =
            serde_json::from_str(r#"["a", 1, 2.5, true, null, 18446744073709551615]"#).unwrap();
        assert_eq!(values[0], Value::String("a".to_string()));
        assert_eq!(values[1], Value::Integer(1));
        assert_eq!(values[2], Value::Float(2.5));
        assert_eq!(values[3], Value::Bool(true));
        assert_eq!(values[4], Value::Null);
        assert!(matches!(values[5], Value::Float(_)));
    }

    #[test]
    fn rejects_compound_json() {
        assert!(serde_json::from_str::<Value>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Value>(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn equality_is_exact() {
        assert_ne!(Value::from("1"), Value::from(1));
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from("green"), Value::from("green"));
    }
}
