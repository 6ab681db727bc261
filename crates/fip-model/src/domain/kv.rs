use serde::{Deserialize, Serialize};

/// Single environment entry.
///
/// Both sides are plain UTF-8 strings; no validation is applied beyond what
/// [`crate::Env`] enforces when parsing dotenv text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Variable name.
    key: String,
    /// Variable value.
    value: String,
}

impl KeyValue {
    /// Create a new entry.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Variable name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Variable value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render as a `KEY=value` dotenv line.
    pub fn to_line(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

impl From<(&str, &str)> for KeyValue {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}
