use serde::{Deserialize, Serialize};

use crate::{KeyValue, ModelError};

/// Ordered set of environment entries.
///
/// Stored as a list so that rendering preserves declaration order; lookups
/// resolve the last matching entry, which gives simple override semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Env(pub Vec<KeyValue>);

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the environment has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.0.iter()
    }

    /// Get the value for a key, returning the last matching entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|kv| kv.key() == key)
            .map(|kv| kv.value())
    }

    /// Append an entry. Later entries override earlier ones via [`Env::get`].
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push(KeyValue::new(key, value));
    }

    /// Render as dotenv text, one `KEY=value` line per entry.
    pub fn to_dotenv(&self) -> String {
        let mut out = String::new();
        for kv in &self.0 {
            out.push_str(&kv.to_line());
            out.push('\n');
        }
        out
    }

    /// Parse dotenv text. Blank lines and `#` comments are skipped; every
    /// other line must contain a `=` separator.
    pub fn from_dotenv(text: &str) -> Result<Self, ModelError> {
        let mut env = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ModelError::InvalidEnvLine {
                    line: idx + 1,
                    reason: "missing '=' separator".into(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ModelError::InvalidEnvLine {
                    line: idx + 1,
                    reason: "empty key".into(),
                });
            }
            env.push(key, value.trim());
        }
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::Env;

    #[test]
    fn new_is_empty() {
        let env = Env::new();
        assert!(env.is_empty());
        assert!(env.get("FOO").is_none());
    }

    #[test]
    fn push_then_get_last_wins() {
        let mut env = Env::new();
        env.push("FOO", "one");
        env.push("BAR", "x");
        env.push("FOO", "two");

        assert_eq!(env.get("FOO"), Some("two"));
        assert_eq!(env.get("BAR"), Some("x"));
        assert!(env.get("BAZ").is_none());
    }

    #[test]
    fn to_dotenv_preserves_declaration_order() {
        let mut env = Env::new();
        env.push("B", "2");
        env.push("A", "1");

        assert_eq!(env.to_dotenv(), "B=2\nA=1\n");
    }

    #[test]
    fn from_dotenv_skips_comments_and_blanks() {
        let text = "# platform config\n\nFOO=bar\n  BAZ = qux \n";
        let env = Env::from_dotenv(text).unwrap();

        assert_eq!(env.len(), 2);
        assert_eq!(env.get("FOO"), Some("bar"));
        assert_eq!(env.get("BAZ"), Some("qux"));
    }

    #[test]
    fn from_dotenv_rejects_line_without_separator() {
        let err = Env::from_dotenv("FOO=bar\nnot-a-pair\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "unexpected message: {msg}");
    }

    #[test]
    fn from_dotenv_rejects_empty_key() {
        assert!(Env::from_dotenv("=value\n").is_err());
    }

    #[test]
    fn dotenv_roundtrip_preserves_entries() {
        let mut env = Env::new();
        env.push("FOO", "bar");
        env.push("BAZ", "qux");

        let back = Env::from_dotenv(&env.to_dotenv()).unwrap();
        assert_eq!(back, env);
    }

    #[test]
    fn serde_transparent_roundtrip_json() {
        let mut env = Env::new();
        env.push("FOO", "bar");

        let json = serde_json::to_string(&env).unwrap();
        assert!(json.starts_with('['));

        let back: Env = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("FOO"), Some("bar"));
    }
}
