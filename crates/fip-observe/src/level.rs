use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::LoggerError;

/// Wrapper around a validated `tracing_subscriber::EnvFilter` expression.
///
/// Stores the raw filter string (e.g. `"info"`, `"fip_exec=trace,info"`) and
/// validates it at construction time, so conversion into an `EnvFilter` can
/// never fail later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Create a level from a string-like value, validating the expression.
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// The underlying filter string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the `EnvFilter` for this expression.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).expect("LoggerLevel is always valid after construction")
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{}: {}", s, e))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;
    use std::str::FromStr;

    #[test]
    fn accepts_valid_levels() {
        for lvl in ["info", "warn", "trace", "fip_exec=trace,fip_core=debug,info"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "expected valid: {lvl}");
        }
    }

    #[test]
    fn rejects_invalid_levels() {
        for lvl in ["fip_exec=lol", "other=trace,another=wat"] {
            assert!(
                LoggerLevel::from_str(lvl).is_err(),
                "expected error for {lvl}"
            );
        }
    }

    #[test]
    fn default_is_info_and_valid() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _filter = lvl.to_env_filter();
    }

    #[test]
    fn serde_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
    }

    #[test]
    fn serde_roundtrip() {
        let original: LoggerLevel = "fip_exec=trace,info".parse().unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: LoggerLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(original.as_str(), restored.as_str());
    }
}
