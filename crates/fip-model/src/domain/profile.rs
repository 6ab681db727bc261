use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::ModelError;

/// Deployment profile selected at invocation time.
///
/// The profile only affects the generated environment file (debug and
/// environment-name values); the phase sequence is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Local development defaults, debug enabled.
    #[default]
    Development,
    /// Production defaults, debug disabled.
    Production,
}

impl Profile {
    /// Whether services should run with debug facilities enabled.
    pub fn debug_enabled(&self) -> bool {
        matches!(self, Profile::Development)
    }
}

impl FromStr for Profile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ModelError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Profile::Development => "development",
            Profile::Production => "production",
        };
        f.write_str(s)
    }
}

impl Serialize for Profile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
