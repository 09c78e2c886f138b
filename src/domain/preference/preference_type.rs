//! Declared type of a preference value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Type a string-encoded preference value must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceType {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    /// Arbitrary JSON document.
    Object,
}

impl PreferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceType::String => "STRING",
            PreferenceType::Integer => "INTEGER",
            PreferenceType::Float => "FLOAT",
            PreferenceType::Boolean => "BOOLEAN",
            PreferenceType::Object => "OBJECT",
        }
    }

    /// Canonical stored form of `value`.
    ///
    /// `STRING` values are kept verbatim; every other type is checked on its
    /// trimmed text, and that trimmed text is what gets stored.
    pub fn normalize(&self, value: String) -> String {
        match self {
            PreferenceType::String => value,
            _ => {
                let trimmed = value.trim();
                if trimmed.len() == value.len() {
                    value
                } else {
                    trimmed.to_string()
                }
            }
        }
    }

    /// Checks that `value` is a valid encoding of this type.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let ok = match self {
            PreferenceType::String => true,
            PreferenceType::Integer => value.trim().parse::<i64>().is_ok(),
            PreferenceType::Float => value.trim().parse::<f64>().is_ok(),
            PreferenceType::Boolean => {
                matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "false")
            }
            PreferenceType::Object => serde_json::from_str::<serde_json::Value>(value).is_ok(),
        };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(
                "value",
                format!("'{}' is not a valid {} value", value, self.as_str()),
            ))
        }
    }
}

impl fmt::Display for PreferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PreferenceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STRING" => Ok(PreferenceType::String),
            "INTEGER" => Ok(PreferenceType::Integer),
            "FLOAT" => Ok(PreferenceType::Float),
            "BOOLEAN" => Ok(PreferenceType::Boolean),
            "OBJECT" => Ok(PreferenceType::Object),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown preference type '{}'", other),
            )),
        }
    }
}
