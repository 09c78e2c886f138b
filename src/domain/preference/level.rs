//! ContextualPreferenceLevel enum naming the tier a preference is scoped to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Tier at which a contextual preference applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextualPreferenceLevel {
    Role,
    User,
    Tool,
}

impl ContextualPreferenceLevel {
    /// All levels, in declaration order.
    pub const ALL: [ContextualPreferenceLevel; 3] = [
        ContextualPreferenceLevel::Role,
        ContextualPreferenceLevel::User,
        ContextualPreferenceLevel::Tool,
    ];

    /// Returns the canonical upper-case name used in storage and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextualPreferenceLevel::Role => "ROLE",
            ContextualPreferenceLevel::User => "USER",
            ContextualPreferenceLevel::Tool => "TOOL",
        }
    }
}

impl fmt::Display for ContextualPreferenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContextualPreferenceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ROLE" => Ok(ContextualPreferenceLevel::Role),
            "USER" => Ok(ContextualPreferenceLevel::User),
            "TOOL" => Ok(ContextualPreferenceLevel::Tool),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("unknown preference level '{}'", other),
            )),
        }
    }
}
