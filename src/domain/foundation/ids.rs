//! Strongly-typed identifier value objects.
//!
//! Users, roles and tools are owned by external directories which key them
//! by 64-bit integers. Preference resource references carry those keys as
//! strings, so every identifier can be parsed from one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw identifier.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))
            }
        }
    };
}

numeric_id!(
    /// Identifier of a platform user account.
    UserId,
    "user_id"
);

numeric_id!(
    /// Identifier of a role (group of users).
    RoleId,
    "role_id"
);

numeric_id!(
    /// Identifier of a registered tool.
    ToolId,
    "tool_id"
);
