//! Resource reference a preference is scoped to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ContextualPreferenceLevel;
use crate::domain::foundation::ValidationError;

/// A `(level, identifier)` pair naming the resource a preference belongs to.
///
/// The identifier is kept in its external string form. Level handlers coerce
/// it into the identifier type of their directory with [`Self::parse_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceResource {
    pub level: ContextualPreferenceLevel,
    pub resource_id: String,
}

impl PreferenceResource {
    /// Creates a resource reference, rejecting a blank identifier.
    pub fn new(
        level: ContextualPreferenceLevel,
        resource_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let resource_id = resource_id.into();
        if resource_id.trim().is_empty() {
            return Err(ValidationError::empty_field("resource_id"));
        }
        Ok(Self { level, resource_id })
    }

    /// Shorthand for a USER-level reference.
    pub fn user(id: i64) -> Self {
        Self {
            level: ContextualPreferenceLevel::User,
            resource_id: id.to_string(),
        }
    }

    /// Shorthand for a ROLE-level reference.
    pub fn role(id: i64) -> Self {
        Self {
            level: ContextualPreferenceLevel::Role,
            resource_id: id.to_string(),
        }
    }

    /// Shorthand for a TOOL-level reference.
    pub fn tool(id: i64) -> Self {
        Self {
            level: ContextualPreferenceLevel::Tool,
            resource_id: id.to_string(),
        }
    }

    /// Coerces the identifier into a typed id.
    pub fn parse_id<T>(&self) -> Result<T, ValidationError>
    where
        T: FromStr<Err = ValidationError>,
    {
        self.resource_id.parse()
    }
}

impl fmt::Display for PreferenceResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.level, self.resource_id)
    }
}
