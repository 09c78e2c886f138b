//! ContextualPreference value object.

use serde::{Deserialize, Serialize};

use super::{ContextualPreferenceLevel, PreferenceResource, PreferenceType};
use crate::domain::foundation::{Timestamp, ValidationError};

/// A named, string-encoded value scoped to one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextualPreference {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", default)]
    pub preference_type: PreferenceType,
    pub created_at: Timestamp,
    pub resource: PreferenceResource,
}

impl ContextualPreference {
    /// Creates a `STRING` preference stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        resource: PreferenceResource,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            preference_type: PreferenceType::String,
            created_at: Timestamp::now(),
            resource,
        }
    }

    /// Sets the declared value type.
    pub fn with_type(mut self, preference_type: PreferenceType) -> Self {
        self.preference_type = preference_type;
        self
    }

    /// Canonical form of a preference name: surrounding whitespace removed.
    ///
    /// Stored names are always in this form, so lookups by name go through
    /// it as well.
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_string()
    }

    /// Level of the referenced resource.
    pub fn level(&self) -> ContextualPreferenceLevel {
        self.resource.level
    }

    /// Checks the name is present and the value matches the declared type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        self.preference_type.check(&self.value)
    }
}
