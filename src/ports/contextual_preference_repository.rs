//! Contextual preference repository port.
//!
//! Stores preferences keyed by `(name, level, resource_id)`. A preference
//! is only written after its level handler accepted it, so the repository
//! does not re-check that the resource exists.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::preference::{ContextualPreference, PreferenceResource};

/// Repository port for contextual preference persistence.
#[async_trait]
pub trait ContextualPreferenceRepository: Send + Sync {
    /// Insert the preference, or replace the stored one with the same key.
    ///
    /// Returns the stored record.
    async fn upsert(
        &self,
        preference: &ContextualPreference,
    ) -> Result<ContextualPreference, DomainError>;

    /// Find one preference of a resource by name.
    async fn find(
        &self,
        name: &str,
        resource: &PreferenceResource,
    ) -> Result<Option<ContextualPreference>, DomainError>;

    /// List every preference of a resource, ordered by name.
    async fn list_by_resource(
        &self,
        resource: &PreferenceResource,
    ) -> Result<Vec<ContextualPreference>, DomainError>;

    /// Delete a preference, returning the removed record if there was one.
    async fn delete(
        &self,
        name: &str,
        resource: &PreferenceResource,
    ) -> Result<Option<ContextualPreference>, DomainError>;
}
