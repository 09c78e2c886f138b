//! In-Memory Preference Repository
//!
//! Stores contextual preferences in memory. Useful for testing and
//! development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::preference::{ContextualPreference, PreferenceResource};
use crate::ports::ContextualPreferenceRepository;

type PreferenceKey = (PreferenceResource, String);

/// In-memory storage for contextual preferences.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceRepository {
    preferences: Arc<RwLock<HashMap<PreferenceKey, ContextualPreference>>>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored preferences.
    pub async fn count(&self) -> usize {
        self.preferences.read().await.len()
    }

    fn key(name: &str, resource: &PreferenceResource) -> PreferenceKey {
        (resource.clone(), name.to_string())
    }
}

#[async_trait]
impl ContextualPreferenceRepository for InMemoryPreferenceRepository {
    async fn upsert(
        &self,
        preference: &ContextualPreference,
    ) -> Result<ContextualPreference, DomainError> {
        let key = Self::key(&preference.name, &preference.resource);
        self.preferences
            .write()
            .await
            .insert(key, preference.clone());
        Ok(preference.clone())
    }

    async fn find(
        &self,
        name: &str,
        resource: &PreferenceResource,
    ) -> Result<Option<ContextualPreference>, DomainError> {
        let preferences = self.preferences.read().await;
        Ok(preferences.get(&Self::key(name, resource)).cloned())
    }

    async fn list_by_resource(
        &self,
        resource: &PreferenceResource,
    ) -> Result<Vec<ContextualPreference>, DomainError> {
        let preferences = self.preferences.read().await;
        let mut listed: Vec<ContextualPreference> = preferences
            .values()
            .filter(|p| &p.resource == resource)
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listed)
    }

    async fn delete(
        &self,
        name: &str,
        resource: &PreferenceResource,
    ) -> Result<Option<ContextualPreference>, DomainError> {
        Ok(self
            .preferences
            .write()
            .await
            .remove(&Self::key(name, resource)))
    }
}
