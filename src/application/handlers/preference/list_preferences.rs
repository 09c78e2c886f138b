//! ListResourcePreferencesHandler - Query handler listing a resource's preferences.

use std::sync::Arc;

use crate::domain::preference::{ContextualPreference, PreferenceError, PreferenceResource};
use crate::ports::ContextualPreferenceRepository;

/// Query for all preferences of one resource.
#[derive(Debug, Clone)]
pub struct ListResourcePreferencesQuery {
    pub resource: PreferenceResource,
}

/// Handler listing preferences ordered by name.
pub struct ListResourcePreferencesHandler {
    repository: Arc<dyn ContextualPreferenceRepository>,
}

impl ListResourcePreferencesHandler {
    pub fn new(repository: Arc<dyn ContextualPreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListResourcePreferencesQuery,
    ) -> Result<Vec<ContextualPreference>, PreferenceError> {
        Ok(self.repository.list_by_resource(&query.resource).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPreferenceRepository;

    #[tokio::test]
    async fn lists_only_requested_resource_in_name_order() {
        let repository = Arc::new(InMemoryPreferenceRepository::new());
        for (name, resource) in [
            ("zeta", PreferenceResource::user(42)),
            ("alpha", PreferenceResource::user(42)),
            ("alpha", PreferenceResource::user(43)),
            ("beta", PreferenceResource::tool(42)),
        ] {
            repository
                .upsert(&ContextualPreference::new(name, "v", resource))
                .await
                .unwrap();
        }
        let handler = ListResourcePreferencesHandler::new(repository);

        let listed = handler
            .handle(ListResourcePreferencesQuery {
                resource: PreferenceResource::user(42),
            })
            .await
            .unwrap();

        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn empty_resource_lists_nothing() {
        let handler =
            ListResourcePreferencesHandler::new(Arc::new(InMemoryPreferenceRepository::new()));

        let listed = handler
            .handle(ListResourcePreferencesQuery {
                resource: PreferenceResource::role(1),
            })
            .await
            .unwrap();

        assert!(listed.is_empty());
    }
}
