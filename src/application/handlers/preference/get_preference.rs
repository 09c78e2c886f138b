//! GetPreferenceHandler - Query handler for one stored preference.

use std::sync::Arc;

use crate::domain::preference::{ContextualPreference, PreferenceError, PreferenceResource};
use crate::ports::ContextualPreferenceRepository;

/// Query for a preference of a resource by name.
#[derive(Debug, Clone)]
pub struct GetPreferenceQuery {
    pub name: String,
    pub resource: PreferenceResource,
}

/// Handler for retrieving a stored preference.
pub struct GetPreferenceHandler {
    repository: Arc<dyn ContextualPreferenceRepository>,
}

impl GetPreferenceHandler {
    pub fn new(repository: Arc<dyn ContextualPreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetPreferenceQuery,
    ) -> Result<ContextualPreference, PreferenceError> {
        let name = ContextualPreference::normalize_name(&query.name);
        self.repository
            .find(&name, &query.resource)
            .await?
            .ok_or_else(|| PreferenceError::not_found(name, query.resource))
    }
}
