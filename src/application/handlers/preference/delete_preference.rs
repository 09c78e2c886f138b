//! DeletePreferenceHandler - Command handler removing a stored preference.

use std::sync::Arc;

use tracing::info;

use crate::domain::preference::{ContextualPreference, PreferenceError, PreferenceResource};
use crate::ports::ContextualPreferenceRepository;

/// Command to delete a preference of a resource.
#[derive(Debug, Clone)]
pub struct DeletePreferenceCommand {
    pub name: String,
    pub resource: PreferenceResource,
}

/// Handler for deleting preferences.
///
/// Deletion does not consult the handler chain: a preference whose resource
/// has since disappeared must still be removable.
pub struct DeletePreferenceHandler {
    repository: Arc<dyn ContextualPreferenceRepository>,
}

impl DeletePreferenceHandler {
    pub fn new(repository: Arc<dyn ContextualPreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeletePreferenceCommand,
    ) -> Result<ContextualPreference, PreferenceError> {
        let name = ContextualPreference::normalize_name(&cmd.name);
        let removed = self
            .repository
            .delete(&name, &cmd.resource)
            .await?
            .ok_or_else(|| PreferenceError::not_found(name.clone(), cmd.resource.clone()))?;

        info!(preference = %name, resource = %cmd.resource, "Contextual preference deleted");
        Ok(removed)
    }
}
