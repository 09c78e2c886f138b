//! SavePreferenceHandler - Command handler for creating or updating a preference.

use std::sync::Arc;

use tracing::{info, warn};

use super::PreferenceHandlerChain;
use crate::domain::foundation::Timestamp;
use crate::domain::preference::{
    ContextualPreference, PreferenceError, PreferenceResource, PreferenceType,
};
use crate::ports::ContextualPreferenceRepository;

/// Command to store a preference for a resource.
#[derive(Debug, Clone)]
pub struct SavePreferenceCommand {
    pub name: String,
    pub value: String,
    pub preference_type: PreferenceType,
    pub resource: PreferenceResource,
}

/// Handler storing preferences that pass validation.
pub struct SavePreferenceHandler {
    chain: Arc<PreferenceHandlerChain>,
    repository: Arc<dyn ContextualPreferenceRepository>,
}

impl SavePreferenceHandler {
    pub fn new(
        chain: Arc<PreferenceHandlerChain>,
        repository: Arc<dyn ContextualPreferenceRepository>,
    ) -> Self {
        Self { chain, repository }
    }

    pub async fn handle(
        &self,
        cmd: SavePreferenceCommand,
    ) -> Result<ContextualPreference, PreferenceError> {
        let preference = ContextualPreference {
            name: ContextualPreference::normalize_name(&cmd.name),
            value: cmd.preference_type.normalize(cmd.value),
            preference_type: cmd.preference_type,
            created_at: Timestamp::now(),
            resource: cmd.resource,
        };
        preference.validate()?;

        let valid = match self.chain.is_valid(&preference).await {
            Ok(valid) => valid,
            Err(err) => {
                warn!(
                    code = %err.code(),
                    preference = %preference.name,
                    resource = %preference.resource,
                    error = %err,
                    "Preference could not be validated"
                );
                return Err(err);
            }
        };
        if !valid {
            return Err(PreferenceError::invalid_resource(
                preference.name,
                preference.resource,
            ));
        }

        let stored = self.repository.upsert(&preference).await?;
        info!(
            preference = %stored.name,
            resource = %stored.resource,
            "Contextual preference saved"
        );
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryPreferenceRepository, InMemoryResourceDirectory};
    use crate::application::handlers::preference::{ToolPreferenceHandler, UserPreferenceHandler};
    use crate::domain::directory::{PipelineUser, Tool};
    use crate::domain::foundation::{ToolId, UserId};

    struct Fixture {
        handler: SavePreferenceHandler,
        repository: Arc<InMemoryPreferenceRepository>,
        directory: Arc<InMemoryResourceDirectory>,
    }

    async fn fixture() -> Fixture {
        let directory = Arc::new(InMemoryResourceDirectory::new());
        directory.add_user(PipelineUser::new(UserId::new(42), "user")).await;
        directory.add_tool(Tool::new(ToolId::new(9), "library/centos:7")).await;
        let chain = PreferenceHandlerChain::builder()
            .then(UserPreferenceHandler::new(directory.clone()))
            .then(ToolPreferenceHandler::new(directory.clone()))
            .build()
            .unwrap();
        let repository = Arc::new(InMemoryPreferenceRepository::new());
        Fixture {
            handler: SavePreferenceHandler::new(Arc::new(chain), repository.clone()),
            repository,
            directory,
        }
    }

    fn command(name: &str, value: &str, resource: PreferenceResource) -> SavePreferenceCommand {
        SavePreferenceCommand {
            name: name.to_string(),
            value: value.to_string(),
            preference_type: PreferenceType::String,
            resource,
        }
    }

    #[tokio::test]
    async fn stores_preference_for_existing_user() {
        let fixture = fixture().await;

        let stored = fixture
            .handler
            .handle(command("launch.image", "centos", PreferenceResource::user(42)))
            .await
            .unwrap();

        assert_eq!(stored.value, "centos");
        assert_eq!(fixture.repository.count().await, 1);
    }

    #[tokio::test]
    async fn trims_preference_name() {
        let fixture = fixture().await;

        let stored = fixture
            .handler
            .handle(command("  launch.image ", "centos", PreferenceResource::user(42)))
            .await
            .unwrap();

        assert_eq!(stored.name, "launch.image");
    }

    #[tokio::test]
    async fn stores_typed_value_without_padding() {
        let fixture = fixture().await;
        let mut cmd = command("launch.cpu", " 42 ", PreferenceResource::user(42));
        cmd.preference_type = PreferenceType::Integer;

        let stored = fixture.handler.handle(cmd).await.unwrap();

        assert_eq!(stored.value, "42");
    }

    #[tokio::test]
    async fn keeps_string_value_verbatim() {
        let fixture = fixture().await;

        let stored = fixture
            .handler
            .handle(command("launch.motd", " hello ", PreferenceResource::user(42)))
            .await
            .unwrap();

        assert_eq!(stored.value, " hello ");
    }

    #[tokio::test]
    async fn replaces_value_of_existing_preference() {
        let fixture = fixture().await;
        let resource = PreferenceResource::tool(9);

        fixture
            .handler
            .handle(command("launch.cpu", "2", resource.clone()))
            .await
            .unwrap();
        let stored = fixture
            .handler
            .handle(command("launch.cpu", "4", resource))
            .await
            .unwrap();

        assert_eq!(stored.value, "4");
        assert_eq!(fixture.repository.count().await, 1);
    }

    #[tokio::test]
    async fn rejects_missing_user() {
        let fixture = fixture().await;

        let result = fixture
            .handler
            .handle(command("launch.image", "centos", PreferenceResource::user(7)))
            .await;

        assert!(matches!(result, Err(PreferenceError::InvalidResource { .. })));
        assert_eq!(fixture.repository.count().await, 0);
    }

    #[tokio::test]
    async fn rejects_level_without_handler() {
        let fixture = fixture().await;

        let result = fixture
            .handler
            .handle(command("launch.image", "centos", PreferenceResource::role(1)))
            .await;

        assert!(matches!(result, Err(PreferenceError::InvalidResource { .. })));
    }

    #[tokio::test]
    async fn rejects_value_of_wrong_type() {
        let fixture = fixture().await;
        let mut cmd = command("launch.cpu", "many", PreferenceResource::user(42));
        cmd.preference_type = PreferenceType::Integer;

        let result = fixture.handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(PreferenceError::Validation { ref field, .. }) if field == "value"
        ));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let fixture = fixture().await;

        let result = fixture
            .handler
            .handle(command("   ", "v", PreferenceResource::user(42)))
            .await;

        assert!(matches!(
            result,
            Err(PreferenceError::Validation { ref field, .. }) if field == "name"
        ));
    }

    #[tokio::test]
    async fn directory_outage_is_not_reported_as_invalid() {
        let fixture = fixture().await;
        fixture.directory.set_unavailable(true);

        let result = fixture
            .handler
            .handle(command("launch.image", "centos", PreferenceResource::user(42)))
            .await;

        assert!(matches!(result, Err(PreferenceError::DependencyUnavailable(_))));
        assert_eq!(fixture.repository.count().await, 0);
    }
}
