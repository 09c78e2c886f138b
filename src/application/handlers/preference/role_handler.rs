//! RolePreferenceHandler - validates ROLE-level preferences.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::level_handler::{bounded_lookup, owned_resource_id, DEFAULT_LOOKUP_TIMEOUT};
use super::PreferenceLevelHandler;
use crate::domain::foundation::RoleId;
use crate::domain::preference::{ContextualPreference, ContextualPreferenceLevel, PreferenceError};
use crate::ports::RoleReader;

/// Handler for preferences scoped to a role.
pub struct RolePreferenceHandler {
    roles: Arc<dyn RoleReader>,
    lookup_timeout: Duration,
}

impl RolePreferenceHandler {
    pub fn new(roles: Arc<dyn RoleReader>) -> Self {
        Self {
            roles,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

#[async_trait]
impl PreferenceLevelHandler for RolePreferenceHandler {
    fn level(&self) -> ContextualPreferenceLevel {
        ContextualPreferenceLevel::Role
    }

    async fn is_valid(&self, preference: &ContextualPreference) -> Result<bool, PreferenceError> {
        let Some(role_id) = owned_resource_id::<RoleId>(self.level(), preference) else {
            return Ok(false);
        };

        let role = bounded_lookup(
            self.level(),
            self.lookup_timeout,
            self.roles.load_role_by_id(role_id),
        )
        .await?;

        debug!(role_id = %role_id, exists = role.is_some(), "Validated role preference");
        Ok(role.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::Role;
    use crate::domain::foundation::DomainError;
    use crate::domain::preference::PreferenceResource;

    struct MockRoleReader {
        role: Option<Role>,
    }

    #[async_trait]
    impl RoleReader for MockRoleReader {
        async fn load_role_by_id(&self, id: RoleId) -> Result<Option<Role>, DomainError> {
            Ok(self.role.clone().filter(|role| role.id == id))
        }
    }

    fn handler(role: Option<Role>) -> RolePreferenceHandler {
        RolePreferenceHandler::new(Arc::new(MockRoleReader { role }))
    }

    #[tokio::test]
    async fn valid_when_role_exists() {
        let handler = handler(Some(Role::new(RoleId::new(3), "ROLE_ADMIN")));
        let preference = ContextualPreference::new("n", "v", PreferenceResource::role(3));

        assert_eq!(handler.is_valid(&preference).await, Ok(true));
    }

    #[tokio::test]
    async fn invalid_when_role_is_missing() {
        let handler = handler(Some(Role::new(RoleId::new(3), "ROLE_ADMIN")));
        let preference = ContextualPreference::new("n", "v", PreferenceResource::role(4));

        assert_eq!(handler.is_valid(&preference).await, Ok(false));
    }

    #[tokio::test]
    async fn invalid_for_user_level_preference() {
        let handler = handler(Some(Role::new(RoleId::new(3), "ROLE_ADMIN")));
        let preference = ContextualPreference::new("n", "v", PreferenceResource::user(3));

        assert_eq!(handler.is_valid(&preference).await, Ok(false));
    }
}
