//! UserPreferenceHandler - validates USER-level preferences.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::level_handler::{bounded_lookup, owned_resource_id, DEFAULT_LOOKUP_TIMEOUT};
use super::PreferenceLevelHandler;
use crate::domain::foundation::UserId;
use crate::domain::preference::{ContextualPreference, ContextualPreferenceLevel, PreferenceError};
use crate::ports::UserReader;

/// Handler for preferences scoped to a user.
///
/// A USER-level preference is valid iff the user it references exists.
/// The user's attributes are not inspected: a blocked user still owns
/// preferences.
pub struct UserPreferenceHandler {
    users: Arc<dyn UserReader>,
    lookup_timeout: Duration,
}

impl UserPreferenceHandler {
    pub fn new(users: Arc<dyn UserReader>) -> Self {
        Self {
            users,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Bound each user lookup by `timeout`.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

#[async_trait]
impl PreferenceLevelHandler for UserPreferenceHandler {
    fn level(&self) -> ContextualPreferenceLevel {
        ContextualPreferenceLevel::User
    }

    async fn is_valid(&self, preference: &ContextualPreference) -> Result<bool, PreferenceError> {
        let Some(user_id) = owned_resource_id::<UserId>(self.level(), preference) else {
            return Ok(false);
        };

        let user = bounded_lookup(
            self.level(),
            self.lookup_timeout,
            self.users.load_user_by_id(user_id),
        )
        .await?;

        let exists = user.is_some();
        debug!(
            user_id = %user_id,
            preference = %preference.name,
            exists,
            "Validated user preference"
        );
        Ok(exists)
    }
}
