//! PreferenceLevelHandler - validation contract shared by every level.
//!
//! A handler owns exactly one [`ContextualPreferenceLevel`] and answers
//! whether a preference at that level references an existing resource.
//! Handlers never call each other; [`PreferenceHandlerChain`] routes a
//! preference to the handler owning its level.
//!
//! [`PreferenceHandlerChain`]: super::PreferenceHandlerChain

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::preference::{ContextualPreference, ContextualPreferenceLevel, PreferenceError};

/// Upper bound for a single directory lookup unless configured otherwise.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Validates contextual preferences for one level.
#[async_trait]
pub trait PreferenceLevelHandler: Send + Sync {
    /// The level this handler is responsible for.
    fn level(&self) -> ContextualPreferenceLevel;

    /// Check that the preference references an existing resource.
    ///
    /// Returns `Ok(false)` when the resource does not exist or the
    /// preference belongs to another level. Lookup failures are returned as
    /// [`PreferenceError::DependencyUnavailable`], never folded into `false`.
    async fn is_valid(&self, preference: &ContextualPreference) -> Result<bool, PreferenceError>;
}

/// Extracts the typed resource id of a preference owned by `level`.
///
/// `None` when the preference is scoped to another level, or when its id
/// cannot name any resource of this level.
pub(crate) fn owned_resource_id<T>(
    level: ContextualPreferenceLevel,
    preference: &ContextualPreference,
) -> Option<T>
where
    T: FromStr<Err = ValidationError>,
{
    if preference.level() != level {
        debug!(
            handler_level = %level,
            preference_level = %preference.level(),
            preference = %preference.name,
            "Preference is not scoped to this level"
        );
        return None;
    }

    match preference.resource.parse_id() {
        Ok(id) => Some(id),
        Err(e) => {
            debug!(
                resource = %preference.resource,
                preference = %preference.name,
                error = %e,
                "Resource id does not name a resource"
            );
            None
        }
    }
}

/// Runs one directory lookup under `timeout`.
///
/// Both a failed and an expired lookup surface as `DependencyUnavailable`.
pub(crate) async fn bounded_lookup<T, F>(
    level: ContextualPreferenceLevel,
    timeout: Duration,
    lookup: F,
) -> Result<Option<T>, PreferenceError>
where
    F: Future<Output = Result<Option<T>, DomainError>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(found)) => Ok(found),
        Ok(Err(e)) => {
            warn!(level = %level, error = %e, "Directory lookup failed");
            Err(PreferenceError::dependency_unavailable(format!(
                "{} directory lookup failed: {}",
                level, e
            )))
        }
        Err(_) => {
            warn!(
                level = %level,
                timeout_ms = timeout.as_millis() as u64,
                "Directory lookup timed out"
            );
            Err(PreferenceError::dependency_unavailable(format!(
                "{} directory lookup timed out after {}ms",
                level,
                timeout.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, UserId};
    use crate::domain::preference::PreferenceResource;

    #[test]
    fn owned_resource_id_parses_matching_level() {
        let preference = ContextualPreference::new("n", "v", PreferenceResource::user(42));
        let id: Option<UserId> = owned_resource_id(ContextualPreferenceLevel::User, &preference);
        assert_eq!(id, Some(UserId::new(42)));
    }

    #[test]
    fn owned_resource_id_skips_other_levels() {
        let preference = ContextualPreference::new("n", "v", PreferenceResource::tool(42));
        let id: Option<UserId> = owned_resource_id(ContextualPreferenceLevel::User, &preference);
        assert_eq!(id, None);
    }

    #[test]
    fn owned_resource_id_skips_non_numeric_ids() {
        let resource =
            PreferenceResource::new(ContextualPreferenceLevel::User, "not-a-number").unwrap();
        let preference = ContextualPreference::new("n", "v", resource);
        let id: Option<UserId> = owned_resource_id(ContextualPreferenceLevel::User, &preference);
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn bounded_lookup_passes_through_result() {
        let found = bounded_lookup(ContextualPreferenceLevel::User, DEFAULT_LOOKUP_TIMEOUT, async {
            Ok::<_, DomainError>(Some(7))
        })
        .await;
        assert_eq!(found, Ok(Some(7)));
    }

    #[tokio::test]
    async fn bounded_lookup_maps_failure_to_dependency_unavailable() {
        let result = bounded_lookup(ContextualPreferenceLevel::Role, DEFAULT_LOOKUP_TIMEOUT, async {
            Err::<Option<u8>, _>(DomainError::new(ErrorCode::InternalError, "boom"))
        })
        .await;
        assert!(matches!(result, Err(PreferenceError::DependencyUnavailable(_))));
    }

    #[tokio::test]
    async fn bounded_lookup_times_out() {
        let result = bounded_lookup(
            ContextualPreferenceLevel::Tool,
            Duration::from_millis(10),
            async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok::<_, DomainError>(Some(1))
            },
        )
        .await;
        match result {
            Err(PreferenceError::DependencyUnavailable(message)) => {
                assert!(message.contains("timed out"));
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
