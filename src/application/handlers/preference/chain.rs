//! PreferenceHandlerChain - ordered level handlers.
//!
//! The chain owns its handlers in a single forward sequence, fixed at
//! construction. Validation walks the sequence explicitly and hands the
//! preference to the first handler owning its level; a handler's position
//! (mid-chain or terminal) never changes its verdict.

use std::sync::Arc;

use tracing::debug;

use super::{
    PreferenceLevelHandler, RolePreferenceHandler, ToolPreferenceHandler, UserPreferenceHandler,
};
use crate::config::PreferencesConfig;
use crate::domain::preference::{ContextualPreference, ContextualPreferenceLevel, PreferenceError};
use crate::ports::{RoleReader, ToolReader, UserReader};

/// Ordered, immutable sequence of level handlers.
pub struct PreferenceHandlerChain {
    handlers: Vec<Arc<dyn PreferenceLevelHandler>>,
}

impl PreferenceHandlerChain {
    pub fn builder() -> PreferenceHandlerChainBuilder {
        PreferenceHandlerChainBuilder::default()
    }

    /// Build the chain described by configuration.
    ///
    /// Levels appear in the configured order, each handler bounded by the
    /// configured lookup timeout. Configuration that fails
    /// [`PreferencesConfig::validate`] is rejected.
    pub fn from_config(
        config: &PreferencesConfig,
        users: Arc<dyn UserReader>,
        roles: Arc<dyn RoleReader>,
        tools: Arc<dyn ToolReader>,
    ) -> Result<Self, PreferenceError> {
        config
            .validate()
            .map_err(|e| PreferenceError::validation("preferences", e.to_string()))?;
        let timeout = config.lookup_timeout();
        let mut builder = Self::builder();
        for level in config.chain_levels()? {
            builder = match level {
                ContextualPreferenceLevel::User => builder
                    .then(UserPreferenceHandler::new(users.clone()).with_lookup_timeout(timeout)),
                ContextualPreferenceLevel::Role => builder
                    .then(RolePreferenceHandler::new(roles.clone()).with_lookup_timeout(timeout)),
                ContextualPreferenceLevel::Tool => builder
                    .then(ToolPreferenceHandler::new(tools.clone()).with_lookup_timeout(timeout)),
            };
        }
        builder.build()
    }

    /// Levels in chain order.
    pub fn levels(&self) -> Vec<ContextualPreferenceLevel> {
        self.handlers.iter().map(|h| h.level()).collect()
    }

    /// The handler responsible for `level`, if any.
    pub fn handler_for(
        &self,
        level: ContextualPreferenceLevel,
    ) -> Option<&dyn PreferenceLevelHandler> {
        self.handlers
            .iter()
            .find(|h| h.level() == level)
            .map(|h| &**h)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Validate a preference with the handler owning its level.
    ///
    /// A level no handler owns is invalid, not an error.
    pub async fn is_valid(
        &self,
        preference: &ContextualPreference,
    ) -> Result<bool, PreferenceError> {
        let level = preference.level();
        for (position, handler) in self.handlers.iter().enumerate() {
            if handler.level() != level {
                continue;
            }
            let valid = handler.is_valid(preference).await?;
            debug!(
                level = %level,
                position,
                terminal = position + 1 == self.handlers.len(),
                preference = %preference.name,
                valid,
                "Preference validated by chain"
            );
            return Ok(valid);
        }

        debug!(level = %level, preference = %preference.name, "No handler owns preference level");
        Ok(false)
    }
}

/// Builder appending handlers in chain order.
#[derive(Default)]
pub struct PreferenceHandlerChainBuilder {
    handlers: Vec<Arc<dyn PreferenceLevelHandler>>,
}

impl PreferenceHandlerChainBuilder {
    /// Append a handler after the ones already added.
    pub fn then(self, handler: impl PreferenceLevelHandler + 'static) -> Self {
        self.then_shared(Arc::new(handler))
    }

    /// Append a handler that is shared with other owners.
    pub fn then_shared(mut self, handler: Arc<dyn PreferenceLevelHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Finish the chain, rejecting a level registered twice.
    pub fn build(self) -> Result<PreferenceHandlerChain, PreferenceError> {
        for (i, handler) in self.handlers.iter().enumerate() {
            let level = handler.level();
            if self.handlers[..i].iter().any(|h| h.level() == level) {
                return Err(PreferenceError::DuplicateLevel(level));
            }
        }
        Ok(PreferenceHandlerChain {
            handlers: self.handlers,
        })
    }
}
