//! ToolPreferenceHandler - validates TOOL-level preferences.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::level_handler::{bounded_lookup, owned_resource_id, DEFAULT_LOOKUP_TIMEOUT};
use super::PreferenceLevelHandler;
use crate::domain::foundation::ToolId;
use crate::domain::preference::{ContextualPreference, ContextualPreferenceLevel, PreferenceError};
use crate::ports::ToolReader;

/// Handler for preferences scoped to a tool.
pub struct ToolPreferenceHandler {
    tools: Arc<dyn ToolReader>,
    lookup_timeout: Duration,
}

impl ToolPreferenceHandler {
    pub fn new(tools: Arc<dyn ToolReader>) -> Self {
        Self {
            tools,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

#[async_trait]
impl PreferenceLevelHandler for ToolPreferenceHandler {
    fn level(&self) -> ContextualPreferenceLevel {
        ContextualPreferenceLevel::Tool
    }

    async fn is_valid(&self, preference: &ContextualPreference) -> Result<bool, PreferenceError> {
        let Some(tool_id) = owned_resource_id::<ToolId>(self.level(), preference) else {
            return Ok(false);
        };

        let tool = bounded_lookup(
            self.level(),
            self.lookup_timeout,
            self.tools.load_tool_by_id(tool_id),
        )
        .await?;

        debug!(tool_id = %tool_id, exists = tool.is_some(), "Validated tool preference");
        Ok(tool.is_some())
    }
}
