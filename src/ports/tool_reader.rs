//! Tool registry port.

use async_trait::async_trait;

use crate::domain::directory::Tool;
use crate::domain::foundation::{DomainError, ToolId};

/// Reader port for tool lookups.
#[async_trait]
pub trait ToolReader: Send + Sync {
    /// Load a tool by ID, `None` if it does not exist.
    async fn load_tool_by_id(&self, id: ToolId) -> Result<Option<Tool>, DomainError>;
}
