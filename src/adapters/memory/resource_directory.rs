//! In-Memory Resource Directory
//!
//! Holds users, roles and tools in memory and serves all three directory
//! ports. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::directory::{PipelineUser, Role, Tool};
use crate::domain::foundation::{DomainError, RoleId, ToolId, UserId};
use crate::ports::{RoleReader, ToolReader, UserReader};

/// In-memory directory of users, roles and tools.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceDirectory {
    users: Arc<RwLock<HashMap<UserId, PipelineUser>>>,
    roles: Arc<RwLock<HashMap<RoleId, Role>>>,
    tools: Arc<RwLock<HashMap<ToolId, Tool>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryResourceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: PipelineUser) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn remove_user(&self, id: UserId) -> Option<PipelineUser> {
        self.users.write().await.remove(&id)
    }

    pub async fn add_role(&self, role: Role) {
        self.roles.write().await.insert(role.id, role);
    }

    pub async fn add_tool(&self, tool: Tool) {
        self.tools.write().await.insert(tool.id, tool);
    }

    /// Make every lookup fail, simulating a directory outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::database("resource directory unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserReader for InMemoryResourceDirectory {
    async fn load_user_by_id(&self, id: UserId) -> Result<Option<PipelineUser>, DomainError> {
        self.check_available()?;
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl RoleReader for InMemoryResourceDirectory {
    async fn load_role_by_id(&self, id: RoleId) -> Result<Option<Role>, DomainError> {
        self.check_available()?;
        Ok(self.roles.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl ToolReader for InMemoryResourceDirectory {
    async fn load_tool_by_id(&self, id: ToolId) -> Result<Option<Tool>, DomainError> {
        self.check_available()?;
        Ok(self.tools.read().await.get(&id).cloned())
    }
}
