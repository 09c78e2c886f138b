//! Role directory port.

use async_trait::async_trait;

use crate::domain::directory::Role;
use crate::domain::foundation::{DomainError, RoleId};

/// Reader port for role lookups.
#[async_trait]
pub trait RoleReader: Send + Sync {
    /// Load a role by ID, `None` if it does not exist.
    async fn load_role_by_id(&self, id: RoleId) -> Result<Option<Role>, DomainError>;
}
