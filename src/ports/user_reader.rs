//! User directory port.
//!
//! Read-only lookup of platform users by identifier. Account lifecycle is
//! owned by the user-management system; preference handling never mutates
//! a user.

use async_trait::async_trait;

use crate::domain::directory::PipelineUser;
use crate::domain::foundation::{DomainError, UserId};

/// Reader port for user lookups.
#[async_trait]
pub trait UserReader: Send + Sync {
    /// Load a user by ID.
    ///
    /// Returns `None` if no such user exists. Returns an error only when the
    /// directory itself could not be queried.
    async fn load_user_by_id(&self, id: UserId) -> Result<Option<PipelineUser>, DomainError>;
}
