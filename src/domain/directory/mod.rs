//! Directory entities preferences can be scoped to.
//!
//! Users, roles and tools are owned and persisted by external directories.
//! Preference handling only ever checks that one exists, so the records
//! carry just enough to identify them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RoleId, ToolId, UserId};

/// A platform user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineUser {
    pub id: UserId,
    pub user_name: String,
    #[serde(default)]
    pub blocked: bool,
}

impl PipelineUser {
    pub fn new(id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            blocked: false,
        }
    }
}

/// A named group of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
}

impl Role {
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A registered tool (container image).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,
    pub image: String,
}

impl Tool {
    pub fn new(id: ToolId, image: impl Into<String>) -> Self {
        Self {
            id,
            image: image.into(),
        }
    }
}
