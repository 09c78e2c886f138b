//! PostgreSQL implementation of RoleReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::directory::Role;
use crate::domain::foundation::{DomainError, RoleId};
use crate::ports::RoleReader;

/// Reads roles from the `roles` table.
#[derive(Clone)]
pub struct PostgresRoleReader {
    pool: PgPool,
}

impl PostgresRoleReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleReader for PostgresRoleReader {
    async fn load_role_by_id(&self, id: RoleId) -> Result<Option<Role>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to load role: {}", e)))?;

        row.map(|row| -> Result<_, DomainError> {
            let id: i64 = row
                .try_get("id")
                .map_err(|e| DomainError::database(format!("Invalid role row: {}", e)))?;
            let name: String = row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Invalid role row: {}", e)))?;
            Ok(Role::new(RoleId::new(id), name))
        })
        .transpose()
    }
}
