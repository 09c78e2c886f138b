//! PostgreSQL implementation of UserReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::directory::PipelineUser;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::UserReader;

/// Reads users from the `users` table maintained by user management.
#[derive(Clone)]
pub struct PostgresUserReader {
    pool: PgPool,
}

impl PostgresUserReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    user_name: String,
    blocked: bool,
}

#[async_trait]
impl UserReader for PostgresUserReader {
    async fn load_user_by_id(&self, id: UserId) -> Result<Option<PipelineUser>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, user_name, blocked FROM users WHERE id = $1")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to load user: {}", e)))?;

        Ok(row.map(|row| PipelineUser {
            id: UserId::new(row.id),
            user_name: row.user_name,
            blocked: row.blocked,
        }))
    }
}
