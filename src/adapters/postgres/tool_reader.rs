//! PostgreSQL implementation of ToolReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::directory::Tool;
use crate::domain::foundation::{DomainError, ToolId};
use crate::ports::ToolReader;

/// Reads tools from the `tools` registry table.
#[derive(Clone)]
pub struct PostgresToolReader {
    pool: PgPool,
}

impl PostgresToolReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToolReader for PostgresToolReader {
    async fn load_tool_by_id(&self, id: ToolId) -> Result<Option<Tool>, DomainError> {
        let row = sqlx::query("SELECT id, image FROM tools WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to load tool: {}", e)))?;

        row.map(|row| -> Result<_, DomainError> {
            let id: i64 = row
                .try_get("id")
                .map_err(|e| DomainError::database(format!("Invalid tool row: {}", e)))?;
            let image: String = row
                .try_get("image")
                .map_err(|e| DomainError::database(format!("Invalid tool row: {}", e)))?;
            Ok(Tool::new(ToolId::new(id), image))
        })
        .transpose()
    }
}
