//! PostgreSQL implementation of ContextualPreferenceRepository.
//!
//! Preferences live in `contextual_preferences`, keyed by
//! `(name, level, resource_id)`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::preference::{ContextualPreference, PreferenceResource};
use crate::ports::ContextualPreferenceRepository;

/// PostgreSQL implementation of the ContextualPreferenceRepository port.
#[derive(Clone)]
pub struct PostgresPreferenceRepository {
    pool: PgPool,
}

impl PostgresPreferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a preference.
#[derive(Debug, sqlx::FromRow)]
struct PreferenceRow {
    name: String,
    value: String,
    value_type: String,
    created_date: DateTime<Utc>,
    level: String,
    resource_id: String,
}

impl TryFrom<PreferenceRow> for ContextualPreference {
    type Error = DomainError;

    fn try_from(row: PreferenceRow) -> Result<Self, Self::Error> {
        let corrupt = |e: crate::domain::foundation::ValidationError| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Corrupt preference row '{}': {}", row.name, e),
            )
        };
        let preference_type = row.value_type.parse().map_err(corrupt)?;
        let level = row.level.parse().map_err(corrupt)?;

        Ok(ContextualPreference {
            name: row.name.clone(),
            value: row.value,
            preference_type,
            created_at: Timestamp::from_datetime(row.created_date),
            resource: PreferenceResource {
                level,
                resource_id: row.resource_id,
            },
        })
    }
}

const COLUMNS: &str = "name, value, value_type, created_date, level, resource_id";

#[async_trait]
impl ContextualPreferenceRepository for PostgresPreferenceRepository {
    async fn upsert(
        &self,
        preference: &ContextualPreference,
    ) -> Result<ContextualPreference, DomainError> {
        let row: PreferenceRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO contextual_preferences ({COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name, level, resource_id) DO UPDATE
                SET value = EXCLUDED.value,
                    value_type = EXCLUDED.value_type,
                    created_date = EXCLUDED.created_date
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&preference.name)
        .bind(&preference.value)
        .bind(preference.preference_type.as_str())
        .bind(preference.created_at.as_datetime())
        .bind(preference.resource.level.as_str())
        .bind(&preference.resource.resource_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save preference: {}", e)))?;

        row.try_into()
    }

    async fn find(
        &self,
        name: &str,
        resource: &PreferenceResource,
    ) -> Result<Option<ContextualPreference>, DomainError> {
        let row: Option<PreferenceRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM contextual_preferences \
             WHERE name = $1 AND level = $2 AND resource_id = $3"
        ))
        .bind(name)
        .bind(resource.level.as_str())
        .bind(&resource.resource_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load preference: {}", e)))?;

        row.map(ContextualPreference::try_from).transpose()
    }

    async fn list_by_resource(
        &self,
        resource: &PreferenceResource,
    ) -> Result<Vec<ContextualPreference>, DomainError> {
        let rows: Vec<PreferenceRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM contextual_preferences \
             WHERE level = $1 AND resource_id = $2 ORDER BY name"
        ))
        .bind(resource.level.as_str())
        .bind(&resource.resource_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list preferences: {}", e)))?;

        rows.into_iter().map(ContextualPreference::try_from).collect()
    }

    async fn delete(
        &self,
        name: &str,
        resource: &PreferenceResource,
    ) -> Result<Option<ContextualPreference>, DomainError> {
        let row: Option<PreferenceRow> = sqlx::query_as(&format!(
            "DELETE FROM contextual_preferences \
             WHERE name = $1 AND level = $2 AND resource_id = $3 \
             RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(resource.level.as_str())
        .bind(&resource.resource_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to delete preference: {}", e)))?;

        row.map(ContextualPreference::try_from).transpose()
    }
}
