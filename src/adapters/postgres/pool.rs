//! Connection pool setup.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Open a connection pool sized and timed by `config`.
///
/// Runs the bundled migrations when `config.run_migrations` is set.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))?;

    if config.run_migrations {
        run_migrations(&pool).await?;
    }

    info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Apply the `contextual_preferences` schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
}
