//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PREFERENCES` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use contextual_preferences::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod preferences;
mod telemetry;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use preferences::PreferencesConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection; absent when running on in-memory adapters
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Handler chain settings
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PREFERENCES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PREFERENCES__DATABASE__URL=...` -> `database.url = ...`
    /// - `PREFERENCES__PREFERENCES__LOOKUP_TIMEOUT_MS=500` -> `preferences.lookup_timeout_ms = 500`
    /// - `PREFERENCES__TELEMETRY__JSON=true` -> `telemetry.json = true`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PREFERENCES")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.preferences.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preference::ContextualPreferenceLevel;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "PREFERENCES__DATABASE__URL",
        "PREFERENCES__DATABASE__MAX_CONNECTIONS",
        "PREFERENCES__PREFERENCES__LOOKUP_TIMEOUT_MS",
        "PREFERENCES__PREFERENCES__CHAIN",
        "PREFERENCES__TELEMETRY__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.preferences.lookup_timeout(), Duration::from_secs(5));
        assert!(!config.telemetry.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PREFERENCES__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("PREFERENCES__DATABASE__MAX_CONNECTIONS", "4");
        env::set_var("PREFERENCES__PREFERENCES__LOOKUP_TIMEOUT_MS", "250");
        env::set_var("PREFERENCES__PREFERENCES__CHAIN", "TOOL,USER");
        env::set_var("PREFERENCES__TELEMETRY__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/test");
        assert_eq!(database.max_connections, 4);
        assert_eq!(config.preferences.lookup_timeout(), Duration::from_millis(250));
        assert_eq!(
            config.preferences.chain_levels().unwrap(),
            vec![ContextualPreferenceLevel::Tool, ContextualPreferenceLevel::User]
        );
        assert!(config.telemetry.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_bad_database_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PREFERENCES__DATABASE__URL", "mysql://localhost/test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }
}
