//! Preference handler chain configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::foundation::ValidationError as FieldError;
use crate::domain::preference::ContextualPreferenceLevel;

/// Settings for the level handler chain.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    /// Upper bound for one directory lookup, in milliseconds
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,

    /// Comma-separated levels in chain order, e.g. `USER,ROLE,TOOL`
    #[serde(default = "default_chain")]
    pub chain: String,
}

impl PreferencesConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Parse the configured chain order. Blank entries are skipped.
    pub fn chain_levels(&self) -> Result<Vec<ContextualPreferenceLevel>, FieldError> {
        self.chain
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Validate chain configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lookup_timeout_ms == 0 || self.lookup_timeout_ms > 60_000 {
            return Err(ValidationError::InvalidLookupTimeout);
        }
        let levels = self
            .chain_levels()
            .map_err(|e| ValidationError::InvalidChain(e.to_string()))?;
        if levels.is_empty() {
            return Err(ValidationError::InvalidChain("no levels configured".to_string()));
        }
        for (i, level) in levels.iter().enumerate() {
            if levels[..i].contains(level) {
                return Err(ValidationError::InvalidChain(format!(
                    "level {} listed more than once",
                    level
                )));
            }
        }
        Ok(())
    }
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: default_lookup_timeout(),
            chain: default_chain(),
        }
    }
}

fn default_lookup_timeout() -> u64 {
    5_000
}

fn default_chain() -> String {
    "USER,ROLE,TOOL".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_level() {
        let config = PreferencesConfig::default();
        assert_eq!(config.lookup_timeout(), Duration::from_secs(5));
        assert_eq!(
            config.chain_levels().unwrap(),
            vec![
                ContextualPreferenceLevel::User,
                ContextualPreferenceLevel::Role,
                ContextualPreferenceLevel::Tool,
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chain_parsing_is_lenient_about_spacing_and_case() {
        let config = PreferencesConfig {
            chain: " tool , user ,".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.chain_levels().unwrap(),
            vec![ContextualPreferenceLevel::Tool, ContextualPreferenceLevel::User]
        );
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let config = PreferencesConfig {
            chain: "USER,SYSTEM".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidChain(_))));
    }

    #[test]
    fn test_validation_rejects_duplicate_level() {
        let config = PreferencesConfig {
            chain: "USER,ROLE,USER".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidChain(_))));
    }

    #[test]
    fn test_validation_rejects_empty_chain() {
        let config = PreferencesConfig {
            chain: " , ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidChain(_))));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = PreferencesConfig {
            lookup_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidLookupTimeout));
    }
}
