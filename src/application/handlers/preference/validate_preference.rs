//! ValidatePreferenceHandler - Query handler checking a preference's resource.

use std::sync::Arc;

use super::PreferenceHandlerChain;
use crate::domain::preference::{ContextualPreference, PreferenceError};

/// Query asking whether a preference may be stored.
#[derive(Debug, Clone)]
pub struct ValidatePreferenceQuery {
    pub preference: ContextualPreference,
}

/// Handler for validating preferences against the handler chain.
pub struct ValidatePreferenceHandler {
    chain: Arc<PreferenceHandlerChain>,
}

impl ValidatePreferenceHandler {
    pub fn new(chain: Arc<PreferenceHandlerChain>) -> Self {
        Self { chain }
    }

    pub async fn handle(&self, query: ValidatePreferenceQuery) -> Result<bool, PreferenceError> {
        self.chain.is_valid(&query.preference).await
    }
}
