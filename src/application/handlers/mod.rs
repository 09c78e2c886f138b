//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod preference;

pub use preference::{
    DeletePreferenceCommand, DeletePreferenceHandler, GetPreferenceHandler, GetPreferenceQuery,
    ListResourcePreferencesHandler, ListResourcePreferencesQuery, PreferenceHandlerChain,
    PreferenceHandlerChainBuilder, PreferenceLevelHandler, RolePreferenceHandler,
    SavePreferenceCommand, SavePreferenceHandler, ToolPreferenceHandler, UserPreferenceHandler,
    ValidatePreferenceHandler, ValidatePreferenceQuery, DEFAULT_LOOKUP_TIMEOUT,
};
