//! Contextual preference handlers.
//!
//! - Level handlers (`UserPreferenceHandler`, `RolePreferenceHandler`,
//!   `ToolPreferenceHandler`) check that a preference's resource exists.
//! - `PreferenceHandlerChain` routes a preference to the handler owning
//!   its level.
//! - Command/query handlers validate, store, read and delete preferences.

mod chain;
mod delete_preference;
mod get_preference;
mod level_handler;
mod list_preferences;
mod role_handler;
mod save_preference;
mod tool_handler;
mod user_handler;
mod validate_preference;

pub use chain::{PreferenceHandlerChain, PreferenceHandlerChainBuilder};
pub use delete_preference::{DeletePreferenceCommand, DeletePreferenceHandler};
pub use get_preference::{GetPreferenceHandler, GetPreferenceQuery};
pub use level_handler::{PreferenceLevelHandler, DEFAULT_LOOKUP_TIMEOUT};
pub use list_preferences::{ListResourcePreferencesHandler, ListResourcePreferencesQuery};
pub use role_handler::RolePreferenceHandler;
pub use save_preference::{SavePreferenceCommand, SavePreferenceHandler};
pub use tool_handler::ToolPreferenceHandler;
pub use user_handler::UserPreferenceHandler;
pub use validate_preference::{ValidatePreferenceHandler, ValidatePreferenceQuery};
