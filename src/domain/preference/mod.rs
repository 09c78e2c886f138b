//! Contextual preference domain.
//!
//! A contextual preference is a named value scoped to one resource (a user,
//! a role or a tool). The level of the resource decides which handler
//! validates it.

mod contextual_preference;
mod errors;
mod level;
mod preference_type;
mod resource;

pub use contextual_preference::ContextualPreference;
pub use errors::PreferenceError;
pub use level::ContextualPreferenceLevel;
pub use preference_type::PreferenceType;
pub use resource::PreferenceResource;
