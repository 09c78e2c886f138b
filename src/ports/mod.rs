//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Directory Ports
//!
//! - `UserReader` - User existence lookups
//! - `RoleReader` - Role existence lookups
//! - `ToolReader` - Tool existence lookups
//!
//! ## Storage Ports
//!
//! - `ContextualPreferenceRepository` - Preference persistence

mod contextual_preference_repository;
mod role_reader;
mod tool_reader;
mod user_reader;

pub use contextual_preference_repository::ContextualPreferenceRepository;
pub use role_reader::RoleReader;
pub use tool_reader::ToolReader;
pub use user_reader::UserReader;
