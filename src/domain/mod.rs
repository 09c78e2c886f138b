//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `preference` - Contextual preferences, levels and resource references
//! - `directory` - Users, roles and tools preferences are scoped to

pub mod directory;
pub mod foundation;
pub mod preference;
