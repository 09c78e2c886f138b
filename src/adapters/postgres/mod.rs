//! PostgreSQL adapters - Database implementations of the ports.
//!
//! - `PostgresUserReader`, `PostgresRoleReader`, `PostgresToolReader` -
//!   existence lookups against directory tables owned by other services
//! - `PostgresPreferenceRepository` - preference persistence

mod pool;
mod preference_repository;
mod role_reader;
mod tool_reader;
mod user_reader;

pub use pool::{connect_pool, run_migrations};
pub use preference_repository::PostgresPreferenceRepository;
pub use role_reader::PostgresRoleReader;
pub use tool_reader::PostgresToolReader;
pub use user_reader::PostgresUserReader;
