//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory directories and preference storage
//! - `postgres` - PostgreSQL-backed directories and preference storage

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryPreferenceRepository, InMemoryResourceDirectory};
pub use postgres::{
    connect_pool, PostgresPreferenceRepository, PostgresRoleReader, PostgresToolReader,
    PostgresUserReader,
};
