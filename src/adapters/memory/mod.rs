//! In-memory adapters for development and tests.

mod preference_repository;
mod resource_directory;

pub use preference_repository::InMemoryPreferenceRepository;
pub use resource_directory::InMemoryResourceDirectory;
