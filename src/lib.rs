//! Contextual Preferences - level-scoped preference validation and storage
//!
//! A contextual preference is a named value scoped to a user, a role or a
//! tool. A chain of level handlers decides whether a preference references
//! an existing resource before it is stored.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
