//! Workout domain model: entities, validation, and the in-memory store.

pub mod factory;
pub mod store;
pub mod types;
