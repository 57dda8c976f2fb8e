//! Trailmark - Map-Based Exercise Log
//!
//! Logs running and cycling sessions against map locations, derives their
//! performance metrics (pace, speed) at creation time, and keeps the
//! in-memory collection, the rendered list, and durable key-value storage
//! synchronized across create, delete, and reload.

pub mod session;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use session::controller::{SessionController, SessionState};
pub use storage::kv::{FileKv, KeyValueStore, MemoryKv};
pub use storage::persistence::PersistenceAdapter;
pub use workouts::factory::WorkoutDraft;
pub use workouts::store::WorkoutStore;
pub use workouts::types::{LatLng, Sport, Workout};
