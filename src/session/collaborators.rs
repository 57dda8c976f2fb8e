//! Collaborator seams the session controller talks through.
//!
//! Rendering, mapping, and geolocation are external concerns; the controller
//! only ever sees these traits. Removal and clearing of rendered entries are
//! first-class so the controller never needs a full environment reload to
//! stay consistent.

use uuid::Uuid;

use crate::workouts::types::{LatLng, Workout};

/// List view of the workout log.
pub trait RenderSink {
    /// Insert a view entry for a workout.
    fn render_workout(&mut self, workout: &Workout);

    /// Remove the view entry with the given id.
    fn remove_workout(&mut self, id: Uuid);

    /// Remove every view entry.
    fn clear(&mut self);

    /// Show the entry form.
    fn show_form(&mut self);

    /// Hide the entry form and clear its fields.
    fn hide_form(&mut self);

    /// Surface a blocking notice to the user (e.g. a validation failure).
    fn notify(&mut self, message: &str);
}

/// Map surface markers and panning are requested from.
pub trait MapSink {
    /// Place a labeled marker at the given coordinates.
    fn place_marker(&mut self, coords: LatLng, label: &str);

    /// Re-center the map on the given coordinates.
    fn recenter(&mut self, coords: LatLng, zoom: u8);
}

/// One-shot position source consulted at startup.
pub trait Geolocator {
    /// Current position, or `None` when acquisition failed.
    fn current_position(&mut self) -> Option<LatLng>;
}

/// Geolocator returning a fixed answer; the built-in binary and tests use
/// this in place of real hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocator(pub Option<LatLng>);

impl Geolocator for StaticLocator {
    fn current_position(&mut self) -> Option<LatLng> {
        self.0
    }
}
