//! Session lifecycle orchestration.
//!
//! The controller is the only component that talks to both the store and the
//! persistence adapter, and the sole writer of the store. Every operation
//! runs to completion in response to one external event; there is no
//! overlapping execution to guard against.

use thiserror::Error;
use uuid::Uuid;

use super::collaborators::{Geolocator, MapSink, RenderSink};
use crate::storage::config::MapSettings;
use crate::storage::kv::KeyValueStore;
use crate::storage::persistence::PersistenceAdapter;
use crate::workouts::factory::{build_workout, ValidationError, WorkoutDraft};
use crate::workouts::store::{StoreError, WorkoutStore};
use crate::workouts::types::LatLng;

/// Where the session is within a creation cycle.
///
/// Validation, commit, and rejection are transient phases of
/// [`SessionController::submit`]; rejection keeps the form open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Not started yet
    Idle,
    /// Started; waiting for the user to pick a location
    AwaitingMapClick,
    /// A location was picked and the form is showing
    FormOpen { coords: LatLng },
}

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Submit arrived without an open form
    #[error("no form is open")]
    NoFormOpen,

    /// Draft failed validation; the form stays open
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store contract violation
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the full workout-log lifecycle against injected
/// collaborators.
pub struct SessionController<K, R, M, G>
where
    K: KeyValueStore,
    R: RenderSink,
    M: MapSink,
    G: Geolocator,
{
    store: WorkoutStore,
    persistence: PersistenceAdapter<K>,
    render: R,
    map: M,
    geolocator: G,
    map_settings: MapSettings,
    state: SessionState,
}

impl<K, R, M, G> SessionController<K, R, M, G>
where
    K: KeyValueStore,
    R: RenderSink,
    M: MapSink,
    G: Geolocator,
{
    pub fn new(
        persistence: PersistenceAdapter<K>,
        render: R,
        map: M,
        geolocator: G,
        map_settings: MapSettings,
    ) -> Self {
        Self {
            store: WorkoutStore::new(),
            persistence,
            render,
            map,
            geolocator,
            map_settings,
            state: SessionState::Idle,
        }
    }

    /// Start the session: center the map, rehydrate the store from
    /// persistence, and render every loaded record.
    pub fn start(&mut self) {
        let center = match self.geolocator.current_position() {
            Some(coords) => coords,
            None => {
                tracing::warn!("Could not acquire position, using default center");
                self.map_settings.default_center()
            }
        };
        self.map.recenter(center, self.map_settings.zoom_level);

        let workouts = self.persistence.load();
        tracing::info!(count = workouts.len(), "Session started");

        for workout in &workouts {
            self.render.render_workout(workout);
            self.map.place_marker(workout.coords, &workout.description);
        }
        self.store.replace_all(workouts);

        self.state = SessionState::AwaitingMapClick;
    }

    /// A location was picked on the map: remember it and open the form.
    pub fn map_click(&mut self, coords: LatLng) {
        self.state = SessionState::FormOpen { coords };
        self.render.show_form();
        tracing::debug!(%coords, "Form opened");
    }

    /// Submit the entry form. On success the workout is stored, rendered,
    /// and persisted, and the form closes. On validation failure the user is
    /// notified and the form stays open; nothing is stored.
    pub fn submit(&mut self, draft: &WorkoutDraft) -> Result<Uuid, SessionError> {
        let SessionState::FormOpen { coords } = self.state else {
            return Err(SessionError::NoFormOpen);
        };

        let workout = match build_workout(draft, coords) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::debug!(error = %e, "Submission rejected");
                self.render.notify(&e.to_string());
                return Err(e.into());
            }
        };

        let id = workout.id;
        self.store.add(workout.clone())?;

        self.map.place_marker(workout.coords, &workout.description);
        self.render.render_workout(&workout);
        self.persist_snapshot();
        self.render.hide_form();

        self.state = SessionState::AwaitingMapClick;
        tracing::info!(%id, sport = %workout.sport(), "Workout logged");
        Ok(id)
    }

    /// Delete a workout by id, persist the shrunken snapshot, and remove its
    /// rendered entry.
    pub fn delete(&mut self, id: Uuid) -> Result<(), SessionError> {
        self.store.remove(id)?;
        self.persist_snapshot();
        self.render.remove_workout(id);
        tracing::info!(%id, "Workout deleted");
        Ok(())
    }

    /// Clear the persisted key and the in-memory and rendered collections.
    /// Idempotent.
    pub fn reset(&mut self) {
        if let Err(e) = self.persistence.reset() {
            tracing::warn!(error = %e, "Failed to clear persisted data");
        }
        self.store.replace_all(Vec::new());
        self.render.clear();
        tracing::info!("Workout log reset");
    }

    /// A list entry was clicked: count the view (in memory only) and
    /// re-center the map on the workout.
    pub fn view(&mut self, id: Uuid) -> Result<(), SessionError> {
        let zoom = self.map_settings.zoom_level;
        let workout = self
            .store
            .find_by_id_mut(id)
            .ok_or(StoreError::NotFound(id))?;
        workout.record_view();
        let coords = workout.coords;
        self.map.recenter(coords, zoom);
        Ok(())
    }

    /// Persist the current snapshot; a failed write degrades durability
    /// only, the in-memory store stays authoritative.
    fn persist_snapshot(&mut self) {
        if let Err(e) = self.persistence.persist(&self.store.snapshot()) {
            tracing::warn!(error = %e, "Failed to persist workouts");
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn persistence(&self) -> &PersistenceAdapter<K> {
        &self.persistence
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    pub fn map_sink(&self) -> &M {
        &self.map
    }
}
