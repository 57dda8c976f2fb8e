//! In-memory workout collection.
//!
//! The store is the single authoritative owner of the ordered collection.
//! Insertion order is display order. Entries are treated as opaque,
//! already-valid records; no derived field is ever recomputed here.

use thiserror::Error;
use uuid::Uuid;

use super::types::Workout;

/// Store contract violations. Under correct controller usage these do not
/// occur; they surface programming errors rather than user mistakes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("workout id already present: {0}")]
    DuplicateId(Uuid),

    #[error("workout not found: {0}")]
    NotFound(Uuid),
}

/// The authoritative ordered collection of logged workouts.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout, guarding id uniqueness at the boundary.
    pub fn add(&mut self, workout: Workout) -> Result<(), StoreError> {
        if self.workouts.iter().any(|w| w.id == workout.id) {
            return Err(StoreError::DuplicateId(workout.id));
        }
        self.workouts.push(workout);
        Ok(())
    }

    /// Remove the entry with the given id, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<Workout, StoreError> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.workouts.remove(index))
    }

    /// Wholesale replacement, used only when rehydrating from persistence.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    /// Read-only copy of the current ordered collection.
    pub fn snapshot(&self) -> Vec<Workout> {
        self.workouts.clone()
    }

    /// Borrow the collection in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: Uuid) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::LatLng;

    fn running() -> Workout {
        Workout::running(LatLng(46.0, 7.0), 5.0, 25.0, 180).unwrap()
    }

    #[test]
    fn test_add_then_find() {
        let mut store = WorkoutStore::new();
        let w = running();
        let id = w.id;
        store.add(w.clone()).unwrap();

        assert_eq!(store.find_by_id(id), Some(&w));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = WorkoutStore::new();
        let w = running();
        let id = w.id;
        store.add(w.clone()).unwrap();

        assert_eq!(store.add(w).unwrap_err(), StoreError::DuplicateId(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_then_find_is_none() {
        let mut store = WorkoutStore::new();
        let w = running();
        let id = w.id;
        store.add(w).unwrap();

        store.remove(id).unwrap();
        assert!(store.find_by_id(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut store = WorkoutStore::new();
        let id = uuid::Uuid::new_v4();
        assert_eq!(store.remove(id).unwrap_err(), StoreError::NotFound(id));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = WorkoutStore::new();
        let first = running();
        let second = Workout::cycling(LatLng(46.0, 7.0), 20.0, 60.0, 400.0).unwrap();
        store.add(first.clone()).unwrap();
        store.add(second.clone()).unwrap();

        let ids: Vec<_> = store.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_replace_all_overwrites() {
        let mut store = WorkoutStore::new();
        store.add(running()).unwrap();

        let replacement = vec![running(), running()];
        store.replace_all(replacement.clone());
        assert_eq!(store.snapshot(), replacement);
    }
}
