//! Workout types and derived metrics.
//!
//! A workout is a single logged exercise session, either running or cycling.
//! Derived metrics (pace, speed, description) are computed exactly once at
//! construction and never recomputed afterwards, including after a reload
//! from storage.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Geographic coordinate pair, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.0
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.1
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.0, self.1)
    }
}

/// Sport discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Running,
    Cycling,
}

impl Sport {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Cycling => "Cycling",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Variant-specific fields and their derived metric.
///
/// Internally tagged so the persisted form stays a flat mapping with a
/// `type` discriminant, and reloading reconstructs the full variant rather
/// than untyped data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SportMetrics {
    Running {
        /// Steps per minute
        cadence: u32,
        /// Derived pace in min/km
        pace: f64,
    },
    Cycling {
        /// Total climb in meters
        elevation_gain: f64,
        /// Derived speed in km/h
        speed: f64,
    },
}

/// A single logged exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Location the session was logged at
    pub coords: LatLng,
    /// Distance in kilometers
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
    /// Display description, derived once at construction
    pub description: String,
    /// Times the entry was viewed this session; increments are never a
    /// reason to persist
    pub view_count: u32,
    /// Variant fields and derived metric
    #[serde(flatten)]
    pub metrics: SportMetrics,
}

/// Errors from derived-metric computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricError {
    /// Pace would divide by zero
    #[error("distance must be greater than zero")]
    ZeroDistance,

    /// Speed would divide by zero
    #[error("duration must be greater than zero")]
    ZeroDuration,
}

impl Workout {
    /// Create a running workout, computing its pace (min/km).
    pub fn running(
        coords: LatLng,
        distance: f64,
        duration: f64,
        cadence: u32,
    ) -> Result<Self, MetricError> {
        if distance <= 0.0 {
            return Err(MetricError::ZeroDistance);
        }

        let created_at = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            created_at,
            coords,
            distance,
            duration,
            description: describe(Sport::Running, created_at),
            view_count: 0,
            metrics: SportMetrics::Running {
                cadence,
                pace: duration / distance,
            },
        })
    }

    /// Create a cycling workout, computing its speed (km/h).
    pub fn cycling(
        coords: LatLng,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Result<Self, MetricError> {
        if duration <= 0.0 {
            return Err(MetricError::ZeroDuration);
        }

        let created_at = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            created_at,
            coords,
            distance,
            duration,
            description: describe(Sport::Cycling, created_at),
            view_count: 0,
            metrics: SportMetrics::Cycling {
                elevation_gain,
                speed: distance / (duration / 60.0),
            },
        })
    }

    /// The sport this workout belongs to.
    pub fn sport(&self) -> Sport {
        match self.metrics {
            SportMetrics::Running { .. } => Sport::Running,
            SportMetrics::Cycling { .. } => Sport::Cycling,
        }
    }

    /// Record one view of this entry. In-memory only.
    pub fn record_view(&mut self) {
        self.view_count += 1;
    }
}

/// Derive the display description from sport and creation date,
/// e.g. "Running on April 14".
pub fn describe(sport: Sport, date: DateTime<Utc>) -> String {
    format!(
        "{} on {} {}",
        sport.display_name(),
        date.format("%B"),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_pace() {
        let w = Workout::running(LatLng(46.0, 7.0), 5.0, 25.0, 180).unwrap();
        assert_eq!(w.sport(), Sport::Running);
        match w.metrics {
            SportMetrics::Running { pace, cadence } => {
                assert_eq!(pace, 5.0);
                assert_eq!(cadence, 180);
            }
            _ => panic!("expected running metrics"),
        }
    }

    #[test]
    fn test_cycling_speed() {
        let w = Workout::cycling(LatLng(46.0, 7.0), 20.0, 60.0, 400.0).unwrap();
        assert_eq!(w.sport(), Sport::Cycling);
        match w.metrics {
            SportMetrics::Cycling {
                speed,
                elevation_gain,
            } => {
                assert_eq!(speed, 20.0);
                assert_eq!(elevation_gain, 400.0);
            }
            _ => panic!("expected cycling metrics"),
        }
    }

    #[test]
    fn test_zero_distance_rejected() {
        let err = Workout::running(LatLng(0.0, 0.0), 0.0, 25.0, 180).unwrap_err();
        assert_eq!(err, MetricError::ZeroDistance);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = Workout::cycling(LatLng(0.0, 0.0), 20.0, 0.0, 400.0).unwrap_err();
        assert_eq!(err, MetricError::ZeroDuration);
    }

    #[test]
    fn test_describe_capitalizes_sport() {
        let date = DateTime::parse_from_rfc3339("2024-04-14T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(describe(Sport::Running, date), "Running on April 14");
        assert_eq!(describe(Sport::Cycling, date), "Cycling on April 14");
    }

    #[test]
    fn test_wire_format_is_flat_and_tagged() {
        let w = Workout::running(LatLng(46.5, 7.3), 5.0, 25.0, 180).unwrap();
        let value = serde_json::to_value(&w).unwrap();

        assert_eq!(value["type"], "running");
        assert_eq!(value["coords"], serde_json::json!([46.5, 7.3]));
        assert_eq!(value["distance"], 5.0);
        assert_eq!(value["duration"], 25.0);
        assert_eq!(value["cadence"], 180);
        assert_eq!(value["pace"], 5.0);
        assert_eq!(value["viewCount"], 0);
        assert!(value["description"]
            .as_str()
            .unwrap()
            .starts_with("Running on "));
    }

    #[test]
    fn test_round_trip_reconstructs_variant() {
        let w = Workout::cycling(LatLng(46.5, 7.3), 20.0, 60.0, 400.0).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let back: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
        assert_eq!(back.sport(), Sport::Cycling);
    }
}
