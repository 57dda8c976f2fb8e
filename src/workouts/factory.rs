//! Workout construction from raw form input.
//!
//! The factory owns the validation boundary between untyped user input and
//! the entity model: every numeric field must parse to a finite number
//! strictly greater than zero, with elevation gain as the single field that
//! may be zero. Construction never stores the result anywhere.

use thiserror::Error;

use super::types::{LatLng, MetricError, Sport, Workout};

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct WorkoutDraft {
    /// "running" or "cycling"
    pub sport: String,
    /// Distance in kilometers
    pub distance: String,
    /// Duration in minutes
    pub duration: String,
    /// Steps per minute (running only)
    pub cadence: String,
    /// Climb in meters (cycling only)
    pub elevation_gain: String,
}

impl WorkoutDraft {
    /// Draft for a running session.
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            sport: "running".to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation_gain: String::new(),
        }
    }

    /// Draft for a cycling session.
    pub fn cycling(distance: &str, duration: &str, elevation_gain: &str) -> Self {
        Self {
            sport: "cycling".to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation_gain: elevation_gain.to_string(),
        }
    }
}

/// Errors during draft validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Unrecognized sport discriminant
    #[error("unknown workout type: {0:?}")]
    UnknownSport(String),

    /// Field did not parse to a finite positive number
    #[error("invalid value for {field}: {value:?} (must be a positive number)")]
    NotPositive { field: &'static str, value: String },

    /// Field did not parse to a positive whole number
    #[error("invalid value for {field}: {value:?} (must be a positive whole number)")]
    NotPositiveInteger { field: &'static str, value: String },

    /// Field did not parse to a finite non-negative number
    #[error("invalid value for {field}: {value:?} (must be zero or more)")]
    Negative { field: &'static str, value: String },

    /// Derived-metric computation rejected the inputs
    #[error(transparent)]
    Metric(#[from] MetricError),
}

/// Validate a draft and construct the matching workout variant at the given
/// map coordinates. On failure no partial workout exists.
pub fn build_workout(draft: &WorkoutDraft, coords: LatLng) -> Result<Workout, ValidationError> {
    let sport = match draft.sport.trim() {
        "running" => Sport::Running,
        "cycling" => Sport::Cycling,
        other => return Err(ValidationError::UnknownSport(other.to_string())),
    };

    let distance = positive("distance", &draft.distance)?;
    let duration = positive("duration", &draft.duration)?;

    let workout = match sport {
        Sport::Running => {
            let cadence = positive_int("cadence", &draft.cadence)?;
            Workout::running(coords, distance, duration, cadence)?
        }
        Sport::Cycling => {
            let elevation_gain = non_negative("elevationGain", &draft.elevation_gain)?;
            Workout::cycling(coords, distance, duration, elevation_gain)?
        }
    };

    Ok(workout)
}

fn positive(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(ValidationError::NotPositive {
            field,
            value: raw.to_string(),
        }),
    }
}

// Cadence is steps per minute: a whole number, never zero. Rounding a
// fractional value here could manufacture a zero, so fractional input is
// rejected outright.
fn positive_int(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::NotPositiveInteger {
            field,
            value: raw.to_string(),
        }),
    }
}

fn non_negative(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(ValidationError::Negative {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::SportMetrics;

    const COORDS: LatLng = LatLng(46.5, 7.3);

    #[test]
    fn test_valid_running_draft() {
        let w = build_workout(&WorkoutDraft::running("5", "25", "180"), COORDS).unwrap();
        assert_eq!(w.distance, 5.0);
        assert_eq!(w.duration, 25.0);
        assert_eq!(w.coords, COORDS);
        assert!(matches!(
            w.metrics,
            SportMetrics::Running { cadence: 180, pace } if pace == 5.0
        ));
    }

    #[test]
    fn test_valid_cycling_draft() {
        let w = build_workout(&WorkoutDraft::cycling("20", "60", "400"), COORDS).unwrap();
        assert!(matches!(
            w.metrics,
            SportMetrics::Cycling { speed, .. } if speed == 20.0
        ));
    }

    #[test]
    fn test_zero_distance_rejected() {
        let err = build_workout(&WorkoutDraft::running("0", "25", "180"), COORDS).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotPositive {
                field: "distance",
                value: "0".to_string()
            }
        );
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = build_workout(&WorkoutDraft::cycling("20", "-5", "400"), COORDS).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositive { field: "duration", .. }
        ));
    }

    #[test]
    fn test_non_numeric_cadence_rejected() {
        let err = build_workout(&WorkoutDraft::running("5", "25", "fast"), COORDS).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositiveInteger { field: "cadence", .. }
        ));
    }

    #[test]
    fn test_zero_cadence_rejected() {
        let err = build_workout(&WorkoutDraft::running("5", "25", "0"), COORDS).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositiveInteger { field: "cadence", .. }
        ));
    }

    #[test]
    fn test_fractional_cadence_rejected() {
        // "0.4" would round down to a zero cadence; fractions are never valid.
        for raw in ["0.4", "180.5"] {
            let err = build_workout(&WorkoutDraft::running("5", "25", raw), COORDS).unwrap_err();
            assert_eq!(
                err,
                ValidationError::NotPositiveInteger {
                    field: "cadence",
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_zero_elevation_allowed() {
        // The one field where zero is a valid domain value (a flat ride).
        let w = build_workout(&WorkoutDraft::cycling("20", "60", "0"), COORDS).unwrap();
        assert!(matches!(
            w.metrics,
            SportMetrics::Cycling { elevation_gain, .. } if elevation_gain == 0.0
        ));
    }

    #[test]
    fn test_negative_elevation_rejected() {
        let err = build_workout(&WorkoutDraft::cycling("20", "60", "-10"), COORDS).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Negative { field: "elevationGain", .. }
        ));
    }

    #[test]
    fn test_infinite_input_rejected() {
        let err = build_workout(&WorkoutDraft::running("inf", "25", "180"), COORDS).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositive { field: "distance", .. }
        ));
    }

    #[test]
    fn test_unknown_sport_rejected() {
        let draft = WorkoutDraft {
            sport: "swimming".to_string(),
            ..WorkoutDraft::running("5", "25", "180")
        };
        let err = build_workout(&draft, COORDS).unwrap_err();
        assert_eq!(err, ValidationError::UnknownSport("swimming".to_string()));
    }
}
