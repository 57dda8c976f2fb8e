//! Terminal rendering of the workout list.
//!
//! `workout_lines` is the pure render function: one workout in, its display
//! lines out. The terminal sinks below print those lines and narrate marker
//! and pan requests; a real map frontend would implement the same traits.

use uuid::Uuid;

use crate::session::collaborators::{MapSink, RenderSink};
use crate::workouts::types::{LatLng, Sport, SportMetrics, Workout};

/// Render a workout as display lines for the list view.
pub fn workout_lines(workout: &Workout) -> Vec<String> {
    let icon = match workout.sport() {
        Sport::Running => "🏃",
        Sport::Cycling => "🚴",
    };

    let mut lines = vec![
        format!("{} {}  [{}]", icon, workout.description, workout.id),
        format!(
            "   {:.1} km · {:.0} min · at {}",
            workout.distance, workout.duration, workout.coords
        ),
    ];

    match workout.metrics {
        SportMetrics::Running { cadence, pace } => {
            lines.push(format!("   ⚡ {pace:.1} min/km · 🦶 {cadence} spm"));
        }
        SportMetrics::Cycling {
            elevation_gain,
            speed,
        } => {
            lines.push(format!("   ⚡ {speed:.1} km/h · ⛰ {elevation_gain:.0} m"));
        }
    }

    lines
}

/// Render sink that prints list entries to stdout.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl RenderSink for TerminalRenderer {
    fn render_workout(&mut self, workout: &Workout) {
        for line in workout_lines(workout) {
            println!("{line}");
        }
    }

    fn remove_workout(&mut self, id: Uuid) {
        println!("(removed workout {id})");
    }

    fn clear(&mut self) {
        println!("(workout list cleared)");
    }

    fn show_form(&mut self) {
        println!("Log a workout: run <km> <min> <spm>  |  ride <km> <min> <climb m>");
    }

    fn hide_form(&mut self) {}

    fn notify(&mut self, message: &str) {
        println!("! {message}");
    }
}

/// Map sink that narrates marker and pan requests.
#[derive(Debug, Default)]
pub struct TerminalMap;

impl MapSink for TerminalMap {
    fn place_marker(&mut self, coords: LatLng, label: &str) {
        println!("📍 {label} at {coords}");
    }

    fn recenter(&mut self, coords: LatLng, zoom: u8) {
        println!("(map centered on {coords}, zoom {zoom})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_lines_show_pace_and_cadence() {
        let w = Workout::running(LatLng(46.5, 7.3), 5.0, 25.0, 180).unwrap();
        let lines = workout_lines(&w);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(&w.description));
        assert!(lines[0].contains(&w.id.to_string()));
        assert!(lines[1].contains("5.0 km"));
        assert!(lines[1].contains("25 min"));
        assert!(lines[2].contains("5.0 min/km"));
        assert!(lines[2].contains("180 spm"));
    }

    #[test]
    fn test_cycling_lines_show_speed_and_climb() {
        let w = Workout::cycling(LatLng(46.5, 7.3), 20.0, 60.0, 400.0).unwrap();
        let lines = workout_lines(&w);

        assert!(lines[2].contains("20.0 km/h"));
        assert!(lines[2].contains("400 m"));
    }
}
