//! Trailmark - Map-Based Exercise Log
//!
//! Interactive entry point: wires the session controller to a file-backed
//! key-value store and the terminal frontend, then drives it from a command
//! loop standing in for map clicks and form submissions.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use trailmark::session::collaborators::StaticLocator;
use trailmark::storage::config;
use trailmark::storage::kv::FileKv;
use trailmark::storage::persistence::PersistenceAdapter;
use trailmark::ui::list_view::{workout_lines, TerminalMap, TerminalRenderer};
use trailmark::workouts::factory::WorkoutDraft;
use trailmark::{LatLng, SessionController};

type Controller = SessionController<FileKv, TerminalRenderer, TerminalMap, StaticLocator>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trailmark v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().context("failed to load configuration")?;

    // First run: write the defaults so they are visible and editable.
    if !config::get_config_path().exists() {
        if let Err(e) = config::save_config(&config) {
            tracing::warn!(error = %e, "Failed to write default configuration");
        }
    }

    let persistence = PersistenceAdapter::new(FileKv::open(config.storage_path()));

    let mut controller = SessionController::new(
        persistence,
        TerminalRenderer,
        TerminalMap,
        // No positioning hardware on a terminal; the configured fallback
        // center is used.
        StaticLocator(None),
        config.map.clone(),
    );

    controller.start();
    println!("Pick a location first: at <lat> <lng>   (help for commands)");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let args: Vec<&str> = line.split_whitespace().collect();
        match args.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["at", lat, lng] => match (lat.parse::<f64>(), lng.parse::<f64>()) {
                (Ok(lat), Ok(lng)) => controller.map_click(LatLng(lat, lng)),
                _ => println!("! coordinates must be numbers"),
            },
            ["run", distance, duration, cadence] => {
                submit(&mut controller, WorkoutDraft::running(distance, duration, cadence));
            }
            ["ride", distance, duration, climb] => {
                submit(&mut controller, WorkoutDraft::cycling(distance, duration, climb));
            }
            ["list"] => {
                for workout in controller.store().iter() {
                    for line in workout_lines(workout) {
                        println!("{line}");
                    }
                }
            }
            ["view", prefix] => match resolve_id(&controller, prefix) {
                Some(id) => {
                    if let Err(e) = controller.view(id) {
                        println!("! {e}");
                    }
                }
                None => println!("! no workout matches {prefix:?}"),
            },
            ["delete", prefix] => match resolve_id(&controller, prefix) {
                Some(id) => {
                    if let Err(e) = controller.delete(id) {
                        println!("! {e}");
                    }
                }
                None => println!("! no workout matches {prefix:?}"),
            },
            ["reset"] => controller.reset(),
            _ => println!("! unknown command (help for commands)"),
        }
    }

    Ok(())
}

fn submit(controller: &mut Controller, draft: WorkoutDraft) {
    // Validation notices already reach the renderer; only the missing-form
    // case needs a hint here.
    if let Err(trailmark::session::controller::SessionError::NoFormOpen) =
        controller.submit(&draft)
    {
        println!("! pick a location first: at <lat> <lng>");
    }
}

fn resolve_id(controller: &Controller, prefix: &str) -> Option<Uuid> {
    controller
        .store()
        .iter()
        .map(|w| w.id)
        .find(|id| id.to_string().starts_with(prefix))
}

fn print_help() {
    println!("  at <lat> <lng>            pick a map location");
    println!("  run <km> <min> <spm>      log a running session there");
    println!("  ride <km> <min> <climb>   log a cycling session there");
    println!("  list                      show the workout log");
    println!("  view <id-prefix>          center the map on a workout");
    println!("  delete <id-prefix>        delete a workout");
    println!("  reset                     clear the log and stored data");
    println!("  quit                      exit");
}
