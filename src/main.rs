//! easync - list Exchange ActiveSync calendar folders and create an event
//!
//! Reads `example-config.yaml` from the working directory, writes the calendar
//! folders to `calendars.json`, and creates a test event in the first one.

use anyhow::{Context, Result};
use easync::run::{self, Paths};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let paths = Paths::default();

    let outcome = run::run(&paths)
        .await
        .with_context(|| format!("easync failed (config: {})", paths.config.display()))?;

    println!(
        "Saved {} calendar folder(s) to {}",
        outcome.calendars.len(),
        paths.output.display()
    );

    match outcome.created_in {
        Some(server_id) => println!("Created event in calendar {}", server_id),
        None => println!("No calendar folder matched; no event created"),
    }

    Ok(())
}
