//! The full client run: config, folders, calendar list, one event.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::client::EasClient;
use crate::commands::{create_event, fetch_calendars};
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::error::EasResult;
use crate::event::Event;
use crate::folder::Folder;
use crate::store::{self, DEFAULT_OUTPUT_PATH};

/// Input and output files for a run.
#[derive(Debug, Clone)]
pub struct Paths {
    pub config: PathBuf,
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Calendar folders written to the output file
    pub calendars: Vec<Folder>,
    /// Server id of the calendar the event was created in, if any matched
    pub created_in: Option<String>,
}

/// Load the config at `paths.config`, then run against the configured server.
pub async fn run(paths: &Paths) -> EasResult<Outcome> {
    let config = Config::load(&paths.config)?;
    let client = EasClient::new(config)?;
    run_with_client(&client, &paths.output).await
}

/// Each step runs only if the previous one succeeded; the first error is returned.
pub async fn run_with_client(client: &EasClient, output: &Path) -> EasResult<Outcome> {
    let folder_type = &client.config().calendar_folder_type;

    let calendars = fetch_calendars(client, folder_type).await?;
    store::save_folders(output, &calendars)?;

    let event = Event::sample(Utc::now());

    let created_in = match calendars.first() {
        Some(calendar) => {
            create_event(client, calendar, &event).await?;
            Some(calendar.server_id.clone())
        }
        None => {
            tracing::info!(folder_type = %folder_type, "no calendar folder matched, skipping event creation");
            None
        }
    };

    Ok(Outcome {
        calendars,
        created_in,
    })
}
