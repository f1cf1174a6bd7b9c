//! Calendar folder list persisted as pretty-printed JSON.

use std::fs;
use std::path::Path;

use crate::error::EasResult;
use crate::folder::Folder;

/// Where the binary writes the calendar list.
pub const DEFAULT_OUTPUT_PATH: &str = "calendars.json";

/// Write `folders` to `path`, replacing any existing file.
///
/// The JSON goes to a sibling `.tmp` file first and is renamed into place.
pub fn save_folders(path: impl AsRef<Path>, folders: &[Folder]) -> EasResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(folders)?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), folders = folders.len(), "saved calendar list");

    Ok(())
}

pub fn load_folders(path: impl AsRef<Path>) -> EasResult<Vec<Folder>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let folders = serde_json::from_str(&contents)?;
    Ok(folders)
}
