//! Enumerate mailbox folders with a full FolderSync.

use crate::client::{Command, EasClient};
use crate::error::EasResult;
use crate::folder::{Folder, filter_by_type};
use crate::wire::{self, FolderSyncResponse, INITIAL_SYNC_KEY, STATUS_SUCCESS};

/// Issue one FolderSync with SyncKey 0 and return everything the server reported.
pub async fn list_folders(client: &EasClient) -> EasResult<FolderSyncResponse> {
    let body = wire::encode_folder_sync(INITIAL_SYNC_KEY)?;
    let response = client.post(Command::FolderSync, body).await?;
    let folder_sync = wire::decode_folder_sync(&response)?;

    if folder_sync.status != STATUS_SUCCESS {
        tracing::warn!(status = folder_sync.status, "FolderSync returned a non-success status");
    }

    tracing::info!(
        folders = folder_sync.folders.len(),
        sync_key = %folder_sync.sync_key,
        "listed folders"
    );

    Ok(folder_sync)
}

/// List folders and keep the ones whose type marker is `folder_type`.
pub async fn fetch_calendars(client: &EasClient, folder_type: &str) -> EasResult<Vec<Folder>> {
    let folder_sync = list_folders(client).await?;
    let calendars = filter_by_type(folder_sync.folders, folder_type);

    tracing::info!(calendars = calendars.len(), folder_type, "filtered calendar folders");

    Ok(calendars)
}
