//! Create a calendar event with the Sync command.

use crate::client::{Command, EasClient};
use crate::error::{EasError, EasResult};
use crate::event::Event;
use crate::folder::Folder;
use crate::wire;

/// Submit `event` for `calendar`. Anything but status 1 is a failure.
///
/// There is no client id in the request, so calling this twice creates two events.
pub async fn create_event(client: &EasClient, calendar: &Folder, event: &Event) -> EasResult<()> {
    tracing::info!(
        calendar = %calendar.display_name,
        server_id = %calendar.server_id,
        subject = %event.subject,
        "creating event"
    );

    let body = wire::encode_event(event)?;
    let response = client.post(Command::Sync, body).await?;
    let sync = wire::decode_sync(&response)?;

    if !sync.is_success() {
        return Err(EasError::CreationFailed {
            status: sync.status,
        });
    }

    tracing::info!(server_id = %calendar.server_id, "event created");

    Ok(())
}
