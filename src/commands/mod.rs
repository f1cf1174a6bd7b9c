pub mod create_event;
pub mod list_folders;

pub use create_event::create_event;
pub use list_folders::{fetch_calendars, list_folders};
