//! Minimal Exchange ActiveSync client.
//!
//! Lists the mailbox folders with a full FolderSync, saves the calendar folders to
//! JSON, and creates one event in the first calendar with the Sync command.

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod event;
pub mod folder;
pub mod run;
pub mod store;
pub mod wire;

pub use crate::client::EasClient;
pub use crate::config::Config;
pub use crate::error::{EasError, EasResult};
pub use crate::event::Event;
pub use crate::folder::Folder;
