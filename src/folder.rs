use serde::{Deserialize, Serialize};

/// A mailbox folder as reported by FolderSync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(rename = "DisplayName")]
    pub display_name: String,
    #[serde(rename = "Type")]
    pub folder_type: String,
    #[serde(rename = "FolderID")]
    pub server_id: String,
}

impl Folder {
    pub fn new(
        display_name: impl Into<String>,
        folder_type: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Self {
        Folder {
            display_name: display_name.into(),
            folder_type: folder_type.into(),
            server_id: server_id.into(),
        }
    }
}

/// Keep only the folders whose type marker equals `folder_type`, in their original order.
pub fn filter_by_type(folders: Vec<Folder>, folder_type: &str) -> Vec<Folder> {
    folders
        .into_iter()
        .filter(|f| f.folder_type == folder_type)
        .collect()
}
