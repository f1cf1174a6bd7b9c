//! XML bodies for the FolderSync and Sync commands.
//!
//! Requests are written with quick-xml's serde serializer. Responses are read with
//! roxmltree and matched by local element name, so servers that put the body in an
//! EAS namespace (`xmlns="FolderHierarchy:"`) parse the same as bare documents.

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::error::{EasError, EasResult};
use crate::event::{Event, format_eas_datetime};
use crate::folder::Folder;

/// The only status code EAS uses for success.
pub const STATUS_SUCCESS: i64 = 1;

/// SyncKey that asks the server for a full resync.
pub const INITIAL_SYNC_KEY: &str = "0";

#[derive(Serialize)]
#[serde(rename = "FolderSync")]
struct FolderSyncRequest<'a> {
    #[serde(rename = "SyncKey")]
    sync_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename = "Calendar")]
struct CalendarItem<'a> {
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "Start")]
    start: DateTimeField,
    #[serde(rename = "End")]
    end: DateTimeField,
    #[serde(rename = "Body")]
    body: BodyField<'a>,
    #[serde(rename = "Location")]
    location: LocationField<'a>,
}

#[derive(Serialize)]
struct DateTimeField {
    #[serde(rename = "DT")]
    dt: String,
}

#[derive(Serialize)]
struct BodyField<'a> {
    #[serde(rename = "Content")]
    content: &'a str,
}

#[derive(Serialize)]
struct LocationField<'a> {
    #[serde(rename = "DisplayName")]
    display_name: &'a str,
}

/// Parsed FolderSync response.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderSyncResponse {
    pub status: i64,
    pub sync_key: String,
    pub folders: Vec<Folder>,
}

/// Parsed Sync response.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncResponse {
    pub status: i64,
    pub sync_key: Option<String>,
}

impl SyncResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

pub fn encode_folder_sync(sync_key: &str) -> EasResult<String> {
    quick_xml::se::to_string(&FolderSyncRequest { sync_key })
        .map_err(|e| EasError::Serialization(e.to_string()))
}

pub fn encode_event(event: &Event) -> EasResult<String> {
    let item = CalendarItem {
        subject: &event.subject,
        start: DateTimeField {
            dt: format_eas_datetime(&event.start),
        },
        end: DateTimeField {
            dt: format_eas_datetime(&event.end),
        },
        body: BodyField {
            content: &event.description,
        },
        location: LocationField {
            display_name: &event.location,
        },
    };

    quick_xml::se::to_string(&item).map_err(|e| EasError::Serialization(e.to_string()))
}

pub fn decode_folder_sync(body: &[u8]) -> EasResult<FolderSyncResponse> {
    let text = as_text(body)?;
    let doc = Document::parse(text)?;
    let root = expect_root(&doc, "FolderSync")?;

    let status = parse_status(root)?;
    let sync_key = child_text(root, "SyncKey").unwrap_or_default();

    let folders = root
        .children()
        .filter(|n| is_element(n, "Folders"))
        .flat_map(|folders| folders.children().filter(|n| is_element(n, "Folder")))
        .map(|folder| {
            Folder::new(
                child_text(folder, "DisplayName").unwrap_or_default(),
                child_text(folder, "Type").unwrap_or_default(),
                child_text(folder, "ServerId").unwrap_or_default(),
            )
        })
        .collect();

    Ok(FolderSyncResponse {
        status,
        sync_key,
        folders,
    })
}

pub fn decode_sync(body: &[u8]) -> EasResult<SyncResponse> {
    let text = as_text(body)?;
    let doc = Document::parse(text)?;
    let root = expect_root(&doc, "Sync")?;

    Ok(SyncResponse {
        status: parse_status(root)?,
        sync_key: child_text(root, "SyncKey"),
    })
}

fn as_text(body: &[u8]) -> EasResult<&str> {
    std::str::from_utf8(body).map_err(|e| EasError::Parse(format!("body is not UTF-8: {e}")))
}

fn expect_root<'a, 'input>(doc: &'a Document<'input>, name: &str) -> EasResult<Node<'a, 'input>> {
    let root = doc.root_element();
    if root.tag_name().name() != name {
        return Err(EasError::Parse(format!(
            "expected <{}> root element, found <{}>",
            name,
            root.tag_name().name()
        )));
    }
    Ok(root)
}

fn parse_status(node: Node) -> EasResult<i64> {
    let raw = child_text(node, "Status")
        .ok_or_else(|| EasError::Parse("missing <Status> element".into()))?;

    raw.trim()
        .parse()
        .map_err(|_| EasError::Parse(format!("invalid status {:?}", raw)))
}

fn is_element(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Text of the first direct child named `name`. An empty element yields `Some("")`.
fn child_text(node: Node, name: &str) -> Option<String> {
    node.children()
        .find(|n| is_element(n, name))
        .map(|n| n.text().unwrap_or_default().to_string())
}
