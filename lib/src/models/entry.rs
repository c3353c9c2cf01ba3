use super::{LinkNode, Passthrough, Timestamp};
use serde::{Deserialize, Serialize};

/// Raw reading-list item as delivered by the reading-list source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syncing: Option<bool>,
    #[serde(flatten)]
    pub extra: Passthrough,
}

impl ReadingListEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            url: url.into(),
            read,
            ..Default::default()
        }
    }
}

impl From<ReadingListEntry> for LinkNode {
    /// Every field is carried over as-is; the title is never decorated here.
    fn from(entry: ReadingListEntry) -> Self {
        LinkNode {
            id: entry.id,
            title: entry.title,
            url: entry.url,
            parent_id: entry.parent_id,
            date_added: entry.date_added,
            read: Some(entry.read),
            index: entry.index,
            syncing: entry.syncing,
            extra: entry.extra,
        }
    }
}
