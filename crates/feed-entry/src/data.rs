//! Serializable entry record

use serde::{Deserialize, Serialize};

use crate::feed_type::FeedType;

/// Fields collected for one entry.
///
/// The format is always present; the remaining fields are filled in by
/// extensions that read them from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryData {
    #[serde(rename = "type")]
    pub feed_type: FeedType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl EntryData {
    pub fn new(feed_type: FeedType) -> Self {
        Self {
            feed_type,
            id: None,
            title: None,
            description: None,
            content: None,
            link: None,
            author: None,
        }
    }
}
