//! Feed format tags

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Syndication format of a feed document.
///
/// The text form is the classic short tag (`rss-20`, `atom-10`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum FeedType {
    /// RSS 0.90, RDF based
    #[strum(serialize = "rss-090")]
    #[serde(rename = "rss-090")]
    Rss090,
    #[strum(serialize = "rss-091")]
    #[serde(rename = "rss-091")]
    Rss091,
    #[strum(serialize = "rss-092")]
    #[serde(rename = "rss-092")]
    Rss092,
    #[strum(serialize = "rss-093")]
    #[serde(rename = "rss-093")]
    Rss093,
    #[strum(serialize = "rss-094")]
    #[serde(rename = "rss-094")]
    Rss094,
    /// RSS 1.0, RDF based
    #[strum(serialize = "rss-10")]
    #[serde(rename = "rss-10")]
    Rss10,
    #[strum(serialize = "rss-20")]
    #[serde(rename = "rss-20")]
    Rss20,
    /// RSS with a missing or unrecognized version
    #[strum(serialize = "rss")]
    #[serde(rename = "rss")]
    Rss,
    #[strum(serialize = "atom-03")]
    #[serde(rename = "atom-03")]
    Atom03,
    #[strum(serialize = "atom-10")]
    #[serde(rename = "atom-10")]
    Atom10,
    /// Standalone Atom 1.0 entry document
    #[strum(serialize = "atom-10-entry")]
    #[serde(rename = "atom-10-entry")]
    Atom10Entry,
    /// Atom of unknown version
    #[strum(serialize = "atom")]
    #[serde(rename = "atom")]
    Atom,
    /// Unknown format
    #[strum(serialize = "any")]
    #[serde(rename = "any")]
    Any,
}

/// How entries of a format are spelled in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryVocabulary {
    /// `rss:item` inside an RDF container (RSS 1.0 and 0.90)
    RdfItem,
    /// `atom:entry` (Atom 1.0 and 0.3)
    AtomEntry,
    /// Unqualified `item` (RSS 0.9x, 2.0 and anything undetected)
    PlainItem,
}

impl FeedType {
    /// Parse a feed type tag such as `rss-20`
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse()
            .map_err(|_| Error::UnknownFeedType(tag.to_string()))
    }

    /// The short tag, e.g. `atom-10`
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Entry vocabulary the XPath prefix is derived from
    pub fn vocabulary(self) -> EntryVocabulary {
        match self {
            FeedType::Rss10 | FeedType::Rss090 => EntryVocabulary::RdfItem,
            FeedType::Atom10 | FeedType::Atom03 => EntryVocabulary::AtomEntry,
            _ => EntryVocabulary::PlainItem,
        }
    }

    /// Check if this is one of the RSS formats
    pub fn is_rss(self) -> bool {
        matches!(
            self,
            FeedType::Rss090
                | FeedType::Rss091
                | FeedType::Rss092
                | FeedType::Rss093
                | FeedType::Rss094
                | FeedType::Rss10
                | FeedType::Rss20
                | FeedType::Rss
        )
    }

    /// Check if this is one of the Atom formats
    pub fn is_atom(self) -> bool {
        matches!(
            self,
            FeedType::Atom03 | FeedType::Atom10 | FeedType::Atom10Entry | FeedType::Atom
        )
    }
}
