//! Feed type detection
//!
//! Detection runs a fixed sequence of XPath probes against the document:
//! plain RSS first, then the RDF flavours, then Atom 1.0 and Atom 0.3.

use feed_engine_traits::{NamespaceBinder, XPathEngine, XPathEvaluator};

use crate::error::{Error, Result};
use crate::feed_type::FeedType;
use crate::namespaces::{
    NAMESPACE_ATOM_03, NAMESPACE_ATOM_10, NAMESPACE_RDF, NAMESPACE_RSS_090, NAMESPACE_RSS_10,
};

/// Children that mark an `rdf:RDF` document as an RSS channel
const RDF_CHANNEL_PROBE: &str =
    "/rdf:RDF/rss:channel | /rdf:RDF/rss:image | /rdf:RDF/rss:item | /rdf:RDF/rss:textinput";

/// Decides which syndication format a parsed document uses
pub trait FeedTypeDetector {
    /// Detect the format of `document`.
    ///
    /// With `entry_level` set, a standalone Atom entry document reports
    /// [`FeedType::Atom10`] rather than [`FeedType::Atom10Entry`], since
    /// its entries are addressed exactly like those of a full feed.
    fn detect<T: XPathEngine>(
        &self,
        engine: &T,
        document: T::Node,
        entry_level: bool,
    ) -> Result<FeedType>;
}

/// Detector probing the document with XPath
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XPathDetector;

impl FeedTypeDetector for XPathDetector {
    fn detect<T: XPathEngine>(
        &self,
        engine: &T,
        document: T::Node,
        entry_level: bool,
    ) -> Result<FeedType> {
        let feed_type = probe(engine, document, entry_level)?;
        tracing::debug!(%feed_type, entry_level, "detected feed type");
        Ok(feed_type)
    }
}

fn probe<T: XPathEngine>(engine: &T, document: T::Node, entry_level: bool) -> Result<FeedType> {
    let mut xpath = engine.new_evaluator(document);

    if xpath.exists("/rss", None)? {
        let version = xpath.evaluate_string("/rss/@version", None)?;
        return Ok(match version.as_str() {
            "2.0" => FeedType::Rss20,
            "0.94" => FeedType::Rss094,
            "0.93" => FeedType::Rss093,
            "0.92" => FeedType::Rss092,
            "0.91" => FeedType::Rss091,
            _ => FeedType::Rss,
        });
    }

    xpath.register_namespace("rdf", NAMESPACE_RDF)?;

    if xpath.exists("/rdf:RDF", None)? {
        xpath.register_namespace("rss", NAMESPACE_RSS_10)?;
        if xpath.exists(RDF_CHANNEL_PROBE, None)? {
            return Ok(FeedType::Rss10);
        }

        xpath.register_namespace("rss", NAMESPACE_RSS_090)?;
        if xpath.exists(RDF_CHANNEL_PROBE, None)? {
            return Ok(FeedType::Rss090);
        }
    }

    xpath.register_namespace("atom", NAMESPACE_ATOM_10)?;

    if xpath.exists("//atom:feed", None)? {
        return Ok(FeedType::Atom10);
    }

    if xpath.exists("//atom:entry", None)? {
        return Ok(if entry_level {
            FeedType::Atom10
        } else {
            FeedType::Atom10Entry
        });
    }

    xpath.register_namespace("atom", NAMESPACE_ATOM_03)?;

    if xpath.exists("//atom:feed", None)? {
        return Ok(FeedType::Atom03);
    }

    let root = engine
        .document_element(document)
        .and_then(|el| engine.local_name(el))
        .unwrap_or_default();
    Err(Error::FormatDetection(format!(
        "<{}> is neither an RSS nor an Atom document",
        root
    )))
}
