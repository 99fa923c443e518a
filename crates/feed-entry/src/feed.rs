//! Entry enumeration for a whole feed document

use feed_engine_traits::{XPathEngine, XPathEvaluator};

use crate::detect::{FeedTypeDetector, XPathDetector};
use crate::entry::EntryContext;
use crate::error::Result;
use crate::feed_type::FeedType;
use crate::namespaces::{FormatNamespaces, NamespaceRegistrar};
use crate::prefix;

/// One [`EntryContext`] per entry of `document`, keyed in document order.
///
/// The format is detected when `feed_type` is `None`.
pub fn entries<T: XPathEngine>(
    engine: &T,
    document: T::Node,
    feed_type: Option<FeedType>,
) -> Result<Vec<EntryContext<'_, T>>> {
    let feed_type = match feed_type {
        Some(feed_type) => feed_type,
        None => XPathDetector.detect(engine, document, true)?,
    };

    let mut xpath = engine.new_evaluator(document);
    FormatNamespaces::new(feed_type).register_namespaces(&mut xpath)?;
    let nodes = xpath.query_nodes(prefix::entry_selector(feed_type), None)?;
    tracing::debug!(count = nodes.len(), %feed_type, "enumerated feed entries");

    nodes
        .into_iter()
        .enumerate()
        .map(|(entry_key, node)| EntryContext::new(engine, node, entry_key, Some(feed_type)))
        .collect()
}
