//! Entry context: one feed entry, addressed by XPath
//!
//! An [`EntryContext`] binds an entry node to its position in the feed and
//! the feed's format. From those it derives an XPath prefix selecting the
//! entry from the document root, so field extractors can write
//! `<prefix>/atom:title` style expressions without caring which format
//! they are reading.
//!
//! The evaluator is created lazily. The first request creates it for the
//! owning document and runs the namespace registrar once; later requests
//! return the cached evaluator. Installing an evaluator by hand re-runs
//! the registrar against it.

use std::fmt;

use feed_engine_traits::{XPathEngine, XPathEvaluator, XPathValue};

use crate::data::EntryData;
use crate::detect::{FeedTypeDetector, XPathDetector};
use crate::error::{Error, Result};
use crate::feed_type::FeedType;
use crate::namespaces::{FormatNamespaces, NamespaceRegistrar};
use crate::prefix;

/// A feed entry together with the XPath machinery to query it
pub struct EntryContext<'d, T: XPathEngine + 'd> {
    engine: &'d T,
    entry: T::Node,
    document: T::Node,
    entry_key: usize,
    data: EntryData,
    xpath_prefix: String,
    registrar: Box<dyn NamespaceRegistrar + 'd>,
    evaluator: Option<T::Evaluator<'d>>,
    namespaces_bound: bool,
}

impl<'d, T: XPathEngine> EntryContext<'d, T> {
    /// Create a context for `entry`, the `entry_key`-th entry of its feed.
    ///
    /// Without an explicit `feed_type` the owning document is run through
    /// [`XPathDetector`].
    pub fn new(
        engine: &'d T,
        entry: T::Node,
        entry_key: usize,
        feed_type: Option<FeedType>,
    ) -> Result<Self> {
        Self::with_detector(engine, entry, entry_key, feed_type, &XPathDetector)
    }

    /// Like [`EntryContext::new`], detecting the format with `detector`
    pub fn with_detector<D: FeedTypeDetector>(
        engine: &'d T,
        entry: T::Node,
        entry_key: usize,
        feed_type: Option<FeedType>,
        detector: &D,
    ) -> Result<Self> {
        let document = engine
            .owner_document(entry)
            .ok_or_else(|| Error::invalid_input("entry node has no owning document"))?;

        if !engine.is_element(entry) {
            return Err(Error::invalid_input(format!(
                "entry node must be an element, got {:?}",
                engine.node_type(entry)
            )));
        }

        let feed_type = match feed_type {
            Some(feed_type) => feed_type,
            None => detector.detect(engine, document, true)?,
        };
        let xpath_prefix = prefix::xpath_prefix(feed_type, entry_key);
        tracing::trace!(entry_key, %feed_type, prefix = %xpath_prefix, "entry context created");

        Ok(Self {
            engine,
            entry,
            document,
            entry_key,
            data: EntryData::new(feed_type),
            xpath_prefix,
            registrar: Box::new(FormatNamespaces::new(feed_type)),
            evaluator: None,
            namespaces_bound: false,
        })
    }

    /// Replace the namespace registrar.
    ///
    /// Extensions that query more vocabularies than the format's own use
    /// this to bind their prefixes. The new registrar runs on the next
    /// evaluator access.
    pub fn with_registrar(mut self, registrar: impl NamespaceRegistrar + 'd) -> Self {
        self.registrar = Box::new(registrar);
        self.namespaces_bound = false;
        self
    }

    // ==================== Accessors ====================

    /// The engine owning the document
    pub fn engine(&self) -> &'d T {
        self.engine
    }

    /// The entry node
    pub fn entry(&self) -> T::Node {
        self.entry
    }

    /// The document node the entry belongs to
    pub fn owner_document(&self) -> T::Node {
        self.document
    }

    /// Position of the entry in its feed, 0-based
    pub fn entry_key(&self) -> usize {
        self.entry_key
    }

    /// Encoding declared by the document, if any
    pub fn encoding(&self) -> Option<String> {
        self.engine.encoding(self.document)
    }

    pub fn feed_type(&self) -> FeedType {
        self.data.feed_type
    }

    pub fn xpath_prefix(&self) -> &str {
        &self.xpath_prefix
    }

    /// Replace the XPath prefix. The expression is not checked.
    pub fn set_xpath_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.xpath_prefix = prefix.into();
        self
    }

    /// Copy of the collected entry fields
    pub fn to_data(&self) -> EntryData {
        self.data.clone()
    }

    /// Entry fields, for extensions to fill in
    pub fn data_mut(&mut self) -> &mut EntryData {
        &mut self.data
    }

    // ==================== Evaluator ====================

    /// The evaluator for the owning document, with namespaces bound.
    ///
    /// Created on first use; the registrar runs once per evaluator.
    pub fn xpath_evaluator(&mut self) -> Result<&T::Evaluator<'d>> {
        let evaluator = match self.evaluator.take() {
            Some(evaluator) => evaluator,
            None => {
                tracing::debug!(entry_key = self.entry_key, "creating XPath evaluator");
                self.namespaces_bound = false;
                self.engine.new_evaluator(self.document)
            }
        };
        let evaluator = self.evaluator.insert(evaluator);

        if !self.namespaces_bound {
            self.registrar.register_namespaces(evaluator)?;
            self.namespaces_bound = true;
        }

        Ok(&*evaluator)
    }

    /// Install `evaluator` and bind namespaces on it right away
    pub fn set_xpath_evaluator(&mut self, evaluator: T::Evaluator<'d>) -> Result<&mut Self> {
        let evaluator = self.evaluator.insert(evaluator);
        self.namespaces_bound = false;
        tracing::debug!(entry_key = self.entry_key, "evaluator replaced, rebinding namespaces");

        self.registrar.register_namespaces(evaluator)?;
        self.namespaces_bound = true;
        Ok(self)
    }

    /// Check whether an evaluator has been created or installed
    pub fn has_evaluator(&self) -> bool {
        self.evaluator.is_some()
    }

    // ==================== Queries ====================

    /// Evaluate `relative` appended to the entry prefix
    pub fn query(&mut self, relative: &str) -> Result<XPathValue<T::Node>> {
        let expression = format!("{}{}", self.xpath_prefix, relative);
        Ok(self.xpath_evaluator()?.evaluate(&expression, None)?)
    }

    /// Nodes selected by `relative` under the entry prefix
    pub fn query_nodes(&mut self, relative: &str) -> Result<Vec<T::Node>> {
        let expression = format!("{}{}", self.xpath_prefix, relative);
        Ok(self.xpath_evaluator()?.query_nodes(&expression, None)?)
    }

    /// String value of the first node selected by `relative`
    pub fn query_string(&mut self, relative: &str) -> Result<String> {
        let expression = format!("{}{}", self.xpath_prefix, relative);
        Ok(self.xpath_evaluator()?.evaluate_string(&expression, None)?)
    }
}

impl<T: XPathEngine> fmt::Debug for EntryContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryContext")
            .field("entry", &self.entry)
            .field("entry_key", &self.entry_key)
            .field("feed_type", &self.data.feed_type)
            .field("xpath_prefix", &self.xpath_prefix)
            .field("has_evaluator", &self.evaluator.is_some())
            .field("namespaces_bound", &self.namespaces_bound)
            .finish()
    }
}
