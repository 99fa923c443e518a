//! Namespace registration for entry evaluators
//!
//! The prefixes used by entry expressions (`rss:`, `atom:`, `dc:`, ...)
//! mean nothing to the XPath engine until they are bound. A
//! [`NamespaceRegistrar`] does that binding for one format or module.

use feed_engine_traits::{NamespaceBinder, Namespaces, Result};

use crate::feed_type::FeedType;

pub const NAMESPACE_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const NAMESPACE_RSS_090: &str = "http://my.netscape.com/rdf/simple/0.9/";
pub const NAMESPACE_RSS_10: &str = "http://purl.org/rss/1.0/";
pub const NAMESPACE_ATOM_03: &str = "http://purl.org/atom/ns#";
pub const NAMESPACE_ATOM_10: &str = "http://www.w3.org/2005/Atom";

pub const NAMESPACE_DC_10: &str = "http://purl.org/dc/elements/1.0/";
pub const NAMESPACE_DC_11: &str = "http://purl.org/dc/elements/1.1/";
pub const NAMESPACE_CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";
pub const NAMESPACE_SLASH: &str = "http://purl.org/rss/1.0/modules/slash/";
pub const NAMESPACE_WFW: &str = "http://wellformedweb.org/CommentAPI/";
pub const NAMESPACE_THREAD: &str = "http://purl.org/syndication/thread/1.0";

/// Binds the namespace prefixes a set of expressions depends on.
///
/// Implementations must be safe to run more than once against the same
/// binder; rebinding a prefix replaces it.
pub trait NamespaceRegistrar {
    /// Bind prefixes on `binder`
    fn register_namespaces(&self, binder: &mut dyn NamespaceBinder) -> Result<()>;
}

impl<F> NamespaceRegistrar for F
where
    F: Fn(&mut dyn NamespaceBinder) -> Result<()>,
{
    fn register_namespaces(&self, binder: &mut dyn NamespaceBinder) -> Result<()> {
        self(binder)
    }
}

impl NamespaceRegistrar for Namespaces {
    fn register_namespaces(&self, binder: &mut dyn NamespaceBinder) -> Result<()> {
        for (prefix, uri) in self.iter() {
            binder.register_namespace(prefix, uri)?;
        }
        Ok(())
    }
}

/// Prefixes the derived entry prefix of a format refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatNamespaces {
    feed_type: FeedType,
}

impl FormatNamespaces {
    pub fn new(feed_type: FeedType) -> Self {
        Self { feed_type }
    }

    pub fn feed_type(&self) -> FeedType {
        self.feed_type
    }
}

impl NamespaceRegistrar for FormatNamespaces {
    fn register_namespaces(&self, binder: &mut dyn NamespaceBinder) -> Result<()> {
        match self.feed_type {
            FeedType::Rss10 => {
                binder.register_namespace("rdf", NAMESPACE_RDF)?;
                binder.register_namespace("rss", NAMESPACE_RSS_10)
            }
            FeedType::Rss090 => {
                binder.register_namespace("rdf", NAMESPACE_RDF)?;
                binder.register_namespace("rss", NAMESPACE_RSS_090)
            }
            FeedType::Atom03 => binder.register_namespace("atom", NAMESPACE_ATOM_03),
            FeedType::Atom10 | FeedType::Atom10Entry | FeedType::Atom => {
                binder.register_namespace("atom", NAMESPACE_ATOM_10)
            }
            // Plain RSS items live in no namespace
            _ => Ok(()),
        }
    }
}

/// Common RSS modules: Dublin Core, content, slash, wfw and threading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleNamespaces;

impl NamespaceRegistrar for ModuleNamespaces {
    fn register_namespaces(&self, binder: &mut dyn NamespaceBinder) -> Result<()> {
        binder.register_namespace("dc", NAMESPACE_DC_11)?;
        binder.register_namespace("dc10", NAMESPACE_DC_10)?;
        binder.register_namespace("content", NAMESPACE_CONTENT)?;
        binder.register_namespace("slash", NAMESPACE_SLASH)?;
        binder.register_namespace("wfw", NAMESPACE_WFW)?;
        binder.register_namespace("thread", NAMESPACE_THREAD)
    }
}

/// Registrars run one after the other, in insertion order
#[derive(Default)]
pub struct Registrars {
    registrars: Vec<Box<dyn NamespaceRegistrar>>,
}

impl Registrars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registrar
    pub fn with(mut self, registrar: impl NamespaceRegistrar + 'static) -> Self {
        self.registrars.push(Box::new(registrar));
        self
    }

    pub fn len(&self) -> usize {
        self.registrars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrars.is_empty()
    }
}

impl NamespaceRegistrar for Registrars {
    fn register_namespaces(&self, binder: &mut dyn NamespaceBinder) -> Result<()> {
        for registrar in &self.registrars {
            registrar.register_namespaces(binder)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Registrars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registrars")
            .field("len", &self.registrars.len())
            .finish()
    }
}
