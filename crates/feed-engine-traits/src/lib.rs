//! Core trait abstractions for the XML engines behind feed entries.
//!
//! This crate defines the capability a feed-entry layer consumes: a
//! read-only XML tree, and document-scoped XPath evaluators with their
//! own namespace tables.

pub mod error;
pub mod tree;
pub mod xpath;

pub use error::{Error, Result};
pub use tree::{NodeType, XmlTree};
pub use xpath::{NamespaceBinder, Namespaces, XPathEngine, XPathEvaluator, XPathValue};
