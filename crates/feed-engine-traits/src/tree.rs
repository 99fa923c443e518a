//! XML tree abstraction trait

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node
    Element,
    /// Attribute node
    Attribute,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Processing instruction node
    ProcessingInstruction,
    /// Namespace node
    Namespace,
}

/// Read-only view over the parsed documents of an engine.
///
/// Documents are addressed through their document node, so a single
/// `Node` handle type covers both. Handles are cheap copies that stay
/// valid for as long as the tree that produced them is borrowed.
pub trait XmlTree {
    /// Type representing a node handle in this tree
    type Node: Copy + Eq + Debug;

    /// The document node owning `node`.
    ///
    /// Returns `None` for nodes that are not attached to a document.
    fn owner_document(&self, node: Self::Node) -> Option<Self::Node>;

    /// Get the document element (root element) of a document
    fn document_element(&self, document: Self::Node) -> Option<Self::Node>;

    /// Get the type of a node
    fn node_type(&self, node: Self::Node) -> NodeType;

    /// Get the local name of a node (without namespace prefix)
    fn local_name(&self, node: Self::Node) -> Option<String>;

    /// Get the namespace URI of a node
    fn namespace_uri(&self, node: Self::Node) -> Option<String>;

    /// Character encoding named in the document's XML declaration.
    ///
    /// No default is assumed: an undeclared encoding is `None`.
    fn encoding(&self, document: Self::Node) -> Option<String>;

    /// Check if a node is an element
    fn is_element(&self, node: Self::Node) -> bool {
        self.node_type(node) == NodeType::Element
    }
}
