//! XPath evaluator abstraction traits

use serde::Serialize;
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::tree::XmlTree;

/// Result of evaluating an XPath expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum XPathValue<N> {
    /// Node-set, in document order
    Nodes(Vec<N>),
    /// String value
    String(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Boolean(bool),
}

impl<N> XPathValue<N> {
    /// Convert the value into a node-set
    pub fn into_nodes(self) -> Result<Vec<N>> {
        match self {
            XPathValue::Nodes(nodes) => Ok(nodes),
            other => Err(Error::TypeConversion(format!(
                "expected a node-set, got {}",
                other.kind()
            ))),
        }
    }

    /// Check if the value is an empty node-set or an empty string
    pub fn is_empty(&self) -> bool {
        match self {
            XPathValue::Nodes(nodes) => nodes.is_empty(),
            XPathValue::String(s) => s.is_empty(),
            XPathValue::Number(_) | XPathValue::Boolean(_) => false,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            XPathValue::Nodes(_) => "node-set",
            XPathValue::String(_) => "string",
            XPathValue::Number(_) => "number",
            XPathValue::Boolean(_) => "boolean",
        }
    }
}

/// Target for namespace prefix bindings.
///
/// Kept separate from [`XPathEvaluator`] so registrars can work through a
/// trait object without knowing the engine's node type.
pub trait NamespaceBinder {
    /// Bind `prefix` to `uri`, replacing any earlier binding of `prefix`
    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()>;

    /// Look up the URI currently bound to `prefix`
    fn lookup_namespace(&self, prefix: &str) -> Option<&str>;
}

/// Ordered prefix → URI table with replace-on-rebind semantics.
///
/// Engines can embed it to implement [`NamespaceBinder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespaces {
    bindings: Vec<(String, String)>,
}

impl Namespaces {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a prefix, replacing an existing binding in place
    pub fn bind(&mut self, prefix: &str, uri: &str) {
        match self.bindings.iter_mut().find(|(p, _)| p == prefix) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(uri);
            }
            None => self.bindings.push((prefix.to_string(), uri.to_string())),
        }
    }

    /// Get the URI bound to a prefix
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// Iterate over the bindings in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Number of bound prefixes
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no prefix is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl NamespaceBinder for Namespaces {
    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
        if prefix.is_empty() {
            return Err(Error::Other("namespace prefix must not be empty".to_string()));
        }
        self.bind(prefix, uri);
        Ok(())
    }

    fn lookup_namespace(&self, prefix: &str) -> Option<&str> {
        self.get(prefix)
    }
}

/// Document-scoped XPath evaluator.
///
/// An evaluator is bound to one document and carries its own namespace
/// table. Expressions are evaluated against the document node unless a
/// context node is given.
pub trait XPathEvaluator: NamespaceBinder {
    /// Node handle type of the underlying tree
    type Node: Copy + Eq + Debug;

    /// The document this evaluator is bound to
    fn document(&self) -> Self::Node;

    /// Evaluate an expression
    fn evaluate(&self, xpath: &str, context: Option<Self::Node>)
        -> Result<XPathValue<Self::Node>>;

    /// Evaluate an expression that must produce a node-set
    fn query_nodes(&self, xpath: &str, context: Option<Self::Node>) -> Result<Vec<Self::Node>> {
        self.evaluate(xpath, context)?.into_nodes()
    }

    /// String value of the first item selected by `xpath`
    fn evaluate_string(&self, xpath: &str, context: Option<Self::Node>) -> Result<String> {
        match self.evaluate(&format!("string(({xpath})[1])"), context)? {
            XPathValue::String(s) => Ok(s),
            XPathValue::Number(n) => Ok(n.to_string()),
            XPathValue::Boolean(b) => Ok(b.to_string()),
            XPathValue::Nodes(_) => Err(Error::TypeConversion(
                "string() produced a node-set".to_string(),
            )),
        }
    }

    /// Check whether `xpath` selects at least one node
    fn exists(&self, xpath: &str, context: Option<Self::Node>) -> Result<bool> {
        Ok(!self.query_nodes(xpath, context)?.is_empty())
    }
}

/// Trait for engines that can hand out evaluators for their documents
pub trait XPathEngine: XmlTree {
    /// Evaluator type, borrowing the engine for its lifetime
    type Evaluator<'a>: XPathEvaluator<Node = Self::Node>
    where
        Self: 'a;

    /// Create a fresh evaluator with an empty namespace table
    fn new_evaluator(&self, document: Self::Node) -> Self::Evaluator<'_>;

    /// Get the XPath version supported by this engine
    fn xpath_version(&self) -> &'static str;
}
