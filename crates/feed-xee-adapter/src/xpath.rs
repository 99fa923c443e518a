//! XPathEvaluator implementation for xee

use feed_engine_traits::{
    error::{Error, Result},
    xpath::{NamespaceBinder, Namespaces, XPathEngine, XPathEvaluator, XPathValue},
};
use xee_xpath::{Atomic, Item, Sequence};
use xot::Node;

use crate::tree::XeeFeedTree;

/// Document-scoped evaluator over a [`XeeFeedTree`]
#[derive(Clone)]
pub struct XeeEvaluator<'a> {
    tree: &'a XeeFeedTree,
    document: Node,
    namespaces: Namespaces,
}

impl<'a> XeeEvaluator<'a> {
    /// Create an evaluator bound to `document`, with no namespaces
    pub fn new(tree: &'a XeeFeedTree, document: Node) -> Self {
        Self {
            tree,
            document,
            namespaces: Namespaces::new(),
        }
    }

    /// The namespace table expressions are compiled with
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }
}

impl std::fmt::Debug for XeeEvaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XeeEvaluator")
            .field("document", &self.document)
            .field("namespaces", &self.namespaces)
            .finish()
    }
}

impl NamespaceBinder for XeeEvaluator<'_> {
    fn register_namespace(&mut self, prefix: &str, uri: &str) -> Result<()> {
        tracing::trace!(prefix, uri, "binding namespace");
        self.namespaces.register_namespace(prefix, uri)
    }

    fn lookup_namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.lookup_namespace(prefix)
    }
}

impl XPathEvaluator for XeeEvaluator<'_> {
    type Node = Node;

    fn document(&self) -> Node {
        self.document
    }

    fn evaluate(&self, xpath: &str, context: Option<Node>) -> Result<XPathValue<Node>> {
        self.tree
            .run(xpath, &self.namespaces, context.unwrap_or(self.document))
    }
}

impl XPathEngine for XeeFeedTree {
    type Evaluator<'a> = XeeEvaluator<'a>;

    fn new_evaluator(&self, document: Node) -> XeeEvaluator<'_> {
        XeeEvaluator::new(self, document)
    }

    fn xpath_version(&self) -> &'static str {
        "3.1"
    }
}

/// Convert an xee result sequence into an [`XPathValue`].
///
/// Node sequences (including the empty sequence) become node-sets; a
/// single atomic keeps its type; several atomics are joined with spaces.
pub(crate) fn sequence_to_value(sequence: Sequence) -> Result<XPathValue<Node>> {
    let mut nodes = Vec::new();
    let mut atomics = Vec::new();

    for item in sequence.iter() {
        match item {
            Item::Node(node) => nodes.push(node),
            Item::Atomic(atomic) => atomics.push(convert_atomic(&atomic)),
            _ => {
                return Err(Error::TypeConversion(
                    "function items have no feed value".to_string(),
                ))
            }
        }
    }

    match (nodes.is_empty(), atomics.len()) {
        (_, 0) => Ok(XPathValue::Nodes(nodes)),
        (true, 1) => Ok(atomics.remove(0)),
        (true, _) => Ok(XPathValue::String(
            atomics
                .iter()
                .map(value_string)
                .collect::<Vec<_>>()
                .join(" "),
        )),
        (false, _) => Err(Error::TypeConversion(
            "sequence mixes nodes and atomic values".to_string(),
        )),
    }
}

fn convert_atomic(atomic: &Atomic) -> XPathValue<Node> {
    match atomic {
        Atomic::String(_, s) => XPathValue::String(s.to_string()),
        Atomic::Untyped(s) => XPathValue::String(s.to_string()),
        Atomic::Boolean(b) => XPathValue::Boolean(*b),
        Atomic::Integer(_, i) => match i.to_string().parse() {
            Ok(n) => XPathValue::Number(n),
            Err(_) => XPathValue::String(i.to_string()),
        },
        Atomic::Decimal(d) => match d.to_string().parse() {
            Ok(n) => XPathValue::Number(n),
            Err(_) => XPathValue::String(d.to_string()),
        },
        Atomic::Float(f) => XPathValue::Number(f.into_inner() as f64),
        Atomic::Double(d) => XPathValue::Number(d.into_inner()),
        other => XPathValue::String(format!("{:?}", other)),
    }
}

fn value_string(value: &XPathValue<Node>) -> String {
    match value {
        XPathValue::String(s) => s.clone(),
        XPathValue::Number(n) => n.to_string(),
        XPathValue::Boolean(b) => b.to_string(),
        XPathValue::Nodes(_) => String::new(),
    }
}
