//! XmlTree implementation over xee's document store

use std::cell::RefCell;

use feed_engine_traits::{
    error::{Error, Result},
    tree::{NodeType, XmlTree},
    xpath::{Namespaces, XPathValue},
};
use xee_xpath::{Documents, Queries, Query};
use xot::Node;

use crate::declaration::{self, Declaration};
use crate::xpath::sequence_to_value;

/// Parsed feed documents, backed by xee's `Documents`.
///
/// Evaluation in xee needs mutable access to the store, while entry
/// contexts share the tree by reference, so the store sits in a
/// `RefCell`. The tree is therefore not `Sync`.
pub struct XeeFeedTree {
    pub(crate) documents: RefCell<Documents>,
    declarations: Vec<(Node, Option<Declaration>)>,
}

impl XeeFeedTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            documents: RefCell::new(Documents::new()),
            declarations: Vec::new(),
        }
    }

    /// Parse a feed document and return its document node
    pub fn parse(&mut self, xml: &str) -> Result<Node> {
        let declaration = declaration::sniff(xml);
        let documents = self.documents.get_mut();

        let handle = documents
            .add_string_without_uri(xml)
            .map_err(|e| Error::XmlParse(format!("{:?}", e)))?;

        let queries = Queries::default();
        let root_query = queries
            .sequence("/")
            .map_err(|e| Error::xpath_compile(format!("{:?}", e)))?;
        let sequence = root_query
            .execute(documents, handle)
            .map_err(|e| Error::xpath_eval(format!("{:?}", e)))?;

        let root = match sequence.iter().next() {
            Some(xee_xpath::Item::Node(node)) => node,
            _ => return Err(Error::node_access("parsed document has no document node")),
        };

        tracing::debug!(
            encoding = ?declaration.as_ref().and_then(|d| d.encoding.as_deref()),
            "parsed feed document"
        );
        self.declarations.push((root, declaration));
        Ok(root)
    }

    /// Parse a feed document from a file
    pub fn parse_file(&mut self, path: &std::path::Path) -> Result<Node> {
        let content = std::fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// The XML declaration of a document parsed by this tree
    pub fn declaration(&self, document: Node) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|(root, _)| *root == document)
            .and_then(|(_, decl)| decl.as_ref())
    }

    /// Number of documents parsed so far
    pub fn document_count(&self) -> usize {
        self.declarations.len()
    }

    /// Run an expression against `context` with the given namespace bindings
    pub(crate) fn run(
        &self,
        xpath: &str,
        namespaces: &Namespaces,
        context: Node,
    ) -> Result<XPathValue<Node>> {
        let mut static_context_builder = xee_xpath::context::StaticContextBuilder::default();
        static_context_builder.namespaces(namespaces.iter());
        let queries = Queries::new(static_context_builder);

        let query = queries
            .sequence(xpath)
            .map_err(|e| Error::xpath_compile(format!("{}: {:?}", xpath, e)))?;

        let mut documents = self
            .documents
            .try_borrow_mut()
            .map_err(|_| Error::Other("document store is already in use".to_string()))?;

        let sequence = query
            .execute(&mut documents, context)
            .map_err(|e| Error::xpath_eval(format!("{}: {:?}", xpath, e)))?;

        sequence_to_value(sequence)
    }

    fn first_node(&self, xpath: &str, context: Node) -> Option<Node> {
        self.run(xpath, &Namespaces::new(), context)
            .and_then(XPathValue::into_nodes)
            .ok()
            .and_then(|nodes| nodes.into_iter().next())
    }

    fn string_of(&self, xpath: &str, context: Node) -> Option<String> {
        match self.run(xpath, &Namespaces::new(), context) {
            Ok(XPathValue::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl Default for XeeFeedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlTree for XeeFeedTree {
    type Node = Node;

    fn owner_document(&self, node: Node) -> Option<Node> {
        self.first_node("root(.)[. instance of document-node()]", node)
    }

    fn document_element(&self, document: Node) -> Option<Node> {
        self.first_node("*", document)
    }

    fn node_type(&self, node: Node) -> NodeType {
        let documents = self.documents.borrow();
        match documents.xot().value_type(node) {
            xot::ValueType::Document => NodeType::Document,
            xot::ValueType::Element => NodeType::Element,
            xot::ValueType::Text => NodeType::Text,
            xot::ValueType::Comment => NodeType::Comment,
            xot::ValueType::ProcessingInstruction => NodeType::ProcessingInstruction,
            xot::ValueType::Attribute => NodeType::Attribute,
            xot::ValueType::Namespace => NodeType::Namespace,
        }
    }

    fn local_name(&self, node: Node) -> Option<String> {
        self.string_of("string(local-name(.))", node).filter(|s| !s.is_empty())
    }

    fn namespace_uri(&self, node: Node) -> Option<String> {
        self.string_of("string(namespace-uri(.))", node)
            .filter(|s| !s.is_empty())
    }

    fn encoding(&self, document: Node) -> Option<String> {
        self.declaration(document).and_then(|d| d.encoding.clone())
    }
}
