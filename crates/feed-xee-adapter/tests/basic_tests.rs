//! Basic tests for feed-xee-adapter

use feed_engine_traits::{
    Error, NamespaceBinder, NodeType, XPathEngine, XPathEvaluator, XPathValue, XmlTree,
};
use feed_xee_adapter::XeeFeedTree;

const ATOM_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
    <title>Example</title>
    <entry><title>First</title></entry>
    <entry><title>Second</title></entry>
</feed>"#;

const RSS_FEED: &str = r#"<rss version="2.0">
    <channel>
        <title>Example</title>
        <item><title>One</title></item>
        <item><title>Two</title></item>
        <item><title>Three</title></item>
    </channel>
</rss>"#;

#[test]
fn parse_returns_document_node() {
    let mut tree = XeeFeedTree::new();
    let doc = tree.parse(RSS_FEED).unwrap();

    assert_eq!(tree.node_type(doc), NodeType::Document);
    assert_eq!(tree.document_count(), 1);

    let root = tree.document_element(doc).unwrap();
    assert_eq!(tree.local_name(root).as_deref(), Some("rss"));
    assert_eq!(tree.namespace_uri(root), None);
}

#[test]
fn parse_rejects_malformed_xml() {
    let mut tree = XeeFeedTree::new();
    let result = tree.parse("<rss><channel></rss>");
    assert!(matches!(result, Err(Error::XmlParse(_))));
}

#[test]
fn encoding_comes_from_the_declaration() {
    let mut tree = XeeFeedTree::new();
    let atom = tree.parse(ATOM_FEED).unwrap();
    let rss = tree.parse(RSS_FEED).unwrap();

    assert_eq!(tree.encoding(atom).as_deref(), Some("utf-8"));
    assert_eq!(tree.encoding(rss), None);
}

#[test]
fn owner_document_of_an_element() {
    let mut tree = XeeFeedTree::new();
    let doc = tree.parse(RSS_FEED).unwrap();
    let evaluator = tree.new_evaluator(doc);

    let items = evaluator.query_nodes("//item", None).unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert!(tree.is_element(item));
        assert_eq!(tree.owner_document(item), Some(doc));
    }
}

#[test]
fn namespaced_queries_need_a_binding() {
    let mut tree = XeeFeedTree::new();
    let doc = tree.parse(ATOM_FEED).unwrap();
    let mut evaluator = tree.new_evaluator(doc);

    // Unbound prefixes are a static error
    let err = evaluator.evaluate("//atom:entry", None).unwrap_err();
    assert!(err.is_xpath());

    evaluator
        .register_namespace("atom", "http://www.w3.org/2005/Atom")
        .unwrap();
    let entries = evaluator.query_nodes("//atom:entry", None).unwrap();
    assert_eq!(entries.len(), 2);

    let title = evaluator
        .evaluate_string("//atom:entry[2]/atom:title", None)
        .unwrap();
    assert_eq!(title, "Second");
}

#[test]
fn evaluate_relative_to_a_context_node() {
    let mut tree = XeeFeedTree::new();
    let doc = tree.parse(RSS_FEED).unwrap();
    let evaluator = tree.new_evaluator(doc);

    let second = evaluator.query_nodes("//item[2]", None).unwrap()[0];
    assert_eq!(evaluator.evaluate_string("title", Some(second)).unwrap(), "Two");
}

#[test]
fn atomic_results_keep_their_type() {
    let mut tree = XeeFeedTree::new();
    let doc = tree.parse(RSS_FEED).unwrap();
    let evaluator = tree.new_evaluator(doc);

    assert_eq!(
        evaluator.evaluate("count(//item)", None).unwrap(),
        XPathValue::Number(3.0)
    );
    assert_eq!(
        evaluator.evaluate("exists(/rss)", None).unwrap(),
        XPathValue::Boolean(true)
    );
    assert_eq!(
        evaluator.evaluate("string(/rss/@version)", None).unwrap(),
        XPathValue::String("2.0".to_string())
    );
}

#[test]
fn empty_selection_is_an_empty_node_set() {
    let mut tree = XeeFeedTree::new();
    let doc = tree.parse(RSS_FEED).unwrap();
    let evaluator = tree.new_evaluator(doc);

    let value = evaluator.evaluate("//entry", None).unwrap();
    assert!(value.is_empty());
    assert!(!evaluator.exists("//entry", None).unwrap());
}

#[test]
fn xee_engine_version() {
    let tree = XeeFeedTree::new();
    assert_eq!(tree.xpath_version(), "3.1");
}
