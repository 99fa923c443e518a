//! Sample documents shared by the integration tests
#![allow(dead_code)]

pub const RSS_20: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/"
     xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Example Channel</title>
    <link>http://example.org/</link>
    <item>
      <title>First item</title>
      <link>http://example.org/1</link>
      <guid>urn:example:1</guid>
      <description>First summary</description>
      <content:encoded><![CDATA[<p>First body</p>]]></content:encoded>
      <author>one@example.org</author>
    </item>
    <item>
      <title>Second item</title>
      <link>http://example.org/2</link>
      <dc:creator>Second Author</dc:creator>
    </item>
    <item>
      <description>Untitled third item</description>
    </item>
  </channel>
</rss>"#;

pub const RSS_091: &str = r#"<rss version="0.91">
  <channel>
    <title>Old Channel</title>
    <item><title>Only item</title><link>http://example.org/old</link></item>
  </channel>
</rss>"#;

pub const RSS_UNVERSIONED: &str = r#"<rss>
  <channel><item><title>x</title></item></channel>
</rss>"#;

pub const RSS_10: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns="http://purl.org/rss/1.0/"
         xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel rdf:about="http://example.org/">
    <title>RDF Channel</title>
  </channel>
  <item rdf:about="http://example.org/rdf/1">
    <title>RDF one</title>
    <link>http://example.org/rdf/1</link>
    <dc:creator>Rdf Author</dc:creator>
  </item>
  <item rdf:about="http://example.org/rdf/2">
    <title>RDF two</title>
    <link>http://example.org/rdf/2</link>
    <description>Second RDF item</description>
  </item>
</rdf:RDF>"#;

pub const RSS_090: &str = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns="http://my.netscape.com/rdf/simple/0.9/">
  <channel><title>Netscape</title></channel>
  <item><title>Ninety</title><link>http://example.org/090</link></item>
</rdf:RDF>"#;

pub const ATOM_10: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Feed</title>
  <id>urn:example:feed</id>
  <entry>
    <id>urn:example:a1</id>
    <title>Atom one</title>
    <summary>Atom summary</summary>
    <content type="text">Atom body</content>
    <link rel="alternate" href="http://example.org/a1"/>
    <link rel="edit" href="http://example.org/a1/edit"/>
    <author><name>Atom Author</name></author>
  </entry>
  <entry>
    <id>urn:example:a2</id>
    <title>Atom two</title>
    <link href="http://example.org/a2"/>
  </entry>
</feed>"#;

pub const ATOM_ENTRY: &str = r#"<entry xmlns="http://www.w3.org/2005/Atom">
  <id>urn:example:standalone</id>
  <title>Standalone</title>
</entry>"#;

pub const ATOM_03: &str = r#"<feed version="0.3" xmlns="http://purl.org/atom/ns#">
  <title>Old Atom</title>
  <entry>
    <id>urn:example:03</id>
    <title>Atom 0.3 entry</title>
    <link rel="alternate" href="http://example.org/03"/>
  </entry>
</feed>"#;

pub const HTML: &str = r#"<html><head><title>Not a feed</title></head><body/></html>"#;
