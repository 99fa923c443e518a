//! XML declaration sniffing
//!
//! xot drops the XML declaration while parsing, so the declared encoding
//! is read up front with quick-xml before the document is handed to xee.

use quick_xml::events::Event;
use quick_xml::Reader;

/// The parts of an `<?xml ...?>` declaration we keep around
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// `version` pseudo-attribute
    pub version: Option<String>,
    /// `encoding` pseudo-attribute, verbatim
    pub encoding: Option<String>,
}

/// Read the declaration at the start of `xml`, if there is one.
///
/// Only the prolog is looked at; anything malformed is left for the real
/// parser to report.
pub fn sniff(xml: &str) -> Option<Declaration> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Decl(decl)) => {
                let version = decl
                    .version()
                    .ok()
                    .map(|v| String::from_utf8_lossy(&v).into_owned());
                let encoding = match decl.encoding() {
                    Some(Ok(enc)) => Some(String::from_utf8_lossy(&enc).into_owned()),
                    _ => None,
                };
                return Some(Declaration { version, encoding });
            }
            // A BOM or leading whitespace surfaces as text before the declaration
            Ok(Event::Text(text)) if text.iter().all(|b| b.is_ascii_whitespace()) => continue,
            _ => return None,
        }
    }
}
