//! XPath prefix derivation for feed entries
//!
//! Each entry is addressed from the document root with a positional
//! predicate: `//atom:entry[3]` is the third Atom entry. XPath predicates
//! are 1-based, entry keys are 0-based.

use crate::feed_type::{EntryVocabulary, FeedType};

/// Selector matching every entry of a feed of the given format
pub fn entry_selector(feed_type: FeedType) -> &'static str {
    match feed_type.vocabulary() {
        EntryVocabulary::RdfItem => "//rss:item",
        EntryVocabulary::AtomEntry => "//atom:entry",
        EntryVocabulary::PlainItem => "//item",
    }
}

/// XPath expression selecting the entry at `entry_key` (0-based)
pub fn xpath_prefix(feed_type: FeedType, entry_key: usize) -> String {
    format!("{}[{}]", entry_selector(feed_type), entry_key + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_atom_entry() {
        assert_eq!(xpath_prefix(FeedType::Atom10, 0), "//atom:entry[1]");
    }

    #[test]
    fn fifth_rdf_item() {
        assert_eq!(xpath_prefix(FeedType::Rss10, 4), "//rss:item[5]");
        assert_eq!(xpath_prefix(FeedType::Rss090, 4), "//rss:item[5]");
    }

    #[test]
    fn plain_items_for_everything_else() {
        assert_eq!(xpath_prefix(FeedType::Rss20, 2), "//item[3]");
        assert_eq!(xpath_prefix(FeedType::Rss091, 0), "//item[1]");
        assert_eq!(xpath_prefix(FeedType::Any, 9), "//item[10]");
    }
}
