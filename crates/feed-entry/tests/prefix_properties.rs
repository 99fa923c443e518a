//! Prefix derivation holds for every entry position

use feed_entry::prefix::{entry_selector, xpath_prefix};
use feed_entry::{EntryVocabulary, FeedType};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_feed_type() -> impl Strategy<Value = FeedType> {
    prop::sample::select(FeedType::iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn predicate_is_key_plus_one(feed_type in any_feed_type(), key in 0usize..1_000_000) {
        let prefix = xpath_prefix(feed_type, key);
        prop_assert_eq!(prefix, format!("{}[{}]", entry_selector(feed_type), key + 1));
    }

    #[test]
    fn selector_follows_vocabulary(feed_type in any_feed_type(), key in 0usize..1000) {
        let prefix = xpath_prefix(feed_type, key);
        let expected = match feed_type.vocabulary() {
            EntryVocabulary::RdfItem => "//rss:item[",
            EntryVocabulary::AtomEntry => "//atom:entry[",
            EntryVocabulary::PlainItem => "//item[",
        };
        prop_assert!(prefix.starts_with(expected), "{} for {}", prefix, feed_type);
    }

    #[test]
    fn tags_parse_back(feed_type in any_feed_type()) {
        prop_assert_eq!(FeedType::from_tag(feed_type.tag()).unwrap(), feed_type);
    }
}
