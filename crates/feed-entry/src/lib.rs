//! feed-entry: format-agnostic XPath addressing of feed entries
//!
//! RSS 0.9x/2.0, RSS 1.0/0.90 and Atom 1.0/0.3 spell their entries
//! differently. An [`EntryContext`] hides that: it derives an XPath prefix
//! selecting one entry from its document, and binds the namespaces the
//! prefix needs on a lazily created evaluator.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use feed_entry::{feed, StandardEntry};
//! use feed_xee_adapter::XeeFeedTree;
//!
//! let mut tree = XeeFeedTree::new();
//! let doc = tree.parse(xml)?;
//! for ctx in feed::entries(&tree, doc, None)? {
//!     println!("{}", ctx.xpath_prefix());
//!     let mut entry = StandardEntry::new(ctx);
//!     println!("{:?}", entry.title()?);
//! }
//! ```

pub mod data;
pub mod detect;
pub mod entry;
pub mod error;
pub mod feed;
pub mod feed_type;
pub mod namespaces;
pub mod prefix;
pub mod standard;

pub use data::EntryData;
pub use detect::{FeedTypeDetector, XPathDetector};
pub use entry::EntryContext;
pub use error::{Error, Result};
pub use feed_type::{EntryVocabulary, FeedType};
pub use namespaces::{FormatNamespaces, ModuleNamespaces, NamespaceRegistrar, Registrars};
pub use standard::StandardEntry;

// Re-export the engine capability for implementors
pub use feed_engine_traits as engine;
