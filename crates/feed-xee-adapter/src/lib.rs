//! xee engine adapter for feed entries
//!
//! This adapter wraps the xee XPath 3.1 engine to implement the
//! feed-engine-traits interfaces.

pub mod declaration;
pub mod tree;
pub mod xpath;

// Re-export main types
pub use declaration::Declaration;
pub use tree::XeeFeedTree;
pub use xpath::XeeEvaluator;

// Re-export key types for convenience
pub use xot::Node;
