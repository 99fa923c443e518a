//! Error types for XML engine operations

/// Result type for XML engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all XML engine operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML parsing failed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// XPath compilation failed
    #[error("XPath compilation error: {0}")]
    XPathCompile(String),

    /// XPath evaluation failed
    #[error("XPath evaluation error: {0}")]
    XPathEval(String),

    /// Type conversion error
    #[error("Type conversion error: {0}")]
    TypeConversion(String),

    /// Node access error
    #[error("Node access error: {0}")]
    NodeAccess(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new XML parsing error
    pub fn xml_parse<S: Into<String>>(msg: S) -> Self {
        Error::XmlParse(msg.into())
    }

    /// Create a new XPath compilation error
    pub fn xpath_compile<S: Into<String>>(msg: S) -> Self {
        Error::XPathCompile(msg.into())
    }

    /// Create a new XPath evaluation error
    pub fn xpath_eval<S: Into<String>>(msg: S) -> Self {
        Error::XPathEval(msg.into())
    }

    /// Create a new node access error
    pub fn node_access<S: Into<String>>(msg: S) -> Self {
        Error::NodeAccess(msg.into())
    }

    /// Whether the error was raised while compiling or running an expression
    pub fn is_xpath(&self) -> bool {
        matches!(self, Error::XPathCompile(_) | Error::XPathEval(_))
    }
}
