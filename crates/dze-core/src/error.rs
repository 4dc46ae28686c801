//! Error types for dze-core operations.

use thiserror::Error;

/// The error type for all dze-core operations.
///
/// Fatal by construction: anything that reaches the caller as an `Error`
/// aborts the run before the output file is written.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML or lacks the expected structure.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The document contained no root element.
    #[error("document has no root element")]
    NoRootElement,

    /// A matched type entry lacks an attribute the change needs.
    #[error("type '{name}' is missing the '{attr}' attribute")]
    MissingAttribute { name: String, attr: &'static str },

    /// A matched type entry carries a nominal that is not an integer.
    #[error("type '{name}' has a non-numeric nominal value '{value}'")]
    InvalidNominal { name: String, value: String },
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::XmlAttr(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
