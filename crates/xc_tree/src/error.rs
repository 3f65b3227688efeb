use core::str::Utf8Error;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// TreeError

/// Error returned when markup text cannot be turned into an [`Element`] tree.
///
/// [`Element`]: crate::Element
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TreeError {
    #[error("malformed markup: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("element or attribute name is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    #[error("document has no root element")]
    MissingRoot,

    #[error("document has more than one root element, found `{0}` after the root")]
    MultipleRoots(String),

    #[error("document ended inside element `{0}`")]
    UnexpectedEnd(String),
}
