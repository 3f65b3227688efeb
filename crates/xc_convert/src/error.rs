use alloc::string::String;

use thiserror::Error;
use xc_tree::TreeError;

/// Errors returned at the boundary of a conversion call.
///
/// Problems inside the document are not errors: unparseable text, unknown
/// type tags and missing elements are recovered locally and logged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlError {
    /// Only composites can be written as the root element.
    #[error("`{type_path}` is not a composite and cannot be the root element")]
    NotComposite { type_path: &'static str },
    /// A type-erased call named a type the registry does not know.
    #[error("type `{type_path}` is not registered")]
    UnknownType { type_path: String },
    /// The document text is not well-formed.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The deserialized root is not of the requested type.
    #[error("deserialized `{found}`, expected `{expected}`")]
    MismatchedRoot {
        expected: &'static str,
        found: &'static str,
    },
}
