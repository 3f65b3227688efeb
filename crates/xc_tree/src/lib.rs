//! An owned XML element tree.
//!
//! This crate is the markup collaborator of `xc_convert`: it parses text
//! into an [`Element`] tree and prints a tree back to text. It knows nothing
//! about the types being converted.
//!
//! - [`Element`]: a name, ordered attributes, ordered children and optional text.
//! - [`Element::parse`]: parse a complete document, built on `quick-xml`.
//! - [`Display`](core::fmt::Display): compact printing, `{:#}` for indented output.
//!
//! # Examples
//!
//! ```
//! use xc_tree::Element;
//!
//! let root = Element::parse(r#"<Person><Name Type="String">Ada</Name></Person>"#).unwrap();
//! let name = root.child("Name").unwrap();
//!
//! assert_eq!(name.text(), Some("Ada"));
//! assert_eq!(name.attribute("Type"), Some("String"));
//! assert_eq!(root.to_string(), r#"<Person><Name Type="String">Ada</Name></Person>"#);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod element;
mod error;
mod parse;
mod print;

// -----------------------------------------------------------------------------
// Exports

pub use element::Element;
pub use error::TreeError;
