//! Convert typed values to and from XML element trees.
//!
//! The shape of a type is the schema: a struct becomes an element with one
//! child per member, and every value is classified as exactly one of four
//! kinds, which decides how it is written.
//!
//! | kind        | written as                                   | examples                         |
//! |-------------|----------------------------------------------|----------------------------------|
//! | Scalar      | element text                                 | `String`, `i32`, `bool`, `Decimal` |
//! | Sequence    | one child per item                           | `Vec<T>`, `VecDeque<T>`          |
//! | Mapping     | one pair element per entry, key then value   | `BTreeMap<K, V>`, `HashMap<K, V>` |
//! | Composite   | one child per member                         | `#[derive(XmlConvert)]` structs  |
//!
//! ## Menu
//!
//! - [`derive::XmlConvert`]: Builds the descriptor table of a struct.
//! - [`XmlConverter`]: The entry points, bound to a [`TypeRegistry`] and [`ConvertOptions`].
//! - [`info`]: Static type information ([`TypePath`], [`Typed`], [`TypeInfo`]).
//! - [`ops`]: The four value views and the type-erased containers.
//! - [`registry`]: The allow-list of types that a `Type` attribute may name.
//! - [`impls`]: Builtin implementations and helpers for manual ones.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use xc_convert::derive::XmlConvert;
//! use xc_convert::registry::TypeRegistry;
//! use xc_convert::{ConvertOptions, XmlConverter};
//!
//! #[derive(XmlConvert, Default, Debug, PartialEq)]
//! #[xml(name = "Inventory")]
//! struct Stock {
//!     #[xml(name = "Warehouse")]
//!     warehouse: String,
//!     #[xml(element_name = "Sku")]
//!     skus: Vec<u32>,
//!     #[xml(key_name = "Sku", value_name = "Count")]
//!     counts: BTreeMap<u32, u16>,
//!     #[xml(ignore)]
//!     dirty: bool,
//! }
//!
//! let registry = TypeRegistry::new();
//! let converter = XmlConverter::new(&registry)
//!     .with_options(ConvertOptions::EXCLUDE_TYPE_ANNOTATIONS);
//!
//! let stock = Stock {
//!     warehouse: "North".into(),
//!     skus: vec![7],
//!     counts: BTreeMap::from([(7, 12)]),
//!     dirty: true,
//! };
//!
//! let text = converter.serialize_to_text(&stock).unwrap();
//! assert_eq!(
//!     text,
//!     "<Inventory><Warehouse>North</Warehouse><skus><Sku>7</Sku></skus>\
//!      <counts><Element><Sku>7</Sku><Count>12</Count></Element></counts></Inventory>"
//! );
//!
//! let back: Stock = converter.deserialize_from_text(&text).unwrap();
//! assert_eq!(back, Stock { dirty: false, ..stock });
//! ```
//!
//! [`TypePath`]: info::TypePath
//! [`Typed`]: info::Typed
//! [`TypeInfo`]: info::TypeInfo
//! [`TypeRegistry`]: registry::TypeRegistry
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive output names this crate as `xc_convert` when used inside the
// crate itself, e.g. in unit tests.
extern crate self as xc_convert;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod error;
mod member;
mod options;
mod value;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use codec::{DEFAULT_COLLECTION_ELEMENT_NAME, DEFAULT_KEY_NAME, DEFAULT_VALUE_NAME};
pub use codec::{TIMESTAMP_FORMAT, TYPE_ATTRIBUTE, XmlConverter};
pub use codec::{deserialize_from_text, deserialize_from_tree, serialize_to_text, serialize_to_tree};
pub use error::XmlError;
pub use member::Member;
pub use options::ConvertOptions;
pub use value::XmlValue;
pub use xc_convert_derive as derive;
pub use xc_tree::{Element, TreeError};
