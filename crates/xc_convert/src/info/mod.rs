//! Compile-time type information, the descriptor tables the codec walks.
//!
//! ## Menu
//!
//! - [`TypePath`]: Stable type names, the `type_path` doubles as the type tag.
//! - [`Typed`]: A static accessor to the [`TypeInfo`] of a type.
//! - [`Type`]: A `TypeId` paired with its [`TypePathTable`].
//!
//! - [`TypeInfo`]: A closed enum over the four conversion kinds:
//!     - [`ScalarInfo`]: text leaves, carrying their [`ScalarKind`].
//!     - [`SequenceInfo`]: ordered collections, with an optional item type.
//!     - [`MappingInfo`]: key/value collections, with optional key and value types.
//!     - [`CompositeInfo`]: structs, their member descriptors in declaration order.
//!
//! - [`NamedField`]: One member descriptor: name, declared type and [`FieldAttributes`].
//!
//! - [`TypeKind`]: The four-way classification, see [`TypeInfo::kind`].
//!
//! Every info also carries a constructor for a default instance of its
//! type, which is how deserialization starts from nothing.

// -----------------------------------------------------------------------------
// Modules

mod composite_info;
mod field_info;
mod mapping_info;
mod scalar_info;
mod sequence_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use composite_info::CompositeInfo;
pub use field_info::{FieldAttributes, NamedField};
pub use mapping_info::MappingInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use sequence_info::SequenceInfo;
pub use type_info::{TypeInfo, TypeKind, TypeKindError};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
