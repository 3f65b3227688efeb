//! The four value views and the type-erased containers.
//!
//! ## Menu
//!
//! - [`XmlRef`] / [`XmlMut`]: What [`XmlValue::xml_ref`] and
//!   [`XmlValue::xml_mut`] return, one variant per [`TypeKind`].
//!
//! - [`Scalar`]: Text leaves, viewed through [`ScalarRef`] / [`ScalarMut`].
//! - [`Sequence`]: Ordered collections (e.g. `Vec<T>`).
//! - [`Mapping`]: Key/value collections (e.g. `BTreeMap<K, V>`).
//! - [`Composite`]: Structs with named members.
//! - [`XmlIdentity`]: A runtime element name for a composite.
//!
//! - [`DynamicSequence`]: A sequence of boxed values that declares no item type.
//! - [`DynamicMapping`]: A mapping of boxed values that declares no key or value type.
//!
//! [`XmlValue::xml_ref`]: crate::XmlValue::xml_ref
//! [`XmlValue::xml_mut`]: crate::XmlValue::xml_mut
//! [`TypeKind`]: crate::info::TypeKind

// -----------------------------------------------------------------------------
// Modules

mod composite_ops;
mod kind;
mod mapping_ops;
mod scalar_ops;
mod sequence_ops;

// -----------------------------------------------------------------------------
// Exports

pub use composite_ops::{Composite, XmlIdentity};
pub use kind::{XmlMut, XmlRef};
pub use mapping_ops::{DynamicMapping, Mapping, MappingIter};
pub use scalar_ops::{Scalar, ScalarMut, ScalarRef};
pub use sequence_ops::{DynamicSequence, Sequence, SequenceIter};
