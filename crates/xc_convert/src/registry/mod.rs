//! The allow-list of types that a `Type` attribute may name.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: The registered metadata of one type.
//! - [`GetTypeMeta`]: A trait providing a function to create a `TypeMeta` from a type.
//! - [`TypeRegistry`]: A container for storing and querying `TypeMeta`s.
//!
//! Type tags found in a document are resolved only through a registry.
//! A tag naming a type that was never registered is treated as absent,
//! so input documents cannot instantiate arbitrary types.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! We use the [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//! On an unsupported platform the function returns `false` without
//! causing any errors.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
