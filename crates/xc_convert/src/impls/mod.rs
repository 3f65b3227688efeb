//! Builtin implementations and helpers for implementing the value traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_debug`: Used to implement [`XmlValue::xml_debug`] (e.g. [`sequence_debug`]).
//! - `xxx_partial_eq`: Used to implement [`XmlValue::xml_partial_eq`] (e.g. [`mapping_partial_eq`]).
//!
//! ## Implemented Menu
//!
//! - scalars:
//!     - `String`, `char`, `bool`
//!     - `i8`-`i64`, `u8`-`u64`, `f32`, `f64`
//!     - `rust_decimal::Decimal`
//!     - `chrono::NaiveDateTime`
//! - sequences: `Vec<T>`, `VecDeque<T>`
//! - mappings: `BTreeMap<K, V>`, `std::collections::HashMap<K, V, S>`
//! - members: `Option<T>` (see [`Member`](crate::Member))
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`XmlValue::xml_debug`]: crate::XmlValue::xml_debug
//! [`XmlValue::xml_partial_eq`]: crate::XmlValue::xml_partial_eq

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;

mod mapping;
mod scalar;
mod sequence;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use common::*;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use xc_convert::impls;
///
/// let s = impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
///
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
