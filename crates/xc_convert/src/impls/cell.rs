//! Static storage for type information.
//!
//! Used to implement [`Typed`](crate::info::Typed) and
//! [`TypePath`](crate::info::TypePath) so that each table is built once.
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`], for non-generic types.
//! - [`GenericTypeInfoCell`] / [`GenericTypePathCell`]: a `static` inside a
//!   generic function is shared by every instantiation, so these key their
//!   entries by [`TypeId`].

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use xc_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Static storage of the type information of a non-generic type.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Static storage of the [`TypeInfo`] of a non-generic type.
///
/// ```ignore
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::F64)))
///     }
/// }
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Static storage of the type information of a generic type.
///
/// Values are leaked, so references live for `'static`.
///
/// The value is computed outside the lock. Two threads racing on the first
/// access of the same type may both compute it; the first insert wins and
/// the other value is dropped.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Static storage of the [`TypeInfo`] of a generic type.
///
/// ```ignore
/// impl<T: XmlValue + Typed> Typed for Stack<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Sequence(SequenceInfo::new::<Self, T>()))
///     }
/// }
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Static storage of the type path or name of a generic type.
///
/// ```
/// use xc_convert::impls::{GenericTypePathCell, concat};
/// use xc_convert::info::TypePath;
///
/// struct Stack<T>(Vec<T>);
///
/// impl<T: TypePath> TypePath for Stack<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["demo::Stack<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Stack<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str {
///         "Stack"
///     }
/// }
///
/// assert_eq!(<Stack<u8>>::type_path(), "demo::Stack<u8>");
/// assert_eq!(<Stack<String>>::type_name(), "Stack<String>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, initializing it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{GenericTypePathCell, NonGenericTypeCell};

    fn path_of<T: 'static>(cell: &'static GenericTypePathCell, name: &str) -> &'static str {
        cell.get_or_insert::<T>(|| String::from(name))
    }

    #[test]
    fn generic_cell_keeps_first_value_per_type() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();

        assert_eq!(path_of::<u8>(&CELL, "a"), "a");
        assert_eq!(path_of::<u16>(&CELL, "b"), "b");
        assert_eq!(path_of::<u8>(&CELL, "c"), "a");
    }

    #[test]
    fn non_generic_cell_initializes_once() {
        static CELL: NonGenericTypeCell<String> = NonGenericTypeCell::new();

        assert_eq!(CELL.get_or_init(|| String::from("x")), "x");
        assert_eq!(CELL.get_or_init(|| String::from("y")), "x");
    }
}
