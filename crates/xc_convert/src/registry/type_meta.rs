use alloc::boxed::Box;
use core::fmt;

use crate::XmlValue;
use crate::info::{Type, TypeInfo, Typed};
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime storage for type metadata, registered into the [`TypeRegistry`].
///
/// An instance of `TypeMeta` can be created using the [`TypeMeta::of`]
/// method, but is more often generated by
/// [`#[derive(XmlConvert)]`](crate::derive::XmlConvert), which implements
/// the [`GetTypeMeta`] trait.
///
/// # Example
///
/// ```
/// use xc_convert::registry::TypeMeta;
///
/// let meta = TypeMeta::of::<String>();
/// let s = meta.new_default().take::<String>().unwrap();
///
/// assert_eq!(meta.type_path(), "alloc::string::String");
/// assert_eq!(s, "");
/// ```
#[derive(Clone)]
pub struct TypeMeta {
    // Cached so that path lookups do not match on the kind each time.
    ty: &'static Type,
    type_info: &'static TypeInfo,
}

impl TypeMeta {
    /// Creates the [`TypeMeta`] of a type.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        let type_info = T::type_info();
        let ty = type_info.ty();
        Self { ty, type_info }
    }

    /// Returns the [`TypeInfo`] .
    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the [`Type`] .
    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.ty
    }

    crate::info::impl_type_fn!();

    /// Constructs a default instance of the registered type.
    #[inline]
    pub fn new_default(&self) -> Box<dyn XmlValue> {
        self.type_info.new_default()
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_info", &self.type_info)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// A trait which allows a type to generate its [`TypeMeta`]
/// for registration into the [`TypeRegistry`].
///
/// Implemented by [`#[derive(XmlConvert)]`](crate::derive::XmlConvert),
/// whose [`register_dependencies`] registers the declared type of every
/// member.
///
/// ```
/// use xc_convert::derive::XmlConvert;
/// use xc_convert::registry::GetTypeMeta;
///
/// #[derive(XmlConvert, Default)]
/// struct A {
///     id: u32,
/// }
///
/// let meta = A::get_type_meta();
/// assert_eq!(meta.type_ident(), "A");
/// ```
///
/// [`register_dependencies`]: GetTypeMeta::register_dependencies
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot provide type registration information",
    note = "consider annotating `{Self}` with `#[derive(XmlConvert)]`"
)]
pub trait GetTypeMeta: Typed {
    /// Returns the [`TypeMeta`] for this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers other types needed by this type.
    /// **Allow** not to register oneself.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
