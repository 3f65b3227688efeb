use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to the descriptor table of a type.
///
/// Implemented by [`#[derive(XmlConvert)]`](crate::derive::XmlConvert) and by
/// every builtin type. The [`TypeInfo`] is built on first access and cached
/// for the rest of the process.
///
/// # Examples
///
/// ```
/// use xc_convert::derive::XmlConvert;
/// use xc_convert::info::{TypeKind, Typed};
///
/// #[derive(XmlConvert, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let info = Point::type_info();
/// assert_eq!(info.kind(), TypeKind::Composite);
///
/// let fields: Vec<_> = info.as_composite().unwrap().iter().map(|f| f.name()).collect();
/// assert_eq!(fields, ["x", "y"]);
/// ```
///
/// # Manual implementation
///
/// Use a [`NonGenericTypeInfoCell`] for non-generic types and a
/// [`GenericTypeInfoCell`] for generic ones, so the table is built once.
///
/// ```ignore
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::F64)))
///     }
/// }
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the cached descriptor table of this type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every type that implements [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn xml_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn xml_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
