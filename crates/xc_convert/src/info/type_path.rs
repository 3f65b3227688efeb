use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// The names are stable across compiler versions, unlike
/// [`core::any::type_name`], so [`type_path`] is what gets written into the
/// `Type` attribute of a document and looked up again on the way back.
///
/// - [`type_path`]: Unique identifier of the type, including module path and generics.
/// - [`type_name`]: Type name without module path, may be duplicated.
/// - [`type_ident`]: The bare name, without module path and generics.
/// - [`module_path`]: Optional module path.
///
/// None of these carry a leading `::`.
///
/// # Implementation
///
/// `#[derive(XmlConvert)]` implements this trait. The path can be pinned
/// so that moving the type does not change documents already written:
///
/// ```
/// use xc_convert::derive::XmlConvert;
/// use xc_convert::info::TypePath;
///
/// #[derive(XmlConvert, Default)]
/// #[xml(type_path = "shop::Order")]
/// struct Order {
///     id: u32,
/// }
///
/// assert_eq!(Order::type_path(), "shop::Order");
/// assert_eq!(Order::type_ident(), "Order");
/// ```
///
/// Manual implementations are plain:
///
/// ```
/// use xc_convert::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn type_ident() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
/// ```
///
/// Generic types build their names once per instantiation with a
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics.
    ///
    /// For `Vec<u8>`, this is `"alloc::vec::Vec<u8>"`.
    fn type_path() -> &'static str;

    /// Returns the path without module prefixes.
    ///
    /// For `Vec<u8>`, this is `"Vec<u8>"`.
    fn type_name() -> &'static str;

    /// Returns the bare name of the type.
    ///
    /// For `Vec<u8>`, this is `"Vec"`.
    fn type_ident() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
///
/// Implemented for every type that implements [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn xml_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn xml_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn xml_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn xml_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn xml_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn xml_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn xml_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn xml_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// The [`TypePath`] functions of one type, stored as function pointers.
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("type_ident", &self.ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the [`TypePathTable`] of the same type.
///
/// Equality and hashing only look at the [`TypeId`].
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.type_path_table
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Adds `ty`, `type_id`, `type_path`, `type_name`, `type_ident`, `type_is`
/// accessors to an info struct with a `ty: Type` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.ty().ident()
        }

        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;
