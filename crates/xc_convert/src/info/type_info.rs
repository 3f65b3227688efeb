use alloc::boxed::Box;
use core::fmt;

use thiserror::Error;

use crate::XmlValue;
use crate::info::{CompositeInfo, MappingInfo, ScalarInfo, SequenceInfo, Type};

// -----------------------------------------------------------------------------
// TypeKind

/// The four-way classification that drives codec dispatch.
///
/// Every type belongs to exactly one kind. Scalars are a closed set, see
/// [`ScalarKind`](crate::info::ScalarKind); a mapping is never also a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Sequence,
    Mapping,
    Composite,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Sequence => f.pad("Sequence"),
            Self::Mapping => f.pad("Mapping"),
            Self::Composite => f.pad("Composite"),
        }
    }
}

/// Returned by the `as_*` casts of [`TypeInfo`] on a kind mismatch.
#[derive(Debug, Error)]
#[error("type kind mismatch: expected {expected}, received {received}")]
pub struct TypeKindError {
    pub expected: TypeKind,
    pub received: TypeKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// The descriptor table of one type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info),
/// or from a [`TypeRegistry`](crate::registry::TypeRegistry) by type path.
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Sequence(SequenceInfo),
    Mapping(MappingInfo),
    Composite(CompositeInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        pub const fn $name(&self) -> Result<&$info, TypeKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(TypeKindError {
                    expected: TypeKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_sequence: Sequence => SequenceInfo);
    impl_cast_method!(as_mapping: Mapping => MappingInfo);
    impl_cast_method!(as_composite: Composite => CompositeInfo);

    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Sequence(info) => info.ty(),
            Self::Mapping(info) => info.ty(),
            Self::Composite(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Sequence(_) => TypeKind::Sequence,
            Self::Mapping(_) => TypeKind::Mapping,
            Self::Composite(_) => TypeKind::Composite,
        }
    }

    /// Constructs a default instance of the described type.
    pub fn new_default(&self) -> Box<dyn XmlValue> {
        match self {
            Self::Scalar(info) => info.new_default(),
            Self::Sequence(info) => info.new_default(),
            Self::Mapping(info) => info.new_default(),
            Self::Composite(info) => info.new_default(),
        }
    }
}

// -----------------------------------------------------------------------------
// Auxiliary

/// Used as the `fn() -> Box<dyn XmlValue>` constructor of an info.
pub(crate) fn boxed_default<T: XmlValue + Default>() -> Box<dyn XmlValue> {
    Box::new(T::default())
}

macro_rules! impl_default_fn {
    ($field:ident) => {
        /// Constructs a default instance of the described type.
        #[inline]
        pub fn new_default(&self) -> ::alloc::boxed::Box<dyn $crate::XmlValue> {
            (self.$field)()
        }
    };
}

pub(crate) use impl_default_fn;
