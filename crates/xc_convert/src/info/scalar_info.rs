use alloc::boxed::Box;
use core::fmt;

use crate::XmlValue;
use crate::info::type_info::{boxed_default, impl_default_fn};
use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// The closed set of primitive value kinds written as element text.
///
/// Anything outside this set is a sequence, a mapping or a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    Bool,
    Timestamp,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// Type information of a scalar.
#[derive(Clone)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
    default_fn: fn() -> Box<dyn XmlValue>,
}

impl ScalarInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default_fn);

    #[inline]
    pub const fn new<T: XmlValue + TypePath + Default>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            default_fn: boxed_default::<T>,
        }
    }

    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}

impl fmt::Debug for ScalarInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarInfo")
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .finish()
    }
}
