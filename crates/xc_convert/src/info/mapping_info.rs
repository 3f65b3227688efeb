use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::XmlValue;
use crate::info::type_info::{boxed_default, impl_default_fn};
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Type information of a key/value collection.
///
/// Key and value types are absent for type-erased mappings such as
/// [`DynamicMapping`](crate::ops::DynamicMapping).
#[derive(Clone)]
pub struct MappingInfo {
    ty: Type,
    key_id: Option<TypeId>,
    value_id: Option<TypeId>,
    key_info: Option<fn() -> &'static TypeInfo>,
    value_info: Option<fn() -> &'static TypeInfo>,
    default_fn: fn() -> Box<dyn XmlValue>,
}

impl MappingInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default_fn);

    /// Creates the info of a mapping `M` from `K` to `V`.
    #[inline]
    pub const fn new<M: XmlValue + TypePath + Default, K: Typed, V: Typed>() -> Self {
        Self {
            ty: Type::of::<M>(),
            key_id: Some(TypeId::of::<K>()),
            value_id: Some(TypeId::of::<V>()),
            key_info: Some(K::type_info),
            value_info: Some(V::type_info),
            default_fn: boxed_default::<M>,
        }
    }

    /// Creates the info of a mapping `M` that declares neither key nor value type.
    #[inline]
    pub const fn erased<M: XmlValue + TypePath + Default>() -> Self {
        Self {
            ty: Type::of::<M>(),
            key_id: None,
            value_id: None,
            key_info: None,
            value_info: None,
            default_fn: boxed_default::<M>,
        }
    }

    #[inline]
    pub const fn key_id(&self) -> Option<TypeId> {
        self.key_id
    }

    #[inline]
    pub const fn value_id(&self) -> Option<TypeId> {
        self.value_id
    }

    #[inline]
    pub fn key_info(&self) -> Option<&'static TypeInfo> {
        self.key_info.map(|f| f())
    }

    #[inline]
    pub fn value_info(&self) -> Option<&'static TypeInfo> {
        self.value_info.map(|f| f())
    }
}

impl fmt::Debug for MappingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingInfo")
            .field("ty", &self.ty)
            .field("key", &self.key_info().map(TypeInfo::ty))
            .field("value", &self.value_info().map(TypeInfo::ty))
            .finish()
    }
}
