use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::XmlValue;
use crate::info::type_info::{boxed_default, impl_default_fn};
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Type information of an ordered collection.
///
/// The item type is absent for type-erased sequences such as
/// [`DynamicSequence`](crate::ops::DynamicSequence), whose items can only be
/// recovered from type tags.
#[derive(Clone)]
pub struct SequenceInfo {
    ty: Type,
    item_id: Option<TypeId>,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: Option<fn() -> &'static TypeInfo>,
    default_fn: fn() -> Box<dyn XmlValue>,
}

impl SequenceInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default_fn);

    /// Creates the info of a sequence `S` with item type `T`.
    #[inline]
    pub const fn new<S: XmlValue + TypePath + Default, T: Typed>() -> Self {
        Self {
            ty: Type::of::<S>(),
            item_id: Some(TypeId::of::<T>()),
            item_info: Some(T::type_info),
            default_fn: boxed_default::<S>,
        }
    }

    /// Creates the info of a sequence `S` that declares no item type.
    #[inline]
    pub const fn erased<S: XmlValue + TypePath + Default>() -> Self {
        Self {
            ty: Type::of::<S>(),
            item_id: None,
            item_info: None,
            default_fn: boxed_default::<S>,
        }
    }

    #[inline]
    pub const fn item_id(&self) -> Option<TypeId> {
        self.item_id
    }

    /// The declared item type, if any.
    #[inline]
    pub fn item_info(&self) -> Option<&'static TypeInfo> {
        self.item_info.map(|f| f())
    }
}

impl fmt::Debug for SequenceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceInfo")
            .field("ty", &self.ty)
            .field("item", &self.item_info().map(TypeInfo::ty))
            .finish()
    }
}
