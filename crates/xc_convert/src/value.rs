use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::info::{CompositeInfo, DynamicTypePath, DynamicTyped, TypeKind};
use crate::ops::{XmlMut, XmlRef};

// -----------------------------------------------------------------------------
// XmlValue

/// The object-safe base trait of every convertible value.
///
/// A value exposes itself as exactly one of four views through [`xml_ref`]
/// and [`xml_mut`]; the codec matches on them exhaustively.
///
/// Implemented by [`#[derive(XmlConvert)]`](crate::derive::XmlConvert) for
/// structs and by this crate for the builtin scalars, sequences and mappings.
///
/// [`xml_ref`]: XmlValue::xml_ref
/// [`xml_mut`]: XmlValue::xml_mut
pub trait XmlValue: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_xml(&self) -> &dyn XmlValue
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn as_xml_mut(&mut self) -> &mut dyn XmlValue
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_xml(self: Box<Self>) -> Box<dyn XmlValue>
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_xml(self) -> Box<dyn XmlValue>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Classification of this value's runtime type.
    fn xml_kind(&self) -> TypeKind;

    fn xml_ref(&self) -> XmlRef<'_>;

    fn xml_mut(&mut self) -> XmlMut<'_>;

    /// Structural equality across the type-erased boundary.
    ///
    /// Values of different runtime types are never equal.
    fn xml_partial_eq(&self, other: &dyn XmlValue) -> bool;

    fn xml_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.xml_ref() {
            XmlRef::Scalar(data) => fmt::Debug::fmt(&data.scalar_ref(), f),
            XmlRef::Sequence(data) => impls::sequence_debug(data, f),
            XmlRef::Mapping(data) => impls::mapping_debug(data, f),
            XmlRef::Composite(data) => impls::composite_debug(data, f),
        }
    }
}

impl dyn XmlValue {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut()
    }

    /// Downcasts the box, handing it back unchanged on a type mismatch.
    pub fn downcast<T: Any>(self: Box<dyn XmlValue>) -> Result<Box<T>, Box<dyn XmlValue>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Like [`downcast`](Self::downcast), but moves the value out of the box.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn XmlValue>) -> Result<T, Box<dyn XmlValue>> {
        self.downcast::<T>().map(|value| *value)
    }

    /// Returns the composite info of this value's runtime type, if it is one.
    #[inline]
    pub fn composite_info(&self) -> Option<&'static CompositeInfo> {
        self.xml_type_info().as_composite().ok()
    }
}

impl fmt::Debug for dyn XmlValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.xml_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_xml_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn xml_kind(&self) -> $crate::info::TypeKind {
            $crate::info::TypeKind::$kind
        }

        #[inline]
        fn xml_ref(&self) -> $crate::ops::XmlRef<'_> {
            $crate::ops::XmlRef::$kind(self)
        }

        #[inline]
        fn xml_mut(&mut self) -> $crate::ops::XmlMut<'_> {
            $crate::ops::XmlMut::$kind(self)
        }
    };
}

pub(crate) use impl_xml_cast_fn;
