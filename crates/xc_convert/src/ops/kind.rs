use crate::info::TypeKind;
use crate::ops::{Composite, Mapping, Scalar, Sequence};

// -----------------------------------------------------------------------------
// XmlRef

/// An immutable view of a value as one of the four kinds.
pub enum XmlRef<'a> {
    Scalar(&'a dyn Scalar),
    Sequence(&'a dyn Sequence),
    Mapping(&'a dyn Mapping),
    Composite(&'a dyn Composite),
}

impl<'a> XmlRef<'a> {
    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Sequence(_) => TypeKind::Sequence,
            Self::Mapping(_) => TypeKind::Mapping,
            Self::Composite(_) => TypeKind::Composite,
        }
    }

    #[inline]
    pub fn as_scalar(self) -> Option<&'a dyn Scalar> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(self) -> Option<&'a dyn Sequence> {
        match self {
            Self::Sequence(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mapping(self) -> Option<&'a dyn Mapping> {
        match self {
            Self::Mapping(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_composite(self) -> Option<&'a dyn Composite> {
        match self {
            Self::Composite(value) => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// XmlMut

/// A mutable view of a value as one of the four kinds.
pub enum XmlMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Sequence(&'a mut dyn Sequence),
    Mapping(&'a mut dyn Mapping),
    Composite(&'a mut dyn Composite),
}

impl XmlMut<'_> {
    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Sequence(_) => TypeKind::Sequence,
            Self::Mapping(_) => TypeKind::Mapping,
            Self::Composite(_) => TypeKind::Composite,
        }
    }
}
