use core::any::{Any, TypeId};
use core::fmt;

use crate::Member;
use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// FieldAttributes

/// Per-member overrides, resolved once when the descriptor table is built.
///
/// Each override is independent; an unset name falls back to its default
/// at the codec.
///
/// ```
/// use xc_convert::info::FieldAttributes;
///
/// const ATTRS: FieldAttributes = FieldAttributes::new()
///     .with_collection_element_name("Item")
///     .with_key_name("K");
///
/// assert_eq!(ATTRS.collection_element_name, Some("Item"));
/// assert_eq!(ATTRS.value_name, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldAttributes {
    /// Element name of the member itself, instead of its field name.
    pub element_name: Option<&'static str>,
    /// Element name of each item or pair of a sequence or mapping member.
    pub collection_element_name: Option<&'static str>,
    /// Element name of each key of a mapping member.
    pub key_name: Option<&'static str>,
    /// Element name of each value of a mapping member.
    pub value_name: Option<&'static str>,
}

impl FieldAttributes {
    /// No overrides.
    pub const DEFAULT: Self = Self::new();

    #[inline]
    pub const fn new() -> Self {
        Self {
            element_name: None,
            collection_element_name: None,
            key_name: None,
            value_name: None,
        }
    }

    #[inline]
    pub const fn with_element_name(mut self, name: &'static str) -> Self {
        self.element_name = Some(name);
        self
    }

    #[inline]
    pub const fn with_collection_element_name(mut self, name: &'static str) -> Self {
        self.collection_element_name = Some(name);
        self
    }

    #[inline]
    pub const fn with_key_name(mut self, name: &'static str) -> Self {
        self.key_name = Some(name);
        self
    }

    #[inline]
    pub const fn with_value_name(mut self, name: &'static str) -> Self {
        self.value_name = Some(name);
        self
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// The descriptor of one member of a composite.
///
/// The declared type is the member type with any `Option` stripped, so an
/// `Option<Vec<u8>>` member is declared as `Vec<u8>`.
#[derive(Clone)]
pub struct NamedField {
    name: &'static str,
    type_id: TypeId,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    attributes: FieldAttributes,
}

impl NamedField {
    /// Creates the descriptor of a member of type `M`.
    #[inline]
    pub const fn new<M: Member>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<M::Declared>(),
            type_info: <M::Declared as Typed>::type_info,
            attributes: FieldAttributes::new(),
        }
    }

    #[inline]
    pub const fn with_attributes(mut self, attributes: FieldAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// The member name in the struct.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// The declared type of the member.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn attributes(&self) -> &FieldAttributes {
        &self.attributes
    }
}

impl fmt::Debug for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the type path: infos of recursive types refer to themselves.
        f.debug_struct("NamedField")
            .field("name", &self.name)
            .field("type", &self.type_info().ty())
            .field("attributes", &self.attributes)
            .finish()
    }
}
