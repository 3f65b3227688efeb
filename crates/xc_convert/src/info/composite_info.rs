use alloc::boxed::Box;
use core::fmt;

use xc_utils::hash::HashMap;

use crate::XmlValue;
use crate::info::type_info::{boxed_default, impl_default_fn};
use crate::info::{NamedField, Type, TypePath, impl_type_fn};

/// Type information of a composite: its member descriptors in declaration
/// order and an optional static element name.
#[derive(Clone)]
pub struct CompositeInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    custom_name: Option<&'static str>,
    default_fn: fn() -> Box<dyn XmlValue>,
}

impl CompositeInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default_fn);

    pub fn new<T: XmlValue + TypePath + Default>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            custom_name: None,
            default_fn: boxed_default::<T>,
        }
    }

    /// Sets the static element name, used when the value supplies no
    /// runtime identity.
    #[inline]
    pub fn with_custom_name(mut self, name: &'static str) -> Self {
        self.custom_name = Some(name);
        self
    }

    #[inline]
    pub const fn custom_name(&self) -> Option<&'static str> {
        self.custom_name
    }

    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_indices.get(name).map(|&index| &self.fields[index])
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Member descriptors in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Debug for CompositeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeInfo")
            .field("ty", &self.ty)
            .field("custom_name", &self.custom_name)
            .field("fields", &self.fields)
            .finish()
    }
}
