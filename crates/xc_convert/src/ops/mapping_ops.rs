use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::XmlValue;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{MappingInfo, TypeInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeMeta};

/// Iterator over the entries of a [`Mapping`].
pub type MappingIter<'a> = Box<dyn Iterator<Item = (&'a dyn XmlValue, &'a dyn XmlValue)> + 'a>;

// -----------------------------------------------------------------------------
// Mapping trait

/// A key/value collection.
///
/// Each entry is written as one pair element holding the key, then the value.
/// Iteration order is whatever the concrete collection yields.
pub trait Mapping: XmlValue {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> MappingIter<'_>;

    /// Inserts an entry, replacing the value of an equal key.
    ///
    /// Hands both back if either is not of an accepted type.
    fn insert(
        &mut self,
        key: Box<dyn XmlValue>,
        value: Box<dyn XmlValue>,
    ) -> Result<(), (Box<dyn XmlValue>, Box<dyn XmlValue>)>;
}

// -----------------------------------------------------------------------------
// DynamicMapping

/// A mapping of boxed keys and values of any type, kept in insertion order.
///
/// Keys are compared with [`XmlValue::xml_partial_eq`]. Like
/// [`DynamicSequence`](crate::ops::DynamicSequence) it declares no key or
/// value type, so its entries are only readable back through type tags.
#[derive(Default)]
pub struct DynamicMapping {
    entries: Vec<(Box<dyn XmlValue>, Box<dyn XmlValue>)>,
}

impl DynamicMapping {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the value of the entry whose key equals `key`.
    pub fn get(&self, key: &dyn XmlValue) -> Option<&dyn XmlValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.xml_partial_eq(key))
            .map(|(_, v)| &**v)
    }

    pub fn insert_boxed(&mut self, key: Box<dyn XmlValue>, value: Box<dyn XmlValue>) {
        match self.entries.iter_mut().find(|(k, _)| k.xml_partial_eq(&*key)) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    #[inline]
    pub fn insert_value<K: XmlValue, V: XmlValue>(&mut self, key: K, value: V) {
        self.insert_boxed(Box::new(key), Box::new(value));
    }
}

impl TypePath for DynamicMapping {
    #[inline]
    fn type_path() -> &'static str {
        "xc_convert::ops::DynamicMapping"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicMapping"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "DynamicMapping"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("xc_convert::ops")
    }
}

impl Typed for DynamicMapping {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Mapping(MappingInfo::erased::<Self>()))
    }
}

impl XmlValue for DynamicMapping {
    crate::value::impl_xml_cast_fn!(Mapping);

    #[inline]
    fn xml_partial_eq(&self, other: &dyn XmlValue) -> bool {
        crate::impls::mapping_partial_eq(self, other)
    }
}

impl Mapping for DynamicMapping {
    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> MappingIter<'_> {
        Box::new(self.entries.iter().map(|(k, v)| (&**k, &**v)))
    }

    #[inline]
    fn insert(
        &mut self,
        key: Box<dyn XmlValue>,
        value: Box<dyn XmlValue>,
    ) -> Result<(), (Box<dyn XmlValue>, Box<dyn XmlValue>)> {
        self.insert_boxed(key, value);
        Ok(())
    }
}

impl GetTypeMeta for DynamicMapping {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

crate::member::impl_self_member!(DynamicMapping);

impl fmt::Debug for DynamicMapping {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynamicMapping")?;
        crate::impls::mapping_debug(self, f)
    }
}
