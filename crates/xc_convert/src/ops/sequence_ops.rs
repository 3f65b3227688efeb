use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::XmlValue;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{SequenceInfo, TypeInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// Sequence trait

/// An ordered collection of values.
///
/// Items are written in iteration order, each as one child element, and
/// read back by appending with [`push`](Sequence::push).
pub trait Sequence: XmlValue {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn XmlValue>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the items.
    fn iter(&self) -> SequenceIter<'_>;

    /// Appends an item, or hands it back if its type is not accepted.
    fn push(&mut self, item: Box<dyn XmlValue>) -> Result<(), Box<dyn XmlValue>>;
}

// -----------------------------------------------------------------------------
// SequenceIter

/// An iterator over the items of a [`Sequence`].
pub struct SequenceIter<'a> {
    sequence: &'a dyn Sequence,
    index: usize,
}

impl SequenceIter<'_> {
    #[inline(always)]
    pub const fn new(sequence: &dyn Sequence) -> SequenceIter<'_> {
        SequenceIter { sequence, index: 0 }
    }
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a dyn XmlValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.sequence.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.sequence.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}

// -----------------------------------------------------------------------------
// DynamicSequence

/// A sequence of boxed values of any type.
///
/// It declares no item type, so its items are only readable back through
/// the `Type` attribute. Serialized without type annotations, a dynamic
/// sequence deserializes empty.
///
/// # Examples
///
/// ```
/// use xc_convert::ops::{DynamicSequence, Sequence};
///
/// let mut seq = DynamicSequence::new();
/// seq.extend(1_u8);
/// seq.extend(String::from("two"));
///
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq.get(1).and_then(|v| v.downcast_ref::<String>()).unwrap(), "two");
/// ```
#[derive(Default)]
pub struct DynamicSequence {
    values: Vec<Box<dyn XmlValue>>,
}

impl DynamicSequence {
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn extend_boxed(&mut self, value: Box<dyn XmlValue>) {
        self.values.push(value);
    }

    #[inline]
    pub fn extend<T: XmlValue>(&mut self, value: T) {
        self.extend_boxed(Box::new(value));
    }
}

impl TypePath for DynamicSequence {
    #[inline]
    fn type_path() -> &'static str {
        "xc_convert::ops::DynamicSequence"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicSequence"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "DynamicSequence"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("xc_convert::ops")
    }
}

impl Typed for DynamicSequence {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Sequence(SequenceInfo::erased::<Self>()))
    }
}

impl XmlValue for DynamicSequence {
    crate::value::impl_xml_cast_fn!(Sequence);

    #[inline]
    fn xml_partial_eq(&self, other: &dyn XmlValue) -> bool {
        crate::impls::sequence_partial_eq(self, other)
    }
}

impl Sequence for DynamicSequence {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn XmlValue> {
        self.values.get(index).map(|value| &**value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn iter(&self) -> SequenceIter<'_> {
        SequenceIter::new(self)
    }

    #[inline]
    fn push(&mut self, item: Box<dyn XmlValue>) -> Result<(), Box<dyn XmlValue>> {
        self.values.push(item);
        Ok(())
    }
}

impl GetTypeMeta for DynamicSequence {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

crate::member::impl_self_member!(DynamicSequence);

impl FromIterator<Box<dyn XmlValue>> for DynamicSequence {
    fn from_iter<I: IntoIterator<Item = Box<dyn XmlValue>>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl IntoIterator for DynamicSequence {
    type Item = Box<dyn XmlValue>;
    type IntoIter = alloc::vec::IntoIter<Self::Item>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a DynamicSequence {
    type Item = &'a dyn XmlValue;
    type IntoIter = SequenceIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for DynamicSequence {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynamicSequence")?;
        crate::impls::sequence_debug(self, f)
    }
}
