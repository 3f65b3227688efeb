use core::fmt;

use crate::XmlValue;
use crate::ops::{Composite, Mapping, Sequence, XmlRef};

/// Returns `true` if both values have the same runtime type.
#[inline]
fn same_type(x: &dyn XmlValue, y: &dyn XmlValue) -> bool {
    x.xml_type_info().type_id() == y.xml_type_info().type_id()
}

/// A function used for implementing [`XmlValue::xml_partial_eq`].
///
/// # Rules
///
/// 1. If `y` is not a sequence of the same type, return `false`.
/// 2. If the lengths differ, return `false`.
/// 3. Compare the items pairwise, in order.
#[inline(never)]
pub fn sequence_partial_eq(x: &dyn Sequence, y: &dyn XmlValue) -> bool {
    let XmlRef::Sequence(y_seq) = y.xml_ref() else {
        return false;
    };

    if !same_type(x, y) || x.len() != y_seq.len() {
        return false;
    }

    x.iter()
        .zip(y_seq.iter())
        .all(|(item, y_item)| item.xml_partial_eq(y_item))
}

/// A function used for implementing [`XmlValue::xml_partial_eq`].
///
/// Entry order is ignored, so hash maps built in different orders compare
/// equal. Keys are matched with `xml_partial_eq`, which is quadratic in the
/// number of entries.
///
/// # Rules
///
/// 1. If `y` is not a mapping of the same type, return `false`.
/// 2. If the lengths differ, return `false`.
/// 3. Every key of `x` must exist in `y` with an equal value.
#[inline(never)]
pub fn mapping_partial_eq(x: &dyn Mapping, y: &dyn XmlValue) -> bool {
    let XmlRef::Mapping(y_map) = y.xml_ref() else {
        return false;
    };

    if !same_type(x, y) || x.len() != y_map.len() {
        return false;
    }

    x.iter().all(|(key, value)| {
        y_map
            .iter()
            .find(|(y_key, _)| key.xml_partial_eq(*y_key))
            .is_some_and(|(_, y_value)| value.xml_partial_eq(y_value))
    })
}

/// A function used for implementing [`XmlValue::xml_partial_eq`].
///
/// # Rules
///
/// 1. If `y` is not a composite of the same type, return `false`.
/// 2. Compare every member; an absent member only equals an absent member.
#[inline(never)]
pub fn composite_partial_eq(x: &dyn Composite, y: &dyn XmlValue) -> bool {
    let XmlRef::Composite(y_comp) = y.xml_ref() else {
        return false;
    };

    if !same_type(x, y) {
        return false;
    }

    let Ok(info) = x.xml_type_info().as_composite() else {
        return false;
    };

    info.iter()
        .all(|field| match (x.field(field.name()), y_comp.field(field.name())) {
            (Some(a), Some(b)) => a.xml_partial_eq(b),
            (None, None) => true,
            _ => false,
        })
}

/// A function used for implementing [`XmlValue::xml_debug`].
#[inline(never)]
pub fn sequence_debug(x: &dyn Sequence, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in x.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function used for implementing [`XmlValue::xml_debug`].
#[inline(never)]
pub fn mapping_debug(x: &dyn Mapping, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in x.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function used for implementing [`XmlValue::xml_debug`].
///
/// Absent members are printed as `None`.
#[inline(never)]
pub fn composite_debug(x: &dyn Composite, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(x.xml_type_ident());
    if let Ok(info) = x.xml_type_info().as_composite() {
        for field in info.iter() {
            match x.field(field.name()) {
                Some(value) => debug.field(field.name(), &value as &dyn fmt::Debug),
                None => debug.field(field.name(), &None::<()>),
            };
        }
    }
    debug.finish()
}
