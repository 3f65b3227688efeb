use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;
use std::hash::RandomState;

use xc_utils::hash::FixedHashState;

use crate::XmlValue;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MappingInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Mapping, MappingIter};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// Hasher paths

impl TypePath for RandomState {
    #[inline]
    fn type_path() -> &'static str {
        "std::hash::RandomState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "RandomState"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "RandomState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::hash")
    }
}

impl TypePath for FixedHashState {
    #[inline]
    fn type_path() -> &'static str {
        "xc_utils::hash::FixedHashState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "FixedHashState"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "FixedHashState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("xc_utils::hash")
    }
}

// -----------------------------------------------------------------------------
// BTreeMap

impl<K: TypePath, V: TypePath> TypePath for BTreeMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "alloc::collections::BTreeMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["BTreeMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "BTreeMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<K, V> Typed for BTreeMap<K, V>
where
    K: XmlValue + Typed + GetTypeMeta + Ord,
    V: XmlValue + Typed + GetTypeMeta,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Mapping(MappingInfo::new::<Self, K, V>()))
    }
}

impl<K, V> XmlValue for BTreeMap<K, V>
where
    K: XmlValue + Typed + GetTypeMeta + Ord,
    V: XmlValue + Typed + GetTypeMeta,
{
    crate::value::impl_xml_cast_fn!(Mapping);

    #[inline]
    fn xml_partial_eq(&self, other: &dyn XmlValue) -> bool {
        crate::impls::mapping_partial_eq(self, other)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: XmlValue + Typed + GetTypeMeta + Ord,
    V: XmlValue + Typed + GetTypeMeta,
{
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> MappingIter<'_> {
        Box::new(BTreeMap::iter(self).map(|(k, v)| (k.as_xml(), v.as_xml())))
    }

    fn insert(
        &mut self,
        key: Box<dyn XmlValue>,
        value: Box<dyn XmlValue>,
    ) -> Result<(), (Box<dyn XmlValue>, Box<dyn XmlValue>)> {
        let (key, value) = take_entry::<K, V>(key, value)?;
        BTreeMap::insert(self, key, value);
        Ok(())
    }
}

impl<K, V> GetTypeMeta for BTreeMap<K, V>
where
    K: XmlValue + Typed + GetTypeMeta + Ord,
    V: XmlValue + Typed + GetTypeMeta,
{
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<K>();
        registry.register::<V>();
    }
}

crate::member::impl_self_member!(
    <K, V> BTreeMap<K, V>
    where
        K: XmlValue + Typed + GetTypeMeta + Ord,
        V: XmlValue + Typed + GetTypeMeta,
);

// -----------------------------------------------------------------------------
// HashMap

impl<K: TypePath, V: TypePath, S: TypePath> TypePath for HashMap<K, V, S> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "std::collections::HashMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ", ",
                S::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "HashMap<",
                K::type_name(),
                ", ",
                V::type_name(),
                ", ",
                S::type_name(),
                ">",
            ])
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "HashMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::collections")
    }
}

impl<K, V, S> Typed for HashMap<K, V, S>
where
    K: XmlValue + Typed + GetTypeMeta + Eq + Hash,
    V: XmlValue + Typed + GetTypeMeta,
    S: TypePath + BuildHasher + Default + Send + Sync + 'static,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Mapping(MappingInfo::new::<Self, K, V>()))
    }
}

impl<K, V, S> XmlValue for HashMap<K, V, S>
where
    K: XmlValue + Typed + GetTypeMeta + Eq + Hash,
    V: XmlValue + Typed + GetTypeMeta,
    S: TypePath + BuildHasher + Default + Send + Sync + 'static,
{
    crate::value::impl_xml_cast_fn!(Mapping);

    #[inline]
    fn xml_partial_eq(&self, other: &dyn XmlValue) -> bool {
        crate::impls::mapping_partial_eq(self, other)
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: XmlValue + Typed + GetTypeMeta + Eq + Hash,
    V: XmlValue + Typed + GetTypeMeta,
    S: TypePath + BuildHasher + Default + Send + Sync + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> MappingIter<'_> {
        Box::new(HashMap::iter(self).map(|(k, v)| (k.as_xml(), v.as_xml())))
    }

    fn insert(
        &mut self,
        key: Box<dyn XmlValue>,
        value: Box<dyn XmlValue>,
    ) -> Result<(), (Box<dyn XmlValue>, Box<dyn XmlValue>)> {
        let (key, value) = take_entry::<K, V>(key, value)?;
        HashMap::insert(self, key, value);
        Ok(())
    }
}

impl<K, V, S> GetTypeMeta for HashMap<K, V, S>
where
    K: XmlValue + Typed + GetTypeMeta + Eq + Hash,
    V: XmlValue + Typed + GetTypeMeta,
    S: TypePath + BuildHasher + Default + Send + Sync + 'static,
{
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<K>();
        registry.register::<V>();
    }
}

crate::member::impl_self_member!(
    <K, V, S> HashMap<K, V, S>
    where
        K: XmlValue + Typed + GetTypeMeta + Eq + Hash,
        V: XmlValue + Typed + GetTypeMeta,
        S: TypePath + BuildHasher + Default + Send + Sync + 'static,
);

// -----------------------------------------------------------------------------
// Auxiliary

/// Downcasts a boxed entry, handing both back if either type mismatches.
#[inline(never)]
fn take_entry<K: XmlValue, V: XmlValue>(
    key: Box<dyn XmlValue>,
    value: Box<dyn XmlValue>,
) -> Result<(K, V), (Box<dyn XmlValue>, Box<dyn XmlValue>)> {
    if !key.is::<K>() || !value.is::<V>() {
        return Err((key, value));
    }
    match (key.take::<K>(), value.take::<V>()) {
        (Ok(key), Ok(value)) => Ok((key, value)),
        _ => unreachable!("types are already checked"),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::XmlValue;
    use crate::info::{TypePath, Typed};
    use crate::ops::Mapping;

    #[test]
    fn mapping_type_paths() {
        assert_eq!(
            <BTreeMap<String, u8>>::type_path(),
            "alloc::collections::BTreeMap<alloc::string::String, u8>"
        );
        assert_eq!(<HashMap<u8, u8>>::type_name(), "HashMap<u8, u8, RandomState>");
    }

    #[test]
    fn mapping_key_and_value_types() {
        let info = <BTreeMap<String, i32>>::type_info().as_mapping().unwrap();
        assert!(info.key_info().unwrap().type_is::<String>());
        assert!(info.value_info().unwrap().type_is::<i32>());
    }

    #[test]
    fn insert_rejects_other_types() {
        let mut map: BTreeMap<u8, String> = BTreeMap::new();
        assert!(Mapping::insert(&mut map, Box::new(1_u8), Box::new(String::from("a"))).is_ok());

        let (key, value) =
            Mapping::insert(&mut map, Box::new(2_u8), Box::new(3_u8)).unwrap_err();
        assert_eq!(key.take::<u8>().unwrap(), 2);
        assert_eq!(value.take::<u8>().unwrap(), 3);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn mapping_equality_ignores_order() {
        let mut a: HashMap<u8, u8> = HashMap::new();
        let mut b: HashMap<u8, u8> = HashMap::new();
        for i in 0..16 {
            a.insert(i, i * 2);
            b.insert(15 - i, (15 - i) * 2);
        }
        assert!(a.xml_partial_eq(&b));

        b.insert(0, 1);
        assert!(!a.xml_partial_eq(&b));
    }
}
