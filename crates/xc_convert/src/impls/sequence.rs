use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::XmlValue;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{SequenceInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Sequence, SequenceIter};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

macro_rules! impl_sequence {
    ($ty:ident, $module:literal, $get:expr, $push:ident) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ty), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ty), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: XmlValue + Typed + GetTypeMeta> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Sequence(SequenceInfo::new::<Self, T>()))
            }
        }

        impl<T: XmlValue + Typed + GetTypeMeta> XmlValue for $ty<T> {
            crate::value::impl_xml_cast_fn!(Sequence);

            #[inline]
            fn xml_partial_eq(&self, other: &dyn XmlValue) -> bool {
                crate::impls::sequence_partial_eq(self, other)
            }
        }

        impl<T: XmlValue + Typed + GetTypeMeta> Sequence for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn XmlValue> {
                $get(self, index).map(XmlValue::as_xml)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn iter(&self) -> SequenceIter<'_> {
                SequenceIter::new(self)
            }

            fn push(&mut self, item: Box<dyn XmlValue>) -> Result<(), Box<dyn XmlValue>> {
                $ty::$push(self, item.take::<T>()?);
                Ok(())
            }
        }

        impl<T: XmlValue + Typed + GetTypeMeta> GetTypeMeta for $ty<T> {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            #[inline]
            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }

        crate::member::impl_self_member!(<T> $ty<T> where T: XmlValue + Typed + GetTypeMeta);
    };
}

impl_sequence!(Vec, "alloc::vec", <[T]>::get, push);
impl_sequence!(VecDeque, "alloc::collections", VecDeque::<T>::get, push_back);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use crate::XmlValue;
    use crate::info::{TypePath, Typed};
    use crate::ops::Sequence;

    #[test]
    fn sequence_type_paths() {
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<String>>::type_name(), "Vec<String>");
        assert_eq!(
            <VecDeque<i32>>::type_path(),
            "alloc::collections::VecDeque<i32>"
        );
    }

    #[test]
    fn sequence_item_type() {
        let info = <Vec<u16>>::type_info().as_sequence().unwrap();
        assert_eq!(info.item_id(), Some(TypeId::of::<u16>()));
        assert!(info.item_info().unwrap().type_is::<u16>());
    }

    #[test]
    fn push_rejects_other_types() {
        let mut seq: Vec<u8> = vec![1];
        assert!(Sequence::push(&mut seq, Box::new(2_u8)).is_ok());
        assert!(Sequence::push(&mut seq, Box::new(3_i64)).is_err());
        assert_eq!(seq, [1, 2]);
    }

    #[test]
    fn sequence_equality_is_ordered() {
        let a: Vec<u8> = vec![1, 2];
        let b: Vec<u8> = vec![2, 1];
        assert!(a.xml_partial_eq(&a.clone()));
        assert!(!a.xml_partial_eq(&b));

        let deque: VecDeque<u8> = VecDeque::from(vec![1, 2]);
        assert!(!a.xml_partial_eq(&deque));
    }
}
