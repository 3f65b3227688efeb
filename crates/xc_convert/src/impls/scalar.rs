use alloc::string::String;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::XmlValue;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{Scalar, ScalarMut, ScalarRef};
use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// Shared implementation

macro_rules! impl_scalar_value {
    ($ty:ty, $kind:ident, $path:literal, $ident:literal, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $ident
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind)))
            }
        }

        impl XmlValue for $ty {
            crate::value::impl_xml_cast_fn!(Scalar);

            #[inline]
            fn xml_partial_eq(&self, other: &dyn XmlValue) -> bool {
                other.downcast_ref::<Self>().is_some_and(|other| self == other)
            }
        }

        impl GetTypeMeta for $ty {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }
        }

        crate::member::impl_self_member!($ty);
    };
}

macro_rules! impl_copy_scalar {
    ($($ty:ty => $kind:ident, $path:literal, $ident:literal, $module:expr;)*) => {$(
        impl_scalar_value!($ty, $kind, $path, $ident, $module);

        impl Scalar for $ty {
            #[inline]
            fn scalar_ref(&self) -> ScalarRef<'_> {
                ScalarRef::$kind(*self)
            }

            #[inline]
            fn scalar_mut(&mut self) -> ScalarMut<'_> {
                ScalarMut::$kind(self)
            }
        }
    )*};
}

// -----------------------------------------------------------------------------
// Implementations

impl_copy_scalar! {
    char => Char, "char", "char", None;
    i8 => I8, "i8", "i8", None;
    i16 => I16, "i16", "i16", None;
    i32 => I32, "i32", "i32", None;
    i64 => I64, "i64", "i64", None;
    u8 => U8, "u8", "u8", None;
    u16 => U16, "u16", "u16", None;
    u32 => U32, "u32", "u32", None;
    u64 => U64, "u64", "u64", None;
    f32 => F32, "f32", "f32", None;
    f64 => F64, "f64", "f64", None;
    bool => Bool, "bool", "bool", None;
    Decimal => Decimal, "rust_decimal::Decimal", "Decimal", Some("rust_decimal");
    NaiveDateTime => Timestamp, "chrono::NaiveDateTime", "NaiveDateTime", Some("chrono");
}

impl_scalar_value!(
    String,
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string")
);

impl Scalar for String {
    #[inline]
    fn scalar_ref(&self) -> ScalarRef<'_> {
        ScalarRef::String(self.as_str())
    }

    #[inline]
    fn scalar_mut(&mut self) -> ScalarMut<'_> {
        ScalarMut::String(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use rust_decimal::Decimal;

    use crate::XmlValue;
    use crate::info::{ScalarKind, TypeKind, Typed};
    use crate::ops::{ScalarRef, XmlRef};

    #[test]
    fn scalar_kinds() {
        assert_eq!(u8::type_info().as_scalar().unwrap().kind(), ScalarKind::U8);
        assert_eq!(String::type_info().as_scalar().unwrap().kind(), ScalarKind::String);
        assert_eq!(Decimal::type_info().as_scalar().unwrap().kind(), ScalarKind::Decimal);
        assert_eq!(true.xml_kind(), TypeKind::Scalar);
    }

    #[test]
    fn scalar_views() {
        let text = String::from("abc");
        let XmlRef::Scalar(scalar) = text.xml_ref() else {
            panic!("String is a scalar");
        };
        assert_eq!(scalar.scalar_ref(), ScalarRef::String("abc"));
    }

    #[test]
    fn scalar_partial_eq_checks_type() {
        assert!(5_i32.xml_partial_eq(&5_i32));
        assert!(!5_i32.xml_partial_eq(&5_i64));
        assert!(!f64::NAN.xml_partial_eq(&f64::NAN));
    }

    #[test]
    fn default_construction() {
        let value = String::type_info().new_default();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "");
    }
}
