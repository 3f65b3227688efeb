use alloc::boxed::Box;

use crate::XmlValue;
use crate::info::{TypeInfo, Typed};
use crate::registry::{GetTypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// Member

/// The static bridge from the type of a struct field to its descriptor.
///
/// A member has a declared type, which is what the codec classifies and
/// deserializes, and may be absent, in which case nothing is written.
///
/// - Every convertible value type is a member of itself and never absent.
/// - `Option<T>` is a member declared as `T`; `None` is absent.
///
/// `#[derive(XmlConvert)]` implements this for the deriving struct and
/// calls it for every field.
///
/// # Examples
///
/// ```
/// use xc_convert::{Member, XmlValue};
///
/// let mut age: Option<u32> = None;
/// assert!(age.member_ref().is_none());
///
/// age.member_assign(Box::new(42u32)).unwrap();
/// assert_eq!(age, Some(42));
///
/// // A value of the wrong type is handed back.
/// assert!(age.member_assign(Box::new(String::new())).is_err());
/// ```
pub trait Member: Send + Sync + 'static {
    /// The declared type of the member.
    type Declared: XmlValue + GetTypeMeta;

    /// Type information of the declared type.
    #[inline]
    fn member_info() -> &'static TypeInfo {
        <Self::Declared as Typed>::type_info()
    }

    /// Returns the value, or `None` if the member is absent.
    fn member_ref(&self) -> Option<&dyn XmlValue>;

    /// Replaces the member with `value`, or hands `value` back if it is not
    /// of the declared type.
    fn member_assign(&mut self, value: Box<dyn XmlValue>) -> Result<(), Box<dyn XmlValue>>;

    /// Registers the declared type and its dependencies.
    #[inline]
    fn register_member(registry: &mut TypeRegistry) {
        registry.register::<Self::Declared>();
    }
}

impl<T: XmlValue + GetTypeMeta> Member for Option<T> {
    type Declared = T;

    #[inline]
    fn member_ref(&self) -> Option<&dyn XmlValue> {
        self.as_ref().map(XmlValue::as_xml)
    }

    fn member_assign(&mut self, value: Box<dyn XmlValue>) -> Result<(), Box<dyn XmlValue>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements [`Member`] for a value type that is its own declared type.
///
/// Generic types list their parameters first: `impl_self_member!(<T> Vec<T> where T: ...)`.
macro_rules! impl_self_member {
    (@body) => {
        type Declared = Self;

        #[inline]
        fn member_ref(&self) -> ::core::option::Option<&dyn $crate::XmlValue> {
            ::core::option::Option::Some(self)
        }

        fn member_assign(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::XmlValue>,
        ) -> ::core::result::Result<(), ::alloc::boxed::Box<dyn $crate::XmlValue>> {
            *self = value.take::<Self>()?;
            ::core::result::Result::Ok(())
        }
    };
    (<$($param:ident),*> $ty:ty where $($pred:tt)*) => {
        impl<$($param),*> $crate::Member for $ty where $($pred)* {
            $crate::member::impl_self_member!(@body);
        }
    };
    ($ty:ty) => {
        impl $crate::Member for $ty {
            $crate::member::impl_self_member!(@body);
        }
    };
}

pub(crate) use impl_self_member;
