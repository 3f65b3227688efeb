use alloc::string::String;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::XmlValue;
use crate::info::ScalarKind;

// -----------------------------------------------------------------------------
// Scalar

/// A value written as the text of a single element.
///
/// The set of scalars is closed; each one maps to a [`ScalarKind`] and
/// exposes itself through the matching [`ScalarRef`] / [`ScalarMut`] variant.
/// Text formatting and parsing live in the codec, so every scalar of the
/// same kind reads and writes identically.
pub trait Scalar: XmlValue {
    fn scalar_ref(&self) -> ScalarRef<'_>;

    fn scalar_mut(&mut self) -> ScalarMut<'_>;
}

// -----------------------------------------------------------------------------
// ScalarRef / ScalarMut

/// An immutable view of a scalar, one variant per [`ScalarKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    String(&'a str),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

/// A mutable view of a scalar, one variant per [`ScalarKind`].
#[derive(Debug)]
pub enum ScalarMut<'a> {
    String(&'a mut String),
    Char(&'a mut char),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Decimal(&'a mut Decimal),
    Bool(&'a mut bool),
    Timestamp(&'a mut NaiveDateTime),
}

macro_rules! impl_kind_fn {
    ($($variant:ident),*) => {
        impl ScalarRef<'_> {
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$variant(..) => ScalarKind::$variant,)*
                }
            }
        }

        impl ScalarMut<'_> {
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$variant(..) => ScalarKind::$variant,)*
                }
            }
        }
    };
}

impl_kind_fn!(
    String, Char, I8, I16, I32, I64, U8, U16, U32, U64, F32, F64, Decimal, Bool, Timestamp
);
