use alloc::string::{String, ToString};
use core::str::FromStr;

use chrono::NaiveDateTime;

use crate::ops::{ScalarMut, ScalarRef};

/// Text layout of timestamps: sortable, fractional seconds only when present.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The canonical text of a scalar.
///
/// Integers are base 10, floats and decimals use their shortest round-trip
/// form, booleans are `true` / `false`.
pub(crate) fn format(value: ScalarRef<'_>) -> String {
    match value {
        ScalarRef::String(v) => String::from(v),
        ScalarRef::Char(v) => v.to_string(),
        ScalarRef::I8(v) => v.to_string(),
        ScalarRef::I16(v) => v.to_string(),
        ScalarRef::I32(v) => v.to_string(),
        ScalarRef::I64(v) => v.to_string(),
        ScalarRef::U8(v) => v.to_string(),
        ScalarRef::U16(v) => v.to_string(),
        ScalarRef::U32(v) => v.to_string(),
        ScalarRef::U64(v) => v.to_string(),
        ScalarRef::F32(v) => v.to_string(),
        ScalarRef::F64(v) => v.to_string(),
        ScalarRef::Decimal(v) => v.to_string(),
        ScalarRef::Bool(v) => v.to_string(),
        ScalarRef::Timestamp(v) => v.format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Parses `text` into `target`.
///
/// Returns `false` and leaves `target` untouched if the text does not parse.
/// Surrounding whitespace is ignored except for strings.
pub(crate) fn parse(target: ScalarMut<'_>, text: &str) -> bool {
    let trimmed = text.trim();
    match target {
        ScalarMut::String(v) => {
            text.clone_into(v);
            true
        }
        ScalarMut::Char(v) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    *v = c;
                    true
                }
                _ => false,
            }
        }
        ScalarMut::I8(v) => assign(v, trimmed),
        ScalarMut::I16(v) => assign(v, trimmed),
        ScalarMut::I32(v) => assign(v, trimmed),
        ScalarMut::I64(v) => assign(v, trimmed),
        ScalarMut::U8(v) => assign(v, trimmed),
        ScalarMut::U16(v) => assign(v, trimmed),
        ScalarMut::U32(v) => assign(v, trimmed),
        ScalarMut::U64(v) => assign(v, trimmed),
        ScalarMut::F32(v) => assign(v, trimmed),
        ScalarMut::F64(v) => assign(v, trimmed),
        ScalarMut::Decimal(v) => assign(v, trimmed),
        ScalarMut::Bool(v) => {
            if trimmed.eq_ignore_ascii_case("true") {
                *v = true;
            } else if trimmed.eq_ignore_ascii_case("false") {
                *v = false;
            } else {
                return false;
            }
            true
        }
        ScalarMut::Timestamp(v) => match NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT) {
            Ok(parsed) => {
                *v = parsed;
                true
            }
            Err(_) => false,
        },
    }
}

#[inline]
fn assign<T: FromStr>(target: &mut T, text: &str) -> bool {
    match text.parse() {
        Ok(value) => {
            *target = value;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    use super::{format, parse};
    use crate::ops::{ScalarMut, ScalarRef};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_milli_opt(13, 5, 9, 250)
            .unwrap()
    }

    #[test]
    fn format_is_canonical() {
        assert_eq!(format(ScalarRef::I32(-42)), "-42");
        assert_eq!(format(ScalarRef::Bool(true)), "true");
        assert_eq!(format(ScalarRef::F64(0.1)), "0.1");
        assert_eq!(format(ScalarRef::Char('x')), "x");
        assert_eq!(format(ScalarRef::Decimal(Decimal::new(12345, 2))), "123.45");
        assert_eq!(format(ScalarRef::Timestamp(timestamp())), "2024-02-29T13:05:09.250");
    }

    #[test]
    fn parse_round_trips_format() {
        let mut value = NaiveDateTime::default();
        assert!(parse(ScalarMut::Timestamp(&mut value), "2024-02-29T13:05:09.250"));
        assert_eq!(value, timestamp());

        let mut value = 0.0_f32;
        assert!(parse(ScalarMut::F32(&mut value), &format(ScalarRef::F32(1.1))));
        assert_eq!(value, 1.1);
    }

    #[test]
    fn parse_failure_keeps_target() {
        let mut number = 7_u8;
        assert!(!parse(ScalarMut::U8(&mut number), "300"));
        assert!(!parse(ScalarMut::U8(&mut number), "abc"));
        assert_eq!(number, 7);

        let mut c = 'a';
        assert!(!parse(ScalarMut::Char(&mut c), "ab"));
        assert!(!parse(ScalarMut::Char(&mut c), ""));
        assert_eq!(c, 'a');
    }

    #[test]
    fn parse_is_lenient_about_layout() {
        let mut flag = false;
        assert!(parse(ScalarMut::Bool(&mut flag), " True\n"));
        assert!(flag);

        let mut number = 0_i64;
        assert!(parse(ScalarMut::I64(&mut number), "\n  12 "));
        assert_eq!(number, 12);

        let mut text = String::from("old");
        assert!(parse(ScalarMut::String(&mut text), " keep spaces "));
        assert_eq!(text, " keep spaces ");
    }
}
