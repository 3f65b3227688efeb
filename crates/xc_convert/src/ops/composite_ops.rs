use alloc::borrow::Cow;
use alloc::boxed::Box;

use crate::XmlValue;

// -----------------------------------------------------------------------------
// Composite

/// A struct with named members, the default classification.
///
/// Members are described by the [`CompositeInfo`] of the type and accessed
/// here by member name. Implemented by
/// [`#[derive(XmlConvert)]`](crate::derive::XmlConvert).
///
/// [`CompositeInfo`]: crate::info::CompositeInfo
pub trait Composite: XmlValue {
    /// Returns the member named `name`, or `None` if it does not exist or is
    /// absent.
    fn field(&self, name: &str) -> Option<&dyn XmlValue>;

    /// Replaces the member named `name`, or hands `value` back if there is no
    /// such member or the type does not match.
    fn set_field(&mut self, name: &str, value: Box<dyn XmlValue>) -> Result<(), Box<dyn XmlValue>>;

    /// The runtime element name of this value, if the type supplies one.
    ///
    /// Outranks the static `#[xml(name = "...")]` of the type.
    #[inline]
    fn identifier(&self) -> Option<Cow<'_, str>> {
        None
    }
}

// -----------------------------------------------------------------------------
// XmlIdentity

/// A per-instance element name for a composite.
///
/// Opt in with `#[xml(identity)]` on the deriving struct.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use xc_convert::derive::XmlConvert;
/// use xc_convert::ops::{Composite, XmlIdentity};
///
/// #[derive(XmlConvert, Default)]
/// #[xml(identity, name = "Shape")]
/// struct Shape {
///     sides: u8,
/// }
///
/// impl XmlIdentity for Shape {
///     fn xml_identifier(&self) -> Cow<'_, str> {
///         match self.sides {
///             3 => Cow::Borrowed("Triangle"),
///             n => Cow::Owned(format!("Polygon{n}")),
///         }
///     }
/// }
///
/// assert_eq!(Shape { sides: 3 }.identifier().unwrap(), "Triangle");
/// ```
pub trait XmlIdentity {
    fn xml_identifier(&self) -> Cow<'_, str>;
}
