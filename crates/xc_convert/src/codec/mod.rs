//! The recursive codec and its entry points.
//!
//! Serialization writes a composite as the root element, then one child
//! element per member, dispatching on the kind of every value:
//!
//! - scalars become element text,
//! - sequences become one child per item,
//! - mappings become one pair element per entry, holding key then value,
//! - composites recurse into their members.
//!
//! Every element below the root carries a `Type` attribute with the type
//! path of its value, unless [`ConvertOptions::EXCLUDE_TYPE_ANNOTATIONS`] is
//! set. Deserialization default-constructs the target and fills in whatever
//! the document provides; see [`XmlConverter`] for the leniency rules.

// -----------------------------------------------------------------------------
// Modules

mod annotation;
mod composite;
mod mapping;
mod naming;
mod scalar;
mod sequence;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use annotation::TYPE_ATTRIBUTE;
pub use naming::{DEFAULT_COLLECTION_ELEMENT_NAME, DEFAULT_KEY_NAME, DEFAULT_VALUE_NAME};
pub use scalar::TIMESTAMP_FORMAT;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};

use xc_tree::Element;

use crate::XmlValue;
use crate::error::XmlError;
use crate::info::{TypeInfo, Typed};
use crate::options::ConvertOptions;
use crate::registry::TypeRegistry;

use composite::{Reader, Writer};

// -----------------------------------------------------------------------------
// XmlConverter

/// Converts values to and from XML with a fixed registry and options.
///
/// The registry is the allow-list for `Type` attributes: a tag naming an
/// unregistered type is ignored and the declared type is used instead.
///
/// Deserialization never fails because of the content of a member:
///
/// - a missing member element leaves the member at its default,
/// - unparseable scalar text leaves the value at its default,
/// - a collection item whose type is neither tagged nor declared is skipped,
/// - a mapping pair with fewer than two children drops it and all later pairs.
///
/// # Examples
///
/// ```
/// use xc_convert::derive::XmlConvert;
/// use xc_convert::registry::TypeRegistry;
/// use xc_convert::{ConvertOptions, XmlConverter};
///
/// #[derive(XmlConvert, Default, Debug, PartialEq)]
/// struct Person {
///     name: String,
///     age: u32,
///     nicknames: Vec<String>,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Person>();
/// let converter = XmlConverter::new(&registry)
///     .with_options(ConvertOptions::EXCLUDE_TYPE_ANNOTATIONS);
///
/// let person = Person {
///     name: "Ada".into(),
///     age: 36,
///     nicknames: vec!["Countess".into()],
/// };
///
/// let text = converter.serialize_to_text(&person).unwrap();
/// assert_eq!(
///     text,
///     "<Person><name>Ada</name><age>36</age>\
///      <nicknames><Element>Countess</Element></nicknames></Person>"
/// );
///
/// let back: Person = converter.deserialize_from_text(&text).unwrap();
/// assert_eq!(back, person);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct XmlConverter<'a> {
    registry: &'a TypeRegistry,
    options: ConvertOptions,
}

impl<'a> XmlConverter<'a> {
    /// Creates a converter with the default options.
    #[inline]
    pub const fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            options: ConvertOptions::empty(),
        }
    }

    #[inline]
    pub const fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub const fn options(&self) -> ConvertOptions {
        self.options
    }

    #[inline]
    pub const fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    #[inline]
    fn writer(&self) -> Writer {
        Writer {
            options: self.options,
        }
    }

    #[inline]
    fn reader(&self) -> Reader<'a> {
        Reader {
            registry: self.registry,
        }
    }

    /// Serializes a composite to an element tree.
    ///
    /// Returns [`XmlError::NotComposite`] for any other kind of value.
    pub fn serialize_to_tree(&self, value: &dyn XmlValue) -> Result<Element, XmlError> {
        log::trace!("serializing `{}`", value.xml_type_path());
        self.writer().write_root(value)
    }

    /// Serializes a composite to compact XML text.
    pub fn serialize_to_text(&self, value: &dyn XmlValue) -> Result<String, XmlError> {
        self.serialize_to_tree(value).map(|tree| tree.to_string())
    }

    /// Serializes a composite to XML text indented by two spaces.
    pub fn serialize_to_text_pretty(&self, value: &dyn XmlValue) -> Result<String, XmlError> {
        self.serialize_to_tree(value).map(|tree| format!("{tree:#}"))
    }

    /// Deserializes a composite of type `T` from an element tree.
    pub fn deserialize_from_tree<T: XmlValue + Typed>(
        &self,
        element: &Element,
    ) -> Result<T, XmlError> {
        let value = self.deserialize_from_tree_by_info(T::type_info(), element)?;
        value.take::<T>().map_err(|value| XmlError::MismatchedRoot {
            expected: T::type_path(),
            found: value.xml_type_path(),
        })
    }

    /// Parses `text` and deserializes a composite of type `T` from it.
    pub fn deserialize_from_text<T: XmlValue + Typed>(&self, text: &str) -> Result<T, XmlError> {
        let element = Element::parse(text)?;
        self.deserialize_from_tree(&element)
    }

    /// Deserializes a composite of the type described by `info`.
    pub fn deserialize_from_tree_by_info(
        &self,
        info: &'static TypeInfo,
        element: &Element,
    ) -> Result<Box<dyn XmlValue>, XmlError> {
        log::trace!("deserializing `{}` from <{}>", info.type_path(), element.name());
        self.reader().read_root(element, info)
    }

    /// Deserializes a composite of the registered type with path `type_path`.
    ///
    /// Returns [`XmlError::UnknownType`] if the registry does not know it.
    pub fn deserialize_from_tree_by_path(
        &self,
        type_path: &str,
        element: &Element,
    ) -> Result<Box<dyn XmlValue>, XmlError> {
        let meta = self
            .registry
            .get_with_type_path(type_path)
            .ok_or_else(|| XmlError::UnknownType {
                type_path: type_path.to_string(),
            })?;
        self.deserialize_from_tree_by_info(meta.type_info(), element)
    }

    /// Parses `text` and deserializes a composite of the registered type with
    /// path `type_path` from it.
    pub fn deserialize_from_text_by_path(
        &self,
        type_path: &str,
        text: &str,
    ) -> Result<Box<dyn XmlValue>, XmlError> {
        let element = Element::parse(text)?;
        self.deserialize_from_tree_by_path(type_path, &element)
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Serializes a composite to compact XML text.
///
/// See [`XmlConverter::serialize_to_text`].
pub fn serialize_to_text(
    value: &dyn XmlValue,
    options: ConvertOptions,
) -> Result<String, XmlError> {
    serialize_to_tree(value, options).map(|tree| tree.to_string())
}

/// Serializes a composite to an element tree.
///
/// Writing never consults a registry.
pub fn serialize_to_tree(
    value: &dyn XmlValue,
    options: ConvertOptions,
) -> Result<Element, XmlError> {
    log::trace!("serializing `{}`", value.xml_type_path());
    Writer { options }.write_root(value)
}

/// Parses `text` and deserializes a composite of type `T` from it.
///
/// See [`XmlConverter::deserialize_from_text`].
pub fn deserialize_from_text<T: XmlValue + Typed>(
    text: &str,
    registry: &TypeRegistry,
    options: ConvertOptions,
) -> Result<T, XmlError> {
    XmlConverter::new(registry)
        .with_options(options)
        .deserialize_from_text(text)
}

/// Deserializes a composite of type `T` from an element tree.
///
/// See [`XmlConverter::deserialize_from_tree`].
pub fn deserialize_from_tree<T: XmlValue + Typed>(
    element: &Element,
    registry: &TypeRegistry,
    options: ConvertOptions,
) -> Result<T, XmlError> {
    XmlConverter::new(registry)
        .with_options(options)
        .deserialize_from_tree(element)
}
