use alloc::borrow::Cow;

use crate::info::{FieldAttributes, NamedField};
use crate::ops::Composite;

/// Item element name of a sequence, and pair element name of a mapping,
/// unless the member overrides it.
pub const DEFAULT_COLLECTION_ELEMENT_NAME: &str = "Element";

/// Key element name inside a mapping pair, unless the member overrides it.
pub const DEFAULT_KEY_NAME: &str = "Key";

/// Value element name inside a mapping pair, unless the member overrides it.
pub const DEFAULT_VALUE_NAME: &str = "Value";

/// Element name of a composite written as the root.
///
/// The runtime identifier of the instance wins over the static custom name
/// of the type, which wins over the type's simple name.
pub(crate) fn composite_name(value: &dyn Composite) -> Cow<'_, str> {
    if let Some(identifier) = value.identifier() {
        return identifier;
    }
    let custom = value
        .xml_type_info()
        .as_composite()
        .ok()
        .and_then(|info| info.custom_name());
    Cow::Borrowed(custom.unwrap_or_else(|| value.xml_type_ident()))
}

/// Element name of a member: the custom element name, else the member name.
#[inline]
pub(crate) fn member_name(field: &NamedField) -> &'static str {
    field.attributes().element_name.unwrap_or(field.name())
}

/// Names used below a sequence or mapping member.
///
/// Key and value names default independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CollectionNames {
    pub element: &'static str,
    pub key: &'static str,
    pub value: &'static str,
}

impl CollectionNames {
    pub const DEFAULT: Self = Self {
        element: DEFAULT_COLLECTION_ELEMENT_NAME,
        key: DEFAULT_KEY_NAME,
        value: DEFAULT_VALUE_NAME,
    };

    pub const fn of(attributes: &FieldAttributes) -> Self {
        Self {
            element: match attributes.collection_element_name {
                Some(name) => name,
                None => DEFAULT_COLLECTION_ELEMENT_NAME,
            },
            key: match attributes.key_name {
                Some(name) => name,
                None => DEFAULT_KEY_NAME,
            },
            value: match attributes.value_name {
                Some(name) => name,
                None => DEFAULT_VALUE_NAME,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionNames;
    use crate::info::FieldAttributes;

    #[test]
    fn key_and_value_names_default_independently() {
        let names = CollectionNames::of(&FieldAttributes::new().with_value_name("V"));
        assert_eq!(names.element, "Element");
        assert_eq!(names.key, "Key");
        assert_eq!(names.value, "V");

        assert_eq!(CollectionNames::of(&FieldAttributes::DEFAULT), CollectionNames::DEFAULT);
    }
}
