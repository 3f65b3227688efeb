use xc_tree::Element;

use crate::XmlValue;
use crate::info::TypeInfo;
use crate::options::ConvertOptions;
use crate::registry::TypeRegistry;

/// Name of the attribute holding the type path of a value.
pub const TYPE_ATTRIBUTE: &str = "Type";

/// Stamps the runtime type path of `value` on `element`, unless excluded.
#[inline]
pub(crate) fn annotate(element: &mut Element, value: &dyn XmlValue, options: ConvertOptions) {
    if options.annotate_types() {
        element.set_attribute(TYPE_ATTRIBUTE, value.xml_type_path());
    }
}

/// The type to read `element` as.
///
/// A `Type` attribute naming a registered type wins. An unregistered tag is
/// ignored, and the declared type is used; `None` means neither exists.
pub(crate) fn effective_type(
    element: &Element,
    declared: Option<&'static TypeInfo>,
    registry: &TypeRegistry,
) -> Option<&'static TypeInfo> {
    if let Some(tag) = element.attribute(TYPE_ATTRIBUTE) {
        match registry.get_with_type_path(tag) {
            Some(meta) => return Some(meta.type_info()),
            None => log::debug!("type tag `{tag}` on <{}> is not registered", element.name()),
        }
    }
    declared
}

#[cfg(test)]
mod tests {
    use xc_tree::Element;

    use super::effective_type;
    use crate::info::Typed;
    use crate::registry::TypeRegistry;

    #[test]
    fn registered_tag_wins() {
        let registry = TypeRegistry::new();
        let element = Element::new("Item").with_attribute("Type", "i64");

        let ty = effective_type(&element, Some(u8::type_info()), &registry).unwrap();
        assert!(ty.type_is::<i64>());
    }

    #[test]
    fn unknown_tag_falls_back() {
        let registry = TypeRegistry::new();
        let element = Element::new("Item").with_attribute("Type", "System.Int32");

        let ty = effective_type(&element, Some(u8::type_info()), &registry).unwrap();
        assert!(ty.type_is::<u8>());
        assert!(effective_type(&element, None, &registry).is_none());
    }
}
