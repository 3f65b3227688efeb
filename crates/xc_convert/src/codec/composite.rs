use alloc::boxed::Box;

use xc_tree::Element;

use crate::XmlValue;
use crate::codec::naming::{self, CollectionNames};
use crate::codec::{annotation, mapping, scalar, sequence};
use crate::error::XmlError;
use crate::info::TypeInfo;
use crate::ops::{Composite, XmlMut, XmlRef};
use crate::options::ConvertOptions;
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// Writer

/// Serializing half of the dispatcher.
pub(crate) struct Writer {
    pub options: ConvertOptions,
}

impl Writer {
    /// Writes a composite as the root element, named by its identity.
    pub fn write_root(&self, value: &dyn XmlValue) -> Result<Element, XmlError> {
        let XmlRef::Composite(composite) = value.xml_ref() else {
            return Err(XmlError::NotComposite {
                type_path: value.xml_type_path(),
            });
        };

        let mut element = Element::new(naming::composite_name(composite));
        self.write_members(composite, &mut element);
        Ok(element)
    }

    /// Writes any value as an element called `name`, tagged with its type.
    ///
    /// `names` applies when the value is a sequence or a mapping.
    pub fn write_value(&self, value: &dyn XmlValue, name: &str, names: CollectionNames) -> Element {
        let mut element = Element::new(name);
        match value.xml_ref() {
            XmlRef::Scalar(data) => element.set_text(scalar::format(data.scalar_ref())),
            XmlRef::Sequence(data) => sequence::write(self, data, &mut element, names),
            XmlRef::Mapping(data) => mapping::write(self, data, &mut element, names),
            XmlRef::Composite(data) => self.write_members(data, &mut element),
        }
        annotation::annotate(&mut element, value, self.options);
        element
    }

    /// Appends one child per present member, in declaration order.
    fn write_members(&self, value: &dyn Composite, element: &mut Element) {
        let Ok(info) = value.xml_type_info().as_composite() else {
            return;
        };

        for field in info.iter() {
            // Absent members are omitted, not written empty.
            let Some(member) = value.field(field.name()) else {
                continue;
            };
            let names = CollectionNames::of(field.attributes());
            element.push_child(self.write_value(member, naming::member_name(field), names));
        }
    }
}

// -----------------------------------------------------------------------------
// Reader

/// Deserializing half of the dispatcher.
pub(crate) struct Reader<'a> {
    pub registry: &'a TypeRegistry,
}

impl Reader<'_> {
    /// Reads the root element as a composite of type `info`.
    pub fn read_root(
        &self,
        element: &Element,
        info: &'static TypeInfo,
    ) -> Result<Box<dyn XmlValue>, XmlError> {
        let mut value = info.new_default();
        let (TypeInfo::Composite(_), XmlMut::Composite(data)) = (info, value.xml_mut()) else {
            return Err(XmlError::NotComposite {
                type_path: info.type_path(),
            });
        };
        self.read_members(data, element);
        Ok(value)
    }

    /// Reads `element` as a value of type `info`.
    ///
    /// Returns `None` when the element is a scalar whose text does not parse,
    /// so that the caller leaves its target untouched. Containers and
    /// composites are always returned, holding whatever could be read.
    pub fn read_value(
        &self,
        element: &Element,
        info: &'static TypeInfo,
    ) -> Option<Box<dyn XmlValue>> {
        let mut value = info.new_default();
        match (info, value.xml_mut()) {
            (TypeInfo::Scalar(_), XmlMut::Scalar(data)) => {
                let text = element.text().unwrap_or_default();
                if !scalar::parse(data.scalar_mut(), text) {
                    log::debug!(
                        "cannot read {text:?} in <{}> as `{}`, skipped",
                        element.name(),
                        info.type_path(),
                    );
                    return None;
                }
            }
            (TypeInfo::Sequence(seq_info), XmlMut::Sequence(data)) => {
                sequence::read(self, data, element, seq_info);
            }
            (TypeInfo::Mapping(map_info), XmlMut::Mapping(data)) => {
                mapping::read(self, data, element, map_info);
            }
            (TypeInfo::Composite(_), XmlMut::Composite(data)) => {
                self.read_members(data, element);
            }
            (_, data) => {
                log::warn!(
                    "`{}` is described as {} but its value is a {}",
                    info.type_path(),
                    info.kind(),
                    data.kind(),
                );
                return None;
            }
        }
        Some(value)
    }

    /// Assigns every member whose element is present and readable.
    ///
    /// Members are read as their declared type. A member whose element does
    /// not read keeps the value it already has.
    fn read_members(&self, target: &mut dyn Composite, element: &Element) {
        let Ok(info) = target.xml_type_info().as_composite() else {
            return;
        };

        for field in info.iter() {
            let name = naming::member_name(field);
            let Some(child) = element.child(name) else {
                continue;
            };

            let Some(value) = self.read_value(child, field.type_info()) else {
                continue;
            };
            if let Err(value) = target.set_field(field.name(), value) {
                log::debug!(
                    "member `{}` of `{}` rejected a value of type `{}`",
                    field.name(),
                    info.type_path(),
                    value.xml_type_path(),
                );
            }
        }
    }
}
