use xc_tree::Element;

use crate::codec::annotation::effective_type;
use crate::codec::composite::{Reader, Writer};
use crate::codec::naming::CollectionNames;
use crate::info::MappingInfo;
use crate::ops::Mapping;

/// One pair element per entry, holding the key then the value.
pub(crate) fn write(
    writer: &Writer,
    map: &dyn Mapping,
    element: &mut Element,
    names: CollectionNames,
) {
    for (key, value) in map.iter() {
        let pair = Element::new(names.element)
            .with_child(writer.write_value(key, names.key, CollectionNames::DEFAULT))
            .with_child(writer.write_value(value, names.value, CollectionNames::DEFAULT));
        element.push_child(pair);
    }
}

/// Inserts one entry per pair element.
///
/// The first two children of a pair are its key and value, whatever their
/// names. A pair with fewer than two children ends the mapping: it and every
/// later pair are dropped. A pair whose key or value does not read is
/// skipped.
pub(crate) fn read(
    reader: &Reader<'_>,
    target: &mut dyn Mapping,
    element: &Element,
    info: &MappingInfo,
) {
    let declared_key = info.key_info();
    let declared_value = info.value_info();

    for pair in element.children() {
        let [key_element, value_element, ..] = pair.children() else {
            log::warn!(
                "pair <{}> in `{}` has fewer than two children, dropping it and all later pairs",
                pair.name(),
                info.type_path(),
            );
            break;
        };

        let key_info = effective_type(key_element, declared_key, reader.registry);
        let value_info = effective_type(value_element, declared_value, reader.registry);
        let (Some(key_info), Some(value_info)) = (key_info, value_info) else {
            log::debug!(
                "skipped pair <{}> in `{}`: key or value type is unknown",
                pair.name(),
                info.type_path(),
            );
            continue;
        };

        let (Some(key), Some(value)) = (
            reader.read_value(key_element, key_info),
            reader.read_value(value_element, value_info),
        ) else {
            continue;
        };
        if let Err((key, value)) = target.insert(key, value) {
            log::debug!(
                "`{}` rejected an entry of types `{}`, `{}`",
                info.type_path(),
                key.xml_type_path(),
                value.xml_type_path(),
            );
        }
    }
}
