use xc_tree::Element;

use crate::codec::annotation::effective_type;
use crate::codec::composite::{Reader, Writer};
use crate::codec::naming::CollectionNames;
use crate::info::SequenceInfo;
use crate::ops::Sequence;

/// One child per item, in order, each called `names.element`.
pub(crate) fn write(
    writer: &Writer,
    seq: &dyn Sequence,
    element: &mut Element,
    names: CollectionNames,
) {
    for item in seq.iter() {
        element.push_child(writer.write_value(item, names.element, CollectionNames::DEFAULT));
    }
}

/// Appends one item per child element; item names are not checked.
///
/// An item whose type is neither tagged nor declared, or whose scalar text
/// does not parse, is skipped.
pub(crate) fn read(
    reader: &Reader<'_>,
    target: &mut dyn Sequence,
    element: &Element,
    info: &SequenceInfo,
) {
    let declared = info.item_info();

    for child in element.children() {
        let Some(item_info) = effective_type(child, declared, reader.registry) else {
            log::debug!(
                "skipped <{}> in `{}`: item type is unknown",
                child.name(),
                info.type_path(),
            );
            continue;
        };

        let Some(item) = reader.read_value(child, item_info) else {
            continue;
        };
        if let Err(item) = target.push(item) {
            log::debug!(
                "`{}` rejected an item of type `{}`",
                info.type_path(),
                item.xml_type_path(),
            );
        }
    }
}
