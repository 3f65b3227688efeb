//! Parsed input of the derive.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod type_parser;
mod xml_meta;
mod xml_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use type_parser::TypeParser;
pub(crate) use xml_meta::XmlMeta;
pub(crate) use xml_struct::XmlStruct;
