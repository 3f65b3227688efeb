// -----------------------------------------------------------------------------
// Modules

mod struct_kind;

mod auto_register;
mod trait_composite;
mod trait_get_type_meta;
mod trait_member;
mod trait_type_path;
mod trait_typed;
mod trait_xml_value;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use trait_composite::impl_trait_composite;
use trait_get_type_meta::impl_trait_get_type_meta;
use trait_member::impl_trait_member;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;
use trait_xml_value::impl_trait_xml_value;

pub(crate) use struct_kind::impl_struct;
