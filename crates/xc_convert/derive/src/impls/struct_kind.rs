use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_composite, impl_trait_get_type_meta};
use super::{impl_trait_member, impl_trait_type_path, impl_trait_typed, impl_trait_xml_value};

use crate::derive_data::XmlStruct;

/// Implement every trait of a composite for a struct.
pub(crate) fn impl_struct(info: &XmlStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    let xml_value_trait_tokens = impl_trait_xml_value(meta);

    let composite_trait_tokens = impl_trait_composite(info);

    let member_trait_tokens = impl_trait_member(meta);

    let get_type_meta_tokens = impl_trait_get_type_meta(info);

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #xml_value_trait_tokens

        #composite_trait_tokens

        #member_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}
