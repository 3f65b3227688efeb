use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::XmlStruct;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// Dependencies are the declared types of the members that are not ignored.
pub(crate) fn impl_trait_get_type_meta(info: &XmlStruct) -> TokenStream {
    let meta = info.meta();
    let xc_convert_path = meta.xc_convert_path();
    let get_type_meta_ = crate::path::get_type_meta_(xc_convert_path);
    let type_meta_ = crate::path::type_meta_(xc_convert_path);
    let type_registry_ = crate::path::type_registry_(xc_convert_path);
    let member_ = crate::path::member_(xc_convert_path);

    let register_members = info
        .active_fields()
        .map(|field| {
            let ty = &field.data.ty;
            quote! {
                <#ty as #member_>::register_member(registry);
            }
        })
        .collect::<Vec<_>>();

    let registry = if register_members.is_empty() {
        quote!(_registry)
    } else {
        quote!(registry)
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #get_type_meta_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn get_type_meta() -> #type_meta_ {
                #type_meta_::of::<Self>()
            }

            fn register_dependencies(#registry: &mut #type_registry_) {
                #(#register_members)*
            }
        }
    }
}
