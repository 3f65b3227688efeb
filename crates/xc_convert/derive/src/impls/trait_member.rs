use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::XmlMeta;
use crate::path::fp::{OptionFP, ResultFP};

/// Generate `Member` for the struct itself, so it can be a field of
/// another composite.
pub(crate) fn impl_trait_member(meta: &XmlMeta) -> TokenStream {
    let xc_convert_path = meta.xc_convert_path();
    let member_ = crate::path::member_(xc_convert_path);
    let xml_value_ = crate::path::xml_value_(xc_convert_path);
    let macro_exports_ = crate::path::macro_exports_(xc_convert_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #member_ for #real_ident #ty_generics #where_clause {
            type Declared = Self;

            #[inline]
            fn member_ref(&self) -> #OptionFP<&dyn #xml_value_> {
                #OptionFP::Some(self)
            }

            fn member_assign(
                &mut self,
                value: #macro_exports_::Box<dyn #xml_value_>,
            ) -> #ResultFP<(), #macro_exports_::Box<dyn #xml_value_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }
        }
    }
}
