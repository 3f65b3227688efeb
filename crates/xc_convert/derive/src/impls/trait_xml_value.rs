use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::XmlMeta;

/// Generate implementation code for `XmlValue`, classified as a composite.
pub(crate) fn impl_trait_xml_value(meta: &XmlMeta) -> TokenStream {
    let xc_convert_path = meta.xc_convert_path();
    let xml_value_ = crate::path::xml_value_(xc_convert_path);
    let type_kind_ = crate::path::type_kind_(xc_convert_path);
    let xml_ref_ = crate::path::xml_ref_(xc_convert_path);
    let xml_mut_ = crate::path::xml_mut_(xc_convert_path);
    let composite_partial_eq_ = crate::path::composite_partial_eq_(xc_convert_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #xml_value_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn xml_kind(&self) -> #type_kind_ {
                #type_kind_::Composite
            }

            #[inline]
            fn xml_ref(&self) -> #xml_ref_<'_> {
                #xml_ref_::Composite(self)
            }

            #[inline]
            fn xml_mut(&mut self) -> #xml_mut_<'_> {
                #xml_mut_::Composite(self)
            }

            #[inline]
            fn xml_partial_eq(&self, other: &dyn #xml_value_) -> bool {
                #composite_partial_eq_(self, other)
            }
        }
    }
}
