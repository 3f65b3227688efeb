use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::XmlStruct;
use crate::path::fp::{OptionFP, ResultFP};

/// Generate `Composite` trait implementation tokens.
///
/// Members are matched by field name and accessed through `Member`, so
/// `Option` fields report `None` as absent. Ignored fields are unknown names.
pub(crate) fn impl_trait_composite(info: &XmlStruct) -> TokenStream {
    let meta = info.meta();
    let xc_convert_path = meta.xc_convert_path();
    let composite_ = crate::path::composite_(xc_convert_path);
    let xml_value_ = crate::path::xml_value_(xc_convert_path);
    let member_ = crate::path::member_(xc_convert_path);
    let macro_exports_ = crate::path::macro_exports_(xc_convert_path);

    let field_refs = info.active_fields().map(|field| {
        let name = field.name();
        let ident = field.ident;
        let ty = &field.data.ty;
        quote! {
            #name => <#ty as #member_>::member_ref(&self.#ident),
        }
    });

    let field_assigns = info.active_fields().map(|field| {
        let name = field.name();
        let ident = field.ident;
        let ty = &field.data.ty;
        quote! {
            #name => <#ty as #member_>::member_assign(&mut self.#ident, value),
        }
    });

    let identifier_tokens = match meta.attrs().identity {
        Some(span) => {
            let xml_identity_ = crate::path::xml_identity_(xc_convert_path);
            quote_spanned! { span =>
                #[inline]
                fn identifier(&self) -> #OptionFP<#macro_exports_::Cow<'_, str>> {
                    #OptionFP::Some(<Self as #xml_identity_>::xml_identifier(self))
                }
            }
        }
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #composite_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #OptionFP<&dyn #xml_value_> {
                match name {
                    #(#field_refs)*
                    _ => #OptionFP::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: #macro_exports_::Box<dyn #xml_value_>,
            ) -> #ResultFP<(), #macro_exports_::Box<dyn #xml_value_>> {
                match name {
                    #(#field_assigns)*
                    _ => #ResultFP::Err(value),
                }
            }

            #identifier_tokens
        }
    }
}
