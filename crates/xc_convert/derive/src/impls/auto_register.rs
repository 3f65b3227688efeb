use crate::derive_data::XmlMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &XmlMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    if let Some(span) = meta.attrs().auto_register {
        // Invalid for generic types.
        if meta.impl_with_generic() {
            return crate::utils::empty();
        }

        let xc_convert_path = meta.xc_convert_path();
        let auto_register_ = crate::path::auto_register_(xc_convert_path);
        let real_ident = meta.real_ident();

        quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::__AutoRegisterFunc(
                    <#real_ident as #auto_register_::__RegisterType>::__register
                )
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &XmlMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
