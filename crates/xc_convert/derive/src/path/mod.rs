//! Paths of the `xc_convert` items that generated code names.
//!
//! Kept in one place so that moving an item in `xc_convert` only needs a
//! change here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `xc_convert` crate.
///
/// 1. For crates that depend on `xc_convert`, `::xc_convert` is returned here.
/// 2. For crates that depend on `xml_convert`, `::xml_convert::convert` is returned here.
/// 3. For other situations, `::xc_convert` is returned here, but this may be incorrect.
///
/// This reads the caller's manifest, so the path is passed around rather
/// than fetched again.
pub(crate) fn xc_convert() -> syn::Path {
    xc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("xc_convert"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Macro exports

#[inline(always)]
pub(crate) fn macro_exports_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::__macro_exports::auto_register
    }
}

// -----------------------------------------------------------------------------
// Value traits

#[inline(always)]
pub(crate) fn xml_value_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::XmlValue
    }
}

#[inline(always)]
pub(crate) fn member_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::Member
    }
}

#[inline(always)]
pub(crate) fn composite_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::ops::Composite
    }
}

#[inline(always)]
pub(crate) fn xml_identity_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::ops::XmlIdentity
    }
}

#[inline(always)]
pub(crate) fn xml_ref_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::ops::XmlRef
    }
}

#[inline(always)]
pub(crate) fn xml_mut_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::ops::XmlMut
    }
}

#[inline(always)]
pub(crate) fn composite_partial_eq_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::impls::composite_partial_eq
    }
}

// -----------------------------------------------------------------------------
// Info

#[inline(always)]
pub(crate) fn type_path_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn type_kind_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::info::TypeKind
    }
}

#[inline(always)]
pub(crate) fn composite_info_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::info::CompositeInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn field_attributes_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::info::FieldAttributes
    }
}

// -----------------------------------------------------------------------------
// Cell

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::impls::GenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::impls::GenericTypePathCell
    }
}

// -----------------------------------------------------------------------------
// Registry

#[inline(always)]
pub(crate) fn type_registry_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::registry::TypeRegistry
    }
}

#[inline(always)]
pub(crate) fn type_meta_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::registry::TypeMeta
    }
}

#[inline(always)]
pub(crate) fn get_type_meta_(xc_convert_path: &syn::Path) -> TokenStream {
    quote! {
        #xc_convert_path::registry::GetTypeMeta
    }
}
