use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Path};

use crate::XML_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level `#[xml(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `name = "..."`
    pub custom_name: Option<LitStr>,
    /// `identity`
    pub identity: Option<Span>,
    /// `type_path = "..."`
    pub type_path: Option<Path>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(XML_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.get_ident().map_or_else(Span::call_site, |i| i.span());

        if meta.path.is_ident("name") {
            set_once(&meta, &mut self.custom_name, parse_name(&meta)?)
        } else if meta.path.is_ident("identity") {
            set_once(&meta, &mut self.identity, span)
        } else if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            let path: Path = lit.parse()?;
            if path.leading_colon.is_some() {
                return Err(syn::Error::new_spanned(lit, "`type_path` must not start with `::`"));
            }
            set_once(&meta, &mut self.type_path, path)
        } else if meta.path.is_ident("auto_register") {
            set_once(&meta, &mut self.auto_register, span)
        } else {
            Err(meta.error(
                "unknown type attribute, expected one of `name`, `identity`, `type_path`, `auto_register`",
            ))
        }
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field level `#[xml(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `ignore`
    pub ignore: Option<Span>,
    /// `name = "..."`
    pub element_name: Option<LitStr>,
    /// `element_name = "..."`
    pub collection_element_name: Option<LitStr>,
    /// `key_name = "..."`
    pub key_name: Option<LitStr>,
    /// `value_name = "..."`
    pub value_name: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(XML_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("ignore") {
            let span = meta.path.get_ident().map_or_else(Span::call_site, |i| i.span());
            set_once(&meta, &mut self.ignore, span)
        } else if meta.path.is_ident("name") {
            set_once(&meta, &mut self.element_name, parse_name(&meta)?)
        } else if meta.path.is_ident("element_name") {
            set_once(&meta, &mut self.collection_element_name, parse_name(&meta)?)
        } else if meta.path.is_ident("key_name") {
            set_once(&meta, &mut self.key_name, parse_name(&meta)?)
        } else if meta.path.is_ident("value_name") {
            set_once(&meta, &mut self.value_name, parse_name(&meta)?)
        } else {
            Err(meta.error(
                "unknown field attribute, expected one of `ignore`, `name`, `element_name`, `key_name`, `value_name`",
            ))
        }
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn set_once<T>(meta: &ParseNestedMeta, slot: &mut Option<T>, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    *slot = Some(value);
    Ok(())
}

/// Element names end up in documents, an empty one cannot be written.
fn parse_name(meta: &ParseNestedMeta) -> syn::Result<LitStr> {
    let lit: LitStr = meta.value()?.parse()?;
    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(lit, "element name must not be empty"));
    }
    Ok(lit)
}
