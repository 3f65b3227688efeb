use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Ident, LitStr};

use super::{FieldAttributes, TypeAttributes, TypeParser, XmlMeta};

// -----------------------------------------------------------------------------
// StructField

/// One named field of the deriving struct.
pub(crate) struct StructField<'a> {
    pub data: &'a syn::Field,
    pub ident: &'a Ident,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The member name, which is the field name.
    pub fn name(&self) -> LitStr {
        LitStr::new(&self.ident.to_string(), self.ident.span())
    }

    /// Tokens of the `FieldAttributes` constant of this member.
    pub fn attributes_tokens(&self, xc_convert_path: &syn::Path) -> TokenStream {
        let field_attributes_ = crate::path::field_attributes_(xc_convert_path);

        let with_element_name = self
            .attrs
            .element_name
            .as_ref()
            .map(|name| quote!(.with_element_name(#name)));
        let with_collection_element_name = self
            .attrs
            .collection_element_name
            .as_ref()
            .map(|name| quote!(.with_collection_element_name(#name)));
        let with_key_name = self.attrs.key_name.as_ref().map(|name| quote!(.with_key_name(#name)));
        let with_value_name = self
            .attrs
            .value_name
            .as_ref()
            .map(|name| quote!(.with_value_name(#name)));

        quote! {
            #field_attributes_::new()
                #with_element_name
                #with_collection_element_name
                #with_key_name
                #with_value_name
        }
    }

    /// `#[xml(ignore)]` fields get no descriptor and no trait bounds.
    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.attrs.ignore.is_some()
    }
}

// -----------------------------------------------------------------------------
// XmlStruct

/// A struct with named fields, the only input the derive accepts.
pub(crate) struct XmlStruct<'a> {
    meta: XmlMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> XmlStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`XmlConvert` can only be derived for structs with named fields",
            ));
        };

        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "`XmlConvert` can only be derived for structs with named fields",
            ));
        };

        for param in &input.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lifetime) => {
                    return Err(syn::Error::new_spanned(
                        lifetime,
                        "`XmlConvert` types must be `'static`, lifetime parameters are not supported",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "const parameters are not supported by `XmlConvert`",
                    ));
                }
            }
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let type_parser = TypeParser::new(&input.ident, attrs.type_path.clone(), &input.generics);

        let fields = named
            .named
            .iter()
            .map(|data| {
                Ok(StructField {
                    data,
                    ident: data
                        .ident
                        .as_ref()
                        .ok_or_else(|| syn::Error::new_spanned(data, "expected a named field"))?,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let mut meta = XmlMeta::new(attrs, type_parser);
        meta.set_field_types(
            fields
                .iter()
                .filter(|field| !field.is_ignored())
                .map(|field| &field.data.ty),
        );

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &XmlMeta<'a> {
        &self.meta
    }

    /// All fields, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields that are converted, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields().iter().filter(|field| !field.is_ignored())
    }

    /// Tokens of the `TypeInfo` of this struct.
    ///
    /// ```ignore
    /// TypeInfo::Composite(
    ///     CompositeInfo::new::<Self>(&[
    ///         NamedField::new::<FieldType>("name").with_attributes(...),
    ///     ])
    ///     .with_custom_name("...")
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let xc_convert_path = self.meta.xc_convert_path();
        let type_info_ = crate::path::type_info_(xc_convert_path);
        let composite_info_ = crate::path::composite_info_(xc_convert_path);
        let named_field_ = crate::path::named_field_(xc_convert_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = field.name();
            let attributes = field.attributes_tokens(xc_convert_path);
            quote! {
                #named_field_::new::<#ty>(#name).with_attributes(#attributes)
            }
        });

        let with_custom_name = self
            .meta
            .attrs()
            .custom_name
            .as_ref()
            .map(|name| quote!(.with_custom_name(#name)));

        quote! {
            #type_info_::Composite(
                #composite_info_::new::<Self>(&[ #(#fields),* ])
                    #with_custom_name
            )
        }
    }
}
