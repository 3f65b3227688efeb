use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Type, TypeGenerics};

use super::{TypeAttributes, TypeParser};
use crate::utils::StringExpr;

/// Everything about the deriving type except its fields.
pub(crate) struct XmlMeta<'a> {
    xc_convert_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // Field types that mention a type parameter, in declaration order.
    generic_field_types: Vec<&'a Type>,
}

impl core::fmt::Debug for XmlMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("XmlMeta")
            .field("xc_convert_path", &self.xc_convert_path.to_token_stream())
            .field("type_parser", &self.type_parser)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> XmlMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            xc_convert_path: crate::path::xc_convert(),
            generic_field_types: Vec::new(),
        }
    }

    /// Keeps the field types that need a `Member` bound.
    pub(super) fn set_field_types(&mut self, field_types: impl Iterator<Item = &'a Type>) {
        let idents = self
            .generics()
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<syn::Ident>>();

        if idents.is_empty() {
            return;
        }

        for ty in field_types {
            let mentioned = is_any_ident_in_token_stream(&idents, ty.to_token_stream());
            if mentioned && !self.generic_field_types.contains(&ty) {
                self.generic_field_types.push(ty);
            }
        }
    }

    #[inline]
    pub fn xc_convert_path(&self) -> &Path {
        &self.xc_convert_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<StringExpr> {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.xc_convert_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.xc_convert_path)
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// ## Bounds
    ///
    /// - Type parameters: `TypePath`, in every implementation.
    /// - Field types mentioning a type parameter: `Member`, unless `type_path_only`.
    /// - The type itself: `Default + Send + Sync` when it is generic, unless
    ///   `type_path_only`. Non-generic types get no extra bounds, so a missing
    ///   `Default` is reported at the `CompositeInfo` constructor.
    pub fn split_generics(
        &self,
        type_path_only: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{DefaultFP, SendFP, SyncFP};

        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_path_ = crate::path::type_path_(&self.xc_convert_path);
        for param in generics.type_params() {
            let ident = &param.ident;
            generic_where_clause.extend(quote! { #ident: #type_path_, });
        }

        if !type_path_only && self.impl_with_generic() {
            generic_where_clause.extend(quote! { Self: #DefaultFP + #SendFP + #SyncFP, });

            let member_ = crate::path::member_(&self.xc_convert_path);
            for ty in &self.generic_field_types {
                generic_where_clause.extend(quote! { #ty: #member_, });
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}

// Do any of the identifiers in `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[syn::Ident], token_stream: TokenStream) -> bool {
    for token_tree in token_stream {
        match token_tree {
            proc_macro2::TokenTree::Ident(ident) => {
                if idents.contains(&ident) {
                    return true;
                }
            }
            proc_macro2::TokenTree::Group(group) => {
                if is_any_ident_in_token_stream(idents, group.stream()) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
