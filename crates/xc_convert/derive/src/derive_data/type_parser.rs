use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, LitStr, Path, TypeParam, spanned::Spanned};

use crate::utils::StringExpr;

/// Type paths and generic parameters of the deriving type.
///
/// The type is local, so [`module_path!()`](module_path) gives its module
/// unless a custom path is set.
pub(crate) struct TypeParser<'a> {
    ident: &'a Ident,
    custom_path: Option<Path>,
    generics: &'a Generics,
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.ident, f)
    }
}

impl<'a> TypeParser<'a> {
    pub(crate) fn new(ident: &'a Ident, custom_path: Option<Path>, generics: &'a Generics) -> Self {
        Self {
            ident,
            custom_path,
            generics,
        }
    }

    #[inline]
    pub(super) fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// Whether the implementations need per-instantiation cells.
    pub(super) fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    pub(super) fn real_ident(&self) -> TokenStream {
        self.ident.to_token_stream()
    }

    /// The (custom) ident.
    fn get_ident(&self) -> &Ident {
        self.custom_path
            .as_ref()
            .and_then(|path| path.segments.last())
            .map_or(self.ident, |segment| &segment.ident)
    }

    pub(super) fn module_path(&self) -> Option<StringExpr> {
        let Some(path) = &self.custom_path else {
            return Some(StringExpr::Const(quote! {
                ::core::module_path!()
            }));
        };

        // A custom path of a single segment has no module.
        let path_string = path
            .segments
            .iter()
            .take(path.segments.len().saturating_sub(1))
            .map(|segment| segment.ident.to_string())
            .reduce(|path, ident| path + "::" + &ident)?;

        let path_lit = LitStr::new(&path_string, path.span());
        Some(StringExpr::from_lit(&path_lit))
    }

    pub(super) fn type_ident(&self) -> StringExpr {
        let ident = self.get_ident();
        StringExpr::from_lit(&LitStr::new(&ident.to_string(), ident.span()))
    }

    /// Joins the names of the type parameters with `", "`.
    fn reduce_generics(
        generics: &Generics,
        mut ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
        xc_convert_path: &Path,
    ) -> StringExpr {
        let mut params = generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_generic_fn(type_param)),
            _ => None,
        });

        let first = params.next().into_iter();

        StringExpr::from_iter(
            first.chain(params.flat_map(|x| [StringExpr::from_str(", "), x])),
            xc_convert_path,
        )
    }

    /// Appends `<...>` built by `ty_generic_fn` for generic types.
    fn with_generics(
        &self,
        base: StringExpr,
        ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
        xc_convert_path: &Path,
    ) -> StringExpr {
        if !self.impl_with_generic() {
            return base;
        }

        let generics = TypeParser::reduce_generics(self.generics, ty_generic_fn, xc_convert_path);

        StringExpr::from_iter(
            [
                base,
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ],
            xc_convert_path,
        )
    }

    /// Returns a [`StringExpr`] representing the "type name" of the type.
    ///
    /// For `Wrapper<Vec<u8>>`, this is `"Wrapper<Vec<u8>>"`.
    pub(super) fn type_name(&self, xc_convert_path: &Path) -> StringExpr {
        let type_path_ = crate::path::type_path_(xc_convert_path);

        self.with_generics(
            self.type_ident(),
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::type_name()
                })
            },
            xc_convert_path,
        )
    }

    /// Returns a [`StringExpr`] representing the "type path" of the type.
    ///
    /// For `Wrapper<Vec<u8>>`, this is `"my_crate::Wrapper<alloc::vec::Vec<u8>>"`.
    pub(super) fn type_path(&self, xc_convert_path: &Path) -> StringExpr {
        let type_path_ = crate::path::type_path_(xc_convert_path);

        let base = match self.module_path() {
            Some(module_path) => StringExpr::from_iter(
                [module_path, StringExpr::from_str("::"), self.type_ident()],
                xc_convert_path,
            ),
            None => self.type_ident(),
        };

        self.with_generics(
            base,
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::type_path()
                })
            },
            xc_convert_path,
        )
    }
}
