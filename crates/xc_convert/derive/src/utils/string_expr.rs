use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::LitStr;

/// A string in generated code, either known at compile time or built at
/// run time.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// A string that is valid at compile time.
    ///
    /// A string literal, or a macro such as `module_path!()`.
    Const(TokenStream),
    /// A [string slice](str) that is borrowed for a `'static` lifetime.
    Borrowed(TokenStream),
    /// An [owned string](String).
    Owned(TokenStream),
}

impl Default for StringExpr {
    fn default() -> Self {
        Self::Const("".to_token_stream())
    }
}

impl StringExpr {
    pub fn from_lit(lit: &LitStr) -> Self {
        Self::Const(lit.to_token_stream())
    }

    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Returns tokens for a statically borrowed [string slice](str).
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote! {
                &#owned as &str
            },
        }
    }

    /// Returns tokens for an [owned string](String).
    pub fn into_owned(self, xc_convert_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => {
                let macro_exports_ = crate::path::macro_exports_(xc_convert_path);
                quote! {
                    #macro_exports_::ToOwned::to_owned(#tokens)
                }
            }
            Self::Owned(owned) => owned,
        }
    }

    fn is_const(&self) -> bool {
        matches!(self, StringExpr::Const(_))
    }

    /// Concatenates the expressions.
    ///
    /// If all of them are [`StringExpr::Const`], the result is a
    /// [`concat!`] and stays constant.
    pub fn from_iter<T: IntoIterator<Item = StringExpr>>(
        iter: T,
        xc_convert_path: &syn::Path,
    ) -> Self {
        let exprs: Vec<StringExpr> = iter.into_iter().collect();

        if exprs.is_empty() {
            return Self::default();
        }

        if exprs.iter().all(StringExpr::is_const) {
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);

            Self::Const(quote! {
                ::core::concat!( #(#inner),* )
            })
        } else {
            let macro_exports_ = crate::path::macro_exports_(xc_convert_path);
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);

            Self::Owned(quote! {
                #macro_exports_::__concat(&[ #(#inner),* ])
            })
        }
    }
}
