//! Fully qualified paths of `core` items.
//!
//! Generated code cannot rely on the prelude of the invoking crate.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $path:path;)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    quote!($path).to_tokens(tokens);
                }
            }
        )*
    };
}

define_fp! {
    OptionFP => ::core::option::Option;
    ResultFP => ::core::result::Result;
    DefaultFP => ::core::default::Default;
    SendFP => ::core::marker::Send;
    SyncFP => ::core::marker::Sync;
}
