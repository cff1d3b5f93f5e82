//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod trait_reflect;
mod trait_struct;
mod trait_typed;
mod trait_zeroed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

use trait_reflect::impl_trait_reflect;
use trait_struct::impl_trait_struct;
use trait_typed::impl_trait_typed;
use trait_zeroed::impl_trait_zeroed;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let typed_trait_tokens = impl_trait_typed(info);
    let zeroed_trait_tokens = impl_trait_zeroed(info);
    let reflect_trait_tokens = impl_trait_reflect(info);
    let struct_trait_tokens = impl_trait_struct(info);

    quote! {
        #typed_trait_tokens

        #zeroed_trait_tokens

        #reflect_trait_tokens

        #struct_trait_tokens
    }
}
