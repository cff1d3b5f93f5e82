use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate `Zeroed` trait implementation tokens.
///
/// Reflected fields use their own zero value, skipped fields use `Default`.
pub(crate) fn impl_trait_zeroed(info: &ReflectStruct) -> TokenStream {
    let zeroed_ = crate::path::zeroed_(info.vc_reflect_path());

    let field_inits = info
        .fields
        .iter()
        .map(|field| {
            let ident = field.ident;
            let ty = field.ty;
            if field.reflect_index.is_some() {
                quote! { #ident: <#ty as #zeroed_>::zeroed() }
            } else {
                quote! { #ident: <#ty as ::core::default::Default>::default() }
            }
        })
        .collect::<Vec<_>>();

    let real_ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #zeroed_ for #real_ident #ty_generics #where_clause {
            fn zeroed() -> Self {
                Self {
                    #(#field_inits,)*
                }
            }
        }
    }
}
