use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate `Struct` trait implementation tokens.
pub(crate) fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let vc_reflect_path = info.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let typed_ = crate::path::typed_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let struct_info_ = crate::path::struct_info_(vc_reflect_path);

    let field_indices: Vec<usize> = info
        .active_fields()
        .filter_map(|field| field.reflect_index)
        .collect();
    let field_idents: Vec<_> = info.active_fields().map(|field| field.ident).collect();
    let field_count = info.active_len();

    let real_ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn struct_info(&self) -> &'static #struct_info_ {
                match <Self as #typed_>::type_info() {
                    #type_info_::Struct(info) => info,
                    _ => ::core::unreachable!("derived struct info"),
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&mut self.#field_idents as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}
