use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, StructField};

/// Generate the `NamedField` constructor of one reflected field.
fn field_info_tokens(info: &ReflectStruct, field: &StructField) -> TokenStream {
    let vc_reflect_path = info.vc_reflect_path();
    let named_field_ = crate::path::named_field_(vc_reflect_path);
    let field_flags_ = crate::path::field_flags_(vc_reflect_path);

    let ty = field.ty;
    let name = field.ident.to_string();

    let rename = field
        .attrs
        .rename
        .as_ref()
        .map(|lit| quote! { .with_rename(#lit) });

    let embedded = field.attrs.embed.map(|_| quote! { .with_embedded() });
    let no_index = field.attrs.no_index.map(|_| quote! { .with_no_index() });
    let flags = if embedded.is_some() || no_index.is_some() {
        Some(quote! { .with_flags(#field_flags_::EMPTY #embedded #no_index) })
    } else {
        None
    };

    quote! {
        #named_field_::new::<#ty>(#name) #rename #flags
    }
}

/// Generate `Typed` trait implementation tokens.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let vc_reflect_path = info.vc_reflect_path();
    let typed_ = crate::path::typed_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let struct_info_ = crate::path::struct_info_(vc_reflect_path);

    let fields = info
        .active_fields()
        .map(|field| field_info_tokens(info, field))
        .collect::<Vec<_>>();

    let info_tokens = quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#fields,)*
        ]))
    };

    let cell_tokens = if info.is_generic() {
        let cell_ = crate::path::generic_type_info_cell_(vc_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| #info_tokens)
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(vc_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| #info_tokens)
        }
    };

    let real_ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #typed_ for #real_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #cell_tokens
            }
        }
    }
}
