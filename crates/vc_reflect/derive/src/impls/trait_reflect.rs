use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate `Reflect` trait implementation tokens.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let vc_reflect_path = info.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_reflect_path);

    let field_idents: Vec<_> = info.active_fields().map(|field| field.ident).collect();

    let real_ident = info.ident;
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            fn reset(&mut self) {
                #(#reflect_::reset(&mut self.#field_idents);)*
            }
        }
    }
}
