//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vc_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_reflect` crate.
///
/// 1. For crates that depend on `vc_reflect`, `::vc_reflect` is returned here.
/// 2. For crates that depend on `vc_datastore`, `::vc_datastore::reflect` is returned here.
/// 3. For other situations, `::vc_reflect` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is obtained once per derive and passed around.
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn zeroed_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::Zeroed }
}

#[inline(always)]
pub(crate) fn typed_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn struct_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::StructInfo }
}

#[inline(always)]
pub(crate) fn named_field_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::NamedField }
}

#[inline(always)]
pub(crate) fn field_flags_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::FieldFlags }
}

#[inline(always)]
pub(crate) fn struct_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::Struct }
}

#[inline(always)]
pub(crate) fn reflect_ref_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn reflect_mut_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::ReflectMut }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::impls::NonGenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::impls::GenericTypeInfoCell }
}
