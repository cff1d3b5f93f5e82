//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` works on structs with named fields and implements:
///
/// - `Typed`
/// - `Reflect`
/// - `Zeroed`
/// - `Struct`
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// Every reflected field type must implement `Reflect`, `Typed` and
/// `Zeroed`. Generic type parameters receive these bounds automatically.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Order {
///     // Property name `order_id` instead of `id`.
///     #[reflect(name = "order_id")]
///     id: i64,
///     // Not reflected, zeroed with `Default::default()`.
///     #[reflect(skip)]
///     cache: Vec<u8>,
///     // Fields of `Audit` are promoted into `Order`.
///     #[reflect(embed)]
///     audit: Audit,
///     // Saved with `no_index` set.
///     #[reflect(noindex)]
///     notes: String,
/// }
/// ```
///
/// - `name = "..."`: the property name, defaults to the field name.
/// - `skip`: leave the field out of reflection.
/// - `embed`: mark a struct field as embedded. Without `name`, its fields
///   are promoted into the parent and it serves as the fallback for legacy
///   dotted names.
/// - `noindex`: exclude the field from indexes when saving.
///
/// Two reflected fields with the same property name are a compile error.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::ReflectStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = impls::impl_struct(&info);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
