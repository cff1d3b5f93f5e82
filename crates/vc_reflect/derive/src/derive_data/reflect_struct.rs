use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use crate::derive_data::FieldAttributes;

/// A reflected (non-skipped) or skipped field of the derived struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    /// Index among reflected fields, `None` for skipped fields.
    pub reflect_index: Option<usize>,
}

impl StructField<'_> {
    /// The property name: `name = "..."` if present, else the field name.
    pub(crate) fn property_name(&self) -> String {
        match &self.attrs.rename {
            Some(lit) => lit.value(),
            None => self.ident.to_string(),
        }
    }
}

/// Parsed input of `#[derive(Reflect)]` on a named struct.
pub(crate) struct ReflectStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub fields: Vec<StructField<'a>>,
    vc_reflect_path: syn::Path,
}

impl<'a> ReflectStruct<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Reflect` can only be derived for structs with named fields",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`Reflect` can only be derived for structs with named fields",
            ));
        };

        let mut fields = Vec::with_capacity(named.named.len());
        let mut reflect_index = 0usize;
        for field in &named.named {
            let attrs = FieldAttributes::parse(&field.attrs)?;
            let index = if attrs.skip.is_some() {
                None
            } else {
                reflect_index += 1;
                Some(reflect_index - 1)
            };
            fields.push(StructField {
                // Named fields always carry an identifier.
                ident: field.ident.as_ref().ok_or_else(|| {
                    syn::Error::new(field.span(), "expected a named field")
                })?,
                ty: &field.ty,
                attrs,
                reflect_index: index,
            });
        }

        let info = Self {
            ident: &input.ident,
            generics: &input.generics,
            fields,
            vc_reflect_path: crate::path::vc_reflect(),
        };
        info.check_property_names()?;
        Ok(info)
    }

    fn check_property_names(&self) -> syn::Result<()> {
        let mut seen: Vec<String> = Vec::new();
        for field in self.active_fields() {
            let name = field.property_name();
            if seen.contains(&name) {
                return Err(syn::Error::new(
                    field.ident.span(),
                    format!("duplicate property name `{name}`"),
                ));
            }
            seen.push(name);
        }
        Ok(())
    }

    /// Returns an iterator over reflected fields, in declaration order.
    pub(crate) fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.reflect_index.is_some())
    }

    /// Returns the number of reflected fields.
    pub(crate) fn active_len(&self) -> usize {
        self.active_fields().count()
    }

    #[inline]
    pub(crate) fn vc_reflect_path(&self) -> &syn::Path {
        &self.vc_reflect_path
    }

    /// Split generics, with reflection bounds added for every type parameter.
    pub(crate) fn split_generics(
        &self,
    ) -> (
        syn::ImplGenerics<'_>,
        syn::TypeGenerics<'_>,
        Option<syn::WhereClause>,
    ) {
        let vc_reflect_path = self.vc_reflect_path();
        let reflect_ = crate::path::reflect_(vc_reflect_path);
        let typed_ = crate::path::typed_(vc_reflect_path);
        let zeroed_ = crate::path::zeroed_(vc_reflect_path);

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let mut where_clause = where_clause.cloned();

        for param in self.generics.type_params() {
            let ident = &param.ident;
            where_clause
                .get_or_insert_with(|| syn::parse_quote!(where))
                .predicates
                .push(syn::parse_quote!(#ident: #reflect_ + #typed_ + #zeroed_));
        }

        (impl_generics, ty_generics, where_clause)
    }

    /// Returns `true` if the struct has generic parameters.
    #[inline]
    pub(crate) fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}
