use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Options parsed from `#[reflect(..)]` on a single field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `name = "..."`, the property name override.
    pub rename: Option<LitStr>,
    /// `skip`, the field is not reflected.
    pub skip: Option<Span>,
    /// `embed`, fields of the nested struct are promoted.
    pub embed: Option<Span>,
    /// `noindex`, the value is saved with `no_index` set.
    pub no_index: Option<Span>,
}

impl FieldAttributes {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(meta.error("property name must not be empty"));
                    }
                    Self::set_once(&mut result.rename, lit, &meta)
                } else if meta.path.is_ident("skip") {
                    Self::set_once(&mut result.skip, span, &meta)
                } else if meta.path.is_ident("embed") {
                    Self::set_once(&mut result.embed, span, &meta)
                } else if meta.path.is_ident("noindex") {
                    Self::set_once(&mut result.no_index, span, &meta)
                } else {
                    Err(meta.error("expected one of `name`, `skip`, `embed`, `noindex`"))
                }
            })?;
        }

        if let Some(span) = result.skip
            && (result.rename.is_some() || result.embed.is_some() || result.no_index.is_some())
        {
            return Err(syn::Error::new(
                span,
                "`skip` cannot be combined with other field options",
            ));
        }

        Ok(result)
    }

    fn set_once<T>(
        slot: &mut Option<T>,
        value: T,
        meta: &syn::meta::ParseNestedMeta<'_>,
    ) -> syn::Result<()> {
        if slot.is_some() {
            return Err(meta.error("duplicate field option"));
        }
        *slot = Some(value);
        Ok(())
    }
}
