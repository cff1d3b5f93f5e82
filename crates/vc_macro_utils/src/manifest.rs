use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to locate the runtime crates a derive
/// must refer to.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the caller depends on
///    the facade crate `vc_datastore`, return `::vc_datastore::short_name`
///    (e.g. `vc_reflect` -> `::vc_datastore::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to `::crate_name`.
///
/// When a crate needs to reference itself, an alias such as
/// `extern crate self as vc_reflect;` in the crate root keeps `::vc_reflect`
/// valid inside that crate.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
#[derive(Debug)]
pub struct Manifest {
    document: Option<Document<Box<str>>>,
}

const FACADE_NAME: &str = "vc_datastore";
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn read(path: &PathBuf) -> Self {
        let document = std::fs::read_to_string(path)
            .ok()
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());
        Self { document }
    }

    fn parse_path(path: &str) -> Option<syn::Path> {
        syn::parse_str(path).ok()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Self::parse_path(&format!("::{name}"));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Self::parse_path(&format!("::{FACADE_NAME}::{module}"));
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// the caller's Cargo.toml.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let document = self.document.as_ref();
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = document.and_then(|doc| doc.get(section))
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
        syn::parse_quote!(::#ident)
    }

    /// Run `func` against the caller's manifest.
    ///
    /// The parsed manifest is cached per manifest path, so a crate with many
    /// derives only reads its `Cargo.toml` once per compiler process.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Manifest { document: None });
        };

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path) {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Self::read(&path);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests
