//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`Type`]: a [`TypeId`] plus the type's path, with [`ShortName`] for diagnostics.
//!
//! - [`TypeInfo`]: an enum describing the shape of a reflected type, one of:
//!     - [`StructInfo`]: named struct, including its fields in declaration order.
//!     - [`ListInfo`]: list-like (e.g. `Vec<i32>`), including item type info.
//!     - [`PointerInfo`]: optional value (e.g. `Option<T>`), including pointee type info.
//!     - [`ScalarInfo`]: primitive leaf, with its [`ScalarKind`].
//!     - [`OpaqueInfo`]: leaf whose internals are not reflected (e.g. `OffsetDateTime`).
//!
//! - [`NamedField`]: a struct field, including its declared name,
//!   optional renamed property name, [`FieldFlags`] and type info.
//!
//! - [`ReflectKind`]: the kind of a reflected type.
//!
//! - [`Typed`]: a static accessor to [`TypeInfo`].
//!
//! - [`DynamicTyped`]: dynamic dispatch for `Typed`.
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod opaque_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldFlags, NamedField};
pub use list_info::ListInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{ShortName, Type};
pub use typed::{DynamicTyped, Typed};
