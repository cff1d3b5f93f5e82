//! Data access through reflection.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], each providing the data
//! access methods of one kind of type.
//!
//! - [`Struct`]: For named structs (e.g. `A { .. }`), fields by index.
//! - [`List`]: For list-like (e.g. `Vec<i32>`), growable with zero values.
//! - [`Pointer`]: For optional values (e.g. `Option<T>`), allocate-if-empty.
//!
//! Scalars are exposed as typed references through [`ScalarRef`] and
//! [`ScalarMut`]. Opaque values are handed out as `dyn Reflect` and
//! downcast by the consumer.
//!
//! [`ReflectRef`] and [`ReflectMut`] select one of these views.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod pointer_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use pointer_ops::Pointer;
pub use scalar_ops::{ScalarMut, ScalarRef};
pub use struct_ops::{Struct, StructFieldIter};
