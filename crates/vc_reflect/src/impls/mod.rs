//! Built-in implementations and helpers for implementing reflection by hand.
//!
//! - scalars: `bool`, integers, floats, `String`, and `Vec<u8>` as a byte blob;
//! - `Vec<T>` as a list, `Option<T>` as a pointer, `Box<T>` transparent;
//! - `time::OffsetDateTime` as an opaque leaf.
//!
//! [`impl_reflect_opaque!`](crate::impl_reflect_opaque) registers further
//! opaque leaf types.

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod cell;
mod list;
mod offset_date_time;
mod opaque;
mod option;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
