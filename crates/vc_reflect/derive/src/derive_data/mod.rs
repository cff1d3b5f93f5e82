//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
