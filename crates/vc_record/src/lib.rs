#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod entity;
mod error;
mod key;
mod pls;
mod save;
mod value;

pub mod codec;
pub mod convert;
pub mod load;
pub mod wire;

// -----------------------------------------------------------------------------
// Top-level exports

pub use entity::{load_entity, save_entity};
pub use error::{ConvertError, FieldError, FieldMismatch, KeyError, LoadError, SaveError};
pub use key::{Key, KeyId};
pub use load::load_struct;
pub use pls::PropertyLoadSaver;
pub use save::save_struct;
pub use value::{GeoPoint, KEY_PROPERTY, Property, PropertyList, Value};
