#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_record as record;
pub use vc_reflect as reflect;
pub use vc_utils as utils;

pub use vc_record::{load_entity, load_struct, save_entity, save_struct};
pub use vc_record::{FieldError, FieldMismatch, LoadError, SaveError};
pub use vc_record::{GeoPoint, Key, Property, PropertyList, PropertyLoadSaver, Value};
pub use vc_reflect::derive::Reflect;
