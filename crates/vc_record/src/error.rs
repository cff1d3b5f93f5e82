use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;
use vc_reflect::info::ShortName;

// -----------------------------------------------------------------------------
// FieldError

/// Why a single property could not be stored into its field.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum FieldError {
    /// No field answers to the property name.
    #[error("no such struct field")]
    NotFound,
    /// The property resolved, but its field cannot be written.
    #[error("cannot set struct field")]
    NotSettable,
    /// A second value arrived for a field that holds one value.
    ///
    /// The field is reset to its zero value.
    #[error("multiple-valued property requires a slice field type")]
    MultiValueRequiresSlice,
    /// The value's kind is not accepted by the field's type.
    #[error("type mismatch: {value} versus {target}")]
    TypeMismatch {
        value: &'static str,
        target: ShortName<'static>,
    },
    /// A number does not fit the field's type.
    #[error("value {value} overflows struct field of type {target}")]
    Overflow {
        value: String,
        target: ShortName<'static>,
    },
    /// The field's shape cannot hold a property value.
    #[error("unsupported struct field: {0}")]
    Unsupported(&'static str),
    /// A nested record failed to load.
    #[error("{0}")]
    Nested(Box<FieldMismatch>),
    /// The wire value could not be converted.
    #[error("{0}")]
    InvalidValue(ConvertError),
}

// -----------------------------------------------------------------------------
// FieldMismatch

/// The last field failure of a load, with the struct and property it hit.
///
/// Loading never stops at the first failure: every other property is still
/// stored, and only the last failure is reported.
#[derive(Debug, Error, Clone)]
#[error("cannot load field \"{field_name}\" into a \"{struct_type}\": {reason}")]
pub struct FieldMismatch {
    pub struct_type: ShortName<'static>,
    pub field_name: String,
    pub reason: FieldError,
}

// -----------------------------------------------------------------------------
// LoadError

/// Error returned by [`load_entity`](crate::load_entity) and
/// [`PropertyLoadSaver::load`](crate::PropertyLoadSaver::load).
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    FieldMismatch(#[from] FieldMismatch),
    /// Raised by hand-written loaders.
    #[error("{0}")]
    Custom(String),
}

// -----------------------------------------------------------------------------
// SaveError

/// Error returned while turning a value into properties or a wire entity.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SaveError {
    /// An unsigned value above `i64::MAX`.
    #[error("value {value} of field \"{field}\" overflows a 64-bit integer")]
    Overflow { value: u64, field: &'static str },
    /// A list whose items are lists.
    #[error("field \"{field}\" is a list of lists")]
    NestedList { field: &'static str },
    /// An array value holding another array value.
    #[error("property \"{name}\" holds an array inside an array")]
    NestedArray { name: String },
    /// A latitude or longitude outside its range.
    #[error("property \"{name}\" holds an invalid GeoPoint")]
    InvalidGeoPoint { name: String },
    /// An opaque field type without a record mapping.
    #[error("field \"{field}\" has unsupported type {target}")]
    Unsupported {
        field: &'static str,
        target: ShortName<'static>,
    },
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),
    /// Raised by hand-written savers.
    #[error("{0}")]
    Custom(String),
}

// -----------------------------------------------------------------------------
// KeyError

/// A key path that cannot form a [`Key`](crate::Key).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyError {
    #[error("key path is empty")]
    EmptyPath,
    #[error("key path element {position} has an empty kind")]
    EmptyKind { position: usize },
    #[error("ancestor \"{kind}\" has no id or name")]
    IncompleteAncestor { kind: String },
}

// -----------------------------------------------------------------------------
// ConvertError

/// A wire value that has no [`Value`](crate::Value) counterpart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("invalid key: {0}")]
    Key(#[from] KeyError),
    #[error("timestamp {seconds}s {nanos}ns is out of range")]
    Timestamp { seconds: i64, nanos: i32 },
    /// A property inside a nested entity or array failed.
    #[error("property \"{name}\": {source}")]
    Property {
        name: String,
        source: Box<ConvertError>,
    },
}

// -----------------------------------------------------------------------------
// Tests
