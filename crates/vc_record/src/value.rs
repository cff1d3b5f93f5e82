use alloc::string::String;
use alloc::vec::Vec;

use time::OffsetDateTime;

use crate::Key;

/// The property name that binds a nested record's own key.
pub const KEY_PROPERTY: &str = "__key__";

// -----------------------------------------------------------------------------
// GeoPoint

/// A point on the globe, in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if latitude is in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

vc_reflect::impl_reflect_opaque!(GeoPoint);

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed property value.
///
/// `Array` only appears at the top of a property, never inside another
/// array.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Timestamp(OffsetDateTime),
    Key(Key),
    GeoPoint(GeoPoint),
    Entity(Vec<Property>),
    Array(Vec<Value>),
}

impl Value {
    /// The logical type name used in type-mismatch messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_record::Value;
    ///
    /// assert_eq!(Value::Null.type_name(), "empty");
    /// assert_eq!(Value::Bytes(vec![1]).type_name(), "[]byte");
    /// ```
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "empty",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "[]byte",
            Self::Timestamp(_) => "time",
            Self::Key(_) => "key",
            Self::GeoPoint(_) => "GeoPoint",
            Self::Entity(_) => "entity",
            Self::Array(_) => "array",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_value_from! {
    bool => Bool,
    i64 => Int,
    f64 => Float,
    String => String,
    Vec<u8> => Bytes,
    OffsetDateTime => Timestamp,
    Key => Key,
    GeoPoint => GeoPoint,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

// -----------------------------------------------------------------------------
// Property

/// A named value of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: Value,
    /// Excludes the value from indexes when saved.
    pub no_index: bool,
}

impl Property {
    /// Creates an indexed property.
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            no_index: false,
        }
    }

    #[inline]
    pub fn with_no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}

/// An ordered property list that loads and saves itself verbatim.
///
/// Loading appends, so repeated loads accumulate.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PropertyList(pub Vec<Property>);

impl PropertyList {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the first property with the given name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.0.iter().find(|p| p.name == name)
    }
}

impl From<Vec<Property>> for PropertyList {
    #[inline]
    fn from(value: Vec<Property>) -> Self {
        Self(value)
    }
}

// -----------------------------------------------------------------------------
// Tests
