//! The transport's tagged record shape.
//!
//! These types only describe records as they arrive from, or leave for,
//! the transport. No byte encoding is owned here: every type derives
//! `serde` traits, so any format the caller picks works, JSON fixtures
//! included.
//!
//! # Examples
//!
//! ```
//! use vc_record::wire::{Entity, ValueType};
//!
//! let json = r#"{
//!     "properties": {
//!         "Name": { "valueType": { "string": "lamp" } },
//!         "Gone": { "valueType": "null", "excludeFromIndexes": true }
//!     }
//! }"#;
//! let entity: Entity = serde_json::from_str(json).unwrap();
//!
//! assert!(entity.key.is_none());
//! assert_eq!(entity.properties["Name"].value_type, ValueType::String("lamp".into()));
//! assert!(entity.properties["Gone"].exclude_from_indexes);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A record: an optional key and its named values.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub value_type: ValueType,
    #[serde(default)]
    pub exclude_from_indexes: bool,
}

impl Value {
    #[inline]
    pub const fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            exclude_from_indexes: false,
        }
    }
}

/// The tagged payload of a [`Value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Timestamp(Timestamp),
    Key(Key),
    String(String),
    Blob(Vec<u8>),
    GeoPoint(LatLng),
    Entity(Entity),
    Array(Vec<Value>),
}

/// Seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

// -----------------------------------------------------------------------------
// Key

/// A key as a partition and a root-first path.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    #[serde(default)]
    pub partition_id: PartitionId,
    #[serde(default)]
    pub path: Vec<PathElement>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionId {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub namespace_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    pub kind: String,
    /// `None` for an incomplete element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_type: Option<IdType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdType {
    Id(i64),
    Name(String),
}
