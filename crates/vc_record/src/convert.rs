//! Conversion between [`wire`](crate::wire) values and dynamic [`Value`]s.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use time::OffsetDateTime;

use crate::wire::{self, IdType, LatLng, ValueType};
use crate::{ConvertError, GeoPoint, Key, KeyError, KeyId, KEY_PROPERTY, Property, SaveError, Value};

// -----------------------------------------------------------------------------
// Keys

/// Builds a [`Key`] from a root-first wire path.
///
/// A zero id or an empty name marks the element incomplete, which only the
/// last element may be.
pub fn key_from_wire(key: &wire::Key) -> Result<Key, KeyError> {
    let last = key.path.len().checked_sub(1).ok_or(KeyError::EmptyPath)?;
    let mut current: Option<Key> = None;

    for (position, element) in key.path.iter().enumerate() {
        if element.kind.is_empty() {
            return Err(KeyError::EmptyKind { position });
        }
        let id = match &element.id_type {
            Some(IdType::Id(id)) if *id != 0 => KeyId::Id(*id),
            Some(IdType::Name(name)) if !name.is_empty() => KeyId::Name(name.clone()),
            _ => KeyId::Incomplete,
        };
        if position != last && id == KeyId::Incomplete {
            return Err(KeyError::IncompleteAncestor {
                kind: element.kind.clone(),
            });
        }

        let next = match current.take() {
            Some(parent) => Key::new(element.kind.as_str(), id).with_parent(parent),
            None => Key::new(element.kind.as_str(), id)
                .with_project(key.partition_id.project_id.as_str())
                .with_namespace(key.partition_id.namespace_id.as_str()),
        };
        current = Some(next);
    }

    current.ok_or(KeyError::EmptyPath)
}

pub fn key_to_wire(key: &Key) -> wire::Key {
    let mut path: Vec<wire::PathElement> = key
        .ancestors()
        .map(|k| wire::PathElement {
            kind: k.kind().into(),
            id_type: match k.id() {
                KeyId::Incomplete => None,
                KeyId::Id(id) => Some(IdType::Id(*id)),
                KeyId::Name(name) => Some(IdType::Name(name.clone())),
            },
        })
        .collect();
    path.reverse();

    wire::Key {
        partition_id: wire::PartitionId {
            project_id: key.project().into(),
            namespace_id: key.namespace().into(),
        },
        path,
    }
}

// -----------------------------------------------------------------------------
// Timestamps

fn timestamp_from_wire(ts: wire::Timestamp) -> Result<OffsetDateTime, ConvertError> {
    let nanos = i128::from(ts.seconds) * 1_000_000_000 + i128::from(ts.nanos);
    OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| ConvertError::Timestamp {
        seconds: ts.seconds,
        nanos: ts.nanos,
    })
}

fn timestamp_to_wire(time: OffsetDateTime) -> wire::Timestamp {
    wire::Timestamp {
        seconds: time.unix_timestamp(),
        nanos: time.nanosecond() as i32,
    }
}

// -----------------------------------------------------------------------------
// Wire to Value

/// The outcome of converting a record's properties.
///
/// Properties that failed are left out of `properties` and reported, by
/// name, in `failures`.
#[derive(Debug, Default)]
pub struct Converted {
    pub properties: Vec<Property>,
    pub failures: Vec<(String, ConvertError)>,
}

/// Converts one wire value.
///
/// # Examples
///
/// ```
/// use vc_record::{Value, convert::value_from_wire, wire};
///
/// let raw = wire::Value::new(wire::ValueType::Integer(5));
/// assert_eq!(value_from_wire(&raw), Ok(Value::Int(5)));
///
/// let bad = wire::Value::new(wire::ValueType::Key(wire::Key::default()));
/// assert!(value_from_wire(&bad).is_err());
/// ```
pub fn value_from_wire(value: &wire::Value) -> Result<Value, ConvertError> {
    Ok(match &value.value_type {
        ValueType::Null => Value::Null,
        ValueType::Boolean(b) => Value::Bool(*b),
        ValueType::Integer(i) => Value::Int(*i),
        ValueType::Double(f) => Value::Float(*f),
        ValueType::String(s) => Value::String(s.clone()),
        ValueType::Blob(b) => Value::Bytes(b.clone()),
        ValueType::Timestamp(ts) => Value::Timestamp(timestamp_from_wire(*ts)?),
        ValueType::Key(key) => Value::Key(key_from_wire(key)?),
        ValueType::GeoPoint(ll) => Value::GeoPoint(GeoPoint::new(ll.latitude, ll.longitude)),
        ValueType::Entity(entity) => Value::Entity(nested_properties(entity)?),
        ValueType::Array(items) => Value::Array(
            items
                .iter()
                .map(value_from_wire)
                .collect::<Result<Vec<_>, _>>()?,
        ),
    })
}

/// Converts the properties of a top-level record, in name order.
///
/// The record's own key is not turned into a property; nested entities
/// carry theirs as a `__key__` property.
pub fn properties_from_wire(entity: &wire::Entity) -> Converted {
    let mut converted = Converted::default();
    for (name, value) in &entity.properties {
        match value_from_wire(value) {
            Ok(v) => converted.properties.push(Property {
                name: name.clone(),
                value: v,
                no_index: is_excluded(value),
            }),
            Err(err) => converted.failures.push((name.clone(), err)),
        }
    }
    converted
}

fn nested_properties(entity: &wire::Entity) -> Result<Vec<Property>, ConvertError> {
    let Converted {
        mut properties,
        failures,
    } = properties_from_wire(entity);

    if let Some((name, source)) = failures.into_iter().last() {
        return Err(ConvertError::Property {
            name,
            source: Box::new(source),
        });
    }
    if let Some(key) = &entity.key {
        properties.push(Property::new(KEY_PROPERTY, key_from_wire(key)?));
    }
    Ok(properties)
}

fn is_excluded(value: &wire::Value) -> bool {
    match &value.value_type {
        ValueType::Array(items) => {
            value.exclude_from_indexes || items.iter().any(|v| v.exclude_from_indexes)
        }
        _ => value.exclude_from_indexes,
    }
}

// -----------------------------------------------------------------------------
// Value to Wire

/// Converts one property value; `name` is only used in errors.
pub fn value_to_wire(value: &Value, no_index: bool, name: &str) -> Result<wire::Value, SaveError> {
    let value_type = match value {
        Value::Null => ValueType::Null,
        Value::Bool(b) => ValueType::Boolean(*b),
        Value::Int(i) => ValueType::Integer(*i),
        Value::Float(f) => ValueType::Double(*f),
        Value::String(s) => ValueType::String(s.clone()),
        Value::Bytes(b) => ValueType::Blob(b.clone()),
        Value::Timestamp(t) => ValueType::Timestamp(timestamp_to_wire(*t)),
        Value::Key(key) => {
            key.validate()?;
            ValueType::Key(key_to_wire(key))
        }
        Value::GeoPoint(point) => {
            if !point.is_valid() {
                return Err(SaveError::InvalidGeoPoint { name: name.into() });
            }
            ValueType::GeoPoint(LatLng {
                latitude: point.lat,
                longitude: point.lng,
            })
        }
        Value::Entity(properties) => ValueType::Entity(properties_to_wire(None, properties)?),
        Value::Array(items) => {
            let items = items
                .iter()
                .map(|item| match item {
                    Value::Array(_) => Err(SaveError::NestedArray { name: name.into() }),
                    item => value_to_wire(item, no_index, name),
                })
                .collect::<Result<Vec<_>, _>>()?;
            // The flag lives on the items.
            return Ok(wire::Value::new(ValueType::Array(items)));
        }
    };

    Ok(wire::Value {
        value_type,
        exclude_from_indexes: no_index,
    })
}

/// Builds a wire record from properties.
///
/// Repeated names are merged into one array value. A `__key__` property
/// becomes the record key unless `key` is given.
///
/// # Examples
///
/// ```
/// use vc_record::{Property, convert::properties_to_wire, wire::ValueType};
///
/// let props = [Property::new("Tag", "a"), Property::new("Tag", "b")];
/// let entity = properties_to_wire(None, &props).unwrap();
///
/// let ValueType::Array(items) = &entity.properties["Tag"].value_type else {
///     panic!("expected an array");
/// };
/// assert_eq!(items.len(), 2);
/// ```
pub fn properties_to_wire(key: Option<&Key>, properties: &[Property]) -> Result<wire::Entity, SaveError> {
    let mut entity = wire::Entity {
        key: key.map(key_to_wire),
        properties: BTreeMap::new(),
    };

    for property in properties {
        if property.name == KEY_PROPERTY {
            if let (None, Value::Key(own)) = (&entity.key, &property.value) {
                own.validate()?;
                entity.key = Some(key_to_wire(own));
            }
            continue;
        }

        let value = value_to_wire(&property.value, property.no_index, &property.name)?;
        match entity.properties.entry(property.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => merge_repeated(slot.get_mut(), value),
        }
    }

    Ok(entity)
}

fn merge_repeated(existing: &mut wire::Value, incoming: wire::Value) {
    let mut items = match core::mem::replace(&mut existing.value_type, ValueType::Null) {
        ValueType::Array(items) => items,
        single => vec![wire::Value {
            value_type: single,
            exclude_from_indexes: existing.exclude_from_indexes,
        }],
    };
    match incoming {
        wire::Value {
            value_type: ValueType::Array(more),
            ..
        } => items.extend(more),
        single => items.push(single),
    }
    existing.value_type = ValueType::Array(items);
    existing.exclude_from_indexes = false;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn path(elements: &[(&str, Option<IdType>)]) -> wire::Key {
        wire::Key {
            partition_id: wire::PartitionId {
                project_id: "proj".into(),
                namespace_id: String::new(),
            },
            path: elements
                .iter()
                .map(|(kind, id_type)| wire::PathElement {
                    kind: kind.to_string(),
                    id_type: id_type.clone(),
                })
                .collect(),
        }
    }

    #[test]
    fn key_round_trip() {
        let raw = path(&[
            ("Shop", Some(IdType::Name("north".into()))),
            ("Order", Some(IdType::Id(7))),
        ]);
        let key = key_from_wire(&raw).unwrap();

        assert_eq!(key.to_string(), "/Shop,\"north\"/Order,7");
        assert_eq!(key.project(), "proj");
        assert_eq!(key.parent().unwrap().project(), "proj");
        assert_eq!(key_to_wire(&key), raw);
    }

    #[test]
    fn key_errors() {
        assert_eq!(key_from_wire(&path(&[])), Err(KeyError::EmptyPath));
        assert_eq!(
            key_from_wire(&path(&[("A", None), ("B", Some(IdType::Id(1)))])),
            Err(KeyError::IncompleteAncestor { kind: "A".into() }),
        );
        assert_eq!(
            key_from_wire(&path(&[("A", Some(IdType::Id(1))), ("", None)])),
            Err(KeyError::EmptyKind { position: 1 }),
        );

        let incomplete = key_from_wire(&path(&[("A", Some(IdType::Id(0)))])).unwrap();
        assert!(incomplete.is_incomplete());
    }

    #[test]
    fn timestamps() {
        let raw = wire::Value::new(ValueType::Timestamp(wire::Timestamp {
            seconds: 1,
            nanos: 500,
        }));
        let Ok(Value::Timestamp(t)) = value_from_wire(&raw) else {
            panic!("expected a timestamp");
        };
        assert_eq!(t.unix_timestamp(), 1);
        assert_eq!(t.nanosecond(), 500);
        assert_eq!(timestamp_to_wire(t), wire::Timestamp { seconds: 1, nanos: 500 });

        let raw = wire::Value::new(ValueType::Timestamp(wire::Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        }));
        assert!(matches!(value_from_wire(&raw), Err(ConvertError::Timestamp { .. })));
    }

    #[test]
    fn nested_entity_carries_its_key() {
        let mut inner = wire::Entity {
            key: Some(path(&[("Item", Some(IdType::Id(3)))])),
            ..Default::default()
        };
        inner
            .properties
            .insert("N".into(), wire::Value::new(ValueType::Integer(1)));

        let mut outer = wire::Entity::default();
        outer
            .properties
            .insert("Inner".into(), wire::Value::new(ValueType::Entity(inner)));
        outer.properties.insert(
            "Broken".into(),
            wire::Value::new(ValueType::Key(wire::Key::default())),
        );

        let converted = properties_from_wire(&outer);
        assert_eq!(converted.failures.len(), 1);
        assert_eq!(converted.failures[0].0, "Broken");
        assert_eq!(converted.properties.len(), 1);

        let Value::Entity(props) = &converted.properties[0].value else {
            panic!("expected an entity");
        };
        assert_eq!(props[0], Property::new("N", 1_i64));
        assert_eq!(props[1].name, KEY_PROPERTY);
    }

    #[test]
    fn array_flags_and_nesting() {
        let mut raw = wire::Value::new(ValueType::String("a".into()));
        raw.exclude_from_indexes = true;
        let array = wire::Value::new(ValueType::Array(vec![raw]));

        let mut entity = wire::Entity::default();
        entity.properties.insert("A".into(), array);
        let converted = properties_from_wire(&entity);
        assert!(converted.properties[0].no_index);

        let nested = Value::Array(vec![Value::Array(Vec::new())]);
        assert!(matches!(
            value_to_wire(&nested, false, "A"),
            Err(SaveError::NestedArray { .. }),
        ));
    }

    #[test]
    fn repeated_names_merge() {
        let props = [
            Property::new("T", "a").with_no_index(),
            Property::new("T", Value::Array(vec!["b".into(), "c".into()])),
            Property::new(KEY_PROPERTY, Key::new("K", KeyId::Id(1))),
        ];
        let entity = properties_to_wire(None, &props).unwrap();

        assert_eq!(entity.key.unwrap().path[0].kind, "K");
        let merged = &entity.properties["T"];
        assert!(!merged.exclude_from_indexes);
        let ValueType::Array(items) = &merged.value_type else {
            panic!("expected an array");
        };
        assert_eq!(items.len(), 3);
        assert!(items[0].exclude_from_indexes);
        assert!(!items[2].exclude_from_indexes);
    }

    #[test]
    fn invalid_geo_point() {
        let value = Value::GeoPoint(GeoPoint::new(100.0, 0.0));
        assert!(matches!(
            value_to_wire(&value, false, "Where"),
            Err(SaveError::InvalidGeoPoint { .. }),
        ));
    }
}
