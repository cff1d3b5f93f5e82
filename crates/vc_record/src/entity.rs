//! Entry points between wire records and destinations.

use vc_reflect::info::ShortName;

use crate::convert::{Converted, properties_from_wire, properties_to_wire};
use crate::{FieldError, FieldMismatch, Key, LoadError, PropertyLoadSaver, SaveError, wire};

/// Loads a wire record into `dst`.
///
/// Properties whose wire value cannot be converted are skipped; the others
/// are loaded. If loading itself succeeds, the last skipped property is
/// reported as a [`FieldError::InvalidValue`].
///
/// # Examples
///
/// ```
/// use vc_record::{load_entity, wire};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Lamp {
///     #[reflect(name = "Name")]
///     name: String,
///     #[reflect(name = "Watts")]
///     watts: u16,
/// }
///
/// let entity: wire::Entity = serde_json::from_str(r#"{
///     "properties": {
///         "Name": { "valueType": { "string": "desk" } },
///         "Watts": { "valueType": { "integer": 40 } }
///     }
/// }"#).unwrap();
///
/// let mut lamp = Lamp::default();
/// load_entity(&mut lamp, &entity).unwrap();
///
/// assert_eq!(lamp.name, "desk");
/// assert_eq!(lamp.watts, 40);
/// ```
pub fn load_entity<D: PropertyLoadSaver + ?Sized>(dst: &mut D, entity: &wire::Entity) -> Result<(), LoadError> {
    let Converted {
        properties,
        failures,
    } = properties_from_wire(entity);

    dst.load(properties)?;

    match failures.into_iter().last() {
        None => Ok(()),
        Some((field_name, err)) => Err(FieldMismatch {
            struct_type: ShortName(core::any::type_name::<D>()),
            field_name,
            reason: FieldError::InvalidValue(err),
        }
        .into()),
    }
}

/// Saves `src` as a wire record under `key`.
///
/// Without a `key`, a `__key__` property of `src` becomes the record key.
pub fn save_entity<S: PropertyLoadSaver + ?Sized>(key: Option<&Key>, src: &S) -> Result<wire::Entity, SaveError> {
    if let Some(key) = key {
        key.validate()?;
    }
    let properties = src.save()?;
    properties_to_wire(key, &properties)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use vc_reflect::derive::Reflect;

    use super::*;
    use crate::wire::ValueType;
    use crate::{KeyError, KeyId, PropertyList, Value};

    #[derive(Reflect, Default)]
    struct Owned {
        name: String,
        owner: Option<Key>,
    }

    #[test]
    fn conversion_failures_are_reported() {
        let mut entity = wire::Entity::default();
        entity
            .properties
            .insert("name".into(), wire::Value::new(ValueType::String("a".into())));
        entity
            .properties
            .insert("owner".into(), wire::Value::new(ValueType::Key(wire::Key::default())));

        let mut owned = Owned::default();
        let Err(LoadError::FieldMismatch(err)) = load_entity(&mut owned, &entity) else {
            panic!("expected a field mismatch");
        };

        assert_eq!(owned.name, "a");
        assert!(owned.owner.is_none());
        assert_eq!(err.field_name, "owner");
        assert_eq!(err.struct_type.to_string(), "Owned");
        assert!(matches!(
            err.reason,
            FieldError::InvalidValue(crate::ConvertError::Key(KeyError::EmptyPath)),
        ));
    }

    #[test]
    fn save_with_key() {
        let owned = Owned {
            name: "a".into(),
            owner: Some(Key::new("User", KeyId::Id(9))),
        };
        let key = Key::new("Owned", KeyId::Name("x".into()));
        let entity = save_entity(Some(&key), &owned).unwrap();

        assert_eq!(entity.key.unwrap().path[0].kind, "Owned");
        assert_eq!(entity.properties.len(), 2);

        let bad = Key::new("", KeyId::Id(1));
        assert!(matches!(
            save_entity(Some(&bad), &owned),
            Err(SaveError::InvalidKey(KeyError::EmptyKind { position: 0 })),
        ));
    }

    #[test]
    fn property_list_round_trip() {
        let list = PropertyList(vec![
            crate::Property::new("a", 1_i64),
            crate::Property::new("a", Value::Null),
        ]);
        let entity = save_entity(None, &list).unwrap();

        let mut back = PropertyList::new();
        load_entity(&mut back, &entity).unwrap();
        assert_eq!(back.0.len(), 1);
        assert_eq!(
            back.0[0].value,
            Value::Array(vec![Value::Int(1), Value::Null]),
        );
    }
}
