use vc_record::{
    ConvertError, FieldError, Key, KeyError, KeyId, LoadError, Property, PropertyList,
    PropertyLoadSaver, SaveError, Value, load_entity, save_entity, wire,
};
use vc_reflect::derive::Reflect;

fn entity(json: &str) -> wire::Entity {
    serde_json::from_str(json).unwrap()
}

fn mismatch(result: Result<(), LoadError>) -> vc_record::FieldMismatch {
    match result {
        Err(LoadError::FieldMismatch(err)) => err,
        other => panic!("expected a field mismatch, got {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// Nested entities, nulls and unreadable keys

#[derive(Reflect, Default, Debug, PartialEq)]
struct Address {
    #[reflect(name = "__key__")]
    key: Key,
    #[reflect(name = "City")]
    city: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Person {
    #[reflect(name = "Name")]
    name: String,
    #[reflect(name = "Age")]
    age: Option<i64>,
    #[reflect(name = "Height")]
    height: f64,
    #[reflect(name = "Home")]
    home: Option<Address>,
    #[reflect(name = "Manager")]
    manager: Option<Key>,
}

const PERSON: &str = r#"{
    "key": {
        "partitionId": { "projectId": "hr" },
        "path": [{ "kind": "Person", "idType": { "name": "ann" } }]
    },
    "properties": {
        "Name": { "valueType": { "string": "Ann" } },
        "Age": { "valueType": "null" },
        "Height": { "valueType": "null" },
        "Home": {
            "valueType": {
                "entity": {
                    "key": {
                        "partitionId": { "projectId": "hr" },
                        "path": [{ "kind": "Address", "idType": { "id": 12 } }]
                    },
                    "properties": {
                        "City": { "valueType": { "string": "Bergen" } }
                    }
                }
            },
            "excludeFromIndexes": true
        },
        "Manager": {
            "valueType": {
                "key": {
                    "path": [
                        { "kind": "Org" },
                        { "kind": "Person", "idType": { "id": 1 } }
                    ]
                }
            }
        }
    }
}"#;

#[test]
fn fixture_with_nested_entity_and_bad_key() {
    let mut person = Person {
        age: Some(40),
        height: 1.8,
        ..Person::default()
    };
    let err = mismatch(load_entity(&mut person, &entity(PERSON)));

    assert_eq!(err.field_name, "Manager");
    assert_eq!(err.struct_type.to_string(), "Person");
    assert!(matches!(
        err.reason,
        FieldError::InvalidValue(ConvertError::Key(KeyError::IncompleteAncestor { ref kind }))
            if kind == "Org",
    ));

    assert_eq!(person.name, "Ann");
    assert_eq!(person.age, None);
    assert_eq!(person.height, 0.0);
    assert!(person.manager.is_none());

    let home = person.home.unwrap();
    assert_eq!(home.city, "Bergen");
    assert_eq!(home.key.kind(), "Address");
    assert_eq!(home.key.id(), &KeyId::Id(12));
    assert_eq!(home.key.project(), "hr");
}

#[test]
fn bad_key_inside_nested_entity() {
    let json = r#"{
        "properties": {
            "Home": {
                "valueType": {
                    "entity": {
                        "properties": {
                            "City": { "valueType": { "string": "Oslo" } },
                            "Owner": { "valueType": { "key": { "path": [] } } }
                        }
                    }
                }
            }
        }
    }"#;

    let mut person = Person::default();
    let err = mismatch(load_entity(&mut person, &entity(json)));

    assert_eq!(err.field_name, "Home");
    assert!(matches!(
        err.reason,
        FieldError::InvalidValue(ConvertError::Property { ref name, .. }) if name == "Owner",
    ));
    // The whole nested entity is dropped.
    assert!(person.home.is_none());
}

// -----------------------------------------------------------------------------
// Repeated values

#[derive(Reflect, Default, Debug, PartialEq)]
struct Post {
    #[reflect(name = "Tag")]
    tags: Vec<String>,
    #[reflect(name = "X")]
    x: i64,
    #[reflect(name = "Title")]
    title: String,
}

#[test]
fn array_values_fill_lists() {
    let json = r#"{
        "properties": {
            "Tag": {
                "valueType": { "array": [
                    { "valueType": { "string": "a" } },
                    { "valueType": { "string": "b" } },
                    { "valueType": { "string": "c" } }
                ] }
            },
            "Title": { "valueType": { "string": "hello" } }
        }
    }"#;

    let mut post = Post::default();
    load_entity(&mut post, &entity(json)).unwrap();

    assert_eq!(post.tags, ["a", "b", "c"]);
    assert_eq!(post.title, "hello");
}

#[test]
fn array_into_single_field() {
    let json = r#"{
        "properties": {
            "X": {
                "valueType": { "array": [
                    { "valueType": { "integer": 1 } },
                    { "valueType": { "integer": 2 } }
                ] }
            },
            "Title": { "valueType": { "string": "kept" } }
        }
    }"#;

    let mut post = Post {
        x: 9,
        ..Post::default()
    };
    let err = mismatch(load_entity(&mut post, &entity(json)));

    assert_eq!(err.field_name, "X");
    assert!(matches!(err.reason, FieldError::MultiValueRequiresSlice));
    assert_eq!(post.x, 0);
    assert_eq!(post.title, "kept");
}

// -----------------------------------------------------------------------------
// Partial loads

#[derive(Reflect, Default, Debug, PartialEq)]
struct Gadget {
    #[reflect(name = "Count")]
    count: i8,
    #[reflect(name = "Label")]
    label: String,
    #[reflect(name = "Ratio")]
    ratio: f32,
}

#[test]
fn overflow_keeps_the_rest() {
    let json = r#"{
        "properties": {
            "Count": { "valueType": { "integer": 1000 } },
            "Label": { "valueType": { "string": "dial" } },
            "Ratio": { "valueType": { "double": 0.5 } }
        }
    }"#;

    let mut gadget = Gadget::default();
    let err = mismatch(load_entity(&mut gadget, &entity(json)));

    assert_eq!(err.field_name, "Count");
    assert!(matches!(err.reason, FieldError::Overflow { .. }));
    assert_eq!(
        err.to_string(),
        r#"cannot load field "Count" into a "Gadget": value 1000 overflows struct field of type i8"#,
    );
    assert_eq!(
        gadget,
        Gadget {
            count: 0,
            label: "dial".into(),
            ratio: 0.5,
        },
    );
}

#[test]
fn type_mismatch_keeps_the_rest() {
    let json = r#"{
        "properties": {
            "Count": { "valueType": { "string": "ten" } },
            "Label": { "valueType": { "integer": 3 } },
            "Ratio": { "valueType": { "double": 2.0 } }
        }
    }"#;

    let mut gadget = Gadget::default();
    let err = mismatch(load_entity(&mut gadget, &entity(json)));

    // Names load in order; `Label` fails last.
    assert_eq!(err.field_name, "Label");
    assert!(matches!(err.reason, FieldError::TypeMismatch { value: "int", .. }));
    assert_eq!(gadget.ratio, 2.0);
}

// -----------------------------------------------------------------------------
// Hand-written loaders

/// Keeps string properties only, upper-cased.
#[derive(Default)]
struct Shouting(Vec<(String, String)>);

impl PropertyLoadSaver for Shouting {
    fn load(&mut self, properties: Vec<Property>) -> Result<(), LoadError> {
        for property in properties {
            match property.value {
                Value::String(s) => self.0.push((property.name, s.to_uppercase())),
                other => {
                    return Err(LoadError::Custom(format!(
                        "{} holds {}",
                        property.name,
                        other.type_name(),
                    )));
                }
            }
        }
        Ok(())
    }

    fn save(&self) -> Result<Vec<Property>, SaveError> {
        Ok(self
            .0
            .iter()
            .map(|(name, s)| Property::new(name.as_str(), s.as_str()))
            .collect())
    }
}

#[test]
fn custom_loader_takes_control() {
    let json = r#"{
        "properties": {
            "a": { "valueType": { "string": "hi" } },
            "b": { "valueType": { "string": "yo" } }
        }
    }"#;

    let mut shouting = Shouting::default();
    load_entity(&mut shouting, &entity(json)).unwrap();
    assert_eq!(shouting.0[1], ("b".into(), "YO".into()));

    let saved = save_entity(None, &shouting).unwrap();
    assert_eq!(
        saved.properties["a"].value_type,
        wire::ValueType::String("HI".into()),
    );

    let json = r#"{ "properties": { "n": { "valueType": { "integer": 1 } } } }"#;
    let err = load_entity(&mut Shouting::default(), &entity(json)).unwrap_err();
    assert_eq!(err.to_string(), "n holds int");
}

#[test]
fn property_list_keeps_everything() {
    let mut list = PropertyList::new();
    assert!(load_entity(&mut list, &entity(PERSON)).is_err());

    // `Manager` could not be converted, the rest is kept as is.
    let names: Vec<&str> = list.0.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Age", "Height", "Home", "Name"]);
    assert!(list.get("Home").unwrap().no_index);
}

#[test]
fn key_property_becomes_the_record_key() {
    let list = PropertyList(vec![
        Property::new("__key__", Key::new("Person", KeyId::Id(5))),
        Property::new("Name", "Bo"),
    ]);
    let saved = save_entity(None, &list).unwrap();

    let key = saved.key.unwrap();
    assert_eq!(key.path[0].kind, "Person");
    assert_eq!(key.path[0].id_type, Some(wire::IdType::Id(5)));
    assert!(!saved.properties.contains_key("__key__"));
}
