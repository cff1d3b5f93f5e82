//! Turning reflected structs back into properties.

use alloc::vec::Vec;

use time::OffsetDateTime;
use vc_reflect::Reflect;
use vc_reflect::ops::{List, ReflectRef, ScalarRef, Struct};

use crate::codec::Codec;
use crate::{GeoPoint, Key, Property, SaveError, Value};

/// Saves the fields of `src` as properties, in declaration order.
///
/// Fields of embedded structs that promote their names are saved flat, as
/// if declared in `src`. Empty lists are left out.
///
/// # Examples
///
/// ```
/// use vc_record::{Property, Value, save_struct};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Note {
///     #[reflect(name = "Body", noindex)]
///     body: String,
///     tags: Vec<String>,
///     parent: Option<Box<Note>>,
/// }
///
/// let note = Note { body: "hi".into(), ..Default::default() };
/// let props = save_struct(&note).unwrap();
///
/// assert_eq!(props, [
///     Property::new("Body", "hi").with_no_index(),
///     Property::new("parent", Value::Null),
/// ]);
/// ```
pub fn save_struct(src: &dyn Struct) -> Result<Vec<Property>, SaveError> {
    let mut properties = Vec::with_capacity(src.field_len());
    save_fields(src, &mut properties)?;
    Ok(properties)
}

fn save_fields(src: &dyn Struct, out: &mut Vec<Property>) -> Result<(), SaveError> {
    let codec = Codec::of_struct(src);
    for (index, descriptor) in codec.fields().iter().enumerate() {
        let Some(field) = src.field_at(index) else {
            continue;
        };
        if descriptor.is_promoting() {
            if let Some(inner) = embedded(field) {
                save_fields(inner, out)?;
            }
            continue;
        }
        if let Some(value) = save_value(field, descriptor.name())? {
            out.push(Property {
                name: descriptor.name().into(),
                value,
                no_index: descriptor.is_no_index(),
            });
        }
    }
    Ok(())
}

fn embedded(field: &dyn Reflect) -> Option<&dyn Struct> {
    match field.reflect_ref() {
        ReflectRef::Struct(value) => Some(value),
        ReflectRef::Pointer(pointer) => pointer.pointee().and_then(embedded),
        _ => None,
    }
}

/// `None` for a value that is left out entirely.
fn save_value(field: &dyn Reflect, name: &'static str) -> Result<Option<Value>, SaveError> {
    match field.reflect_ref() {
        ReflectRef::Scalar(scalar) => scalar_value(scalar, name).map(Some),
        ReflectRef::Pointer(pointer) => match pointer.pointee() {
            Some(inner) => save_value(inner, name),
            None => Ok(Some(Value::Null)),
        },
        ReflectRef::Struct(record) => save_struct(record).map(|p| Some(Value::Entity(p))),
        ReflectRef::List(list) => list_value(list, name),
        ReflectRef::Opaque(opaque) => opaque_value(opaque, name).map(Some),
    }
}

fn list_value(list: &dyn List, name: &'static str) -> Result<Option<Value>, SaveError> {
    if list.is_empty() {
        return Ok(None);
    }
    let mut values = Vec::with_capacity(list.len());
    for item in list.iter() {
        match save_value(item, name)? {
            Some(Value::Array(_)) | None => return Err(SaveError::NestedList { field: name }),
            Some(value) => values.push(value),
        }
    }
    Ok(Some(Value::Array(values)))
}

fn scalar_value(scalar: ScalarRef<'_>, name: &'static str) -> Result<Value, SaveError> {
    let overflow = |value: u64| SaveError::Overflow { value, field: name };
    Ok(match scalar {
        ScalarRef::Bool(b) => Value::Bool(*b),
        ScalarRef::I8(x) => Value::Int(i64::from(*x)),
        ScalarRef::I16(x) => Value::Int(i64::from(*x)),
        ScalarRef::I32(x) => Value::Int(i64::from(*x)),
        ScalarRef::I64(x) => Value::Int(*x),
        ScalarRef::Isize(x) => Value::Int(*x as i64),
        ScalarRef::U8(x) => Value::Int(i64::from(*x)),
        ScalarRef::U16(x) => Value::Int(i64::from(*x)),
        ScalarRef::U32(x) => Value::Int(i64::from(*x)),
        ScalarRef::U64(x) => Value::Int(i64::try_from(*x).map_err(|_| overflow(*x))?),
        ScalarRef::Usize(x) => Value::Int(i64::try_from(*x).map_err(|_| overflow(*x as u64))?),
        ScalarRef::F32(x) => Value::Float(f64::from(*x)),
        ScalarRef::F64(x) => Value::Float(*x),
        ScalarRef::String(s) => Value::String(s.clone()),
        ScalarRef::Bytes(b) => Value::Bytes(b.clone()),
    })
}

fn opaque_value(opaque: &dyn Reflect, name: &'static str) -> Result<Value, SaveError> {
    if let Some(time) = opaque.downcast_ref::<OffsetDateTime>() {
        return Ok(Value::Timestamp(*time));
    }
    if let Some(point) = opaque.downcast_ref::<GeoPoint>() {
        return Ok(Value::GeoPoint(*point));
    }
    if let Some(key) = opaque.downcast_ref::<Key>() {
        // The zero key stands for "no key".
        if *key == Key::default() {
            return Ok(Value::Null);
        }
        return Ok(Value::Key(key.clone()));
    }
    Err(SaveError::Unsupported {
        field: name,
        target: opaque.ty().name(),
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use vc_reflect::derive::Reflect;

    use super::*;
    use crate::KeyId;

    #[derive(Reflect, Default)]
    struct Stamp {
        at: i64,
    }

    #[derive(Reflect, Default)]
    struct Doc {
        #[reflect(embed)]
        stamp: Stamp,
        #[reflect(embed, name = "Meta")]
        meta: Stamp,
        owner: Key,
        size: u64,
        grid: Vec<Vec<i64>>,
    }

    #[test]
    fn embedded_fields_are_flattened() {
        let doc = Doc {
            stamp: Stamp { at: 5 },
            meta: Stamp { at: 6 },
            ..Default::default()
        };
        let props = save_struct(&doc).unwrap();

        assert_eq!(props[0], Property::new("at", 5_i64));
        assert_eq!(
            props[1],
            Property::new("Meta", Value::Entity(vec![Property::new("at", 6_i64)])),
        );
        assert_eq!(props[2], Property::new("owner", Value::Null));
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn unsigned_overflow() {
        let doc = Doc {
            size: u64::MAX,
            ..Default::default()
        };
        assert!(matches!(
            save_struct(&doc),
            Err(SaveError::Overflow { field: "size", .. }),
        ));
    }

    #[test]
    fn list_of_lists() {
        let doc = Doc {
            grid: vec![vec![1]],
            ..Default::default()
        };
        assert!(matches!(
            save_struct(&doc),
            Err(SaveError::NestedList { field: "grid" }),
        ));
    }

    #[test]
    fn keys_and_strings() {
        let doc = Doc {
            owner: Key::new("User", KeyId::Name(String::from("ann"))),
            ..Default::default()
        };
        let props = save_struct(&doc).unwrap();
        assert!(matches!(&props[2].value, Value::Key(key) if key.kind() == "User"));
    }
}
