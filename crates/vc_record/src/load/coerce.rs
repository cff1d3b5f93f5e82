use alloc::boxed::Box;
use alloc::string::ToString;

use time::OffsetDateTime;
use vc_reflect::info::ShortName;
use vc_reflect::ops::{Pointer, ReflectMut, ScalarMut, Struct};
use vc_reflect::{Reflect, Zeroed};

use crate::{FieldError, GeoPoint, Key, Value};

/// Stores `value` into `target`, converting it to the target's type.
///
/// `Null` stores the target's zero value. Integers are range checked. An
/// `Option` receives a fresh value that is converted first and stored only
/// on success.
///
/// # Examples
///
/// ```
/// use vc_record::{FieldError, Value, load::coerce};
///
/// let mut small = 0_i8;
/// assert!(coerce(&Value::Int(-7), &mut small).is_ok());
/// assert_eq!(small, -7);
///
/// let err = coerce(&Value::Int(1000), &mut small).unwrap_err();
/// assert_eq!(err.to_string(), "value 1000 overflows struct field of type i8");
///
/// let mut maybe: Option<String> = None;
/// coerce(&Value::String("x".into()), &mut maybe).unwrap();
/// assert_eq!(maybe.as_deref(), Some("x"));
///
/// let err = coerce(&Value::Bool(true), &mut maybe).unwrap_err();
/// assert!(matches!(err, FieldError::TypeMismatch { value: "bool", .. }));
/// assert_eq!(maybe.as_deref(), Some("x"));
/// ```
pub fn coerce(value: &Value, target: &mut dyn Reflect) -> Result<(), FieldError> {
    let target_name = target.ty().name();
    match target.reflect_mut() {
        ReflectMut::Scalar(scalar) => coerce_scalar(value, scalar, target_name),
        ReflectMut::Pointer(pointer) => coerce_pointer(value, pointer),
        ReflectMut::Struct(record) => coerce_struct(value, record, target_name),
        ReflectMut::List(_) => Err(FieldError::Unsupported("list inside a list")),
        ReflectMut::Opaque(opaque) => coerce_opaque(value, opaque, target_name),
    }
}

#[inline]
fn mismatch(value: &Value, target: ShortName<'static>) -> FieldError {
    FieldError::TypeMismatch {
        value: value.type_name(),
        target,
    }
}

// -----------------------------------------------------------------------------
// Scalars

fn integer<T: TryFrom<i64> + Default>(value: &Value, target: ShortName<'static>) -> Result<T, FieldError> {
    match value {
        Value::Int(x) => T::try_from(*x).map_err(|_| FieldError::Overflow {
            value: x.to_string(),
            target,
        }),
        Value::Null => Ok(T::default()),
        _ => Err(mismatch(value, target)),
    }
}

fn float32(value: &Value, target: ShortName<'static>) -> Result<f32, FieldError> {
    match value {
        Value::Float(x) if x.is_finite() && x.abs() > f64::from(f32::MAX) => {
            Err(FieldError::Overflow {
                value: x.to_string(),
                target,
            })
        }
        Value::Float(x) => Ok(*x as f32),
        Value::Null => Ok(0.0),
        _ => Err(mismatch(value, target)),
    }
}

fn coerce_scalar(value: &Value, scalar: ScalarMut<'_>, target: ShortName<'static>) -> Result<(), FieldError> {
    match scalar {
        ScalarMut::Bool(slot) => match value {
            Value::Bool(b) => *slot = *b,
            Value::Null => *slot = false,
            _ => return Err(mismatch(value, target)),
        },
        ScalarMut::I8(slot) => *slot = integer(value, target)?,
        ScalarMut::I16(slot) => *slot = integer(value, target)?,
        ScalarMut::I32(slot) => *slot = integer(value, target)?,
        ScalarMut::I64(slot) => *slot = integer(value, target)?,
        ScalarMut::Isize(slot) => *slot = integer(value, target)?,
        ScalarMut::U8(slot) => *slot = integer(value, target)?,
        ScalarMut::U16(slot) => *slot = integer(value, target)?,
        ScalarMut::U32(slot) => *slot = integer(value, target)?,
        ScalarMut::U64(slot) => *slot = integer(value, target)?,
        ScalarMut::Usize(slot) => *slot = integer(value, target)?,
        ScalarMut::F32(slot) => *slot = float32(value, target)?,
        ScalarMut::F64(slot) => match value {
            Value::Float(x) => *slot = *x,
            Value::Null => *slot = 0.0,
            _ => return Err(mismatch(value, target)),
        },
        ScalarMut::String(slot) => match value {
            Value::String(s) => slot.clone_from(s),
            Value::Null => slot.clear(),
            _ => return Err(mismatch(value, target)),
        },
        ScalarMut::Bytes(slot) => match value {
            Value::Bytes(b) => slot.clone_from(b),
            Value::Null => slot.clear(),
            _ => return Err(mismatch(value, target)),
        },
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Pointers and structs

fn coerce_pointer(value: &Value, pointer: &mut dyn Pointer) -> Result<(), FieldError> {
    if value.is_null() {
        pointer.clear();
        return Ok(());
    }
    let mut result = Ok(());
    pointer.fill_zeroed(&mut |fresh| {
        result = coerce(value, fresh);
        result.is_ok()
    });
    result
}

fn coerce_struct(value: &Value, record: &mut dyn Struct, target: ShortName<'static>) -> Result<(), FieldError> {
    match value {
        Value::Entity(properties) => super::load_struct(record, properties)
            .map_err(|nested| FieldError::Nested(Box::new(nested))),
        _ => Err(mismatch(value, target)),
    }
}

// -----------------------------------------------------------------------------
// Opaque leaves

fn assign<T: Clone + Zeroed>(
    slot: &mut T,
    value: &Value,
    target: ShortName<'static>,
    extract: impl FnOnce(&Value) -> Option<&T>,
) -> Result<(), FieldError> {
    if value.is_null() {
        *slot = T::zeroed();
        return Ok(());
    }
    let found = extract(value).ok_or_else(|| mismatch(value, target))?;
    slot.clone_from(found);
    Ok(())
}

fn coerce_opaque(value: &Value, opaque: &mut dyn Reflect, target: ShortName<'static>) -> Result<(), FieldError> {
    if let Some(slot) = opaque.downcast_mut::<OffsetDateTime>() {
        return assign(slot, value, target, |v| match v {
            Value::Timestamp(t) => Some(t),
            _ => None,
        });
    }
    if let Some(slot) = opaque.downcast_mut::<GeoPoint>() {
        return assign(slot, value, target, |v| match v {
            Value::GeoPoint(p) => Some(p),
            _ => None,
        });
    }
    if let Some(slot) = opaque.downcast_mut::<Key>() {
        return assign(slot, value, target, |v| match v {
            Value::Key(k) => Some(k),
            _ => None,
        });
    }
    Err(FieldError::Unsupported("opaque type without a property mapping"))
}

// -----------------------------------------------------------------------------
// Tests
