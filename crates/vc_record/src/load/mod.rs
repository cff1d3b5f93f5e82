//! Loading properties into reflected structs.
//!
//! Every property is resolved to a field through the destination's
//! [`Codec`], then [coerced](coerce) into it. A failing property does not
//! stop the load: the remaining ones are still stored, and the last failure
//! is returned once all of them were seen.
//!
//! Within one load:
//!
//! - a field that holds one value rejects a second one, and is reset to its
//!   zero value;
//! - a `Vec` field (other than `Vec<u8>`) receives repeated values in
//!   arrival order, growing as needed;
//! - an array value is loaded element by element, and stops at the first
//!   element that fails.

mod coerce;
mod resolve;

use alloc::string::{String, ToString};

use vc_reflect::Reflect;
use vc_reflect::info::DynamicTyped;
use vc_reflect::ops::{List, ReflectMut, Struct};
use vc_utils::hash::HashSet;

use crate::codec::Codec;
use crate::{FieldError, FieldMismatch, KEY_PROPERTY, Property, Value};

use resolve::{Cursors, Resolved, next_cursor, resolve};

pub use coerce::coerce;

// -----------------------------------------------------------------------------
// load_struct

/// Loads `properties` into `dst`.
///
/// Fields without a matching property keep their current value. On error,
/// every property but the failing ones has been stored.
///
/// # Examples
///
/// ```
/// use vc_record::{FieldError, Property, load_struct};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let mut p = Point::default();
/// let props = [Property::new("x", 1_i64), Property::new("x", 2_i64), Property::new("y", 3_i64)];
/// let err = load_struct(&mut p, &props).unwrap_err();
///
/// assert!(matches!(err.reason, FieldError::MultiValueRequiresSlice));
/// assert_eq!((p.x, p.y), (0, 3));
/// ```
pub fn load_struct(dst: &mut dyn Struct, properties: &[Property]) -> Result<(), FieldMismatch> {
    let mut session = LoadSession::new(Codec::of_struct(&*dst));
    for property in properties {
        session.load_property(dst, property);
    }
    session.finish()
}

// -----------------------------------------------------------------------------
// LoadSession

struct LoadSession {
    codec: &'static Codec,
    // Names that already stored a value into a single-valued field.
    seen: HashSet<String>,
    cursors: Cursors,
    last_error: Option<(String, FieldError)>,
}

impl LoadSession {
    fn new(codec: &'static Codec) -> Self {
        Self {
            codec,
            seen: HashSet::default(),
            cursors: Cursors::default(),
            last_error: None,
        }
    }

    fn load_property(&mut self, dst: &mut dyn Struct, property: &Property) {
        let name = property.name.as_str();
        let result = match &property.value {
            Value::Array(values) => values
                .iter()
                .try_for_each(|value| self.load_value(&mut *dst, name, value)),
            value => self.load_value(dst, name, value),
        };
        if let Err(reason) = result {
            self.record(name, reason);
        }
    }

    fn load_value(&mut self, dst: &mut dyn Struct, name: &str, value: &Value) -> Result<(), FieldError> {
        let Resolved {
            field,
            through_slice,
        } = match resolve(self.codec, dst, name, &mut self.cursors) {
            Ok(resolved) => resolved,
            Err(FieldError::NotFound) if name == KEY_PROPERTY => return Ok(()),
            Err(reason) => return Err(reason),
        };

        if field.reflect_type_info().is_list() {
            if through_slice {
                return Err(FieldError::Unsupported("list inside a list of structs"));
            }
            return match field.reflect_mut() {
                ReflectMut::List(list) => self.append(list, name, value),
                _ => Err(FieldError::NotSettable),
            };
        }

        if !through_slice {
            if self.seen.contains(name) {
                field.reset();
                return Err(FieldError::MultiValueRequiresSlice);
            }
            self.seen.insert(name.to_string());
        }
        coerce(value, field)
    }

    /// Stores the next value of `name` into its list slot.
    ///
    /// A value that cannot be stored clears the whole list.
    fn append(&mut self, list: &mut dyn List, name: &str, value: &Value) -> Result<(), FieldError> {
        let index = next_cursor(&mut self.cursors, name);
        while list.len() <= index {
            list.push_zeroed();
        }
        let element = list.get_mut(index).ok_or(FieldError::NotSettable)?;
        let result = coerce(value, element);
        if result.is_err() {
            list.clear();
        }
        result
    }

    fn record(&mut self, name: &str, reason: FieldError) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        log::debug!(
            "`{}`: property \"{name}\" not loaded: {reason}",
            self.codec.struct_info().ty().name(),
        );
        self.last_error = Some((name.to_string(), reason));
    }

    fn finish(self) -> Result<(), FieldMismatch> {
        match self.last_error {
            None => Ok(()),
            Some((field_name, reason)) => Err(FieldMismatch {
                struct_type: self.codec.struct_info().ty().name(),
                field_name,
                reason,
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
