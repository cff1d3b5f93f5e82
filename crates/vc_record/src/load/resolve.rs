use alloc::string::String;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::ops::{ReflectMut, Struct};
use vc_utils::hash::HashMap;

use crate::FieldError;
use crate::codec::Codec;

/// Per-name positions in lists, for one load session.
pub(super) type Cursors = HashMap<String, usize>;

/// Returns the list index for the next value of `name`.
pub(super) fn next_cursor(cursors: &mut Cursors, name: &str) -> usize {
    let cursor = cursors.entry_ref(name).or_insert(0);
    let index = *cursor;
    *cursor += 1;
    index
}

pub(super) struct Resolved<'a> {
    pub field: &'a mut dyn Reflect,
    /// The field sits in one element of a list of structs.
    pub through_slice: bool,
}

/// Finds the field a property name addresses.
///
/// The full name is looked up first, then it is walked as a dotted path.
/// Intermediate `None`s are allocated and lists of structs grow on the way,
/// so resolving may write to `dst` even when the value is never stored.
pub(super) fn resolve<'a>(
    codec: &'static Codec,
    dst: &'a mut dyn Struct,
    name: &str,
    cursors: &mut Cursors,
) -> Result<Resolved<'a>, FieldError> {
    if let Some(descriptor) = codec.get(name) {
        return Ok(Resolved {
            field: walk(dst, descriptor.path())?,
            through_slice: false,
        });
    }
    resolve_dotted(codec, dst, name, cursors)
}

fn resolve_dotted<'a>(
    mut codec: &'static Codec,
    mut current: &'a mut dyn Struct,
    name: &str,
    cursors: &mut Cursors,
) -> Result<Resolved<'a>, FieldError> {
    let mut through_slice = false;
    let mut segments = name.split('.').peekable();
    // Codecs entered through a fallback since the last consumed segment.
    let mut detour: Vec<&'static Codec> = Vec::new();

    while let Some(&segment) = segments.peek() {
        let descriptor = match codec.get(segment) {
            Some(descriptor) => {
                segments.next();
                detour.clear();
                descriptor
            }
            None if codec.is_ambiguous(segment) => return Err(FieldError::NotFound),
            None => {
                // The segment is retried inside the fallback, not consumed.
                let fallback = codec.fallback().ok_or(FieldError::NotFound)?;
                if detour.iter().any(|seen| core::ptr::eq(*seen, codec)) {
                    return Err(FieldError::NotFound);
                }
                detour.push(codec);
                fallback
            }
        };

        let field = walk(current, descriptor.path())?;
        if segments.peek().is_none() {
            return Ok(Resolved {
                field,
                through_slice,
            });
        }

        let nested = descriptor.nested_codec().ok_or(FieldError::NotFound)?;
        current = descend(field, name, cursors, &mut through_slice)?;
        codec = nested;
    }

    Err(FieldError::NotFound)
}

/// Follows a descriptor path; every index but the last crosses an embedded
/// struct.
fn walk<'a>(dst: &'a mut dyn Struct, path: &[usize]) -> Result<&'a mut dyn Reflect, FieldError> {
    let (&last, parents) = path.split_last().ok_or(FieldError::NotFound)?;
    let mut current = dst;
    for &index in parents {
        let field = current.field_at_mut(index).ok_or(FieldError::NotFound)?;
        current = embedded(field)?;
    }
    current.field_at_mut(last).ok_or(FieldError::NotFound)
}

fn embedded(field: &mut dyn Reflect) -> Result<&mut dyn Struct, FieldError> {
    match field.reflect_mut() {
        ReflectMut::Struct(value) => Ok(value),
        ReflectMut::Pointer(pointer) => embedded(pointer.get_or_insert_zeroed()),
        _ => Err(FieldError::NotSettable),
    }
}

/// Enters the struct held by a field with path segments left.
fn descend<'a>(
    field: &'a mut dyn Reflect,
    name: &str,
    cursors: &mut Cursors,
    through_slice: &mut bool,
) -> Result<&'a mut dyn Struct, FieldError> {
    match field.reflect_mut() {
        ReflectMut::Struct(value) => Ok(value),
        ReflectMut::Pointer(pointer) => {
            descend(pointer.get_or_insert_zeroed(), name, cursors, through_slice)
        }
        ReflectMut::List(list) => {
            if *through_slice {
                return Err(FieldError::Unsupported("list of structs inside a list of structs"));
            }
            *through_slice = true;

            let index = next_cursor(cursors, name);
            while list.len() <= index {
                list.push_zeroed();
            }
            let element = list.get_mut(index).ok_or(FieldError::NotSettable)?;
            descend(element, name, cursors, through_slice)
        }
        _ => Err(FieldError::NotFound),
    }
}

// -----------------------------------------------------------------------------
// Tests
