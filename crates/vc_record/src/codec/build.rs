use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;

use vc_reflect::info::{NamedField, StructInfo, TypeInfo};
use vc_utils::hash::hashbrown::hash_map::Entry;
use vc_utils::hash::{HashMap, HashSet};

use super::{Codec, FieldDescriptor};

/// The struct a field holds, looking through `Option`, `Box` and `Vec`.
fn nested_struct(info: &'static TypeInfo) -> Option<&'static StructInfo> {
    match info {
        TypeInfo::Struct(info) => Some(info),
        TypeInfo::Pointer(info) => nested_struct(info.pointee_info()),
        TypeInfo::List(info) => nested_struct(info.item_info()),
        _ => None,
    }
}

/// Like [`nested_struct`], but a list cannot be embedded.
fn embedded_struct(info: &'static TypeInfo) -> Option<&'static StructInfo> {
    match info {
        TypeInfo::Struct(info) => Some(info),
        TypeInfo::Pointer(info) => embedded_struct(info.pointee_info()),
        _ => None,
    }
}

impl FieldDescriptor {
    fn declared(index: usize, field: &NamedField) -> Self {
        let info = field.type_info();
        let flags = field.flags();
        Self {
            name: field.property_name(),
            path: Box::new([index]),
            info,
            nested: nested_struct(info),
            no_index: flags.is_no_index(),
            embedded: flags.is_embedded(),
            promoting: flags.is_embedded()
                && field.rename().is_none()
                && embedded_struct(info).is_some(),
            promoted_from: None,
        }
    }

    /// Re-roots a descriptor of an embedded struct at its parent.
    fn promote(&self, index: usize, from: &'static str) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.push(index);
        path.extend_from_slice(&self.path);
        Self {
            path: path.into_boxed_slice(),
            promoted_from: Some(from),
            ..self.clone()
        }
    }
}

/// A codec's tables before they are frozen.
struct Table {
    entries: Vec<FieldDescriptor>,
    by_name: HashMap<&'static str, usize>,
    fallback: Option<usize>,
    ambiguous: Vec<&'static str>,
}

pub(super) fn build(info: &'static StructInfo) -> Codec {
    let Table {
        entries,
        by_name,
        fallback,
        ambiguous,
    } = table(info, &mut Vec::new());

    for name in &ambiguous {
        log::warn!(
            "`{}` has several embedded fields named `{name}` at the same depth, none is used",
            info.ty().name(),
        );
    }
    log::debug!(
        "built codec for `{}`: {} names, {} ambiguous",
        info.ty().name(),
        by_name.len(),
        ambiguous.len(),
    );

    Codec {
        info,
        entries: entries.into_boxed_slice(),
        by_name,
        fallback,
        ambiguous: ambiguous.into_boxed_slice(),
    }
}

/// Builds the tables of `info` from type info alone.
///
/// Embedded structs are walked directly rather than through their shared
/// codecs, so building never waits on another type's build. `stack` holds
/// the structs being walked, outermost first.
fn table(info: &'static StructInfo, stack: &mut Vec<TypeId>) -> Table {
    stack.push(info.ty().id());

    let mut entries: Vec<FieldDescriptor> = Vec::with_capacity(info.field_len());
    let mut by_name: HashMap<&'static str, usize> = HashMap::default();
    let mut fallback = None;

    for (index, field) in info.iter().enumerate() {
        let mut descriptor = FieldDescriptor::declared(index, field);
        if descriptor.promoting
            && descriptor
                .nested
                .is_some_and(|nested| stack.contains(&nested.ty().id()))
        {
            log::warn!(
                "field `{}` of `{}` closes an embedding cycle, its names are not promoted",
                field.name(),
                info.ty().name(),
            );
            descriptor.promoting = false;
        }
        if descriptor.promoting && fallback.is_none() {
            fallback = Some(index);
        }
        by_name.insert(descriptor.name, index);
        entries.push(descriptor);
    }

    let mut promoted: HashMap<&'static str, FieldDescriptor> = HashMap::default();
    let mut ambiguous: HashSet<&'static str> = HashSet::default();

    for (index, field) in info.iter().enumerate() {
        if !entries[index].promoting {
            continue;
        }
        let Some(nested) = entries[index].nested else {
            continue;
        };
        let inner = table(nested, stack);

        for candidate in &inner.entries {
            if by_name.contains_key(candidate.name) {
                continue;
            }

            let candidate = candidate.promote(index, field.name());
            match promoted.entry(candidate.name) {
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
                Entry::Occupied(mut slot) => {
                    let current = slot.get().path.len();
                    if candidate.path.len() < current {
                        ambiguous.remove(candidate.name);
                        slot.insert(candidate);
                    } else if candidate.path.len() == current {
                        ambiguous.insert(candidate.name);
                    }
                }
            }
        }
    }

    let mut ambiguous: Vec<&'static str> = ambiguous.into_iter().collect();
    ambiguous.sort_unstable();
    for name in &ambiguous {
        promoted.remove(name);
    }

    let mut promoted: Vec<FieldDescriptor> = promoted.into_values().collect();
    promoted.sort_unstable_by(|a, b| a.path.cmp(&b.path));
    for descriptor in promoted {
        by_name.insert(descriptor.name, entries.len());
        entries.push(descriptor);
    }

    stack.pop();
    Table {
        entries,
        by_name,
        fallback,
        ambiguous,
    }
}
