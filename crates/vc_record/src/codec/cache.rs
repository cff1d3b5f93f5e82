use alloc::boxed::Box;
use core::any::TypeId;
use std::sync::{OnceLock, PoisonError, RwLock};

use vc_reflect::info::StructInfo;
use vc_utils::TypeIdMap;

use super::{Codec, build};

// One leaked cell per struct type; a cell is initialised exactly once, even
// under concurrent first use.
static CODECS: RwLock<TypeIdMap<&'static OnceLock<Codec>>> = RwLock::new(TypeIdMap::new());

#[inline(never)]
fn cell(type_id: TypeId) -> &'static OnceLock<Codec> {
    let found = CODECS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .copied();

    match found {
        Some(cell) => cell,
        None => *CODECS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(type_id, || Box::leak(Box::new(OnceLock::new()))),
    }
}

/// Returns the codec of `info`, building it on first use.
///
/// A build only reads type info and never waits on another cell.
pub(super) fn get_or_build(info: &'static StructInfo) -> &'static Codec {
    cell(info.ty().id()).get_or_init(|| build::build(info))
}

// -----------------------------------------------------------------------------
// Tests
