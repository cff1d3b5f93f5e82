//! Per-type field tables used to resolve property names.
//!
//! A [`Codec`] is built once per struct type, on first use, and then shared
//! by every load and save of that type. It maps property names to
//! [`FieldDescriptor`]s: one for each declared field, plus the names
//! promoted from embedded fields.
//!
//! ## Promotion
//!
//! An `#[reflect(embed)]` field without a `name` override lends its own
//! property names to the parent. A direct field always wins over a promoted
//! one, and a shallower promotion wins over a deeper one. Two promotions of
//! one name at the same depth make the name ambiguous: it is dropped, and
//! logged.
//!
//! The first such field is also the fallback used by dotted legacy names.

mod build;
mod cache;

use alloc::boxed::Box;

use vc_reflect::info::{StructInfo, TypeInfo, Typed};
use vc_reflect::ops::Struct;
use vc_utils::hash::HashMap;

// -----------------------------------------------------------------------------
// FieldDescriptor

/// How one property name reaches a field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    path: Box<[usize]>,
    info: &'static TypeInfo,
    nested: Option<&'static StructInfo>,
    no_index: bool,
    embedded: bool,
    promoting: bool,
    promoted_from: Option<&'static str>,
}

impl FieldDescriptor {
    /// The property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Field indices from the codec's struct down to the field.
    ///
    /// Declared fields have a single index; every embedded struct crossed
    /// adds one.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Type info of the field itself.
    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    /// The struct reached through the field, directly or through
    /// `Option`, `Box` or `Vec`.
    #[inline]
    pub const fn nested(&self) -> Option<&'static StructInfo> {
        self.nested
    }

    /// Codec of [`nested`](Self::nested), built on demand.
    pub fn nested_codec(&self) -> Option<&'static Codec> {
        self.nested.map(Codec::of_info)
    }

    /// Returns `true` if values of the field are saved unindexed.
    #[inline]
    pub const fn is_no_index(&self) -> bool {
        self.no_index
    }

    /// Returns `true` if the field is marked `#[reflect(embed)]`, renamed
    /// or not.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns `true` if the field's names are promoted into the parent.
    #[inline]
    pub const fn is_promoting(&self) -> bool {
        self.promoting
    }

    /// For promoted names, the declared name of the embedded field in the
    /// codec's struct that the name comes through.
    #[inline]
    pub const fn promoted_from(&self) -> Option<&'static str> {
        self.promoted_from
    }
}

// -----------------------------------------------------------------------------
// Codec

/// The property table of one struct type.
///
/// # Examples
///
/// ```
/// use vc_record::codec::Codec;
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Audit {
///     created: i64,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Doc {
///     #[reflect(name = "Title", noindex)]
///     title: String,
///     #[reflect(embed)]
///     audit: Audit,
/// }
///
/// let codec = Codec::of::<Doc>().unwrap();
///
/// assert_eq!(codec.get("Title").unwrap().path(), &[0]);
/// assert!(codec.get("Title").unwrap().is_no_index());
/// assert!(codec.get("audit").unwrap().is_embedded());
/// assert_eq!(codec.get("created").unwrap().path(), &[1, 0]);
/// assert_eq!(codec.get("created").unwrap().promoted_from(), Some("audit"));
/// assert!(core::ptr::eq(codec, Codec::of::<Doc>().unwrap()));
/// ```
#[derive(Debug)]
pub struct Codec {
    info: &'static StructInfo,
    // Declared fields first, in declaration order, then promoted names.
    entries: Box<[FieldDescriptor]>,
    by_name: HashMap<&'static str, usize>,
    fallback: Option<usize>,
    ambiguous: Box<[&'static str]>,
}

impl Codec {
    /// Returns the shared codec of `T`, or `None` if `T` is not a struct.
    pub fn of<T: Typed>() -> Option<&'static Codec> {
        T::type_info().as_struct().ok().map(Self::of_info)
    }

    /// Returns the shared codec of the struct described by `info`.
    #[inline]
    pub fn of_info(info: &'static StructInfo) -> &'static Codec {
        cache::get_or_build(info)
    }

    /// Returns the shared codec of the value's type.
    #[inline]
    pub fn of_struct(value: &dyn Struct) -> &'static Codec {
        cache::get_or_build(value.struct_info())
    }

    #[inline]
    pub const fn struct_info(&self) -> &'static StructInfo {
        self.info
    }

    /// Declared fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.entries[..self.info.field_len()]
    }

    /// Looks up a property name, promoted names included.
    ///
    /// The empty name never matches here, see [`fallback`](Self::fallback).
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// The first embedded field that promotes its names.
    pub fn fallback(&self) -> Option<&FieldDescriptor> {
        self.fallback.map(|index| &self.entries[index])
    }

    /// Returns `true` if embedded fields disagree on `name`.
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.ambiguous.contains(&name)
    }

    /// Ambiguous names, sorted.
    #[inline]
    pub fn ambiguous(&self) -> &[&'static str] {
        &self.ambiguous
    }

    /// Iterates over every resolvable descriptor.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.entries.iter()
    }

    /// Number of resolvable names.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use vc_reflect::derive::Reflect;

    use super::*;

    #[derive(Reflect, Default)]
    struct Inner {
        a: i64,
        shared: bool,
    }

    #[derive(Reflect, Default)]
    struct Other {
        shared: bool,
        b: String,
    }

    #[derive(Reflect, Default)]
    struct Deep {
        #[reflect(embed)]
        inner: Inner,
        c: f64,
    }

    #[derive(Reflect, Default)]
    struct Outer {
        #[reflect(embed)]
        first: Inner,
        #[reflect(embed)]
        second: Other,
        #[reflect(embed, name = "Tagged")]
        tagged: Inner,
        b: i64,
    }

    #[derive(Reflect, Default)]
    struct Layered {
        #[reflect(embed)]
        deep: Deep,
        #[reflect(embed)]
        other: Option<Box<Other>>,
        list: Vec<Inner>,
    }

    #[test]
    fn direct_fields_win() {
        let codec = Codec::of::<Outer>().unwrap();

        let b = codec.get("b").unwrap();
        assert_eq!(b.path(), &[3]);
        assert_eq!(b.promoted_from(), None);

        let a = codec.get("a").unwrap();
        assert_eq!(a.path(), &[0, 0]);
        assert_eq!(a.promoted_from(), Some("first"));
    }

    #[test]
    fn same_depth_is_ambiguous() {
        let codec = Codec::of::<Outer>().unwrap();

        assert!(codec.get("shared").is_none());
        assert!(codec.is_ambiguous("shared"));
        assert_eq!(codec.ambiguous(), &["shared"]);
    }

    #[test]
    fn renamed_embed_does_not_promote() {
        let codec = Codec::of::<Outer>().unwrap();

        let tagged = codec.get("Tagged").unwrap();
        assert!(tagged.is_embedded());
        assert!(!tagged.is_promoting());
        assert_eq!(codec.fallback().unwrap().name(), "first");
        assert_eq!(codec.fields().len(), 4);
    }

    #[test]
    fn shallower_wins() {
        let codec = Codec::of::<Layered>().unwrap();

        // `shared` is at depth 3 through `deep` and depth 2 through `other`.
        let shared = codec.get("shared").unwrap();
        assert_eq!(shared.path(), &[1, 0]);
        assert_eq!(shared.promoted_from(), Some("other"));
        assert!(!codec.is_ambiguous("shared"));

        let a = codec.get("a").unwrap();
        assert_eq!(a.path(), &[0, 0, 0]);
        assert_eq!(codec.get("c").unwrap().path(), &[0, 1]);
    }

    #[test]
    fn nested_through_wrappers() {
        let codec = Codec::of::<Layered>().unwrap();

        let other = codec.get("other").unwrap();
        assert!(other.nested().unwrap().ty().is::<Other>());
        assert!(other.type_info().is_pointer());

        let list = codec.get("list").unwrap();
        assert!(list.nested().unwrap().ty().is::<Inner>());
        assert!(core::ptr::eq(
            list.nested_codec().unwrap(),
            Codec::of::<Inner>().unwrap(),
        ));
    }

    #[test]
    fn non_struct_has_no_codec() {
        assert!(Codec::of::<i64>().is_none());
    }
}
