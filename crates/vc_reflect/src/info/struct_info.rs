use alloc::boxed::Box;

use vc_utils::hash::HashMap;

use crate::info::{NamedField, Type};

/// A container for compile-time named struct info.
///
/// Fields marked `#[reflect(skip)]` are not part of it, indices count
/// reflected fields only.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     #[reflect(skip)]
///     cache: u64,
///     #[reflect(name = "n")]
///     count: i32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("count"), Some(1));
/// assert_eq!(info.field_names(), &["val", "count"]);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: 'static>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            indices,
        }
    }

    /// Returns the underlying `Type`.
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`NamedField`] for the given declared `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> alloc::vec::Vec<&'static str> {
        self.fields.iter().map(NamedField::name).collect()
    }

    /// Returns the index for the given declared field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
