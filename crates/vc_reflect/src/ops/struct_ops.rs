use crate::Reflect;
use crate::info::StructInfo;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via [reflection].
///
/// Fields are addressed by their index in [`StructInfo`], which counts
/// reflected fields in declaration order.
///
/// This trait is automatically implemented for named structs by
/// [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Example
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     bar: u32,
/// }
///
/// let foo = Foo { bar: 123 };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.field_at(0).unwrap().downcast_ref::<u32>(), Some(&123));
/// assert!(foo.field("bar").is_some());
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
/// [reflection]: crate
pub trait Struct: Reflect {
    /// Returns the static info of this struct.
    fn struct_info(&self) -> &'static StructInfo;

    /// Returns a reference to the value of the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Returns a reference to the field with the declared `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_at(self.struct_info().index_of(name)?)
    }

    /// Returns a mutable reference to the field with the declared `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.struct_info().index_of(name)?;
        self.field_at_mut(index)
    }
}

impl dyn Struct {
    /// Returns an iterator over the values of the reflected fields.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}
