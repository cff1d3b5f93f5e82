use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power [list-like] operations via [reflection].
///
/// Lists only grow with zero values: a consumer pushes a fresh element and
/// then writes into it through [`get_mut`](List::get_mut).
///
/// Implemented for `Vec<T>` (except `Vec<u8>`, which is a byte scalar).
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, ops::{List, ReflectMut}};
///
/// let mut tags: Vec<String> = Vec::new();
/// let ReflectMut::List(list) = tags.reflect_mut() else { unreachable!() };
///
/// list.push_zeroed();
/// *list.get_mut(0).unwrap().downcast_mut::<String>().unwrap() = "a".into();
///
/// assert_eq!(tags, ["a"]);
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
/// [reflection]: crate
pub trait List: Reflect {
    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a zero value to the end of the list.
    fn push_zeroed(&mut self);

    /// Removes all elements.
    fn clear(&mut self);
}

impl dyn List {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a list.
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for ListItemIter<'a> {}
