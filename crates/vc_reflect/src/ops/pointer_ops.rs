use crate::Reflect;

/// A trait used to power optional-value operations via [reflection].
///
/// Implemented for `Option<T>`. An empty pointer is allocated with the
/// zero value of the pointee before anything is written through it.
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, ops::{Pointer, ReflectMut}};
///
/// let mut level: Option<u8> = None;
/// let ReflectMut::Pointer(ptr) = level.reflect_mut() else { unreachable!() };
///
/// *ptr.get_or_insert_zeroed().downcast_mut::<u8>().unwrap() = 3;
///
/// assert_eq!(level, Some(3));
/// ```
///
/// [reflection]: crate
pub trait Pointer: Reflect {
    /// Returns a reference to the pointee, if present.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the pointee, if present.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the pointee, allocating a zero value first if empty.
    fn get_or_insert_zeroed(&mut self) -> &mut dyn Reflect;

    /// Hands a detached zero value of the pointee to `fill`, and stores it
    /// only if `fill` returns `true`.
    ///
    /// The current pointee is left untouched otherwise.
    fn fill_zeroed(&mut self, fill: &mut dyn FnMut(&mut dyn Reflect) -> bool) -> bool;

    /// Empties the pointer.
    fn clear(&mut self);

    /// Returns `true` if there is no pointee.
    #[inline]
    fn is_empty(&self) -> bool {
        self.pointee().is_none()
    }
}
