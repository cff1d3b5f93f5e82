/// Types that have a zero value.
///
/// The zero value is what a field holds before anything was loaded into it,
/// and what it is reset to when loading fails. It matches [`Default`] for
/// every built-in type that has one. `time::OffsetDateTime` has no `Default`,
/// its zero value is the Unix epoch.
///
/// Lists and optional values need it to allocate fresh elements.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), which
/// zeroes reflected fields and uses [`Default`] for skipped ones.
///
/// # Examples
///
/// ```
/// use vc_reflect::Zeroed;
///
/// assert_eq!(u8::zeroed(), 0);
/// assert_eq!(<Option<String>>::zeroed(), None);
/// ```
pub trait Zeroed: Sized {
    /// Returns the zero value of this type.
    fn zeroed() -> Self;
}
