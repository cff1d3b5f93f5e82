use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A {
///     id: i64,
/// }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert!(info.as_struct().is_ok());
/// ```
///
/// # Manually Impl
///
/// It is not recommended to implement manually. [`NonGenericTypeInfoCell`]
/// and [`GenericTypeInfoCell`] keep the returned reference `'static` and
/// build the info only once.
///
/// ```
/// use vc_reflect::{
///     Reflect, Zeroed,
///     info::{Typed, TypeInfo, OpaqueInfo},
///     impls::NonGenericTypeInfoCell,
///     ops::{ReflectRef, ReflectMut},
/// };
///
/// #[derive(Default)]
/// struct Token(u64);
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// # impl Zeroed for Token { fn zeroed() -> Self { Self(0) } }
/// # impl Reflect for Token {
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Opaque(self) }
/// #     fn reset(&mut self) { self.0 = 0; }
/// # }
/// assert!(Token::type_info().ty().is::<Token>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// A static accessor to compile-time type information.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// Returns the [`TypeInfo`] of the underlying type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, info::DynamicTyped};
    /// let a = Box::new(1_u64) as Box<dyn Reflect>;
    /// let info = a.reflect_type_info();
    /// assert!(info.ty().is::<u64>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
