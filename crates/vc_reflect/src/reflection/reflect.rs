use core::any::{Any, TypeId};

use crate::info::{DynamicTyped, Type};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vc_reflect`].
///
/// A reflected value can report its static shape through [`DynamicTyped`]
/// and hand out a typed view of its data through [`reflect_ref`] and
/// [`reflect_mut`].
///
/// # Recommendations
///
/// Use [the derive macro for `Reflect`] on named structs. The derive also
/// implements [`Typed`], [`Zeroed`] and [`Struct`].
///
/// Built-in implementations cover:
///
/// - scalars: `bool`, all integer types, `f32`, `f64`, `String` and `Vec<u8>`;
/// - `Vec<T>` as a [`List`], `Option<T>` as a [`Pointer`];
/// - `Box<T>`, which is transparent and forwards to `T`;
/// - `time::OffsetDateTime` as an opaque value.
///
/// Other leaf types can be registered with [`impl_reflect_opaque!`].
///
/// # Type Identification
///
/// `Box<dyn Reflect>` is a container type, so [`Any::type_id`] on it returns
/// the box's id. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::TypeId;
/// let x: Box<dyn Reflect> = Box::new(32_i32);
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// [`vc_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Typed`]: crate::info::Typed
/// [`Zeroed`]: crate::Zeroed
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Pointer`]: crate::ops::Pointer
/// [`impl_reflect_opaque!`]: crate::impl_reflect_opaque
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Returns an immutable view of the data, typed by its kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the data, typed by its kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Resets the value to its zero value.
    ///
    /// For derived structs this resets every reflected field,
    /// skipped fields are left untouched.
    fn reset(&mut self);
}

impl dyn Reflect {
    /// Returns the [`TypeId`] of the underlying value.
    ///
    /// `Box<T>` is transparent for reflection, so a boxed value reports
    /// the id of the pointee.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.reflect_type_info().ty().id()
    }

    /// Returns the [`Type`] of the underlying value.
    #[inline]
    pub fn ty(&self) -> &'static Type {
        self.reflect_type_info().ty()
    }

    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.ty().path())
    }
}
