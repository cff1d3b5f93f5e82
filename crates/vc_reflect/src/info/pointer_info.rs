use core::any::TypeId;

use crate::info::{Type, TypeInfo, Typed};

/// A container for compile-time info of an optional value, e.g. `Option<T>`.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::info::Typed;
///
/// let info = <Option<String> as Typed>::type_info().as_pointer().unwrap();
///
/// assert!(info.pointee_info().type_is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    pointee_info: fn() -> &'static TypeInfo,
}

impl PointerInfo {
    /// Creates a new [`PointerInfo`].
    #[inline]
    pub fn new<TPtr: 'static, TPointee: Typed>() -> Self {
        Self {
            ty: Type::of::<TPtr>(),
            pointee_id: TypeId::of::<TPointee>(),
            pointee_info: TPointee::type_info,
        }
    }

    /// Returns the underlying `Type`.
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeId`] of the pointee.
    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }
}
