use crate::info::Type;

/// Metadata for types whose internals are opaque to the reflection system.
///
/// "Opaque" means the type's internal representation is not exposed, for
/// example `time::OffsetDateTime`. Consumers recognise these by [`Type`]
/// and downcast them.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: ?Sized + 'static>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    /// Returns the underlying `Type`.
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}
