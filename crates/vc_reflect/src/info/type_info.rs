use core::{error, fmt};

use crate::info::{ListInfo, OpaqueInfo, PointerInfo};
use crate::info::{ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a variant of [`TypeInfo`],
/// [`ReflectRef`](crate::ops::ReflectRef) and [`ReflectMut`](crate::ops::ReflectMut).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Pointer,
    Scalar,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Pointer => f.pad("Pointer"),
            Self::Scalar => f.pad("Scalar"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// A `TypeInfo` is obtained through [`Typed::type_info`] when the type is
/// known statically, or [`DynamicTyped::reflect_type_info`] from a
/// `dyn Reflect`. Both return the same `&'static` reference.
///
/// `Box<T>` has no info of its own: it reports the info of `T`.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Pointer(PointerInfo),
    Scalar(ScalarInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

macro_rules! impl_is_method {
    ($name:ident : $kind:ident) => {
        /// Check infomation kind, can be used in const function.
        #[inline]
        pub const fn $name(&self) -> bool {
            matches!(self, Self::$kind(..))
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    impl_is_method!(is_struct: Struct);
    impl_is_method!(is_list: List);
    impl_is_method!(is_pointer: Pointer);
    impl_is_method!(is_scalar: Scalar);
    impl_is_method!(is_opaque: Opaque);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`ReflectKind`] of this `TypeInfo`.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::info::{ReflectKind, ScalarKind, Typed};

    #[test]
    fn kinds() {
        assert_eq!(<i32 as Typed>::type_info().kind(), ReflectKind::Scalar);
        assert_eq!(<Vec<String> as Typed>::type_info().kind(), ReflectKind::List);
        assert_eq!(<Option<u8> as Typed>::type_info().kind(), ReflectKind::Pointer);

        let err = <i32 as Typed>::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Scalar);
    }

    #[test]
    fn byte_vec_is_scalar() {
        let info = <Vec<u8> as Typed>::type_info().as_scalar().unwrap();
        assert_eq!(info.kind(), ScalarKind::Bytes);
    }
}
