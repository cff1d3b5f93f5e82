use core::fmt;

use crate::info::Type;

// -----------------------------------------------------------------------------
// ScalarKind

/// The primitive leaf types understood by reflection.
///
/// `Vec<u8>` is a byte blob, so it is a scalar rather than a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    Bytes,
}

impl ScalarKind {
    /// Returns `true` for signed integer kinds.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize)
    }

    /// Returns `true` for unsigned integer kinds.
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize)
    }

    /// Returns `true` for `f32` and `f64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Bytes => "Vec<u8>",
        })
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// A container for compile-time info of primitive leaf types.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::info::{ScalarKind, Typed};
///
/// let info = <u16 as Typed>::type_info().as_scalar().unwrap();
///
/// assert_eq!(info.kind(), ScalarKind::U16);
/// assert!(info.kind().is_unsigned());
/// ```
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub fn new<T: 'static>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the underlying `Type`.
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`ScalarKind`].
    #[inline(always)]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}
