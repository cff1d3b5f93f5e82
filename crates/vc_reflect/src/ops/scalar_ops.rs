use alloc::string::String;
use alloc::vec::Vec;

use crate::info::ScalarKind;

macro_rules! define_scalar_view {
    (
        $(#[$meta:meta])*
        $name:ident, $($ref_kind:tt)*
    ) => {
        $(#[$meta])*
        pub enum $name<'a> {
            Bool($($ref_kind)* bool),
            I8($($ref_kind)* i8),
            I16($($ref_kind)* i16),
            I32($($ref_kind)* i32),
            I64($($ref_kind)* i64),
            Isize($($ref_kind)* isize),
            U8($($ref_kind)* u8),
            U16($($ref_kind)* u16),
            U32($($ref_kind)* u32),
            U64($($ref_kind)* u64),
            Usize($($ref_kind)* usize),
            F32($($ref_kind)* f32),
            F64($($ref_kind)* f64),
            String($($ref_kind)* String),
            Bytes($($ref_kind)* Vec<u8>),
        }

        impl $name<'_> {
            /// Returns the [`ScalarKind`] of the referenced value.
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    Self::Bool(_) => ScalarKind::Bool,
                    Self::I8(_) => ScalarKind::I8,
                    Self::I16(_) => ScalarKind::I16,
                    Self::I32(_) => ScalarKind::I32,
                    Self::I64(_) => ScalarKind::I64,
                    Self::Isize(_) => ScalarKind::Isize,
                    Self::U8(_) => ScalarKind::U8,
                    Self::U16(_) => ScalarKind::U16,
                    Self::U32(_) => ScalarKind::U32,
                    Self::U64(_) => ScalarKind::U64,
                    Self::Usize(_) => ScalarKind::Usize,
                    Self::F32(_) => ScalarKind::F32,
                    Self::F64(_) => ScalarKind::F64,
                    Self::String(_) => ScalarKind::String,
                    Self::Bytes(_) => ScalarKind::Bytes,
                }
            }
        }
    };
}

define_scalar_view! {
    /// An immutable, typed reference to a scalar value.
    ///
    /// Obtained from [`ReflectRef::Scalar`](crate::ops::ReflectRef::Scalar).
    ScalarRef, &'a
}

define_scalar_view! {
    /// A mutable, typed reference to a scalar value.
    ///
    /// Obtained from [`ReflectMut::Scalar`](crate::ops::ReflectMut::Scalar).
    ///
    /// # Example
    ///
    /// ```
    /// use vc_reflect::{Reflect, ops::{ReflectMut, ScalarMut}};
    ///
    /// let mut x = 0_i16;
    /// if let ReflectMut::Scalar(ScalarMut::I16(v)) = x.reflect_mut() {
    ///     *v = 7;
    /// }
    /// assert_eq!(x, 7);
    /// ```
    ScalarMut, &'a mut
}
