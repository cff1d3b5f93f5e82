use alloc::string::String;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef, ScalarMut, ScalarRef};
use crate::{Reflect, Zeroed};

macro_rules! impl_reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<$ty>(ScalarKind::$kind)))
            }
        }

        impl Zeroed for $ty {
            #[inline]
            fn zeroed() -> Self {
                <$ty as Default>::default()
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(ScalarRef::$kind(self))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(ScalarMut::$kind(self))
            }

            #[inline]
            fn reset(&mut self) {
                *self = <$ty as Zeroed>::zeroed();
            }
        }
    )*};
}

impl_reflect_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::{ReflectMut, ReflectRef, ScalarMut, ScalarRef};

    #[test]
    fn scalar_views() {
        let mut name = String::from("a");
        if let ReflectMut::Scalar(ScalarMut::String(s)) = name.reflect_mut() {
            s.push('b');
        }
        assert!(matches!(name.reflect_ref(), ReflectRef::Scalar(ScalarRef::String(s)) if s == "ab"));

        name.reset();
        assert!(name.is_empty());
    }
}
