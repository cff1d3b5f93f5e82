use alloc::boxed::Box;

use crate::info::{TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::{Reflect, Zeroed};

// `Box<T>` is transparent: it reports the info of `T` and forwards views,
// which lets recursive types such as `Option<Box<Self>>` be reflected.

impl<T: Reflect + Typed + Zeroed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Typed + Zeroed> Zeroed for Box<T> {
    #[inline]
    fn zeroed() -> Self {
        Box::new(T::zeroed())
    }
}

impl<T: Reflect + Typed + Zeroed> Reflect for Box<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }
}
