/// Implements reflection for a leaf type whose internals are not reflected.
///
/// The type gets an [`OpaqueInfo`](crate::info::OpaqueInfo), and consumers
/// recognise it by type id and downcast it. Its zero value defaults to
/// [`Default::default`], a different one can be given with `zeroed = ..`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, impl_reflect_opaque, info::Typed};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Checksum(u32);
///
/// #[derive(Debug, PartialEq)]
/// struct Version(u16);
///
/// impl_reflect_opaque!(Checksum);
/// impl_reflect_opaque!(Version, zeroed = Version(1));
///
/// assert!(Checksum::type_info().is_opaque());
///
/// let mut v = Version(7);
/// v.reset();
/// assert_eq!(v, Version(1));
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($ty:ty) => {
        $crate::impl_reflect_opaque!($ty, zeroed = <$ty as ::core::default::Default>::default());
    };
    ($ty:ty, zeroed = $zeroed:expr) => {
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<$ty>())
                })
            }
        }

        impl $crate::Zeroed for $ty {
            #[inline]
            fn zeroed() -> Self {
                $zeroed
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Opaque(self)
            }

            #[inline]
            fn reset(&mut self) {
                *self = <$ty as $crate::Zeroed>::zeroed();
            }
        }
    };
}
