use alloc::vec::Vec;
use core::any::{Any, TypeId};

use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, ScalarInfo, ScalarKind, TypeInfo, Typed};
use crate::ops::{List, ReflectMut, ReflectRef, ScalarMut, ScalarRef};
use crate::{Reflect, Zeroed};

#[inline(always)]
fn is_bytes<T: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<u8>()
}

impl<T: Reflect + Typed + Zeroed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            if is_bytes::<T>() {
                TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::Bytes))
            } else {
                TypeInfo::List(ListInfo::new::<Self, T>())
            }
        })
    }
}

impl<T: Reflect + Typed + Zeroed> Zeroed for Vec<T> {
    #[inline]
    fn zeroed() -> Self {
        Vec::new()
    }
}

impl<T: Reflect + Typed + Zeroed> Reflect for Vec<T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        if let Some(bytes) = (self as &dyn Any).downcast_ref::<Vec<u8>>() {
            return ReflectRef::Scalar(ScalarRef::Bytes(bytes));
        }
        ReflectRef::List(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        if !is_bytes::<T>() {
            return ReflectMut::List(self);
        }
        match (self as &mut dyn Any).downcast_mut::<Vec<u8>>() {
            Some(bytes) => ReflectMut::Scalar(ScalarMut::Bytes(bytes)),
            None => unreachable!("`T` is `u8`"),
        }
    }

    #[inline]
    fn reset(&mut self) {
        Vec::clear(self);
    }
}

impl<T: Reflect + Typed + Zeroed> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|item| item as &mut dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push_zeroed(&mut self) {
        self.push(T::zeroed());
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::ops::{ReflectMut, ReflectRef, ScalarMut};

    #[test]
    fn vec_is_list() {
        let mut tags: Vec<String> = vec![String::from("a")];
        let ReflectMut::List(list) = tags.reflect_mut() else {
            panic!("expected a list");
        };
        list.push_zeroed();
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().count(), 2);
        list.clear();
        assert!(tags.is_empty());
    }

    #[test]
    fn bytes_are_scalar() {
        let mut blob: Vec<u8> = vec![1, 2];
        assert!(matches!(blob.reflect_ref(), ReflectRef::Scalar(_)));
        if let ReflectMut::Scalar(ScalarMut::Bytes(bytes)) = blob.reflect_mut() {
            bytes.push(3);
        }
        assert_eq!(blob, [1, 2, 3]);
    }
}
