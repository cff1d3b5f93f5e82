use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectMut, ReflectRef};
use crate::{Reflect, Zeroed};

impl<T: Reflect + Typed + Zeroed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Zeroed> Zeroed for Option<T> {
    #[inline]
    fn zeroed() -> Self {
        None
    }
}

impl<T: Reflect + Typed + Zeroed> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    #[inline]
    fn reset(&mut self) {
        *self = None;
    }
}

impl<T: Reflect + Typed + Zeroed> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn get_or_insert_zeroed(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::zeroed)
    }

    fn fill_zeroed(&mut self, fill: &mut dyn FnMut(&mut dyn Reflect) -> bool) -> bool {
        let mut fresh = T::zeroed();
        let stored = fill(&mut fresh);
        if stored {
            *self = Some(fresh);
        }
        stored
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::ReflectMut;

    #[test]
    fn allocate_if_empty() {
        let mut name: Option<String> = None;
        let ReflectMut::Pointer(ptr) = name.reflect_mut() else {
            panic!("expected a pointer");
        };
        assert!(ptr.is_empty());

        ptr.get_or_insert_zeroed()
            .downcast_mut::<String>()
            .unwrap()
            .push('x');
        ptr.get_or_insert_zeroed()
            .downcast_mut::<String>()
            .unwrap()
            .push('y');
        assert_eq!(name.as_deref(), Some("xy"));

        name.reset();
        assert_eq!(name, None);
    }

    #[test]
    fn fill_commits_on_success_only() {
        let mut level: Option<u8> = Some(5);
        let ReflectMut::Pointer(ptr) = level.reflect_mut() else {
            panic!("expected a pointer");
        };

        assert!(!ptr.fill_zeroed(&mut |fresh| {
            *fresh.downcast_mut::<u8>().unwrap() = 9;
            false
        }));
        assert_eq!(ptr.pointee().unwrap().downcast_ref::<u8>(), Some(&5));

        assert!(ptr.fill_zeroed(&mut |fresh| {
            assert_eq!(fresh.downcast_ref::<u8>(), Some(&0));
            *fresh.downcast_mut::<u8>().unwrap() = 9;
            true
        }));
        assert_eq!(level, Some(9));
    }
}
