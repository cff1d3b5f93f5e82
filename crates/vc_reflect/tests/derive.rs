use vc_reflect::info::{ReflectKind, Typed};
use vc_reflect::ops::{ReflectMut, ReflectRef, Struct};
use vc_reflect::{Reflect, Zeroed, derive::Reflect};

#[derive(Reflect, Debug, PartialEq)]
struct Base {
    id: i64,
}

#[derive(Reflect, Debug, PartialEq)]
struct Order {
    #[reflect(embed)]
    base: Base,
    #[reflect(name = "order_name", noindex)]
    name: String,
    #[reflect(skip)]
    cache: Vec<u32>,
    tags: Vec<String>,
    blob: Vec<u8>,
    note: Option<Box<Order>>,
}

#[derive(Reflect, Debug, PartialEq)]
struct Pair<T> {
    left: T,
    right: T,
}

#[test]
fn struct_info_follows_declaration() {
    let info = Order::type_info().as_struct().unwrap();

    assert_eq!(info.field_len(), 5);
    assert_eq!(info.field_names(), ["base", "name", "tags", "blob", "note"]);

    let base = info.field_at(0).unwrap();
    assert!(base.flags().is_embedded());
    assert_eq!(base.rename(), None);

    let name = info.field("name").unwrap();
    assert_eq!(name.property_name(), "order_name");
    assert!(name.flags().is_no_index());

    assert_eq!(info.field("tags").unwrap().type_info().kind(), ReflectKind::List);
    assert_eq!(info.field("blob").unwrap().type_info().kind(), ReflectKind::Scalar);

    // `Option<Box<Order>>` points straight at `Order`.
    let note = info.field("note").unwrap().type_info().as_pointer().unwrap();
    assert!(note.pointee_info().type_is::<Order>());
}

#[test]
fn zeroed_and_reset() {
    let mut order = Order::zeroed();
    assert_eq!(order.base.id, 0);
    assert!(order.name.is_empty());
    assert!(order.note.is_none());

    order.base.id = 9;
    order.name.push_str("x");
    order.cache.push(1);
    order.reset();

    assert_eq!(order.base.id, 0);
    assert!(order.name.is_empty());
    // Skipped fields are not reflected.
    assert_eq!(order.cache, [1]);
}

#[test]
fn field_access_by_index() {
    let mut order = Order::zeroed();
    {
        let ReflectMut::Struct(s) = order.reflect_mut() else {
            panic!("expected a struct");
        };
        *s.field_at_mut(1).unwrap().downcast_mut::<String>().unwrap() = "a".into();
        assert!(s.field_at_mut(5).is_none());

        let ReflectMut::Struct(base) = s.field_at_mut(0).unwrap().reflect_mut() else {
            panic!("expected a struct");
        };
        *base.field_mut("id").unwrap().downcast_mut::<i64>().unwrap() = 4;
    }
    assert_eq!(order.name, "a");
    assert_eq!(order.base.id, 4);

    let ReflectRef::Struct(s) = order.reflect_ref() else {
        panic!("expected a struct");
    };
    assert_eq!(s.iter_fields().count(), 5);
}

#[test]
fn generic_structs_have_distinct_info() {
    let a = <Pair<i32>>::type_info();
    let b = <Pair<String>>::type_info();

    assert!(a.type_is::<Pair<i32>>());
    assert!(b.type_is::<Pair<String>>());
    assert!(core::ptr::eq(a, <Pair<i32>>::type_info()));

    let pair = Pair { left: 1_i32, right: 2 };
    assert_eq!(pair.field_len(), 2);
    assert_eq!(pair.field("right").unwrap().downcast_ref::<i32>(), Some(&2));
}
