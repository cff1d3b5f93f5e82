use vc_record::{FieldError, Property, Value, load_struct, save_struct};
use vc_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug, PartialEq)]
struct Line {
    #[reflect(name = "W")]
    w: i32,
    #[reflect(name = "X")]
    x: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Rate {
    #[reflect(name = "Y")]
    y: f64,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Flag {
    #[reflect(name = "Z")]
    z: bool,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Outer {
    #[reflect(name = "A")]
    a: i16,
    #[reflect(name = "I")]
    i: Vec<Line>,
    #[reflect(name = "J")]
    j: Rate,
    #[reflect(embed)]
    flag: Flag,
}

/// The same record, with the dotted names spelled out.
#[derive(Reflect, Default, Debug, PartialEq)]
struct Flat {
    #[reflect(name = "A")]
    a: i16,
    #[reflect(name = "I.W")]
    iw: Vec<i32>,
    #[reflect(name = "I.X")]
    ix: Vec<String>,
    #[reflect(name = "J.Y")]
    jy: f64,
    #[reflect(name = "Z")]
    z: bool,
}

fn flattened() -> Vec<Property> {
    vec![
        Property::new("A", 1_i64),
        Property::new("I.W", 10_i64),
        Property::new("I.X", "ten"),
        Property::new("I.W", 20_i64),
        Property::new("I.X", "twenty"),
        Property::new("J.Y", 3.5),
        Property::new("Z", true),
    ]
}

#[test]
fn dotted_names_fill_nested_structs() {
    let mut outer = Outer::default();
    load_struct(&mut outer, &flattened()).unwrap();

    assert_eq!(
        outer,
        Outer {
            a: 1,
            i: vec![
                Line {
                    w: 10,
                    x: "ten".into(),
                },
                Line {
                    w: 20,
                    x: "twenty".into(),
                },
            ],
            j: Rate { y: 3.5 },
            flag: Flag { z: true },
        },
    );
}

#[test]
fn dotted_names_match_renamed_fields_first() {
    let mut flat = Flat::default();
    load_struct(&mut flat, &flattened()).unwrap();

    assert_eq!(
        flat,
        Flat {
            a: 1,
            iw: vec![10, 20],
            ix: vec!["ten".into(), "twenty".into()],
            jy: 3.5,
            z: true,
        },
    );
}

#[test]
fn unbalanced_list_elements() {
    let mut outer = Outer::default();
    let props = [
        Property::new("I.W", 1_i64),
        Property::new("I.W", 2_i64),
        Property::new("I.X", "one"),
    ];
    load_struct(&mut outer, &props).unwrap();

    assert_eq!(outer.i.len(), 2);
    assert_eq!(outer.i[0].x, "one");
    assert!(outer.i[1].x.is_empty());
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct C {
    #[reflect(name = "C")]
    c: i64,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct B {
    #[reflect(name = "B")]
    b: Option<Box<C>>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Abc {
    #[reflect(name = "A")]
    a: B,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct AbcTagged {
    #[reflect(name = "A.B.C")]
    abc: i64,
}

#[test]
fn three_levels() {
    let props = [Property::new("A.B.C", 7_i64)];

    let mut nested = Abc::default();
    load_struct(&mut nested, &props).unwrap();
    assert_eq!(nested.a.b.as_deref(), Some(&C { c: 7 }));

    let mut tagged = AbcTagged::default();
    load_struct(&mut tagged, &props).unwrap();
    assert_eq!(tagged.abc, 7);
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Ii {
    #[reflect(name = "II")]
    value: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Aa {
    #[reflect(name = "AA")]
    inner: Ii,
}

#[test]
fn renamed_segments() {
    let mut aa = Aa::default();
    load_struct(&mut aa, &[Property::new("AA.II", "x")]).unwrap();
    assert_eq!(aa.inner.value, "x");

    // Rust field names are not property names.
    let err = load_struct(&mut aa, &[Property::new("inner.value", "y")]).unwrap_err();
    assert!(matches!(err.reason, FieldError::NotFound));
    assert_eq!(aa.inner.value, "x");
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Rated {
    #[reflect(name = "J")]
    j: Rate,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Wrapper {
    #[reflect(name = "A")]
    a: i64,
    #[reflect(embed)]
    rated: Rated,
}

#[test]
fn dotted_names_reach_through_embedded_structs() {
    let mut wrapper = Wrapper::default();
    load_struct(&mut wrapper, &[Property::new("J.Y", 1.5)]).unwrap();
    assert_eq!(wrapper.rated.j.y, 1.5);
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Left {
    #[reflect(name = "N")]
    n: i64,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Right {
    #[reflect(name = "N")]
    n: i64,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Both {
    #[reflect(embed)]
    left: Left,
    #[reflect(embed)]
    right: Right,
}

#[test]
fn ambiguous_promoted_names_are_not_loaded() {
    let mut both = Both::default();
    let err = load_struct(&mut both, &[Property::new("N", 3_i64)]).unwrap_err();

    assert!(matches!(err.reason, FieldError::NotFound));
    assert_eq!(both, Both::default());
}

#[test]
fn nested_lists_save_as_entities() {
    let mut outer = Outer::default();
    load_struct(&mut outer, &flattened()).unwrap();

    let props = save_struct(&outer).unwrap();
    let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "I", "J", "Z"]);

    let Value::Array(lines) = &props[1].value else {
        panic!("`I` holds an array");
    };
    assert_eq!(
        lines[1],
        Value::Entity(vec![Property::new("W", 20_i64), Property::new("X", "twenty")]),
    );
}
