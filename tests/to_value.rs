#![cfg(feature = "serde")]

use std::collections::BTreeMap;

use serde::Serialize;

use rouflaquette::{to_value, value, ErrorKind, List, Map, Value};

#[test]
fn to_value_scalars() {
    assert_eq!(to_value(true).unwrap(), Value::Bool(true));
    assert_eq!(to_value(42u8).unwrap(), Value::Integer(42));
    assert_eq!(to_value(-42i64).unwrap(), Value::Integer(-42));
    assert_eq!(to_value(1.5f32).unwrap(), Value::Float(1.5));
    assert_eq!(to_value('a').unwrap(), Value::from("a"));
    assert_eq!(to_value("lorem").unwrap(), Value::from("lorem"));
}

#[test]
fn to_value_wide_integer() {
    assert_eq!(to_value(7u64).unwrap(), Value::Integer(7));
    assert_eq!(to_value(u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
}

#[test]
fn to_value_none_and_unit() {
    #[derive(Serialize)]
    struct Unit;
    assert_eq!(to_value(None::<i32>).unwrap(), Value::None);
    assert_eq!(to_value(Some("lorem")).unwrap(), Value::from("lorem"));
    assert_eq!(to_value(()).unwrap(), Value::None);
    assert_eq!(to_value(Unit).unwrap(), Value::None);
}

#[test]
fn to_value_bytes() {
    assert_eq!(
        to_value(serde_bytes_like(&[1, 2])).unwrap(),
        Value::List(List::from([Value::Integer(1), Value::Integer(2)]))
    );
}

// Serializes as bytes rather than a sequence.
fn serde_bytes_like(bytes: &'static [u8]) -> impl Serialize {
    struct Bytes(&'static [u8]);
    impl Serialize for Bytes {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_bytes(self.0)
        }
    }
    Bytes(bytes)
}

#[test]
fn to_value_enum_variants() {
    #[derive(Serialize)]
    enum Shape {
        Point,
        Circle(f64),
        Line(i32, i32),
        Rect { w: i32, h: i32 },
    }
    assert_eq!(to_value(Shape::Point).unwrap(), Value::from("Point"));
    assert_eq!(
        to_value(Shape::Circle(0.5)).unwrap(),
        value! { Circle: 0.5 }
    );
    assert_eq!(
        to_value(Shape::Line(1, 2)).unwrap(),
        value! { Line: [1, 2] }
    );
    assert_eq!(
        to_value(Shape::Rect { w: 3, h: 4 }).unwrap(),
        value! { Rect: { w: 3, h: 4 } }
    );
}

#[test]
fn to_value_seq_and_tuple() {
    let exp = Value::List(List::from([
        Value::from("a"),
        Value::from("b"),
        Value::from("c"),
    ]));
    assert_eq!(to_value(vec!["a", "b", "c"]).unwrap(), exp);
    assert_eq!(to_value(("a", "b", "c")).unwrap(), exp);
}

#[test]
fn to_value_struct() {
    #[derive(Serialize)]
    struct Author {
        name: String,
        books: Vec<&'static str>,
        alive: bool,
    }
    assert_eq!(
        to_value(Author {
            name: "asimov".into(),
            books: vec!["foundation"],
            alive: false,
        })
        .unwrap(),
        value! { name: "asimov", books: ["foundation"], alive: false }
    );
}

#[test]
fn to_value_map_keys() {
    assert_eq!(
        to_value(BTreeMap::from([(1, "a"), (2, "b")])).unwrap(),
        Value::Map(Map::from([
            (String::from("1"), Value::from("a")),
            (String::from("2"), Value::from("b")),
        ]))
    );
    assert_eq!(
        to_value(BTreeMap::from([(true, "a")])).unwrap(),
        value! { "true": "a" }
    );
}

#[test]
fn to_value_map_key_not_string() {
    let err = to_value(BTreeMap::from([((1, 2), "a")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serialize);
    assert_eq!(err.to_string(), "map key must be a string, found list");
}

#[test]
fn value_serialize_roundtrip() {
    let v = value! { a: [1, None, 1.5], b: { c: "d" }, e: true };
    assert_eq!(to_value(&v).unwrap(), v);
}
