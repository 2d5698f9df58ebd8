#![cfg(feature = "builtins")]

use rouflaquette::{value, Engine, Error, ErrorKind, Syntax, Value};

#[test]
fn render_filter_no_args() {
    let mut engine = Engine::new();
    engine.add_filter("shout", |v: Value, _: &[&str]| format!("{v}!"));
    let result = engine.render("{{name|shout}}", value! { name: "john" }).unwrap();
    assert_eq!(result, "john!");
}

#[test]
fn render_filter_args_verbatim() {
    let mut engine = Engine::new();
    engine.add_filter("args", |_: Value, args: &[&str]| args.join(","));
    let result = engine
        .render("{{name|args: a :b::c }}", value! {})
        .unwrap();
    assert_eq!(result, " a ,b,,c ");
}

#[test]
fn render_filter_chain() {
    let mut engine = Engine::new();
    engine
        .add_filter("double", |v: Value, _: &[&str]| Value::from_number(v.to_number() * 2.0))
        .add_filter("add", |v: Value, args: &[&str]| {
            let n: f64 = args.first().and_then(|a| a.parse().ok()).unwrap_or(0.0);
            Value::from_number(v.to_number() + n)
        });
    let result = engine
        .render("{{n|double|add:1|double}}", value! { n: 3 })
        .unwrap();
    assert_eq!(result, "14");
}

#[test]
fn render_filter_returns_option() {
    let mut engine = Engine::new();
    engine.add_filter("first", |v: Value, _: &[&str]| match v {
        Value::List(list) => list.into_iter().next(),
        _ => None,
    });
    let result = engine
        .render("[{{a|first}}][{{b|first}}]", value! { a: ["x", "y"], b: "z" })
        .unwrap();
    assert_eq!(result, "[x][]");
}

#[test]
fn render_filter_returns_err() {
    let mut engine = Engine::new();
    engine.add_filter("fail", |_: Value, _: &[&str]| -> rouflaquette::Result<Value> {
        Err(Error::from("expected failure"))
    });
    let err = engine
        .render("lorem {{ipsum|fail}}", value! {})
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Filter);
    assert_eq!(err.to_string(), "expected failure between bytes 14 and 18");
}

#[test]
fn render_filter_overwrites_builtin() {
    let mut engine = Engine::new();
    engine.add_filter("uppercase", |_: Value, _: &[&str]| "overwritten");
    let result = engine
        .render("{{name|uppercase}}", value! { name: "john" })
        .unwrap();
    assert_eq!(result, "overwritten");
}

#[test]
fn render_filter_captures_state() {
    let prefix = String::from(">> ");
    let mut engine = Engine::new();
    engine.add_filter("prefix", move |v: Value, _: &[&str]| format!("{prefix}{v}"));
    let result = engine.render("{{name|prefix}}", value! { name: "john" }).unwrap();
    assert_eq!(result, ">> john");
}

#[test]
fn render_unknown_filter_skipped() {
    let result = Engine::new()
        .render("{{name|nope:x|nope2}}", value! { name: "john" })
        .unwrap();
    assert_eq!(result, "john");
}

#[test]
fn render_empty_filter_name_skipped() {
    let result = Engine::new()
        .render("{{name|}}", value! { name: "john" })
        .unwrap();
    assert_eq!(result, "john");
}

#[test]
fn render_unknown_filter_strict() {
    let mut engine = Engine::new();
    engine.set_strict(true);
    let err = engine
        .render("lorem {{ipsum|nope}}", value! {})
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownFilter);
    assert_eq!(err.to_string(), "unknown filter between bytes 14 and 18");
}

#[test]
fn render_empty_engine_has_no_filters() {
    let engine = Engine::empty(Syntax::default());
    let result = engine
        .render("{{name|uppercase}}", value! { name: "john" })
        .unwrap();
    assert_eq!(result, "john");
}
