use crate::value::ValueCow;
use crate::Value;

/// Resolve a dotted path against the context.
///
/// Resolution never fails: if a segment is not found or the value being
/// indexed is falsy then the result is [`Value::None`].
pub fn lookup_path<'a>(ctx: &'a Value, path: &[&str]) -> ValueCow<'a> {
    let mut value = ValueCow::Borrowed(ctx);
    for segment in path {
        if !value.is_truthy() {
            return ValueCow::Owned(Value::None);
        }
        value = match value {
            ValueCow::Borrowed(v) => lookup(v, segment),
            ValueCow::Owned(v) => ValueCow::Owned(lookup(&v, segment).into_owned()),
        };
    }
    value
}

/// Index into the value with the given path segment.
///
/// Lists and strings expose their length through the `length` pseudo
/// property and can be indexed by a decimal position.
fn lookup<'a>(value: &'a Value, segment: &str) -> ValueCow<'a> {
    let found = match value {
        Value::Map(map) => map.get(segment).map(ValueCow::Borrowed),
        Value::List(list) if segment == "length" => Some(ValueCow::Owned(Value::from(list.len()))),
        Value::List(list) => segment
            .parse::<usize>()
            .ok()
            .and_then(|i| list.get(i))
            .map(ValueCow::Borrowed),
        Value::String(s) if segment == "length" => {
            Some(ValueCow::Owned(Value::from(s.chars().count())))
        }
        Value::String(s) => segment
            .parse::<usize>()
            .ok()
            .and_then(|i| s.chars().nth(i))
            .map(|c| ValueCow::Owned(Value::from(c))),
        _ => None,
    };
    found.unwrap_or(ValueCow::Owned(Value::None))
}
