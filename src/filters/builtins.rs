//! Builtin filters.
//!
//! Every filter accepts any value and coerces it as needed. Filters that
//! operate on text first render the value to a string, and numeric
//! arguments are parsed from their text with unparsable numbers clamped or
//! treated as zero.

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use crate::render::FilterState;
use crate::{Engine, Error, Result, Value};

/// Installs the builtin filters on the engine.
pub(crate) fn install(engine: &mut Engine<'_>) {
    engine.add_filter("floor", floor);
    engine.add_filter("round", round);
    engine.add_filter("capital", capital);
    engine.add_filter("lowercase", lowercase);
    engine.add_filter("uppercase", uppercase);
    engine.add_filter("trim", trim);
    engine.add_filter("subs", subs);
    engine.add_filter("replace", replace);
    engine.add_filter("join", join);
    engine.add_filter("mark", mark);
    engine.add_filter("plural", plural);
    engine.add_filter("or", or);
    engine.add_filter("if", if_);
    engine.filters.insert("tpl".into(), Box::new(tpl));
}

fn arg<'a>(args: &[&'a str], i: usize) -> Option<&'a str> {
    args.get(i).copied()
}

/// Rounds the number towards negative infinity.
pub fn floor(value: Value, _: &[&str]) -> Value {
    Value::from_number(value.to_number().floor())
}

/// Rounds the number to the nearest integer, ties away from zero.
pub fn round(value: Value, _: &[&str]) -> Value {
    Value::from_number(value.to_number().round())
}

/// Uppercases the first character of every word.
pub fn capital(value: Value, _: &[&str]) -> String {
    let s = value.into_text();
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let word = is_word_char(c);
        if word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = word;
    }
    out
}

#[cfg(feature = "unicode")]
fn is_word_char(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

#[cfg(not(feature = "unicode"))]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns the lowercase equivalent of the text.
///
/// See [`str::to_lowercase`].
pub fn lowercase(value: Value, _: &[&str]) -> String {
    value.into_text().to_lowercase()
}

/// Returns the uppercase equivalent of the text.
///
/// See [`str::to_uppercase`].
pub fn uppercase(value: Value, _: &[&str]) -> String {
    value.into_text().to_uppercase()
}

/// Removes leading and trailing whitespace from every line of the text.
pub fn trim(value: Value, _: &[&str]) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s+|\s+$").unwrap());
    RE.replace_all(&value.into_text(), "").into_owned()
}

/// Extracts the characters between two offsets, the end is exclusive.
///
/// Offsets are clamped to the length of the text, swapped if reversed and a
/// missing end offset extends to the end of the text.
pub fn subs(value: Value, args: &[&str]) -> String {
    let s = value.into_text();
    let len = s.chars().count();
    let offset = |arg: Option<&str>, default: usize| match arg {
        None => default,
        Some(arg) => {
            let n = Value::from(arg).to_number();
            if n.is_nan() || n <= 0.0 {
                0
            } else if n >= len as f64 {
                len
            } else {
                n as usize
            }
        }
    };
    let from = offset(arg(args, 0), 0);
    let to = offset(arg(args, 1), len);
    let (m, n) = if from > to { (to, from) } else { (from, to) };
    s.chars().skip(m).take(n - m).collect()
}

/// Replaces the first occurrence of a substring with another.
///
/// Only the first occurrence is replaced.
pub fn replace(value: Value, args: &[&str]) -> String {
    let s = value.into_text();
    match arg(args, 0) {
        Some(what) => s.replacen(what, arg(args, 1).unwrap_or(""), 1),
        None => s,
    }
}

/// Joins the elements of a list with a separator, `,` by default.
///
/// Any other value is treated as a list of one element.
pub fn join(value: Value, args: &[&str]) -> String {
    let sep = arg(args, 0).unwrap_or(",");
    match value {
        Value::List(list) => list
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep),
        value => value.into_text(),
    }
}

/// Wraps every case insensitive match of a pattern in `<mark>` tags.
///
/// The argument is a regular expression, metacharacters are not escaped.
pub fn mark(value: Value, args: &[&str]) -> Result<String> {
    let pattern = arg(args, 0).unwrap_or("");
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|err| {
            Error::filter_argument(format!("invalid pattern `{pattern}` passed to `mark`: {err}"))
        })?;
    let s = value.into_text();
    let marked = re.replace_all(&s, |caps: &Captures<'_>| format!("<mark>{}</mark>", &caps[0]));
    Ok(marked.into_owned())
}

/// Selects one of three forms depending on the number, `none` when the number
/// is zero or less, `multi` when it is more than one and `single` otherwise.
///
/// The first `{}` and the first `$count` in the chosen form are replaced by
/// the number.
pub fn plural(value: Value, args: &[&str]) -> Value {
    let n = match value.is_truthy() {
        true => value.to_number(),
        false => 0.0,
    };
    let n = if n.is_nan() { 0.0 } else { n };
    let form = if n <= 0.0 {
        arg(args, 0)
    } else if n > 1.0 {
        arg(args, 2)
    } else {
        arg(args, 1)
    };
    match form {
        Some(form) => {
            let count = Value::from_number(n).to_string();
            Value::from(form.replacen("{}", &count, 1).replacen("$count", &count, 1))
        }
        None => Value::None,
    }
}

/// Returns the default if the value is falsy, otherwise the value.
pub fn or(value: Value, args: &[&str]) -> Value {
    match value.is_truthy() {
        true => value,
        false => arg(args, 0).map(Value::from).unwrap_or_default(),
    }
}

/// Returns the first argument if the value is truthy, otherwise the second.
pub fn if_(value: Value, args: &[&str]) -> Value {
    let i = if value.is_truthy() { 0 } else { 1 };
    arg(args, i).map(Value::from).unwrap_or_default()
}

/// Renders a named template using the value as the context.
///
/// If the value is a list the template is rendered once per element and the
/// results are concatenated.
pub(crate) fn tpl(state: FilterState<'_>) -> Result<Value> {
    let name = match state.args.first() {
        Some(name) => *name,
        None => return Ok(Value::String(String::new())),
    };
    match &state.value {
        Value::List(list) => {
            let mut out = String::new();
            for item in list {
                out.push_str(&state.render_template(name, item)?);
            }
            Ok(Value::String(out))
        }
        value => state.render_template(name, value).map(Value::String),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capital_words() {
        assert_eq!(capital(Value::from("hello big world"), &[]), "Hello Big World");
        assert_eq!(capital(Value::from("l'été-là"), &[]), "L'Été-Là");
        assert_eq!(capital(Value::from("snake_case 3d"), &[]), "Snake_case 3d");
        assert_eq!(capital(Value::from("a b"), &[]), "A B");
    }

    #[test]
    fn subs_boundaries() {
        let s = || Value::from("hello");
        assert_eq!(subs(s(), &["1", "3"]), "el");
        assert_eq!(subs(s(), &["3", "1"]), "el");
        assert_eq!(subs(s(), &["2", "2"]), "");
        assert_eq!(subs(s(), &["2"]), "llo");
        assert_eq!(subs(s(), &["-2", "99"]), "hello");
        assert_eq!(subs(s(), &["9", "12"]), "");
        assert_eq!(subs(s(), &["x", "2"]), "he");
        assert_eq!(subs(Value::from("héllo"), &["1", "2"]), "é");
    }

    #[test]
    fn plural_forms() {
        let args = ["none", "one {}", "{} many"];
        assert_eq!(plural(Value::from(0), &args), Value::from("none"));
        assert_eq!(plural(Value::from(1), &args), Value::from("one 1"));
        assert_eq!(plural(Value::from(2), &args), Value::from("2 many"));
        assert_eq!(plural(Value::from(-4), &args), Value::from("none"));
        assert_eq!(plural(Value::from("3"), &args), Value::from("3 many"));
        assert_eq!(plural(Value::None, &args), Value::from("none"));
        assert_eq!(plural(Value::from("abc"), &args), Value::from("none"));
        assert_eq!(plural(Value::from(2.5), &args), Value::from("2.5 many"));
    }

    #[test]
    fn plural_missing_form() {
        assert_eq!(plural(Value::from(5), &["none"]), Value::None);
    }

    #[test]
    fn trim_lines() {
        assert_eq!(trim(Value::from("  a  "), &[]), "a");
        assert_eq!(trim(Value::from(" a \n  b "), &[]), "a\nb");
        assert_eq!(trim(Value::from("\n\n a\n"), &[]), "a");
    }

    #[test]
    fn join_values() {
        assert_eq!(join(Value::from(["a", "b"]), &["-"]), "a-b");
        assert_eq!(join(Value::from([1, 2]), &[]), "1,2");
        assert_eq!(join(Value::from(3), &["-"]), "3");
        assert_eq!(join(Value::None, &["-"]), "");
    }

    #[test]
    fn mark_invalid_pattern() {
        let err = mark(Value::from("a(b"), &["("]).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::FilterArgumentInvalid);
    }
}
