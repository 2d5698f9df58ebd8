//! Loose conversions between values.
//!
//! Filter arguments are untyped strings and filters accept any value, so
//! filters rely on these conversions instead of failing on a type mismatch.

use std::fmt;
use std::fmt::Write;

use crate::Value;

impl Value {
    /// Returns whether the value is considered true in a condition.
    ///
    /// The following values are falsy, everything else (including empty lists
    /// and maps) is truthy:
    /// - [`Value::None`]
    /// - `false`
    /// - `0` and `0.0`
    /// - `NaN`
    /// - the empty string
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Float(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) => true,
        }
    }

    /// Converts the value to a number.
    ///
    /// Strings are parsed as decimal numbers ignoring surrounding whitespace,
    /// an empty string is `0`. Anything that can't be converted is `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::None | Value::Map(_) => f64::NAN,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Integer(n) => *n as f64,
            Value::Float(n) => *n,
            Value::String(s) => parse_number(s),
            Value::List(list) => match list.as_slice() {
                [] => 0.0,
                [v] => v.to_number(),
                _ => f64::NAN,
            },
        }
    }

    /// Construct a value from a number, preferring an integer when the number
    /// is whole.
    pub fn from_number(n: f64) -> Self {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Value::Integer(n as i64)
        } else {
            Value::Float(n)
        }
    }

    /// Converts the value into a string, see the [`Display`][fmt::Display]
    /// implementation.
    pub fn into_text(self) -> String {
        match self {
            Value::String(s) => s,
            value => value.to_string(),
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts these but they aren't numbers in a template.
        s if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        s => s.parse().unwrap_or(f64::NAN),
    }
}

/// Formats a number the way it is rendered in a template.
pub(crate) fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // Negative zero renders as zero.
        f.write_char('0')
    } else {
        write!(f, "{n}")
    }
}

/// Renders the value.
///
/// Values are formatted as follows:
/// - [`Value::None`]: empty string
/// - [`Value::Bool`]: `true` or `false`
/// - [`Value::Integer`] and [`Value::Float`]: the number in decimal form,
///   whole floats have no fractional part and non-finite floats render as
///   `NaN`, `Infinity` or `-Infinity`
/// - [`Value::String`]: the string, unescaped
/// - [`Value::List`]: each element rendered and joined with a single space
/// - [`Value::Map`]: the opaque marker `[object]`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => fmt_number(f, *n),
            Value::String(s) => f.write_str(s),
            Value::List(list) => {
                for (i, v) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    fmt::Display::fmt(v, f)?;
                }
                Ok(())
            }
            Value::Map(_) => f.write_str("[object]"),
        }
    }
}
