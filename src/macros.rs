/// Convenient macro for constructing a [`Value::Map`][crate::Value::Map].
///
/// Keys are identifiers or string literals. Values can be `None`, nested maps
/// using `{ ... }`, lists using `[ ... ]` or any expression that implements
/// `Into<Value>`.
///
/// # Examples
///
/// ```
/// let ctx = rouflaquette::value! {
///     user: { name: "niko", "last-seen": None },
///     authors: [{ name: "asimov" }, { name: "dick" }],
///     count: 3,
/// };
/// ```
#[macro_export]
macro_rules! value {
    ($($tt:tt)*) => {
        $crate::_value!({ $($tt)* })
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! _value {
    //////////////////////////////////////////////////////////////////////////
    // Map entries, each entry is inserted into the given map variable.
    //////////////////////////////////////////////////////////////////////////

    (@map $map:ident) => {};

    (@map $map:ident $key:tt : None $(, $($rest:tt)*)?) => {
        $map.insert($crate::_value!(@key $key), $crate::Value::None);
        $crate::_value!(@map $map $($($rest)*)?);
    };

    (@map $map:ident $key:tt : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $map.insert($crate::_value!(@key $key), $crate::_value!({ $($inner)* }));
        $crate::_value!(@map $map $($($rest)*)?);
    };

    (@map $map:ident $key:tt : [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $map.insert($crate::_value!(@key $key), $crate::_value!([ $($inner)* ]));
        $crate::_value!(@map $map $($($rest)*)?);
    };

    (@map $map:ident $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        $map.insert($crate::_value!(@key $key), $crate::Value::from($value));
        $crate::_value!(@map $map $($($rest)*)?);
    };

    (@key $key:ident) => {
        ::std::string::String::from(stringify!($key))
    };

    (@key $key:expr) => {
        ::std::string::String::from($key)
    };

    //////////////////////////////////////////////////////////////////////////
    // List elements, accumulated as expressions.
    //////////////////////////////////////////////////////////////////////////

    (@list [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };

    (@list [$($elems:expr,)*] None $(, $($rest:tt)*)?) => {
        $crate::_value!(@list [$($elems,)* $crate::Value::None,] $($($rest)*)?)
    };

    (@list [$($elems:expr,)*] { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!({ $($inner)* }),] $($($rest)*)?)
    };

    (@list [$($elems:expr,)*] [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!([ $($inner)* ]),] $($($rest)*)?)
    };

    (@list [$($elems:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::_value!(@list [$($elems,)* $crate::Value::from($next),] $($($rest)*)?)
    };

    //////////////////////////////////////////////////////////////////////////
    // Entry points.
    //////////////////////////////////////////////////////////////////////////

    ({ $($tt:tt)* }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Map::new();
        $crate::_value!(@map map $($tt)*);
        $crate::Value::Map(map)
    }};

    ([ $($tt:tt)* ]) => {
        $crate::Value::List($crate::_value!(@list [] $($tt)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::{List, Map, Value};

    #[test]
    fn value_empty() {
        assert_eq!(value! {}, Value::Map(Map::new()));
    }

    #[test]
    fn value_map() {
        let v = value! { x: "hello", y: String::from("world!") };
        let exp = Value::from([("x", "hello"), ("y", "world!")]);
        assert_eq!(v, exp);
    }

    #[test]
    fn value_map_trailing_comma() {
        let v = value! { x: 1, };
        assert_eq!(v, Value::from([("x", 1)]));
    }

    #[test]
    fn value_map_string_keys() {
        let v = value! { "author-line": None };
        assert_eq!(v, Value::from([("author-line", Value::None)]));
    }

    #[test]
    fn value_list() {
        let v = value! { x: ["testing...", None, {}, [], 1 + 1] };
        let exp = Value::from([(
            "x",
            Value::from([
                Value::from("testing..."),
                Value::None,
                Value::Map(Map::new()),
                Value::List(List::new()),
                Value::Integer(2),
            ]),
        )]);
        assert_eq!(v, exp);
    }

    #[test]
    fn value_map_nested() {
        let v = value! {
            w: "hello",
            x: {
                y: "hello",
                z: "world!",
            },
        };
        let exp = Value::from([
            ("w", Value::from("hello")),
            ("x", Value::from([("y", "hello"), ("z", "world!")])),
        ]);
        assert_eq!(v, exp);
    }
}
