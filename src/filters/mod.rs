#[cfg(feature = "builtins")]
pub(crate) mod builtins;

use crate::render::FilterState;
use crate::{Result, Value};

pub(crate) type FilterFn = dyn Fn(FilterState<'_>) -> Result<Value> + Send + Sync + 'static;

pub(crate) fn new<F, R>(f: F) -> Box<FilterFn>
where
    F: Fn(Value, &[&str]) -> R + Send + Sync + 'static,
    R: FilterReturn,
{
    Box::new(move |state: FilterState<'_>| -> Result<Value> {
        f(state.value, state.args).to_value()
    })
}

/// The return type of a filter function.
///
/// This trait is used by the [`Engine::add_filter`][crate::Engine::add_filter]
/// method to abstract over the different return types a filter can have.
///
/// [`FilterReturn`] is implemented for the following types.
///
/// - `R` where `R` implements `Into<Value>`, this includes `Option<R>` where
///   `None` becomes [`Value::None`]
/// - `Result<R>` where `R` implements `Into<Value>`, an error is returned to
///   the caller of the render
///
/// ## Examples
///
/// ```rust
/// use rouflaquette::{Engine, Value};
///
/// let mut engine = Engine::new();
/// engine.add_filter("concat", |v: Value, args: &[&str]| {
///     format!("{}{}", v, args.first().unwrap_or(&""))
/// });
/// engine.add_filter("first", |v: Value, _: &[&str]| match v {
///     Value::List(list) => list.into_iter().next(),
///     _ => None,
/// });
/// engine.add_filter("num", |v: Value, _: &[&str]| match v {
///     Value::Integer(i) => Ok(i),
///     v => Err(rouflaquette::Error::from(format!("expected integer, found {v}"))),
/// });
///
/// let result = engine.render("{{txt|concat: isn't it?}}", rouflaquette::value! { txt: "nice" })?;
/// assert_eq!(result, "nice isn't it?");
/// # Ok::<(), rouflaquette::Error>(())
/// ```
pub trait FilterReturn {
    #[doc(hidden)]
    fn to_value(self) -> Result<Value>;
}

impl<T> FilterReturn for T
where
    T: Into<Value>,
{
    fn to_value(self) -> Result<Value> {
        Ok(self.into())
    }
}

impl<T> FilterReturn for Result<T>
where
    T: Into<Value>,
{
    fn to_value(self) -> Result<Value> {
        self.map(Into::into)
    }
}
