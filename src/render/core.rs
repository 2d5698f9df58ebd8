use std::fmt::Write;

use crate::compile;
use crate::render::value::lookup_path;
use crate::types::ast::{Expr, Item};
use crate::value::ValueCow;
use crate::{Engine, Error, Result, Value};

/// Renders templates for an engine.
///
/// The depth is the number of named templates applied through filters above
/// this renderer, the top level template is rendered at depth zero.
pub struct RendererImpl<'render> {
    engine: &'render Engine<'render>,
    depth: usize,
}

/// The state passed to a filter function.
pub struct FilterState<'a> {
    renderer: &'a RendererImpl<'a>,
    /// The running value of the placeholder.
    pub value: Value,
    /// The arguments of the filter invocation, passed verbatim.
    pub args: &'a [&'a str],
}

impl<'render> RendererImpl<'render> {
    pub fn new(engine: &'render Engine<'render>) -> Self {
        Self { engine, depth: 0 }
    }

    pub fn render(
        &self,
        f: &mut dyn Write,
        name: Option<&str>,
        source: &str,
        ctx: &Value,
    ) -> Result<()> {
        self.render_impl(f, source, ctx).map_err(|err| match name {
            Some(name) => err.with_template_name(name),
            None => err,
        })
    }

    fn render_impl(&self, f: &mut dyn Write, source: &str, ctx: &Value) -> Result<()> {
        let template = compile::template(&self.engine.syntax, source);
        for item in &template.items {
            match item {
                Item::Raw(span) => f.write_str(&source[*span])?,
                Item::Expr(expr) => {
                    let value = self.eval(source, expr, ctx)?;
                    tracing::trace!(
                        span.m = expr.span.m,
                        span.n = expr.span.n,
                        value = value.human(),
                        "rendered placeholder"
                    );
                    write!(f, "{}", &*value)?;
                }
            }
        }
        Ok(())
    }

    /// Resolves the placeholder path and pipes the value through the filters.
    fn eval<'a>(&self, source: &str, expr: &Expr<'_>, ctx: &'a Value) -> Result<ValueCow<'a>> {
        let mut value = lookup_path(ctx, &expr.path);
        for call in &expr.filters {
            match self.engine.filters.get(call.name) {
                Some(filter) => {
                    let result = filter(FilterState {
                        renderer: self,
                        value: value.into_owned(),
                        args: &call.args,
                    })
                    .map_err(|err| err.enrich(source, call.span))?;
                    value = ValueCow::Owned(result);
                }
                None if self.engine.strict => {
                    return Err(Error::unknown_filter().enrich(source, call.span));
                }
                None => {
                    tracing::debug!(filter = call.name, "skipping unknown filter");
                }
            }
        }
        Ok(value)
    }
}

impl FilterState<'_> {
    /// Renders a named template using the given value as the context.
    ///
    /// An unregistered template renders as an empty string.
    pub fn render_template(&self, name: &str, ctx: &Value) -> Result<String> {
        let engine = self.renderer.engine;
        let source = match engine.templates.get(name) {
            Some(source) => source,
            None => {
                tracing::debug!(template = name, "skipping unknown template");
                return Ok(String::new());
            }
        };

        let depth = self.renderer.depth + 1;
        if depth > engine.max_depth {
            return Err(Error::recursion_exceeded(engine.max_depth));
        }
        tracing::trace!(template = name, depth, "applying template");

        let mut s = String::new();
        RendererImpl { engine, depth }.render(&mut s, Some(name), source, ctx)?;
        Ok(s)
    }
}
