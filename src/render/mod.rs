mod core;
mod value;

use std::io;

pub(crate) use crate::render::core::{FilterState, RendererImpl};
use crate::fmt::Writer;
use crate::{Engine, Error, Result, Value};

/// Render a template source to a string.
pub(crate) fn to_string(
    engine: &Engine<'_>,
    name: Option<&str>,
    source: &str,
    ctx: &Value,
) -> Result<String> {
    let mut s = String::with_capacity(source.len());
    RendererImpl::new(engine).render(&mut s, name, source, ctx)?;
    Ok(s)
}

/// Render a template source to the given writer.
pub(crate) fn to_writer<W>(
    engine: &Engine<'_>,
    name: Option<&str>,
    source: &str,
    ctx: &Value,
    writer: W,
) -> Result<()>
where
    W: io::Write,
{
    let mut w = Writer::new(writer);
    RendererImpl::new(engine)
        .render(&mut w, name, source, ctx)
        .map_err(|err| w.take_err().map(Error::from).unwrap_or(err))
}
