use std::cmp::max;
use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::types::span::Span;

/// An error that can occur while rendering a template.
///
/// Rendering is lenient: missing values, unknown filters and unregistered
/// templates all render as empty text. Errors are only raised for the
/// conditions listed in [`ErrorKind`].
pub struct Error {
    kind: ErrorKind,
    msg: String,
    name: Option<String>,
    span: Option<(String, Span)>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

/// The category of an [`Error`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Named templates applied through the `tpl` filter nested deeper than
    /// the engine's maximum depth, usually a template that refers to itself.
    RecursionExceeded,
    /// A filter argument could not be interpreted, e.g. a malformed pattern
    /// passed to `mark`.
    FilterArgumentInvalid,
    /// A filter was not found and the engine is in strict mode.
    UnknownFilter,
    /// A filter function returned an error.
    Filter,
    /// The context could not be converted to a [`Value`][crate::Value].
    Serialize,
    /// Writing the rendered output failed.
    Io,
}

impl Error {
    fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
            name: None,
            span: None,
            source: None,
        }
    }

    pub(crate) fn recursion_exceeded(max_depth: usize) -> Self {
        Self::new(
            ErrorKind::RecursionExceeded,
            format!("reached maximum template depth ({max_depth})"),
        )
    }

    pub(crate) fn filter_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::FilterArgumentInvalid, msg)
    }

    pub(crate) fn unknown_filter() -> Self {
        Self::new(ErrorKind::UnknownFilter, "unknown filter")
    }

    /// Attaches the template source and span to the error, unless the error
    /// already points somewhere more specific.
    pub(crate) fn enrich(mut self, source: &str, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some((source.to_owned(), span));
        }
        self
    }

    /// Attaches the name of the template the error occurred in.
    pub(crate) fn with_template_name(mut self, name: &str) -> Self {
        if self.span.is_some() && self.name.is_none() {
            self.name = Some(name.to_owned());
        }
        self
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the name of the template the error occurred in, if it was a
    /// named template.
    pub fn template_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let mut e = Self::new(ErrorKind::Io, "failed to write rendered output");
        e.source = Some(Box::new(err));
        e
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        let mut e = Self::new(ErrorKind::Io, "failed to write rendered output");
        e.source = Some(Box::new(err));
        e
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::new(ErrorKind::Filter, msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::new(ErrorKind::Filter, msg)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::new(ErrorKind::Serialize, msg.to_string())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn StdError + 'static))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => fmt_pretty(self, source, *span, f),
            None => fmt::Display::fmt(self, f),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) if f.alternate() => fmt_pretty(self, source, *span, f),
            Some((_, span)) => {
                write!(f, "{} between bytes {} and {}", self.msg, span.m, span.n)?;
                if let Some(name) = &self.name {
                    write!(f, " in template `{name}`")?;
                }
                Ok(())
            }
            None => {
                write!(f, "{}", self.msg)?;
                if let Some(source) = &self.source {
                    write!(f, ": {source}")?;
                }
                Ok(())
            }
        }
    }
}

fn fmt_pretty(err: &Error, source: &str, span: Span, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines: Vec<_> = source.split_terminator('\n').collect();
    let (line, col) = to_line_col(&lines, span.m);
    let width = max(1, width(&source[span]));
    let code = lines.get(line).or_else(|| lines.last()).unwrap_or(&"");

    let num = (line + 1).to_string();
    let pad = num.len();
    let pipe = "|";
    let underline = "^".repeat(width);

    writeln!(f)?;
    if let Some(name) = &err.name {
        writeln!(
            f,
            " {0:pad$}--> {1}:{2}:{3}",
            "",
            name,
            line + 1,
            col + 1,
            pad = pad
        )?;
    }
    write!(
        f,
        " {0:pad$} {pipe}\n \
        {num:>} {pipe} {code}\n \
        {0:pad$} {pipe} {underline:>width$} {msg}\n",
        "",
        pad = pad,
        pipe = pipe,
        num = num,
        code = code,
        underline = underline,
        width = col + width,
        msg = err.msg
    )
}

fn to_line_col(lines: &[&str], offset: usize) -> (usize, usize) {
    let mut n = 0;
    for (i, line) in lines.iter().enumerate() {
        let len = line.len() + 1;
        if n + len > offset {
            return (i, width(&line[..offset - n]));
        }
        n += len;
    }
    (lines.len(), lines.last().map(|l| width(l)).unwrap_or(0))
}

#[cfg(feature = "unicode")]
fn width(s: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(s)
}

#[cfg(not(feature = "unicode"))]
fn width(s: &str) -> usize {
    s.chars().count()
}
