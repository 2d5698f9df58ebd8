//! Output buffers for rendering.
//!
//! The renderer writes to any [`std::fmt::Write`]. Rendering to a
//! [`std::io::Write`] goes through [`Writer`] which keeps hold of the
//! underlying I/O error so that it can be reported instead of the opaque
//! [`std::fmt::Error`].

use std::fmt;
use std::io;

pub(crate) struct Writer<W> {
    writer: W,
    err: Option<io::Error>,
}

impl<W> Writer<W>
where
    W: io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer, err: None }
    }

    pub fn take_err(&mut self) -> Option<io::Error> {
        self.err.take()
    }
}

impl<W> fmt::Write for Writer<W>
where
    W: io::Write,
{
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writer.write_all(s.as_bytes()).map_err(|e| {
            self.err = Some(e);
            fmt::Error
        })
    }
}
