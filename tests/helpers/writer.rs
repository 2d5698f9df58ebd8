#![allow(dead_code)]

use std::io;

/// An in-memory writer that starts failing after a number of writes.
pub struct Writer {
    buf: Vec<u8>,
    writes: usize,
    fail_after: Option<usize>,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            writes: 0,
            fail_after: None,
        }
    }

    pub fn with_max(max: usize) -> Self {
        Self {
            fail_after: Some(max),
            ..Self::new()
        }
    }

    #[track_caller]
    pub fn into_string(self) -> String {
        String::from_utf8(self.buf).unwrap()
    }
}

impl io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        if matches!(self.fail_after, Some(max) if self.writes > max) {
            return Err(io::Error::from(io::ErrorKind::AddrInUse));
        }
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
