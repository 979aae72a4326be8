//! Body sink that accepts and drops every byte.
//!
//! # Design
//! The transport streams the response body into an `io::Write`. A writer
//! that reports fewer bytes than it was handed is treated as a short write
//! and aborts the copy, so `write` always claims the whole chunk. Only a
//! running byte count is kept; nothing from the body is retained.

use std::io;

/// An `io::Write` that discards everything written to it.
#[derive(Debug, Default)]
pub struct DiscardSink {
    accepted: u64,
}

impl DiscardSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes accepted so far.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }
}

impl io::Write for DiscardSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.accepted += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
