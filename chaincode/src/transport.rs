//! Invocation transport between the service loop and the host.
//!
//! `Transport` abstracts where invocations come from. The bundled
//! `StdioTransport` speaks newline-delimited JSON: one `Invocation` object
//! per input line, one `Response` object per output line.

use std::io::{BufRead, Write};

use crate::error::ChaincodeError;
use crate::invocation::{Invocation, Response};

/// Source of invocations and sink for responses.
pub trait Transport {
    /// Wait for the next invocation.
    ///
    /// Returns `Ok(None)` when the host has no more invocations. A message
    /// that cannot be decoded is returned as
    /// `ChaincodeError::MalformedInvocation`; the transport stays usable.
    fn recv(&mut self) -> Result<Option<Invocation>, ChaincodeError>;

    /// Deliver a response.
    fn send(&mut self, response: &Response) -> Result<(), ChaincodeError>;
}

/// Newline-delimited JSON over a reader/writer pair.
///
/// Lines are read as raw bytes, so a line that is not valid UTF-8 is a
/// malformed invocation rather than a transport failure.
pub struct StdioTransport<R, W> {
    reader: R,
    writer: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> StdioTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: Vec::new(),
        }
    }

    /// Recover the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Transport for StdioTransport<R, W> {
    fn recv(&mut self) -> Result<Option<Invocation>, ChaincodeError> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            let trimmed = self.line.trim_ascii();
            if trimmed.is_empty() {
                continue;
            }
            return serde_json::from_slice(trimmed)
                .map(Some)
                .map_err(ChaincodeError::MalformedInvocation);
        }
    }

    fn send(&mut self, response: &Response) -> Result<(), ChaincodeError> {
        let mut bytes = serde_json::to_vec(response).map_err(ChaincodeError::ResponseEncoding)?;
        bytes.push(b'\n');
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }
}
