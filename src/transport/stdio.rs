//! Transport over a `std::io::Write` sink

use std::io;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Wraps any `std::io::Write` sink as a harness transport
///
/// The usual choice on a host is standard output, see [`stdout`].
#[derive(Debug)]
pub struct StdTransport<W: io::Write> {
    inner: W,
}

impl<W: io::Write> StdTransport<W> {
    /// Wraps `inner` as a transport
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consumes the transport, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Transport writing to the process's standard output
pub fn stdout() -> StdTransport<io::Stdout> {
    StdTransport::new(io::stdout())
}

impl<W: io::Write> Transport for StdTransport<W> {
    fn put(&mut self, byte: u8) -> Result<()> {
        self.inner.write_all(&[byte]).map_err(|_| Error::Transport {
            details: "write to std sink failed",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Transport as _;

    #[test]
    fn writes_through_io_sink() {
        let mut transport = StdTransport::new(Vec::new());
        transport.write_str("Test  1: PASSED\n").unwrap();
        assert_eq!(transport.into_inner(), b"Test  1: PASSED\r\n");
    }
}
