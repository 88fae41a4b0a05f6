//! Transport over `embedded-io` blocking writers
//!
//! Lets the harness report through any serial driver that implements
//! `embedded_io::Write`, such as a HAL UART.

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Wraps an `embedded_io::Write` implementation as a harness transport
#[derive(Debug)]
pub struct IoTransport<W> {
    inner: W,
}

impl<W> IoTransport<W> {
    /// Wraps `inner` as a transport
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consumes the transport, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: embedded_io::Write> Transport for IoTransport<W> {
    fn put(&mut self, byte: u8) -> Result<()> {
        self.inner
            .write_all(&[byte])
            .map_err(|_| Error::Transport {
                details: "serial write failed",
            })
    }
}
