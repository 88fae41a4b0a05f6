//! Report transport
//!
//! The driver reports through an explicitly passed [`Transport`] rather
//! than a process-global output binding. A target implementation polls
//! hardware readiness inside [`Transport::put`]; the host double in
//! [`memory`] records to a buffer. The driver cannot tell which it was
//! handed.

use crate::error::{Error, Result};

#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::fmt;

#[cfg(feature = "embedded-io")]
pub mod embedded;
#[cfg(feature = "alloc")]
pub mod memory;
#[cfg(feature = "std")]
pub mod stdio;

#[cfg(feature = "embedded-io")]
pub use embedded::IoTransport;
#[cfg(feature = "alloc")]
pub use memory::MemoryTransport;
#[cfg(feature = "std")]
pub use stdio::StdTransport;

/// A blocking, byte-oriented output channel
///
/// `put` returns once the channel has accepted the byte, not necessarily
/// once it has been physically transmitted; blocking until acceptance is
/// the only backpressure in the harness. Delivery order is preserved
/// exactly.
pub trait Transport {
    /// Writes one raw byte, blocking until the channel accepts it
    fn put(&mut self, byte: u8) -> Result<()>;

    /// Writes one character, expanding `'\n'` to CR+LF on the wire
    fn put_char(&mut self, byte: u8) -> Result<()> {
        if byte == b'\n' {
            self.put(b'\r')?;
        }
        self.put(byte)
    }

    /// Writes a string through [`Transport::put_char`]
    fn write_str(&mut self, s: &str) -> Result<()> {
        for byte in s.bytes() {
            self.put_char(byte)?;
        }
        Ok(())
    }
}

/// `core::fmt::Write` adapter over a [`Transport`]
///
/// `core::fmt` erases error detail, so the adapter stashes the first
/// transport error and hands it back from [`TransportWriter::finish`].
pub struct TransportWriter<'a, T: Transport> {
    transport: &'a mut T,
    error: Option<Error>,
}

impl<'a, T: Transport> TransportWriter<'a, T> {
    /// Wraps a transport for use with `write!`/`writeln!`
    pub fn new(transport: &'a mut T) -> Self {
        Self {
            transport,
            error: None,
        }
    }

    /// Resolves a formatting result against any stashed transport error
    pub fn finish(self, fmt_result: fmt::Result) -> Result<()> {
        match (fmt_result, self.error) {
            (_, Some(e)) => Err(e),
            (Ok(()), None) => Ok(()),
            (Err(_), None) => Err(Error::Format),
        }
    }
}

impl<T: Transport> fmt::Write for TransportWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.transport.write_str(s) {
            Ok(()) => Ok(()),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
                Err(fmt::Error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write as _;

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn put(&mut self, _byte: u8) -> Result<()> {
            Err(Error::Transport {
                details: "channel never became ready",
            })
        }
    }

    #[test]
    fn writer_surfaces_transport_error() {
        let mut transport = FailingTransport;
        let mut writer = TransportWriter::new(&mut transport);
        let res = write!(writer, "Test  1: PASSED");
        let err = writer.finish(res).unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn newline_expands_to_crlf() {
        let mut transport = super::memory::MemoryTransport::new();
        transport.write_str("a\nb\n").unwrap();
        assert_eq!(transport.as_bytes(), b"a\r\nb\r\n");
    }
}
