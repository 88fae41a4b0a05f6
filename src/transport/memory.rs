//! In-memory transport double for host-side tests

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;
use crate::transport::Transport;

/// Records every accepted byte, wire-exact (after CRLF expansion)
#[derive(Debug, Default)]
pub struct MemoryTransport {
    bytes: Vec<u8>,
}

impl MemoryTransport {
    /// Creates an empty recording transport
    pub fn new() -> Self {
        Self::default()
    }

    /// The bytes accepted so far, in delivery order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The recorded output as UTF-8, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }
}

impl Transport for MemoryTransport {
    fn put(&mut self, byte: u8) -> Result<()> {
        self.bytes.push(byte);
        Ok(())
    }
}
