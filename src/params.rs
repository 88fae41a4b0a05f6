//! Compile-time parameters of the harness
//!
//! These are fixed at build time; there is no runtime configuration
//! surface. The working-buffer budget is deliberately small: the harness
//! targets parts where RAM is measured in hundreds of bytes.

/// Block size of the cipher under test, in bytes
pub const BLOCK_SIZE: usize = 16;

/// Key size of the cipher under test, in bytes
pub const KEY_SIZE: usize = 16;

/// Digest size of the hash function under test, in bytes
pub const DIGEST_SIZE: usize = 32;

/// Default working-buffer budget for hash inputs, in bytes
///
/// A vector whose declared length exceeds the budget is never staged; the
/// driver reports it as `OVERSIZED` instead of overrunning the buffer.
pub const VECTORS_MAXBYTES: usize = 192;
