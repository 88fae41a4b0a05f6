//! Contract boundary to the primitives under test
//!
//! The harness links against an externally supplied cipher or hash and
//! only observes its output; neither trait has an error channel. A wrong
//! answer is discovered by the driver's byte comparison, never signalled
//! by the primitive itself. Implementations are expected to be pure:
//! same input, same output, no retained state between calls.

use crate::params::{BLOCK_SIZE, DIGEST_SIZE, KEY_SIZE};

/// A 16-byte block cipher under test
///
/// Both operations transform the staged block in place and are keyed per
/// call; the harness never retains a key schedule across vectors.
pub trait BlockCipher {
    /// Encrypts a single block in place under the given key
    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE], key: &[u8; KEY_SIZE]);

    /// Decrypts a single block in place under the given key
    fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE], key: &[u8; KEY_SIZE]);
}

/// A hash function under test with a fixed 32-byte digest
pub trait HashFunction {
    /// Computes the digest of `input` in a single call
    fn digest(&self, input: &[u8]) -> [u8; DIGEST_SIZE];
}

/// Which cipher direction a run exercises
///
/// Selected once per harness build, not per vector: `Encrypt` stages the
/// plaintext and compares against the tabulated ciphertext, `Decrypt`
/// the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAction {
    /// Stage plaintext, expect ciphertext
    Encrypt,
    /// Stage ciphertext, expect plaintext
    Decrypt,
}
