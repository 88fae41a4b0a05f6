//! Cipher-mode vector tables
//!
//! Block-cipher suites have no length concept: every vector is a fixed
//! plaintext/ciphertext/key triple of 16 bytes each, held in three
//! parallel tables.

use crate::error::{validate, Result};
use crate::params::{BLOCK_SIZE, KEY_SIZE};

/// Parallel plaintext/ciphertext/key tables for a block-cipher suite
#[derive(Debug, Clone, Copy)]
pub struct CipherVectors<'a> {
    plain_text: &'a [[u8; BLOCK_SIZE]],
    cipher_text: &'a [[u8; BLOCK_SIZE]],
    keys: &'a [[u8; KEY_SIZE]],
}

impl<'a> CipherVectors<'a> {
    /// Builds a store over three parallel tables of equal count
    pub fn new(
        plain_text: &'a [[u8; BLOCK_SIZE]],
        cipher_text: &'a [[u8; BLOCK_SIZE]],
        keys: &'a [[u8; KEY_SIZE]],
    ) -> Result<Self> {
        validate::table(
            plain_text.len() == cipher_text.len() && plain_text.len() == keys.len(),
            "cipher",
            "plaintext, ciphertext, and key tables differ in count",
        )?;
        Ok(Self {
            plain_text,
            cipher_text,
            keys,
        })
    }

    /// Number of vectors in the store
    pub fn vector_count(&self) -> usize {
        self.plain_text.len()
    }

    /// Copies the triple at `index` into the caller's staging buffers
    pub fn copy_vector(
        &self,
        index: usize,
        plain_text: &mut [u8; BLOCK_SIZE],
        cipher_text: &mut [u8; BLOCK_SIZE],
        key: &mut [u8; KEY_SIZE],
    ) -> Result<()> {
        validate::index(index, self.plain_text.len())?;
        plain_text.copy_from_slice(&self.plain_text[index]);
        cipher_text.copy_from_slice(&self.cipher_text[index]);
        key.copy_from_slice(&self.keys[index]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn copies_the_same_logical_vector() {
        let pt = [[0x11u8; BLOCK_SIZE], [0x22; BLOCK_SIZE]];
        let ct = [[0x33u8; BLOCK_SIZE], [0x44; BLOCK_SIZE]];
        let keys = [[0x55u8; KEY_SIZE], [0x66; KEY_SIZE]];
        let store = CipherVectors::new(&pt, &ct, &keys).unwrap();

        let mut p = [0u8; BLOCK_SIZE];
        let mut c = [0u8; BLOCK_SIZE];
        let mut k = [0u8; KEY_SIZE];
        store.copy_vector(1, &mut p, &mut c, &mut k).unwrap();
        assert_eq!(p, [0x22; BLOCK_SIZE]);
        assert_eq!(c, [0x44; BLOCK_SIZE]);
        assert_eq!(k, [0x66; KEY_SIZE]);
    }

    #[test]
    fn rejects_unequal_table_counts() {
        let pt = [[0u8; BLOCK_SIZE]];
        let ct = [[0u8; BLOCK_SIZE], [0u8; BLOCK_SIZE]];
        let keys = [[0u8; KEY_SIZE]];
        assert!(matches!(
            CipherVectors::new(&pt, &ct, &keys),
            Err(Error::MalformedStore { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let pt = [[0u8; BLOCK_SIZE]];
        let ct = [[0u8; BLOCK_SIZE]];
        let keys = [[0u8; KEY_SIZE]];
        let store = CipherVectors::new(&pt, &ct, &keys).unwrap();

        let mut p = [0u8; BLOCK_SIZE];
        let mut c = [0u8; BLOCK_SIZE];
        let mut k = [0u8; KEY_SIZE];
        assert!(store.copy_vector(1, &mut p, &mut c, &mut k).is_err());
    }
}
