//! Stub primitives shared by the integration suites
//!
//! The harness treats the primitive under test as opaque, so the suites
//! exercise it with deterministic stand-ins: an involutive XOR "cipher"
//! and a toy digest. Expected-output tables are built from the same
//! functions, which makes match and mismatch cases easy to stage.

#![allow(dead_code)]

use katrun::{BlockCipher, HashFunction};

/// XOR with the key; involutive, so encrypt and decrypt coincide.
pub struct XorCipher;

impl BlockCipher for XorCipher {
    fn encrypt_block(&self, block: &mut [u8; 16], key: &[u8; 16]) {
        for (b, k) in block.iter_mut().zip(key) {
            *b ^= k;
        }
    }

    fn decrypt_block(&self, block: &mut [u8; 16], key: &[u8; 16]) {
        self.encrypt_block(block, key);
    }
}

/// XOR cipher whose output always has one bit flipped.
pub struct FlippedXorCipher;

impl BlockCipher for FlippedXorCipher {
    fn encrypt_block(&self, block: &mut [u8; 16], key: &[u8; 16]) {
        XorCipher.encrypt_block(block, key);
        block[0] ^= 0x01;
    }

    fn decrypt_block(&self, block: &mut [u8; 16], key: &[u8; 16]) {
        self.encrypt_block(block, key);
    }
}

/// Deterministic 32-byte toy digest, sensitive to every input byte,
/// byte order, and input length.
pub fn stub_digest(input: &[u8]) -> [u8; 32] {
    let mut digest = [0u8; 32];
    for (i, &byte) in input.iter().enumerate() {
        digest[i % 32] = digest[i % 32].wrapping_mul(31).wrapping_add(byte ^ i as u8);
    }
    digest[0] ^= input.len() as u8;
    digest[1] ^= (input.len() >> 8) as u8;
    digest
}

/// Hash primitive computing [`stub_digest`].
pub struct StubHash;

impl HashFunction for StubHash {
    fn digest(&self, input: &[u8]) -> [u8; 32] {
        stub_digest(input)
    }
}

/// Expected ciphertext table for [`XorCipher`] over the given
/// plaintext and key tables.
pub fn xor_cipher_text(plain_text: &[[u8; 16]], keys: &[[u8; 16]]) -> Vec<[u8; 16]> {
    plain_text
        .iter()
        .zip(keys)
        .map(|(pt, key)| {
            let mut ct = *pt;
            XorCipher.encrypt_block(&mut ct, key);
            ct
        })
        .collect()
}
