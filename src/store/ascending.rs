//! Ascending vector-table encoding
//!
//! Dense tables where vector `i`'s input length equals `i` itself, so no
//! length table is stored. This is the compact layout used for
//! short-message suites whose lengths are consecutive from zero.

use crate::error::{validate, Result};
use crate::params::DIGEST_SIZE;
use crate::store::HashVectorStore;

/// Hash vectors in the ascending encoding
///
/// Holds borrowed tables so suites can live in read-only static data on
/// a target, or on the stack in a host test.
#[derive(Debug, Clone, Copy)]
pub struct AscendingVectors<'a> {
    inputs: &'a [&'a [u8]],
    digests: &'a [[u8; DIGEST_SIZE]],
}

impl<'a> AscendingVectors<'a> {
    /// Builds a store over ascending tables, validating the encoding
    ///
    /// Rejects tables of unequal count and any input whose length is not
    /// its own index.
    pub fn new(inputs: &'a [&'a [u8]], digests: &'a [[u8; DIGEST_SIZE]]) -> Result<Self> {
        validate::table(
            inputs.len() == digests.len(),
            "ascending",
            "input and digest tables differ in count",
        )?;
        for (i, input) in inputs.iter().enumerate() {
            validate::table(
                input.len() == i,
                "ascending",
                "input length does not equal its index",
            )?;
        }
        Ok(Self { inputs, digests })
    }
}

impl HashVectorStore for AscendingVectors<'_> {
    fn vector_count(&self) -> usize {
        self.inputs.len()
    }

    fn input_len(&self, index: usize) -> Result<usize> {
        validate::index(index, self.inputs.len())?;
        // Index implies length in this encoding.
        Ok(index)
    }

    fn copy_input(&self, index: usize, dest: &mut [u8]) -> Result<()> {
        validate::index(index, self.inputs.len())?;
        validate::length("ascending input destination", dest.len(), index)?;
        dest.copy_from_slice(self.inputs[index]);
        Ok(())
    }

    fn copy_expected(&self, index: usize, dest: &mut [u8; DIGEST_SIZE]) -> Result<()> {
        validate::index(index, self.digests.len())?;
        dest.copy_from_slice(&self.digests[index]);
        Ok(())
    }
}
