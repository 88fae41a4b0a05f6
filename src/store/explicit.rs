//! Explicit vector-table encoding
//!
//! A `lengths` table gives each vector's input length, and the input and
//! digest tables hold references to out-of-line buffers. Used when suite
//! lengths are non-consecutive or sparse, where the ascending layout
//! cannot apply.

use crate::error::{validate, Result};
use crate::params::DIGEST_SIZE;
use crate::store::HashVectorStore;

/// Hash vectors in the explicit encoding
#[derive(Debug, Clone, Copy)]
pub struct ExplicitVectors<'a> {
    lengths: &'a [u16],
    inputs: &'a [&'a [u8]],
    digests: &'a [&'a [u8; DIGEST_SIZE]],
}

impl<'a> ExplicitVectors<'a> {
    /// Builds a store over explicit tables, validating their consistency
    ///
    /// All three tables must have the same count, and every input buffer
    /// must hold at least its declared length. A buffer may be larger;
    /// only the declared prefix is ever read.
    pub fn new(
        lengths: &'a [u16],
        inputs: &'a [&'a [u8]],
        digests: &'a [&'a [u8; DIGEST_SIZE]],
    ) -> Result<Self> {
        validate::table(
            lengths.len() == inputs.len() && lengths.len() == digests.len(),
            "explicit",
            "length, input, and digest tables differ in count",
        )?;
        for (input, &len) in inputs.iter().zip(lengths) {
            validate::table(
                input.len() >= len as usize,
                "explicit",
                "input buffer shorter than its declared length",
            )?;
        }
        Ok(Self {
            lengths,
            inputs,
            digests,
        })
    }
}

impl HashVectorStore for ExplicitVectors<'_> {
    fn vector_count(&self) -> usize {
        self.lengths.len()
    }

    fn input_len(&self, index: usize) -> Result<usize> {
        validate::index(index, self.lengths.len())?;
        Ok(self.lengths[index] as usize)
    }

    fn copy_input(&self, index: usize, dest: &mut [u8]) -> Result<()> {
        validate::index(index, self.inputs.len())?;
        let len = self.lengths[index] as usize;
        validate::length("explicit input destination", dest.len(), len)?;
        dest.copy_from_slice(&self.inputs[index][..len]);
        Ok(())
    }

    fn copy_expected(&self, index: usize, dest: &mut [u8; DIGEST_SIZE]) -> Result<()> {
        validate::index(index, self.digests.len())?;
        dest.copy_from_slice(self.digests[index]);
        Ok(())
    }
}
