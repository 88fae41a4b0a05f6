//! Read-only vector stores
//!
//! A store exposes, for test index `i`, the vector's input bytes, its
//! length, and its expected output, regardless of how the tables are
//! physically laid out. Two hash-mode encodings exist: [`ascending`],
//! where the index itself is the input length, and [`explicit`], where a
//! parallel length table accompanies out-of-line input and digest
//! buffers. The encoding is picked at construction time; the driver is
//! generic over the store type and never branches on data to decide
//! layout.
//!
//! Cipher mode has no length concept at all and uses fixed 16-byte
//! triples, see [`cipher`].
//!
//! Constructors validate table consistency up front, so index-based
//! accessors cannot observe tables that disagree with each other.

use crate::error::Result;
use crate::params::DIGEST_SIZE;

pub mod ascending;
pub mod cipher;
pub mod explicit;

pub use ascending::AscendingVectors;
pub use cipher::CipherVectors;
pub use explicit::ExplicitVectors;

/// Uniform access to hash-mode test vectors
///
/// All three accessors are consistent: for a given `index` they refer to
/// the same logical vector across calls.
pub trait HashVectorStore {
    /// Number of vectors in the store
    fn vector_count(&self) -> usize;

    /// Declared input length of vector `index`, in bytes
    fn input_len(&self, index: usize) -> Result<usize>;

    /// Copies the input of vector `index` into `dest`
    ///
    /// `dest` must be exactly `input_len(index)` bytes; no more than that
    /// many bytes are ever read from the table.
    fn copy_input(&self, index: usize, dest: &mut [u8]) -> Result<()>;

    /// Copies the expected digest of vector `index` into `dest`
    fn copy_expected(&self, index: usize, dest: &mut [u8; DIGEST_SIZE]) -> Result<()>;
}
