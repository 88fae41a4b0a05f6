//! Known-answer self-test harness for cryptographic primitives
//!
//! `katrun` validates an externally supplied block cipher or hash
//! function against fixed tables of test vectors and reports pass/fail
//! per vector over a serial transport. It targets memory-constrained
//! parts: vectors are staged one at a time into a working buffer whose
//! capacity is a compile-time budget, and a vector that would not fit is
//! reported as `OVERSIZED` instead of being staged at all.
//!
//! The harness never judges a primitive itself correct or incorrect by
//! any means other than byte comparison against the tabulated answer,
//! and a failed vector is purely informational: the run continues and
//! completes.
//!
//! ## Example
//!
//! ```
//! use katrun::{CipherAction, CipherDriver, MemoryTransport};
//! use katrun::vectors::aes128;
//!
//! struct NullCipher;
//!
//! impl katrun::BlockCipher for NullCipher {
//!     fn encrypt_block(&self, _block: &mut [u8; 16], _key: &[u8; 16]) {}
//!     fn decrypt_block(&self, _block: &mut [u8; 16], _key: &[u8; 16]) {}
//! }
//!
//! let driver = CipherDriver::new(aes128::vectors()?, CipherAction::Encrypt);
//! let mut transport = MemoryTransport::new();
//! let summary = driver.run(&NullCipher, &mut transport)?;
//!
//! // The identity "cipher" fails every known-answer vector.
//! assert_eq!(summary.failed, aes128::TEST_AMOUNT);
//! # Ok::<(), katrun::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod adapter;
pub mod driver;
pub mod error;
pub mod params;
pub mod report;
pub mod store;
pub mod transport;
pub mod vectors;

pub use adapter::{BlockCipher, CipherAction, HashFunction};
pub use driver::{CipherDriver, HashDriver, RunSummary};
pub use error::{Error, Result};
pub use report::{Outcome, TestReport};
pub use store::{AscendingVectors, CipherVectors, ExplicitVectors, HashVectorStore};
pub use transport::Transport;

#[cfg(feature = "alloc")]
pub use transport::MemoryTransport;
