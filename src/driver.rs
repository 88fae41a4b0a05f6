//! Test drivers
//!
//! A driver walks its vector store in ascending index order, stages one
//! vector at a time into a bounded working buffer, invokes the primitive
//! under test, compares the output byte for byte, and emits exactly one
//! report per vector before the next one is staged. Everything is a
//! single synchronous pass; a failed comparison is recorded and the walk
//! continues, with no retry.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::adapter::{BlockCipher, CipherAction, HashFunction};
use crate::error::{validate, Result};
use crate::params::{BLOCK_SIZE, DIGEST_SIZE, KEY_SIZE, VECTORS_MAXBYTES};
use crate::report::{Outcome, TestReport};
use crate::store::{CipherVectors, HashVectorStore};
use crate::transport::Transport;

/// Counters for one completed run
///
/// Completing the pass is success as far as the driver is concerned:
/// `run` returns `Ok(RunSummary)` even when vectors failed, and the
/// console report stays the interface of record. Callers that want a
/// failing exit path can consult [`RunSummary::all_passed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Vectors visited, including oversized ones
    pub executed: usize,
    /// Vectors whose output matched
    pub passed: usize,
    /// Vectors whose output mismatched
    pub failed: usize,
    /// Vectors skipped because their length exceeds the buffer budget
    pub oversized: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        self.executed += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Oversized => self.oversized += 1,
        }
    }

    /// True when every visited vector passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.oversized == 0
    }
}

/// Staging buffers for one cipher iteration, wiped when the run ends
///
/// The key table is test data, but it flows through the same registers
/// and RAM a production key would, so it gets the same hygiene.
#[derive(Zeroize, ZeroizeOnDrop)]
struct CipherStage {
    plain_text: [u8; BLOCK_SIZE],
    cipher_text: [u8; BLOCK_SIZE],
    key: [u8; KEY_SIZE],
    actual: [u8; BLOCK_SIZE],
}

impl CipherStage {
    fn new() -> Self {
        Self {
            plain_text: [0; BLOCK_SIZE],
            cipher_text: [0; BLOCK_SIZE],
            key: [0; KEY_SIZE],
            actual: [0; BLOCK_SIZE],
        }
    }
}

/// Driver for block-cipher suites
///
/// The direction is fixed for the whole run: one harness build exercises
/// encrypt or decrypt, not both per vector.
#[derive(Debug, Clone, Copy)]
pub struct CipherDriver<'a> {
    vectors: CipherVectors<'a>,
    action: CipherAction,
}

impl<'a> CipherDriver<'a> {
    /// Creates a driver over `vectors` exercising `action`
    pub fn new(vectors: CipherVectors<'a>, action: CipherAction) -> Self {
        Self { vectors, action }
    }

    /// Runs every vector once, reporting through `transport`
    pub fn run<C: BlockCipher, T: Transport>(
        &self,
        cipher: &C,
        transport: &mut T,
    ) -> Result<RunSummary> {
        let mut stage = CipherStage::new();
        let mut summary = RunSummary::default();

        for index in 0..self.vectors.vector_count() {
            self.vectors.copy_vector(
                index,
                &mut stage.plain_text,
                &mut stage.cipher_text,
                &mut stage.key,
            )?;

            let outcome = match self.action {
                CipherAction::Encrypt => {
                    stage.actual = stage.plain_text;
                    cipher.encrypt_block(&mut stage.actual, &stage.key);
                    compare(&stage.actual, &stage.cipher_text)
                }
                CipherAction::Decrypt => {
                    stage.actual = stage.cipher_text;
                    cipher.decrypt_block(&mut stage.actual, &stage.key);
                    compare(&stage.actual, &stage.plain_text)
                }
            };

            summary.record(outcome);
            TestReport {
                index,
                length: None,
                outcome,
            }
            .emit(transport)?;
        }

        Ok(summary)
    }
}

/// Driver for hash suites with a `CAP`-byte working buffer
///
/// `CAP` is the compile-time RAM budget; a vector whose declared length
/// exceeds it is reported as `OVERSIZED` and never staged, closing the
/// overflow a blind copy would invite.
#[derive(Debug, Clone, Copy)]
pub struct HashDriver<'a, S: HashVectorStore, const CAP: usize = { VECTORS_MAXBYTES }> {
    store: &'a S,
    test_min: usize,
    test_max: usize,
}

impl<'a, S: HashVectorStore, const CAP: usize> HashDriver<'a, S, CAP> {
    /// Creates a driver covering every vector in `store`
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            test_min: 0,
            test_max: store.vector_count(),
        }
    }

    /// Restricts the run to indices in `[test_min, test_max)`
    ///
    /// Suites whose primitive rejects empty input start at `test_min`
    /// of 1 under the ascending encoding.
    pub fn with_range(store: &'a S, test_min: usize, test_max: usize) -> Result<Self> {
        validate::table(
            test_min <= test_max,
            "hash driver range",
            "test_min exceeds test_max",
        )?;
        validate::table(
            test_max <= store.vector_count(),
            "hash driver range",
            "test_max exceeds the store's vector count",
        )?;
        Ok(Self {
            store,
            test_min,
            test_max,
        })
    }

    /// Runs the configured index range once, reporting through `transport`
    pub fn run<H: HashFunction, T: Transport>(
        &self,
        primitive: &H,
        transport: &mut T,
    ) -> Result<RunSummary> {
        let mut input = [0u8; CAP];
        let mut expected = [0u8; DIGEST_SIZE];
        let mut summary = RunSummary::default();

        for index in self.test_min..self.test_max {
            let length = self.store.input_len(index)?;

            if length > CAP {
                let outcome = Outcome::Oversized;
                summary.record(outcome);
                TestReport {
                    index,
                    length: Some(length),
                    outcome,
                }
                .emit(transport)?;
                continue;
            }

            self.store.copy_input(index, &mut input[..length])?;
            let actual = primitive.digest(&input[..length]);
            self.store.copy_expected(index, &mut expected)?;

            let outcome = compare(&actual, &expected);
            summary.record(outcome);
            TestReport {
                index,
                length: Some(length),
                outcome,
            }
            .emit(transport)?;
        }

        input.zeroize();
        Ok(summary)
    }
}

/// Exact byte-for-byte comparison over the full output width
///
/// This is a correctness check against public vectors, not a
/// side-channel defense; early exit is fine.
fn compare<const N: usize>(actual: &[u8; N], expected: &[u8; N]) -> Outcome {
    if actual == expected {
        Outcome::Passed
    } else {
        Outcome::Failed
    }
}
