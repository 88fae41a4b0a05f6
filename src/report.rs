//! Per-vector test reports
//!
//! One report per vector, serialized to the transport the moment it is
//! produced and then discarded. Nothing is buffered or aggregated here;
//! the running counters live in the driver's `RunSummary`.

use core::fmt::Write as _;

use crate::error::Result;
use crate::transport::{Transport, TransportWriter};

/// Outcome of one vector's comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Actual output matched the tabulated expectation byte for byte
    Passed,
    /// At least one output byte differed
    Failed,
    /// Declared length exceeds the working buffer; primitive not invoked
    Oversized,
}

impl Outcome {
    /// The report-line label for this outcome
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASSED",
            Outcome::Failed => "FAILED",
            Outcome::Oversized => "OVERSIZED",
        }
    }
}

/// One vector's result, ready to serialize
///
/// `length` is `Some` for hash vectors and `None` for cipher vectors,
/// which have no length concept; the two produce different line shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestReport {
    /// Zero-based test index; printed one-based
    pub index: usize,
    /// Declared input length, hash mode only
    pub length: Option<usize>,
    /// Comparison outcome
    pub outcome: Outcome,
}

impl TestReport {
    /// Serializes the report as one newline-terminated line
    ///
    /// Cipher mode: `Test NN: PASSED`. Hash mode:
    /// `Test NNN, length: LLLL: PASSED`, widths matching the fixed
    /// console format the suite has always printed.
    pub fn emit<T: Transport>(&self, transport: &mut T) -> Result<()> {
        let mut writer = TransportWriter::new(transport);
        let res = match self.length {
            Some(length) => writeln!(
                writer,
                "Test {:3}, length: {:4}: {}",
                self.index + 1,
                length,
                self.outcome.label()
            ),
            None => writeln!(writer, "Test {:2}: {}", self.index + 1, self.outcome.label()),
        };
        writer.finish(res)
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    #[test]
    fn cipher_line_shape() {
        let mut transport = MemoryTransport::new();
        TestReport {
            index: 0,
            length: None,
            outcome: Outcome::Passed,
        }
        .emit(&mut transport)
        .unwrap();
        assert_eq!(transport.as_str().unwrap(), "Test  1: PASSED\r\n");
    }

    #[test]
    fn hash_line_shape() {
        let mut transport = MemoryTransport::new();
        TestReport {
            index: 4,
            length: Some(5),
            outcome: Outcome::Failed,
        }
        .emit(&mut transport)
        .unwrap();
        assert_eq!(transport.as_str().unwrap(), "Test   5, length:    5: FAILED\r\n");
    }

    #[test]
    fn wide_fields_are_not_truncated() {
        let mut transport = MemoryTransport::new();
        TestReport {
            index: 122,
            length: Some(4096),
            outcome: Outcome::Oversized,
        }
        .emit(&mut transport)
        .unwrap();
        assert_eq!(
            transport.as_str().unwrap(),
            "Test 123, length: 4096: OVERSIZED\r\n"
        );
    }
}
