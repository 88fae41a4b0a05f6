//! Error handling for the test harness
//!
//! Per-vector failures (a mismatching primitive, an oversized vector) are
//! not errors: they surface as report outcomes and never abort a run. The
//! variants here cover conditions the harness itself cannot report past,
//! such as inconsistent vector tables or a dead transport.

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// The error type for harness operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A test index outside the store's vector range
    IndexOutOfRange {
        /// Requested test index
        index: usize,
        /// Number of vectors in the store
        count: usize,
    },

    /// Vector tables that disagree with each other or with their encoding
    MalformedStore {
        /// Table or encoding being validated
        context: &'static str,
        /// What the validation found
        details: &'static str,
    },

    /// The report channel rejected a write
    Transport {
        /// What the transport was doing when it failed
        details: &'static str,
    },

    /// Report formatting failed without a transport error to blame
    Format,
}

/// Result type for harness operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::IndexOutOfRange { index, count } => {
                write!(f, "Test index {} out of range ({} vectors)", index, count)
            }
            Error::MalformedStore { context, details } => {
                write!(f, "Malformed vector store in {}: {}", context, details)
            }
            Error::Transport { details } => {
                write!(f, "Transport error: {}", details)
            }
            Error::Format => write!(f, "Report formatting error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Validation helpers used at the store and driver boundaries
pub mod validate {
    use super::{Error, Result};

    /// Validate an exact length
    #[inline(always)]
    pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Error::Length {
                context,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Validate a maximum length
    #[inline(always)]
    pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
        if actual > max {
            return Err(Error::Length {
                context,
                expected: max,
                actual,
            });
        }
        Ok(())
    }

    /// Validate a minimum length
    #[inline(always)]
    pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
        if actual < min {
            return Err(Error::Length {
                context,
                expected: min,
                actual,
            });
        }
        Ok(())
    }

    /// Validate a test index against the store's vector count
    #[inline(always)]
    pub fn index(index: usize, count: usize) -> Result<()> {
        if index >= count {
            return Err(Error::IndexOutOfRange { index, count });
        }
        Ok(())
    }

    /// Validate a table-consistency condition
    #[inline(always)]
    pub fn table(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
        if !condition {
            return Err(Error::MalformedStore { context, details });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_functions() {
        assert!(validate::length("block", 16, 16).is_ok());
        let err = validate::length("block", 12, 16).unwrap_err();
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                assert_eq!(context, "block");
                assert_eq!(expected, 16);
                assert_eq!(actual, 12);
            }
            _ => panic!("Expected Length error"),
        }

        assert!(validate::max_length("input", 192, 192).is_ok());
        assert!(validate::max_length("input", 193, 192).is_err());

        assert!(validate::index(4, 5).is_ok());
        let err = validate::index(5, 5).unwrap_err();
        match err {
            Error::IndexOutOfRange { index, count } => {
                assert_eq!(index, 5);
                assert_eq!(count, 5);
            }
            _ => panic!("Expected IndexOutOfRange error"),
        }

        let err = validate::table(false, "explicit", "tables disagree").unwrap_err();
        match err {
            Error::MalformedStore { context, details } => {
                assert_eq!(context, "explicit");
                assert_eq!(details, "tables disagree");
            }
            _ => panic!("Expected MalformedStore error"),
        }
    }

    #[test]
    fn test_display() {
        let err = Error::Length {
            context: "digest",
            expected: 32,
            actual: 16,
        };
        let msg = err.to_string();
        assert!(msg.contains("digest"));
        assert!(msg.contains("32"));
        assert!(msg.contains("16"));
    }
}
