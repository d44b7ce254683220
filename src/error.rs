//! Error types for sugars_prims operations.
//!
//! Every fallible helper in the crate reports through [`Error`], so callers can
//! propagate with `?` regardless of which module produced the failure.

use thiserror::Error;

/// Result type alias for sugars_prims operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all sugars_prims operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index fell outside the slice it addressed
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the addressed slice
        len: usize,
    },

    /// A `from..to` range was inverted or exceeded the slice
    #[error("invalid range {from}..{to} for length {len}")]
    InvalidRange {
        /// Inclusive start
        from: usize,
        /// Exclusive end
        to: usize,
        /// Length of the addressed slice
        len: usize,
    },

    /// The operation needs at least one element
    #[error("{0} requires a non-empty input")]
    Empty(&'static str),

    /// A strict conversion from optional values met a `None`
    #[error("missing value at index {index}")]
    MissingValue {
        /// Position of the first `None`
        index: usize,
    },

    /// Two inputs that must pair up element-wise had different lengths
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left-hand input
        left: usize,
        /// Length of the right-hand input
        right: usize,
    },

    /// A character is not a digit of the expected radix
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        /// Offending character
        digit: char,
        /// Character position in the input
        position: usize,
        /// Radix the input was decoded with
        radix: u32,
    },

    /// A hex byte string had an odd number of digits
    #[error("hex input has odd length {0}")]
    OddLength(usize),

    /// The parsed value does not fit the target type
    #[error("{input:?} overflows {target}")]
    Overflow {
        /// Original text
        input: String,
        /// Name of the target type
        target: &'static str,
    },

    /// Text could not be read as a number
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// A number-format pattern was malformed
    #[error("malformed pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// An argument violated a documented precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Two entries collapsed onto the same key
    #[error("duplicate key {0}")]
    DuplicateKey(String),
}

impl Error {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { index, len })
        }
    }

    pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<()> {
        if from <= to && to <= len {
            Ok(())
        } else {
            Err(Error::InvalidRange { from, to, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 2 }.to_string(),
            "index 4 out of bounds for length 2"
        );
        assert_eq!(
            Error::InvalidDigit {
                digit: 'g',
                position: 3,
                radix: 16
            }
            .to_string(),
            "invalid digit 'g' at position 3 for radix 16"
        );
        assert_eq!(Error::Empty("min_value").to_string(), "min_value requires a non-empty input");
    }

    #[test]
    fn test_range_checks() {
        assert!(Error::check_range(0, 0, 0).is_ok());
        assert!(Error::check_range(1, 3, 3).is_ok());
        assert_eq!(
            Error::check_range(2, 1, 3),
            Err(Error::InvalidRange { from: 2, to: 1, len: 3 })
        );
        assert!(Error::check_range(0, 4, 3).is_err());
        assert!(Error::check_index(2, 3).is_ok());
        assert!(Error::check_index(3, 3).is_err());
    }
}
