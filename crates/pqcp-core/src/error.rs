//! Error types for sequence parsing and pair analysis

use thiserror::Error;

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors that can occur while building sequences or analyzing a pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Input contained a character outside the {+, -} alphabet
    #[error("invalid symbol '{symbol}' at position {position}: expected '+' or '-'")]
    InvalidSymbol {
        /// Zero-based position within the trimmed input string
        position: usize,
        /// The offending character
        symbol: char,
    },

    /// A numeric element was neither +1 nor -1
    #[error("invalid element {value} at position {position}: expected +1 or -1")]
    InvalidElement {
        /// Zero-based position within the element slice
        position: usize,
        /// The offending value
        value: i8,
    },

    /// The two sequences of a pair have different lengths
    #[error("sequence length mismatch: A has {left} symbols, B has {right}")]
    LengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },

    /// An empty sequence has no autocorrelation structure to analyze
    #[error("empty sequence: nothing to analyze")]
    EmptySequence,
}
