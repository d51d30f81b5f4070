//! Bipolar Sequence Parsing and Display
//!
//! Binary sequences in the correlation literature are written as strings
//! over the two-symbol alphabet `{+, -}`, with `+` standing for +1 and `-`
//! for -1. This module converts between that notation and a validated
//! vector of ±1 chips. Parsing is strict: any character outside the
//! alphabet is an error rather than being silently folded into -1, so a
//! typo in a pasted sequence cannot produce a quietly wrong correlation.
//!
//! ## Example
//!
//! ```rust
//! use pqcp_core::sequence::BinarySequence;
//!
//! let seq = BinarySequence::parse("++--").unwrap();
//! assert_eq!(seq.as_slice(), &[1, 1, -1, -1]);
//! assert_eq!(seq.to_string(), "++--");
//!
//! // Surrounding whitespace is ignored, unknown symbols are not.
//! assert!(BinarySequence::parse("  +-+ ").is_ok());
//! assert!(BinarySequence::parse("+-x-").is_err());
//! ```

use crate::error::{VerifyError, VerifyResult};

/// An immutable sequence of +1/-1 chips.
///
/// Construction goes through [`BinarySequence::parse`] or
/// [`BinarySequence::from_elements`], both of which validate every chip,
/// so any value of this type is guaranteed to contain only ±1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinarySequence(Vec<i8>);

impl BinarySequence {
    /// Parses a `{+, -}` symbol string into a bipolar sequence.
    ///
    /// Leading and trailing whitespace is stripped first. Positions
    /// reported in errors are relative to the trimmed string.
    pub fn parse(input: &str) -> VerifyResult<Self> {
        let trimmed = input.trim();
        let mut chips = Vec::with_capacity(trimmed.len());
        for (position, symbol) in trimmed.chars().enumerate() {
            match symbol {
                '+' => chips.push(1),
                '-' => chips.push(-1),
                _ => return Err(VerifyError::InvalidSymbol { position, symbol }),
            }
        }
        Ok(Self(chips))
    }

    /// Builds a sequence from raw chip values, validating each is ±1.
    pub fn from_elements(elements: Vec<i8>) -> VerifyResult<Self> {
        for (position, &value) in elements.iter().enumerate() {
            if value != 1 && value != -1 {
                return Err(VerifyError::InvalidElement { position, value });
            }
        }
        Ok(Self(elements))
    }

    /// Number of chips in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence has no chips.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The chips as a slice of +1/-1 values.
    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }
}

impl std::fmt::Display for BinarySequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &chip in &self.0 {
            f.write_str(if chip == 1 { "+" } else { "-" })?;
        }
        Ok(())
    }
}

impl AsRef<[i8]> for BinarySequence {
    fn as_ref(&self) -> &[i8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let seq = BinarySequence::parse("+-++").unwrap();
        assert_eq!(seq.as_slice(), &[1, -1, 1, 1]);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let seq = BinarySequence::parse("\n  +--+ \t").unwrap();
        assert_eq!(seq.as_slice(), &[1, -1, -1, 1]);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = BinarySequence::parse("+-0-").unwrap_err();
        assert_eq!(
            err,
            VerifyError::InvalidSymbol {
                position: 2,
                symbol: '0'
            }
        );
    }

    #[test]
    fn test_parse_empty_is_empty_sequence() {
        let seq = BinarySequence::parse("   ").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_from_elements_validates() {
        assert!(BinarySequence::from_elements(vec![1, -1, 1]).is_ok());
        let err = BinarySequence::from_elements(vec![1, 0, -1]).unwrap_err();
        assert_eq!(
            err,
            VerifyError::InvalidElement {
                position: 1,
                value: 0
            }
        );
    }

    #[test]
    fn test_display_round_trip() {
        let text = "+-++--++";
        let seq = BinarySequence::parse(text).unwrap();
        assert_eq!(seq.to_string(), text);
    }
}
